use std::io;
use std::path::PathBuf;

pub const DEFAULT_DPI: u16 = 200;
pub const DEFAULT_JPEG_QUALITY: u8 = 90;
pub const DEFAULT_OFFICE_BIN: &str = "soffice";

// 應用配置結構體，封裝轉換器所需的外部設定
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub dpi: u16,
    pub jpeg_quality: u8,
    pub pdfium_lib: Option<PathBuf>,
    pub office_bin: String,
    pub no_progress: bool,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            dpi: DEFAULT_DPI,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            pdfium_lib: None,
            office_bin: DEFAULT_OFFICE_BIN.to_string(),
            no_progress: false,
            log_level: "info".to_string(),
        }
    }
}

// 配置來源的 Port
pub trait ConfigPort {
    fn get_config(&self) -> io::Result<AppConfig>;
}
