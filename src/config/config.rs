use clap::Parser;
use std::io;
use std::path::{Path, PathBuf};
use crate::config::ports::{DEFAULT_DPI, DEFAULT_JPEG_QUALITY, DEFAULT_OFFICE_BIN};
use crate::models::conversion::{SourceKind, TargetKind};
use crate::service::path_resolver::{file_extension, split_input_path};

#[derive(Parser, Clone, Debug)]
#[command(
    name = "file_converter",
    about = "在圖片、PDF 與 Word 文件之間轉換檔案",
    long_about = "一個檔案格式轉換工具，支援圖片互轉（png、jpg、jpeg、gif）、圖片轉 PDF、PDF 轉圖片（每頁一張）以及 Word 轉 PDF。\n不帶任何參數執行時進入互動模式。\n輸出檔案預設與輸入檔案位於同一目錄。"
)]
pub struct Cli {
    pub input: String,
    /// 目標格式
    #[arg(long, value_enum)]
    pub to: TargetKind,
    /// 來源類型（img、png、jpg、jpeg、gif、pdf、doc），預設依副檔名判斷
    #[arg(long, value_parser = parse_source_kind)]
    pub from: Option<SourceKind>,
    /// 輸出檔名，未含目標副檔名時自動補上
    #[arg(short, long)]
    pub output: Option<String>,
    /// PDF 轉圖片時的渲染解析度
    #[arg(long, default_value_t = DEFAULT_DPI)]
    pub dpi: u16,
    /// 輸出 JPEG（含 PDF 內嵌圖片）的品質
    #[arg(long, default_value_t = DEFAULT_JPEG_QUALITY, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub jpeg_quality: u8,
    /// pdfium 動態函式庫所在目錄
    #[arg(long)]
    pub pdfium_lib: Option<PathBuf>,
    /// LibreOffice 執行檔
    #[arg(long, default_value = DEFAULT_OFFICE_BIN)]
    pub office_bin: String,
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
    #[arg(long, default_value = "info", value_parser = ["info", "warn", "error", "debug"])]
    pub log_level: String,
}

pub fn parse_source_kind(value: &str) -> Result<SourceKind, String> {
    match value.to_ascii_lowercase().as_str() {
        "img" | "image" => Ok(SourceKind::Image),
        other => SourceKind::from_extension(other).ok_or_else(|| format!("未知的來源類型：{}", value)),
    }
}

pub fn validate_input_path(input: &str) -> io::Result<&Path> {
    let path = Path::new(input);
    if !path.exists() {
        log::error!("輸入路徑不存在：{}", input);
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("輸入路徑 '{}' 不存在", input)
        ));
    }
    Ok(path)
}

/// 取得來源類型：優先使用 --from，否則依輸入檔的副檔名判斷
pub fn resolve_source_kind(cli: &Cli) -> io::Result<SourceKind> {
    if let Some(kind) = cli.from {
        return Ok(kind);
    }
    let (_, file_name) = split_input_path(&cli.input);
    file_extension(file_name)
        .and_then(SourceKind::from_extension)
        .ok_or_else(|| io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("無法從 '{}' 判斷來源類型，請使用 --from 指定", cli.input)
        ))
}
