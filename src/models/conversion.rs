use std::fmt;
use std::path::PathBuf;
use crate::error::ConvertError;

pub const RASTER_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif"];
pub const WORD_EXTENSIONS: &[&str] = &["doc", "docx"];

/// 來源檔案類型，對應轉換選單上的原始類型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Image,
    Png,
    Jpg,
    Jpeg,
    Gif,
    Pdf,
    Doc,
    Txt,
    Mp4,
    Csv,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Image => "img",
            SourceKind::Png => "png",
            SourceKind::Jpg => "jpg",
            SourceKind::Jpeg => "jpeg",
            SourceKind::Gif => "gif",
            SourceKind::Pdf => "pdf",
            SourceKind::Doc => "doc",
            SourceKind::Txt => "txt",
            SourceKind::Mp4 => "mp4",
            SourceKind::Csv => "csv",
        }
    }

    /// 選擇檔案時可接受的副檔名，空陣列表示不過濾
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            SourceKind::Image => RASTER_EXTENSIONS,
            SourceKind::Png => &["png"],
            SourceKind::Jpg | SourceKind::Jpeg => &["jpg", "jpeg"],
            SourceKind::Gif => &["gif"],
            SourceKind::Pdf => &["pdf"],
            SourceKind::Doc => &["docx", "doc"],
            SourceKind::Txt => &["txt"],
            SourceKind::Mp4 | SourceKind::Csv => &[],
        }
    }

    pub fn is_raster(&self) -> bool {
        matches!(
            self,
            SourceKind::Png | SourceKind::Jpg | SourceKind::Jpeg | SourceKind::Gif
        )
    }

    /// 依副檔名推斷來源類型（不分大小寫）
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "png" => Some(SourceKind::Png),
            "jpg" => Some(SourceKind::Jpg),
            "jpeg" => Some(SourceKind::Jpeg),
            "gif" => Some(SourceKind::Gif),
            "pdf" => Some(SourceKind::Pdf),
            "doc" | "docx" => Some(SourceKind::Doc),
            "txt" => Some(SourceKind::Txt),
            "mp4" => Some(SourceKind::Mp4),
            "csv" => Some(SourceKind::Csv),
            _ => None,
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TargetKind {
    Png,
    Jpg,
    Jpeg,
    Gif,
    Pdf,
}

impl TargetKind {
    pub fn extension(&self) -> &'static str {
        match self {
            TargetKind::Png => "png",
            TargetKind::Jpg => "jpg",
            TargetKind::Jpeg => "jpeg",
            TargetKind::Gif => "gif",
            TargetKind::Pdf => "pdf",
        }
    }

    pub fn is_raster(&self) -> bool {
        !matches!(self, TargetKind::Pdf)
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// 單次使用者操作產生的轉換請求，完成後即丟棄
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub source_path: String,
    pub source_kind: SourceKind,
    pub target_kind: TargetKind,
    pub desired_output_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionStatus {
    Success,
    Failure,
}

#[derive(Debug, Clone)]
pub struct ConversionResult {
    pub status: ConversionStatus,
    pub output_path: Option<PathBuf>,
    pub written: Vec<PathBuf>,
}

impl ConversionResult {
    pub fn success(written: Vec<PathBuf>) -> Self {
        ConversionResult {
            status: ConversionStatus::Success,
            output_path: written.first().cloned(),
            written,
        }
    }

    pub fn failure() -> Self {
        ConversionResult {
            status: ConversionStatus::Failure,
            output_path: None,
            written: Vec::new(),
        }
    }

    /// 分派器邊界：錯誤只記錄在日誌，呼叫端只看到成功或失敗
    pub fn from_outcome(outcome: Result<Vec<PathBuf>, ConvertError>) -> Self {
        match outcome {
            Ok(written) => ConversionResult::success(written),
            Err(e) => {
                log::error!("{}", e);
                ConversionResult::failure()
            }
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ConversionStatus::Success
    }
}
