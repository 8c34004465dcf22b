use std::io;
use thiserror::Error;

use crate::models::conversion::{SourceKind, TargetKind};

/// 轉換流程中的錯誤類型，分派器邊界會將其收斂為成功／失敗
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("找不到檔案：{path}")]
    NotFound { path: String },

    #[error("檔案 '{path}' 的格式不支援，必須是下列類型之一：{expected:?}")]
    UnsupportedFormat {
        path: String,
        expected: &'static [&'static str],
    },

    #[error("{0}")]
    InvalidArgument(String),

    #[error("轉換失敗：{0}")]
    Conversion(String),

    #[error("不支援的轉換：{source_kind} → {target}")]
    UnsupportedType {
        source_kind: SourceKind,
        target: TargetKind,
    },

    #[error("{0} 轉換尚未實作")]
    NotImplemented(SourceKind),

    #[error("IO 錯誤：{0}")]
    Io(#[from] io::Error),

    #[error("圖片處理錯誤：{0}")]
    Image(#[from] image::ImageError),
}

impl From<ConvertError> for io::Error {
    fn from(err: ConvertError) -> Self {
        let kind = match &err {
            ConvertError::NotFound { .. } => io::ErrorKind::NotFound,
            ConvertError::UnsupportedFormat { .. }
            | ConvertError::UnsupportedType { .. }
            | ConvertError::NotImplemented(_) => io::ErrorKind::Unsupported,
            ConvertError::InvalidArgument(_) => io::ErrorKind::InvalidInput,
            ConvertError::Io(e) => e.kind(),
            _ => io::ErrorKind::Other,
        };
        io::Error::new(kind, err.to_string())
    }
}
