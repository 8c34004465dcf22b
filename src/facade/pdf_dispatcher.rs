use std::path::{Path, PathBuf};
use log::info;
use crate::error::ConvertError;
use crate::models::conversion::{ConversionResult, SourceKind, TargetKind};
use crate::service::document::DocumentService;
use crate::service::path_resolver::PathResolver;
use crate::service::traits::i_service::ImageConverterTrait;

/// 轉為 PDF 的分派器：圖片或 Word 文件
pub struct PdfDispatcher {
    image_service: Box<dyn ImageConverterTrait>,
    document_service: DocumentService,
}

impl PdfDispatcher {
    pub fn new(image_service: Box<dyn ImageConverterTrait>, document_service: DocumentService) -> Self {
        PdfDispatcher {
            image_service,
            document_service,
        }
    }

    pub fn convert(&self, source_kind: SourceKind, input_path: &str, output_name: Option<&str>) -> ConversionResult {
        ConversionResult::from_outcome(
            self.try_convert(source_kind, input_path, output_name)
                .map(|output| vec![output]),
        )
    }

    pub fn try_convert(
        &self,
        source_kind: SourceKind,
        input_path: &str,
        output_name: Option<&str>,
    ) -> Result<PathBuf, ConvertError> {
        let input = Path::new(input_path);
        if !input.exists() {
            return Err(ConvertError::NotFound { path: input_path.to_string() });
        }

        let paths = PathResolver::resolve(input_path, output_name, TargetKind::Pdf.extension());
        let output = PathBuf::from(&paths.output_file_path);

        match source_kind {
            SourceKind::Image | SourceKind::Png | SourceKind::Jpg | SourceKind::Jpeg | SourceKind::Gif => {
                self.image_service.convert(input, &output)?
            }
            SourceKind::Doc => self.document_service.convert(input, &output)?,
            SourceKind::Txt | SourceKind::Mp4 | SourceKind::Csv => {
                return Err(ConvertError::NotImplemented(source_kind))
            }
            SourceKind::Pdf => {
                return Err(ConvertError::UnsupportedType {
                    source_kind,
                    target: TargetKind::Pdf,
                })
            }
        }

        info!("PDF 轉換完成：{} -> {}", input_path, output.display());
        Ok(output)
    }
}
