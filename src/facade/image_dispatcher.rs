use std::path::{Path, PathBuf};
use log::info;
use crate::error::ConvertError;
use crate::models::conversion::{ConversionResult, SourceKind, TargetKind};
use crate::service::path_resolver::{file_extension, PathResolver};
use crate::service::traits::i_service::{ImageConverterTrait, PdfRendererTrait};
use crate::utils::utils::ProgressManager;

/// 轉為圖片的分派器：點陣圖互轉，或將 PDF 每頁輸出為圖片
pub struct ImageDispatcher {
    image_service: Box<dyn ImageConverterTrait>,
    renderer: Box<dyn PdfRendererTrait>,
    no_progress: bool,
}

impl ImageDispatcher {
    pub fn new(
        image_service: Box<dyn ImageConverterTrait>,
        renderer: Box<dyn PdfRendererTrait>,
        no_progress: bool,
    ) -> Self {
        ImageDispatcher {
            image_service,
            renderer,
            no_progress,
        }
    }

    /// 執行轉換，所有錯誤都收斂為失敗結果
    pub fn convert(
        &self,
        source_kind: SourceKind,
        target_kind: TargetKind,
        input_path: &str,
        output_name: Option<&str>,
    ) -> ConversionResult {
        ConversionResult::from_outcome(self.try_convert(source_kind, target_kind, input_path, output_name))
    }

    /// 執行轉換並保留錯誤類型
    /// # 回傳
    /// - 成功時返回所有寫出的檔案路徑
    pub fn try_convert(
        &self,
        source_kind: SourceKind,
        target_kind: TargetKind,
        input_path: &str,
        output_name: Option<&str>,
    ) -> Result<Vec<PathBuf>, ConvertError> {
        let input = Path::new(input_path);
        if !input.exists() {
            return Err(ConvertError::NotFound { path: input_path.to_string() });
        }

        let paths = PathResolver::resolve(input_path, output_name, target_kind.extension());

        match source_kind {
            SourceKind::Png | SourceKind::Jpg | SourceKind::Jpeg | SourceKind::Gif => {
                let same_extension = file_extension(&paths.input_file_name)
                    .map_or(false, |ext| ext.eq_ignore_ascii_case(target_kind.extension()));
                if source_kind.as_str() == target_kind.extension() || same_extension {
                    return Err(ConvertError::InvalidArgument(
                        "轉換後的格式必須與原始格式不同".to_string(),
                    ));
                }
                if !target_kind.is_raster() {
                    return Err(ConvertError::InvalidArgument(format!("{} 不是圖片格式", target_kind)));
                }

                let output = PathBuf::from(&paths.output_file_path);
                self.image_service.convert(input, &output)?;
                Ok(vec![output])
            }
            SourceKind::Pdf => self.from_pdf(
                input,
                &paths.input_directory,
                paths.input_base_name(),
                target_kind,
            ),
            other => Err(ConvertError::UnsupportedType {
                source_kind: other,
                target: target_kind,
            }),
        }
    }

    fn from_pdf(
        &self,
        pdf: &Path,
        output_dir: &str,
        base_name: &str,
        target_kind: TargetKind,
    ) -> Result<Vec<PathBuf>, ConvertError> {
        if !target_kind.is_raster() {
            return Err(ConvertError::InvalidArgument(format!("{} 不是圖片格式", target_kind)));
        }

        let images = self.renderer.render_pages(pdf)?;
        if images.is_empty() {
            return Err(ConvertError::Conversion("未產生任何圖片".to_string()));
        }

        let outputs = page_output_paths(output_dir, base_name, target_kind.extension(), images.len());
        let progress = ProgressManager::new(images.len() as u64, self.no_progress);
        for (index, (image, output)) in images.iter().zip(&outputs).enumerate() {
            self.image_service.save(image, output)?;
            progress.update(index as u64 + 1, "儲存頁面");
        }
        progress.finish(outputs.len() as u64);

        info!("PDF 轉換完成：{}，輸出 {} 張圖片", pdf.display(), outputs.len());
        Ok(outputs)
    }
}

/// 單頁輸出 `<base>.<ext>`，多頁輸出 `<base>_<n>.<ext>`（n 從 1 開始）
pub fn page_output_paths(output_dir: &str, base_name: &str, extension: &str, count: usize) -> Vec<PathBuf> {
    if count == 1 {
        return vec![PathBuf::from(format!("{}{}.{}", output_dir, base_name, extension))];
    }
    (1..=count)
        .map(|n| PathBuf::from(format!("{}{}_{}.{}", output_dir, base_name, n, extension)))
        .collect()
}
