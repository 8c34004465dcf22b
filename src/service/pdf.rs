use std::path::{Path, PathBuf};
use image::DynamicImage;
use log::{debug, info};
use pdfium_render::prelude::*;
use crate::error::ConvertError;
use crate::service::traits::i_service::PdfRendererTrait;

/// PDF 渲染服務，透過 pdfium 將頁面轉為點陣圖並實現 PdfRendererTrait
pub struct PdfiumRenderer {
    library_dir: Option<PathBuf>,
    dpi: u16,
}

impl PdfiumRenderer {
    /// 創建新的 PdfiumRenderer 實例
    /// # 參數
    /// - library_dir: pdfium 動態函式庫所在目錄，未指定時先找目前目錄再找系統路徑
    /// - dpi: 渲染解析度
    pub fn new(library_dir: Option<PathBuf>, dpi: u16) -> Self {
        PdfiumRenderer { library_dir, dpi }
    }

    fn bind(&self) -> Result<Pdfium, ConvertError> {
        let bindings = match &self.library_dir {
            Some(dir) => Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(dir)),
            None => Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
                .or_else(|_| Pdfium::bind_to_system_library()),
        }
        .map_err(|e| ConvertError::Conversion(format!("找不到 pdfium 函式庫：{:?}", e)))?;
        Ok(Pdfium::new(bindings))
    }
}

impl PdfRendererTrait for PdfiumRenderer {
    fn render_pages(&self, pdf: &Path) -> Result<Vec<DynamicImage>, ConvertError> {
        let pdfium = self.bind()?;
        let document = pdfium.load_pdf_from_file(pdf, None).map_err(|e| {
            ConvertError::Conversion(format!("無法開啟 PDF {}：{:?}", pdf.display(), e))
        })?;

        let pages = document.pages();
        info!("載入 PDF：{}，共 {} 頁", pdf.display(), pages.len());

        let render_config = PdfRenderConfig::new().scale_page_by_factor(self.dpi as f32 / 72.0);
        let mut images = Vec::with_capacity(pages.len() as usize);
        for (index, page) in pages.iter().enumerate() {
            let bitmap = page.render_with_config(&render_config).map_err(|e| {
                ConvertError::Conversion(format!("第 {} 頁渲染失敗：{:?}", index + 1, e))
            })?;
            let image = bitmap.as_image();
            debug!("渲染第 {} 頁 → {}x{} px", index + 1, image.width(), image.height());
            images.push(image);
        }

        Ok(images)
    }
}
