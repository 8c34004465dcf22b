use std::path::PathBuf;
use log::info;
use crate::config::ports::AppConfig;
use crate::error::ConvertError;
use crate::facade::image_dispatcher::ImageDispatcher;
use crate::facade::pdf_dispatcher::PdfDispatcher;
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::{ConversionRequest, TargetKind};
use crate::service::document::{DocumentService, OfficeDocumentLoader};
use crate::service::image::ImageService;
use crate::service::pdf::PdfiumRenderer;

pub struct ConversionFacade {
    image_dispatcher: ImageDispatcher,
    pdf_dispatcher: PdfDispatcher,
}

impl ConversionFacade {
    /// 依配置建立實際使用的服務
    pub fn new(config: &AppConfig) -> Self {
        let image_dispatcher = ImageDispatcher::new(
            Box::new(ImageService::new(config.jpeg_quality)),
            Box::new(PdfiumRenderer::new(config.pdfium_lib.clone(), config.dpi)),
            config.no_progress,
        );
        let pdf_dispatcher = PdfDispatcher::new(
            Box::new(ImageService::new(config.jpeg_quality)),
            DocumentService::new(Box::new(OfficeDocumentLoader::new(config.office_bin.clone()))),
        );
        ConversionFacade::with_dispatchers(image_dispatcher, pdf_dispatcher)
    }

    pub fn with_dispatchers(image_dispatcher: ImageDispatcher, pdf_dispatcher: PdfDispatcher) -> Self {
        ConversionFacade {
            image_dispatcher,
            pdf_dispatcher,
        }
    }
}

impl ConversionFacadeTrait for ConversionFacade {
    fn try_execute(&self, request: &ConversionRequest) -> Result<Vec<PathBuf>, ConvertError> {
        info!(
            "開始轉換：{}（{} -> {}）",
            request.source_path, request.source_kind, request.target_kind
        );
        let output_name = request.desired_output_name.as_deref();
        match request.target_kind {
            TargetKind::Pdf => self
                .pdf_dispatcher
                .try_convert(request.source_kind, &request.source_path, output_name)
                .map(|output| vec![output]),
            target => self.image_dispatcher.try_convert(
                request.source_kind,
                target,
                &request.source_path,
                output_name,
            ),
        }
    }
}
