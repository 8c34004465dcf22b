use std::fs;
use std::path::{Path, PathBuf};

use file_converter::error::ConvertError;
use file_converter::facade::conversion_facade::ConversionFacade;
use file_converter::facade::image_dispatcher::ImageDispatcher;
use file_converter::facade::pdf_dispatcher::PdfDispatcher;
use file_converter::facade::traits::i_conversion::ConversionFacadeTrait;
use file_converter::models::conversion::{ConversionRequest, SourceKind, TargetKind};
use file_converter::service::document::DocumentService;
use file_converter::service::image::ImageService;
use file_converter::service::traits::i_service::{DocumentLoaderTrait, LoadedDocument, PdfRendererTrait};
use image::{DynamicImage, GenericImageView, Rgb, RgbImage};

struct StripedPages {
    pages: usize,
}

impl PdfRendererTrait for StripedPages {
    fn render_pages(&self, _pdf: &Path) -> Result<Vec<DynamicImage>, ConvertError> {
        Ok((0..self.pages)
            .map(|n| DynamicImage::ImageRgb8(RgbImage::from_pixel(8, 12, Rgb([n as u8 * 40, 0, 0]))))
            .collect())
    }
}

struct PlainTextDocuments;

struct PlainTextDocument;

impl DocumentLoaderTrait for PlainTextDocuments {
    fn load(&self, _input: &Path) -> Result<Box<dyn LoadedDocument>, ConvertError> {
        Ok(Box::new(PlainTextDocument))
    }
}

impl LoadedDocument for PlainTextDocument {
    fn save_to_pdf(&mut self, output: &Path) -> Result<(), ConvertError> {
        fs::write(output, b"%PDF-1.7\n%%EOF\n")?;
        Ok(())
    }

    fn close(self: Box<Self>) {}
}

fn facade(pages: usize) -> ConversionFacade {
    ConversionFacade::with_dispatchers(
        ImageDispatcher::new(Box::new(ImageService::new(95)), Box::new(StripedPages { pages }), true),
        PdfDispatcher::new(
            Box::new(ImageService::new(95)),
            DocumentService::new(Box::new(PlainTextDocuments)),
        ),
    )
}

fn request(path: &Path, source_kind: SourceKind, target_kind: TargetKind, name: Option<&str>) -> ConversionRequest {
    ConversionRequest {
        source_path: path.to_string_lossy().to_string(),
        source_kind,
        target_kind,
        desired_output_name: name.map(String::from),
    }
}

fn write_png(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    let image = RgbImage::from_fn(16, 9, |x, y| Rgb([(x * 15) as u8, (y * 25) as u8, 128]));
    DynamicImage::ImageRgb8(image).save(&path).unwrap();
    path
}

#[test]
fn png_to_jpg_and_back_keeps_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let png = write_png(dir.path(), "photo.png");
    let facade = facade(0);

    let jpg = facade
        .try_execute(&request(&png, SourceKind::Png, TargetKind::Jpg, Some("photo.jpg")))
        .unwrap();
    assert_eq!(jpg, vec![dir.path().join("photo.jpg")]);

    let back = facade
        .try_execute(&request(&jpg[0], SourceKind::Jpg, TargetKind::Png, Some("round_trip")))
        .unwrap();
    assert_eq!(back, vec![dir.path().join("round_trip.png")]);

    let decoded = image::open(&back[0]).unwrap();
    assert_eq!(decoded.dimensions(), (16, 9));
}

#[test]
fn image_to_pdf_writes_a_pdf() {
    let dir = tempfile::tempdir().unwrap();
    let png = write_png(dir.path(), "photo.png");

    let result = facade(0).execute_conversion(&request(&png, SourceKind::Image, TargetKind::Pdf, Some("photo.pdf")));

    assert!(result.is_success());
    let bytes = fs::read(dir.path().join("photo.pdf")).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn pdf_pages_become_numbered_images() {
    let dir = tempfile::tempdir().unwrap();
    let pdf = dir.path().join("report.pdf");
    fs::write(&pdf, b"%PDF-1.7").unwrap();

    let written = facade(3)
        .try_execute(&request(&pdf, SourceKind::Pdf, TargetKind::Jpg, Some("ignored.jpg")))
        .unwrap();

    let expected: Vec<PathBuf> = (1..=3).map(|n| dir.path().join(format!("report_{n}.jpg"))).collect();
    assert_eq!(written, expected);
    for path in &written {
        assert_eq!(image::open(path).unwrap().dimensions(), (8, 12));
    }
    assert!(!dir.path().join("ignored.jpg").exists());
}

#[test]
fn word_document_goes_through_document_backend() {
    let dir = tempfile::tempdir().unwrap();
    let doc = dir.path().join("Letter.DOCX");
    fs::write(&doc, b"stub").unwrap();

    let written = facade(0)
        .try_execute(&request(&doc, SourceKind::Doc, TargetKind::Pdf, None))
        .unwrap();

    assert_eq!(written, vec![dir.path().join("Letter.pdf")]);
}

#[test]
fn failures_collapse_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let png = write_png(dir.path(), "photo.png");
    let facade = facade(0);

    let same = facade.execute_conversion(&request(&png, SourceKind::Png, TargetKind::Png, Some("copy.png")));
    let missing = facade.execute_conversion(&request(&dir.path().join("gone.png"), SourceKind::Png, TargetKind::Jpg, None));
    let text = dir.path().join("notes.txt");
    fs::write(&text, b"hello").unwrap();
    let unwired = facade.execute_conversion(&request(&text, SourceKind::Txt, TargetKind::Pdf, None));

    assert!(!same.is_success());
    assert!(!missing.is_success());
    assert!(!unwired.is_success());
    assert!(!dir.path().join("copy.png").exists());
    assert!(!dir.path().join("notes.pdf").exists());
}
