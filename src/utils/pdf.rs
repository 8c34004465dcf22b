use std::fs;
use std::path::Path;
use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;
use log::info;
use pdf_writer::{Content, Filter, Name, Pdf, Rect, Ref};
use crate::error::ConvertError;

/// 將 RGB 圖片寫成單頁 PDF，頁面尺寸以 72 dpi 對應像素
pub fn write_image_pdf(rgb: &RgbImage, output: &Path, jpeg_quality: u8) -> Result<(), ConvertError> {
    let bytes = render_image_pdf(rgb, jpeg_quality)?;
    fs::write(output, &bytes)?;
    info!("生成 PDF：{}，大小：{} 位元組", output.display(), bytes.len());
    Ok(())
}

pub fn render_image_pdf(rgb: &RgbImage, jpeg_quality: u8) -> Result<Vec<u8>, ConvertError> {
    let (width, height) = rgb.dimensions();

    let mut jpeg = Vec::new();
    JpegEncoder::new_with_quality(&mut jpeg, jpeg_quality).encode_image(rgb)?;

    let catalog_id = Ref::new(1);
    let pages_id = Ref::new(2);
    let page_id = Ref::new(3);
    let image_id = Ref::new(4);
    let content_id = Ref::new(5);
    let image_name = Name(b"Im1");

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(pages_id);
    pdf.pages(pages_id).kids([page_id]).count(1);

    let (page_width, page_height) = (width as f32, height as f32);
    let mut page = pdf.page(page_id);
    page.media_box(Rect::new(0.0, 0.0, page_width, page_height))
        .parent(pages_id)
        .contents(content_id);
    page.resources().x_objects().pair(image_name, image_id);
    drop(page);

    let mut image = pdf.image_xobject(image_id, &jpeg);
    image.filter(Filter::DctDecode);
    image.width(width as i32);
    image.height(height as i32);
    image.color_space().device_rgb();
    image.bits_per_component(8);
    drop(image);

    // 將單位正方形的圖片拉伸到整個頁面
    let mut content = Content::new();
    content.save_state();
    content.transform([page_width, 0.0, 0.0, page_height, 0.0, 0.0]);
    content.x_object(image_name);
    content.restore_state();
    pdf.stream(content_id, &content.finish());

    Ok(pdf.finish())
}
