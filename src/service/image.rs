use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageError, ImageFormat};
use log::{debug, info};
use crate::error::ConvertError;
use crate::models::conversion::RASTER_EXTENSIONS;
use crate::service::traits::i_service::ImageConverterTrait;
use crate::utils::pdf::write_image_pdf;

const OUTPUT_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "pdf"];

/// 圖片服務，負責點陣圖轉換並實現 ImageConverterTrait
pub struct ImageService {
    jpeg_quality: u8,
}

impl ImageService {
    /// 創建新的 ImageService 實例
    pub fn new(jpeg_quality: u8) -> Self {
        ImageService { jpeg_quality }
    }
}

impl ImageConverterTrait for ImageService {
    fn convert(&self, input: &Path, output: &Path) -> Result<(), ConvertError> {
        let input_name = input.to_string_lossy().to_string();
        let is_raster = lowercase_extension(input)
            .map_or(false, |ext| RASTER_EXTENSIONS.contains(&ext.as_str()));
        if !is_raster {
            return Err(ConvertError::UnsupportedFormat {
                path: input_name,
                expected: RASTER_EXTENSIONS,
            });
        }

        // 檔案可能在存在性檢查後被移除
        let image = image::open(input).map_err(|e| match e {
            ImageError::IoError(err) if err.kind() == io::ErrorKind::NotFound => {
                ConvertError::NotFound { path: input_name.clone() }
            }
            other => ConvertError::Image(other),
        })?;
        info!("開啟圖片：{}，尺寸：{}x{}", input_name, image.width(), image.height());

        self.save(&image, output)
    }

    fn save(&self, image: &DynamicImage, output: &Path) -> Result<(), ConvertError> {
        // 統一轉為 RGB，alpha 通道會被捨棄
        let rgb = image.to_rgb8();

        match lowercase_extension(output).as_deref() {
            Some("pdf") => write_image_pdf(&rgb, output, self.jpeg_quality)?,
            Some("jpg") | Some("jpeg") => {
                let mut writer = BufWriter::new(File::create(output)?);
                JpegEncoder::new_with_quality(&mut writer, self.jpeg_quality).encode_image(&rgb)?;
                writer.flush()?;
            }
            Some("png") => rgb.save_with_format(output, ImageFormat::Png)?,
            Some("gif") => rgb.save_with_format(output, ImageFormat::Gif)?,
            _ => {
                return Err(ConvertError::UnsupportedFormat {
                    path: output.to_string_lossy().to_string(),
                    expected: OUTPUT_EXTENSIONS,
                })
            }
        }

        debug!("寫出圖片：{}", output.display());
        Ok(())
    }
}

fn lowercase_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}
