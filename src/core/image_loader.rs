use std::path::Path;

use egui::ColorImage;
use image::ImageReader;
use thiserror::Error;

use crate::config::config::{MAX_IMAGE_HEIGHT, MAX_IMAGE_WIDTH};
use crate::core::image_format::ImageFormat;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("unsupported image format")]
    UnsupportedFormat,
}

pub trait ImageLoader: Send + Sync {
    fn load(&self, path: &Path) -> Result<ColorImage, LoadError>;
}

/// Decodes the raster formats `ImageFormat` knows about with the `image` crate.
pub struct RasterImageLoader;

impl ImageLoader for RasterImageLoader {
    fn load(&self, path: &Path) -> Result<ColorImage, LoadError> {
        let format = ImageFormat::from_path(path).ok_or(LoadError::UnsupportedFormat)?;

        let mut reader = ImageReader::open(path)?;
        reader.set_format(format.to_image_rs());
        let img = reader.decode()?;

        let img = if img.width() > MAX_IMAGE_WIDTH || img.height() > MAX_IMAGE_HEIGHT {
            img.resize(
                MAX_IMAGE_WIDTH,
                MAX_IMAGE_HEIGHT,
                image::imageops::FilterType::Triangle,
            )
        } else {
            img
        };

        let rgba = img.to_rgba8();
        let size = [rgba.width() as usize, rgba.height() as usize];
        Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
    }
}
