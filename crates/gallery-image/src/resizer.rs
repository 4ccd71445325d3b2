//! `ImageResizer` implementation backed by the `image` crate.

use std::io::Cursor;

use gallery_core::{Dimensions, ImageError, ImageResizer, ResizedImage};
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader};
use tracing::debug;

/// Resizer using `image` decoders and a Lanczos3 filter.
///
/// The output keeps the source format when an encoder for it is compiled
/// in, and falls back to PNG otherwise.
#[derive(Debug, Clone, Copy)]
pub struct ImageCrateResizer {
    filter: FilterType,
}

impl ImageCrateResizer {
    pub const fn new() -> Self {
        Self {
            filter: FilterType::Lanczos3,
        }
    }

    /// Use a different resampling filter.
    #[must_use]
    pub const fn with_filter(mut self, filter: FilterType) -> Self {
        self.filter = filter;
        self
    }
}

impl Default for ImageCrateResizer {
    fn default() -> Self {
        Self::new()
    }
}

fn decode_error(err: impl std::fmt::Display) -> ImageError {
    ImageError::Decode(format!("Failed to decode image: {err}"))
}

/// Encode `img` as `format` into memory.
fn encode(img: &DynamicImage, format: ImageFormat) -> Result<Vec<u8>, image::ImageError> {
    let mut buffer = Cursor::new(Vec::new());
    match format {
        // JPEG has no alpha channel
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(img.to_rgb8()).write_to(&mut buffer, format)?,
        _ => img.write_to(&mut buffer, format)?,
    }
    Ok(buffer.into_inner())
}

impl ImageResizer for ImageCrateResizer {
    fn probe(&self, bytes: &[u8]) -> Result<Dimensions, ImageError> {
        let (width, height) = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(decode_error)?
            .into_dimensions()
            .map_err(decode_error)?;

        if width == 0 || height == 0 {
            return Err(ImageError::Decode(format!(
                "Image has no pixels ({width}x{height})"
            )));
        }
        Ok(Dimensions::new(width, height))
    }

    fn resize(&self, bytes: &[u8], target: Dimensions) -> Result<ResizedImage, ImageError> {
        let source_format = image::guess_format(bytes).map_err(decode_error)?;
        let img = image::load_from_memory_with_format(bytes, source_format).map_err(decode_error)?;
        let resized = img.resize_exact(target.width, target.height, self.filter);

        let preferred = if source_format.writing_enabled() {
            source_format
        } else {
            ImageFormat::Png
        };
        let (format, encoded) = match encode(&resized, preferred) {
            Ok(encoded) => (preferred, encoded),
            Err(err) if preferred != ImageFormat::Png => {
                debug!(format = ?preferred, error = %err, "Re-encoding as PNG");
                let encoded = encode(&resized, ImageFormat::Png)
                    .map_err(|e| ImageError::Encode(e.to_string()))?;
                (ImageFormat::Png, encoded)
            }
            Err(err) => return Err(ImageError::Encode(err.to_string())),
        };

        debug!(
            from = %Dimensions::new(img.width(), img.height()),
            to = %target,
            format = ?format,
            bytes = encoded.len(),
            "Resized image"
        );

        Ok(ResizedImage {
            bytes: encoded,
            content_type: format.to_mime_type().to_string(),
            dimensions: Dimensions::new(resized.width(), resized.height()),
        })
    }
}
