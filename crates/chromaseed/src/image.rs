//! Turning encoded images into pixels.
//!
//! Quantization time grows with the number of distinct colors, so the
//! functions here downsample images to fit into a [`CANVAS_SIZE`] square
//! before extracting pixels. Only PNG and JPEG decoding is enabled.

use ::image::imageops::{self, FilterType};
use ::image::DynamicImage;

use crate::error::ImageError;
use crate::quantize::QuantizeOptions;
use crate::score::{source_colors, ScoreOptions};
use crate::Argb;

/// The maximum width and height of downsampled images.
pub const CANVAS_SIZE: u32 = 128;

/// Extract the pixels from an image, downsampling large images first.
pub fn pixels_from_image(image: &DynamicImage) -> Vec<Argb> {
    let mut rgba = image.to_rgba8();

    let (width, height) = rgba.dimensions();
    if width > CANVAS_SIZE || height > CANVAS_SIZE {
        let scale = (CANVAS_SIZE as f64 / width as f64).min(CANVAS_SIZE as f64 / height as f64);
        let new_width = ((width as f64 * scale).round() as u32).max(1);
        let new_height = ((height as f64 * scale).round() as u32).max(1);
        tracing::debug!(width, height, new_width, new_height, "downsampling image");
        rgba = imageops::resize(&rgba, new_width, new_height, FilterType::Triangle);
    }

    rgba.pixels()
        .map(|pixel| {
            let [r, g, b, a] = pixel.0;
            Argb::from_argb(a, r, g, b)
        })
        .collect()
}

/// Decode the image bytes and extract the pixels.
///
/// This function fails if the bytes are not a supported image format or the
/// image has no opaque pixels.
pub fn pixels_from_bytes(bytes: &[u8]) -> Result<Vec<Argb>, ImageError> {
    let image = ::image::load_from_memory(bytes)?;
    let pixels = pixels_from_image(&image);
    if !pixels.iter().any(Argb::is_opaque) {
        return Err(ImageError::Empty);
    }

    Ok(pixels)
}

/// Decode the image bytes and extract ranked source colors.
pub fn source_colors_from_bytes(
    bytes: &[u8],
    quantize: &QuantizeOptions,
    options: &ScoreOptions,
) -> Result<Vec<Argb>, ImageError> {
    let pixels = pixels_from_bytes(bytes)?;
    Ok(source_colors(&pixels, quantize, options))
}

// ====================================================================================================================
