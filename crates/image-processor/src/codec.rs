//! Conversion between uploaded bytes and RGB rasters.

use image::codecs::jpeg::JpegEncoder;
use image::error::{ParameterError, ParameterErrorKind};
use image::{ImageError, RgbImage};
use tracing::debug;

use crate::{FilterError, Result};

/// Decode an uploaded buffer into a 3-channel RGB raster.
///
/// The container format is guessed from the leading bytes. Alpha is dropped
/// and grayscale sources are expanded, so every filter sees the same layout.
pub fn decode_rgb(bytes: &[u8]) -> Result<RgbImage> {
    if bytes.is_empty() {
        return Err(FilterError::Decode(ImageError::Parameter(
            ParameterError::from_kind(ParameterErrorKind::NoMoreData),
        )));
    }

    let img = image::load_from_memory(bytes).map_err(FilterError::Decode)?;
    debug!(
        len = bytes.len(),
        color = ?img.color(),
        "Decoded image buffer"
    );
    Ok(img.into_rgb8())
}

/// Encode an RGB raster as a baseline JPEG.
pub fn encode_jpeg(img: &RgbImage, quality: u8) -> Result<Vec<u8>> {
    if img.width() == 0 || img.height() == 0 {
        return Err(FilterError::Encode(ImageError::Parameter(
            ParameterError::from_kind(ParameterErrorKind::DimensionMismatch),
        )));
    }

    let mut buf = Vec::new();
    JpegEncoder::new_with_quality(&mut buf, quality.clamp(1, 100))
        .encode_image(img)
        .map_err(FilterError::Encode)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, GrayImage, ImageFormat, Luma, Rgba, RgbaImage};
    use std::io::Cursor;

    fn encode_as(img: DynamicImage, format: ImageFormat) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, format).unwrap();
        buf.into_inner()
    }

    #[test]
    fn decode_drops_alpha_channel() {
        let rgba = RgbaImage::from_pixel(4, 3, Rgba([10, 20, 30, 0]));
        let bytes = encode_as(DynamicImage::ImageRgba8(rgba), ImageFormat::Png);

        let rgb = decode_rgb(&bytes).unwrap();
        assert_eq!(rgb.dimensions(), (4, 3));
        assert_eq!(rgb.get_pixel(0, 0).0, [10, 20, 30]);
    }

    #[test]
    fn decode_expands_grayscale() {
        let gray = GrayImage::from_pixel(2, 2, Luma([77]));
        let bytes = encode_as(DynamicImage::ImageLuma8(gray), ImageFormat::Png);

        let rgb = decode_rgb(&bytes).unwrap();
        assert_eq!(rgb.get_pixel(1, 1).0, [77, 77, 77]);
    }

    #[test]
    fn decode_rejects_truncated_png() {
        let bytes = encode_as(
            DynamicImage::ImageRgb8(RgbImage::new(16, 16)),
            ImageFormat::Png,
        );
        let truncated = &bytes[..bytes.len() / 2];
        assert!(matches!(decode_rgb(truncated), Err(FilterError::Decode(_))));
    }

    #[test]
    fn encode_produces_decodable_jpeg() {
        let img = RgbImage::from_pixel(8, 8, image::Rgb([200, 100, 50]));
        let jpeg = encode_jpeg(&img, 90).unwrap();

        assert_eq!(image::guess_format(&jpeg).unwrap(), ImageFormat::Jpeg);
        let back = decode_rgb(&jpeg).unwrap();
        assert_eq!(back.dimensions(), (8, 8));
    }

    #[test]
    fn encode_clamps_out_of_range_quality() {
        let img = RgbImage::from_pixel(4, 4, image::Rgb([1, 2, 3]));
        assert!(encode_jpeg(&img, 0).is_ok());
        assert!(encode_jpeg(&img, 255).is_ok());
    }
}
