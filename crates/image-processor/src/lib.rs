//! Image filtering pipeline for the filter server.
//!
//! Provides decoding of uploaded bytes into an RGB raster, a closed set of
//! filters (Gaussian blur, grayscale, Canny edges, identity), and JPEG
//! re-encoding of the result.

pub mod codec;
pub mod filter;
pub mod luma;

use tracing::debug;

// Re-exports for convenience
pub use codec::{decode_rgb, encode_jpeg};
pub use filter::FilterKind;
pub use luma::{gray_to_rgb, to_luma_bt601};

/// Default JPEG quality, matching the common libjpeg default of most imaging stacks.
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// MIME type of every successful pipeline output.
pub const OUTPUT_MIME: &str = "image/jpeg";

/// Errors that can occur while running the filter pipeline.
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    #[error("Invalid image data")]
    Decode(#[source] image::ImageError),

    #[error("Failed to encode image")]
    Encode(#[source] image::ImageError),
}

impl FilterError {
    /// Whether the failure was caused by the caller's input rather than the server.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

pub type Result<T> = std::result::Result<T, FilterError>;

/// Decode `bytes`, apply `kind`, and re-encode as JPEG.
pub fn process(bytes: &[u8], kind: FilterKind, quality: u8) -> Result<Vec<u8>> {
    let raster = decode_rgb(bytes)?;
    debug!(
        width = raster.width(),
        height = raster.height(),
        filter = kind.as_str(),
        "Decoded upload"
    );

    let filtered = kind.apply(&raster);
    let encoded = encode_jpeg(&filtered, quality)?;
    debug!(bytes = encoded.len(), "Encoded filtered image");

    Ok(encoded)
}
