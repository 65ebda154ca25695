//! Luminance conversion between RGB and single-channel rasters.
//!
//! Uses BT.601 weights in 14-bit fixed point so that results match the
//! classic `0.299 R + 0.587 G + 0.114 B` conversion with rounding, and so
//! that a pixel with `R == G == B` maps to itself.

use image::{GrayImage, Luma, Rgb, RgbImage};

const SHIFT: u32 = 14;
const R_WEIGHT: u32 = 4899;
const G_WEIGHT: u32 = 9617;
const B_WEIGHT: u32 = 1868;
const ROUND: u32 = 1 << (SHIFT - 1);

/// Luminance of a single RGB pixel.
#[inline]
pub fn bt601(px: &Rgb<u8>) -> u8 {
    let [r, g, b] = px.0;
    let y = u32::from(r) * R_WEIGHT + u32::from(g) * G_WEIGHT + u32::from(b) * B_WEIGHT;
    ((y + ROUND) >> SHIFT) as u8
}

/// Convert an RGB raster to single-channel BT.601 luminance.
pub fn to_luma_bt601(img: &RgbImage) -> GrayImage {
    let (width, height) = img.dimensions();
    GrayImage::from_fn(width, height, |x, y| Luma([bt601(img.get_pixel(x, y))]))
}

/// Re-expand a single-channel raster to 3 channels by duplicating the value.
pub fn gray_to_rgb(img: &GrayImage) -> RgbImage {
    let (width, height) = img.dimensions();
    RgbImage::from_fn(width, height, |x, y| {
        let v = img.get_pixel(x, y).0[0];
        Rgb([v, v, v])
    })
}
