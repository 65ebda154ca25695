//! The closed set of raster filters and their dispatch.

use image::RgbImage;
use imageproc::edges::canny;
use imageproc::filter::separable_filter_equal;
use tracing::debug;

use crate::luma::{gray_to_rgb, to_luma_bt601};

/// Side length of the Gaussian blur kernel.
pub const BLUR_KERNEL_SIZE: usize = 15;

/// Canny hysteresis thresholds.
pub const CANNY_LOW: f32 = 100.0;
pub const CANNY_HIGH: f32 = 200.0;

/// A named, deterministic raster-to-raster transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterKind {
    #[default]
    Blur,
    Gray,
    Canny,
    Identity,
}

impl FilterKind {
    /// Resolve a filter name. Unknown names select [`FilterKind::Identity`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "blur" => Self::Blur,
            "gray" => Self::Gray,
            "canny" => Self::Canny,
            _ => Self::Identity,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blur => "blur",
            Self::Gray => "gray",
            Self::Canny => "canny",
            Self::Identity => "identity",
        }
    }

    /// The transform function backing this filter.
    pub fn transform(self) -> fn(&RgbImage) -> RgbImage {
        match self {
            Self::Blur => gaussian_blur,
            Self::Gray => grayscale,
            Self::Canny => canny_edges,
            Self::Identity => identity,
        }
    }

    pub fn apply(self, img: &RgbImage) -> RgbImage {
        debug!(
            filter = self.as_str(),
            width = img.width(),
            height = img.height(),
            "Applying filter"
        );
        (self.transform())(img)
    }
}

impl From<&str> for FilterKind {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl std::fmt::Display for FilterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sigma derived from the kernel size, as imaging libraries do when none is given.
pub fn sigma_for_kernel(ksize: usize) -> f32 {
    0.3 * ((ksize as f32 - 1.0) * 0.5 - 1.0) + 0.8
}

/// Normalized 1-D Gaussian kernel of odd length `ksize`.
pub fn gaussian_kernel(ksize: usize) -> Vec<f32> {
    let sigma = sigma_for_kernel(ksize);
    let center = (ksize / 2) as f32;
    let denom = 2.0 * sigma * sigma;

    let mut kernel: Vec<f32> = (0..ksize)
        .map(|i| {
            let d = i as f32 - center;
            (-(d * d) / denom).exp()
        })
        .collect();

    let sum: f32 = kernel.iter().sum();
    for k in &mut kernel {
        *k /= sum;
    }
    kernel
}

/// Gaussian smoothing over all three channels with a fixed 15x15 kernel.
pub fn gaussian_blur(img: &RgbImage) -> RgbImage {
    if img.width() == 0 || img.height() == 0 {
        return img.clone();
    }
    let kernel = gaussian_kernel(BLUR_KERNEL_SIZE);
    separable_filter_equal(img, &kernel[..])
}

/// BT.601 luminance, re-expanded to 3 channels.
pub fn grayscale(img: &RgbImage) -> RgbImage {
    gray_to_rgb(&to_luma_bt601(img))
}

/// Canny edge map of the luminance, re-expanded to 3 channels.
pub fn canny_edges(img: &RgbImage) -> RgbImage {
    if img.width() == 0 || img.height() == 0 {
        return img.clone();
    }
    let edges = canny(&to_luma_bt601(img), CANNY_LOW, CANNY_HIGH);
    gray_to_rgb(&edges)
}

pub fn identity(img: &RgbImage) -> RgbImage {
    img.clone()
}
