//! Min-max rescaling used to present kernels.
//!
//! The rescaled values are copies meant for display only; the kernel that feeds the
//! convolution is never modified.

use blurlab_image::{Image, ImageError, ImageSize};

use crate::filter::Kernel2d;

/// Linearly rescale values so their minimum maps to `min` and their maximum to `max`.
///
/// A constant input maps every value to `min`.
///
/// # Example
///
/// ```
/// use blurlab_imgproc::normalize::normalize_min_max;
///
/// let scaled = normalize_min_max(&[1.0, 2.0, 3.0], 0.0, 100.0);
/// assert_eq!(scaled, vec![0.0, 50.0, 100.0]);
/// ```
pub fn normalize_min_max(src: &[f32], min: f32, max: f32) -> Vec<f32> {
    let (lo, hi) = src
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });

    let range = hi - lo;
    if range.is_nan() || range <= 0.0 {
        return vec![min; src.len()];
    }

    let scale = (max - min) / range;
    src.iter().map(|&v| (v - lo) * scale + min).collect()
}

/// Render a kernel as an 8-bit grayscale image, min-max stretched to `0..=255`.
pub fn kernel_to_gray8(kernel: &Kernel2d) -> Result<Image<u8, 1>, ImageError> {
    let data = normalize_min_max(kernel.as_slice(), 0.0, 255.0)
        .into_iter()
        .map(|v| v.round().clamp(0.0, 255.0) as u8)
        .collect();

    Image::new(
        ImageSize {
            width: kernel.cols(),
            height: kernel.rows(),
        },
        data,
    )
}
