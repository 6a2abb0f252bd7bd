use blurlab_image::{Image, ImageError};

use super::kernels::Kernel2d;
use crate::border::BorderMode;
use crate::parallel::{self, ExecutionStrategy};

/// Sample types a filter can read and write back at the same depth.
pub trait PixelDepth: Copy + Send + Sync {
    /// Convert the sample to f32 for accumulation.
    fn to_f32(self) -> f32;

    /// Convert an accumulated value back, rounding and clamping to the type's range.
    fn saturate_from_f32(val: f32) -> Self;
}

impl PixelDepth for u8 {
    fn to_f32(self) -> f32 {
        self as f32
    }

    fn saturate_from_f32(val: f32) -> Self {
        val.round().clamp(0.0, u8::MAX as f32) as u8
    }
}

impl PixelDepth for u16 {
    fn to_f32(self) -> f32 {
        self as f32
    }

    fn saturate_from_f32(val: f32) -> Self {
        val.round().clamp(0.0, u16::MAX as f32) as u16
    }
}

impl PixelDepth for f32 {
    fn to_f32(self) -> f32 {
        self
    }

    fn saturate_from_f32(val: f32) -> Self {
        val
    }
}

/// Correlate an image with a 2D kernel, keeping the source depth.
///
/// Each output sample is `sum(kernel[ky][kx] * src[y + ky - ay][x + kx - ax])` with the
/// anchor `(ax, ay)` at the kernel center. The kernel is applied as is, without flipping.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
/// * `kernel` - The kernel weights.
/// * `border` - How samples outside the image are read.
/// * `strategy` - Serial or row-parallel execution.
///
/// PRECONDITION: `src` and `dst` must have the same shape.
pub fn correlate2d<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    kernel: &Kernel2d,
    border: BorderMode,
    strategy: ExecutionStrategy,
) -> Result<(), ImageError>
where
    T: PixelDepth,
{
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    let (rows, cols) = (src.rows(), src.cols());
    if rows == 0 || cols == 0 {
        return Ok(());
    }

    let (anchor_x, anchor_y) = kernel.anchor();
    let weights = kernel.as_slice();
    let kernel_cols = kernel.cols();
    let src_data = src.as_slice();

    // precompute the source column for every (output column, kernel column) pair
    let col_lut = (0..cols)
        .flat_map(|x| {
            (0..kernel_cols)
                .map(move |kx| border.map_index(x as isize + kx as isize - anchor_x as isize, cols))
        })
        .collect::<Vec<_>>();

    parallel::for_each_row(dst.as_slice_mut(), cols * C, strategy, |y, dst_row| {
        let mut acc = vec![[0.0f32; C]; cols];

        for (ky, kernel_row) in weights.chunks_exact(kernel_cols).enumerate() {
            let Some(sy) = border.map_index(y as isize + ky as isize - anchor_y as isize, rows)
            else {
                continue;
            };
            let src_row = &src_data[sy * cols * C..(sy + 1) * cols * C];

            for (x, acc_px) in acc.iter_mut().enumerate() {
                let lut = &col_lut[x * kernel_cols..(x + 1) * kernel_cols];
                for (&k, &sx) in kernel_row.iter().zip(lut) {
                    let Some(sx) = sx else {
                        continue;
                    };
                    let px = &src_row[sx * C..(sx + 1) * C];
                    for (a, &v) in acc_px.iter_mut().zip(px) {
                        *a += k * v.to_f32();
                    }
                }
            }
        }

        for (out_px, acc_px) in dst_row.chunks_exact_mut(C).zip(acc.iter()) {
            for (out, &a) in out_px.iter_mut().zip(acc_px) {
                *out = T::saturate_from_f32(a);
            }
        }
    });

    Ok(())
}

/// Convolve an image with a 2D kernel, keeping the source depth.
///
/// Convolution is correlation with the kernel rotated by 180 degrees, so the kernel is
/// flipped first. For kernels symmetric under that rotation the result equals
/// [`correlate2d`].
///
/// # Example
///
/// ```
/// use blurlab_image::Image;
/// use blurlab_imgproc::border::BorderMode;
/// use blurlab_imgproc::filter::{convolve2d, kernels::gaussian_kernel_2d};
/// use blurlab_imgproc::parallel::ExecutionStrategy;
///
/// let src = Image::<u8, 1>::from_size_val([8, 8].into(), 200).unwrap();
/// let mut dst = Image::<u8, 1>::from_size_val(src.size(), 0).unwrap();
/// let kernel = gaussian_kernel_2d(3, 1.0).unwrap();
///
/// convolve2d(&src, &mut dst, &kernel, BorderMode::default(), ExecutionStrategy::Serial).unwrap();
/// assert!(dst.as_slice().iter().all(|&v| v == 200));
/// ```
pub fn convolve2d<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    kernel: &Kernel2d,
    border: BorderMode,
    strategy: ExecutionStrategy,
) -> Result<(), ImageError>
where
    T: PixelDepth,
{
    correlate2d(src, dst, &kernel.flipped(), border, strategy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blurlab_image::ImageSize;

    #[test]
    fn saturate_u8() {
        assert_eq!(u8::saturate_from_f32(-3.0), 0);
        assert_eq!(u8::saturate_from_f32(300.0), 255);
        assert_eq!(u8::saturate_from_f32(127.6), 128);
        assert_eq!(u16::saturate_from_f32(70000.0), u16::MAX);
        assert_eq!(f32::saturate_from_f32(-3.5), -3.5);
    }

    #[test]
    fn correlate_identity_kernel() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 4,
            height: 3,
        };
        let src = Image::<u8, 1>::new(size, (0..12).collect())?;
        let mut dst = Image::<u8, 1>::from_size_val(size, 0)?;
        let kernel = Kernel2d::new(3, 3, vec![0., 0., 0., 0., 1., 0., 0., 0., 0.])?;

        correlate2d(
            &src,
            &mut dst,
            &kernel,
            BorderMode::Constant,
            ExecutionStrategy::Serial,
        )?;
        assert_eq!(dst.as_slice(), src.as_slice());
        Ok(())
    }

    #[test]
    fn correlate_shift_kernel() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 4,
            height: 1,
        };
        let src = Image::<f32, 1>::new(size, vec![1.0, 2.0, 3.0, 4.0])?;
        let mut dst = Image::<f32, 1>::from_size_val(size, 0.0)?;

        // weight on the right neighbour: correlation reads src[x + 1]
        let kernel = Kernel2d::new(1, 3, vec![0.0, 0.0, 1.0])?;
        correlate2d(
            &src,
            &mut dst,
            &kernel,
            BorderMode::Constant,
            ExecutionStrategy::Serial,
        )?;
        assert_eq!(dst.as_slice(), &[2.0, 3.0, 4.0, 0.0]);

        // convolution flips it and reads src[x - 1]
        convolve2d(
            &src,
            &mut dst,
            &kernel,
            BorderMode::Constant,
            ExecutionStrategy::Serial,
        )?;
        assert_eq!(dst.as_slice(), &[0.0, 1.0, 2.0, 3.0]);
        Ok(())
    }

    #[test]
    fn correlate_multichannel_replicate() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 2,
            height: 1,
        };
        let src = Image::<f32, 2>::new(size, vec![1.0, 10.0, 3.0, 30.0])?;
        let mut dst = Image::<f32, 2>::from_size_val(size, 0.0)?;
        let kernel = Kernel2d::new(1, 3, vec![0.25, 0.5, 0.25])?;

        correlate2d(
            &src,
            &mut dst,
            &kernel,
            BorderMode::Replicate,
            ExecutionStrategy::Serial,
        )?;
        assert_eq!(dst.as_slice(), &[1.5, 15.0, 2.5, 25.0]);
        Ok(())
    }

    #[test]
    fn correlate_size_mismatch() -> Result<(), ImageError> {
        let src = Image::<u8, 1>::from_size_val([4, 4].into(), 0)?;
        let mut dst = Image::<u8, 1>::from_size_val([4, 3].into(), 0)?;
        let kernel = Kernel2d::new(1, 1, vec![1.0])?;
        let res = correlate2d(
            &src,
            &mut dst,
            &kernel,
            BorderMode::default(),
            ExecutionStrategy::Serial,
        );
        assert_eq!(res, Err(ImageError::InvalidImageSize(4, 4, 4, 3)));
        Ok(())
    }
}
