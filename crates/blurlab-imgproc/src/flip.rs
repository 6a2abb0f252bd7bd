use blurlab_image::{Image, ImageError};

/// Flip the input image around both axes, a rotation by 180 degrees.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C).
///
/// # Returns
///
/// The rotated image. Channels of a pixel keep their order.
///
/// # Example
///
/// ```
/// use blurlab_image::{Image, ImageSize};
/// use blurlab_imgproc::flip::both_flip;
///
/// let image = Image::<u8, 1>::new(
///     ImageSize {
///         width: 3,
///         height: 2,
///     },
///     vec![1, 2, 3, 4, 5, 6],
/// )
/// .unwrap();
///
/// let flipped = both_flip(&image).unwrap();
/// assert_eq!(flipped.as_slice(), &[6, 5, 4, 3, 2, 1]);
/// ```
pub fn both_flip<T, const C: usize>(src: &Image<T, C>) -> Result<Image<T, C>, ImageError>
where
    T: Clone,
{
    let data = src
        .as_slice()
        .chunks_exact(C)
        .rev()
        .flatten()
        .cloned()
        .collect();

    Image::new(src.size(), data)
}
