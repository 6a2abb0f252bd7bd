use std::path::Path;

use blurlab_image::{Image, ImageSize};

use crate::error::IoError;

/// Reads an image from the given file path as 8-bit grayscale.
///
/// The method reads any image format supported by the image crate, guessing the
/// format from the file content, and converts color images to luma.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// A grayscale image with a single channel (mono8).
pub fn read_image_any_gray8(file_path: impl AsRef<Path>) -> Result<Image<u8, 1>, IoError> {
    let file_path = file_path.as_ref().to_owned();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path));
    }

    let img = image::ImageReader::open(&file_path)?
        .with_guessed_format()?
        .decode()?;

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    log::debug!("read {} as gray8, {}", file_path.display(), size);

    Ok(Image::new(size, img.into_luma8().into_raw())?)
}

/// Writes a grayscale image, choosing the encoder from the file extension.
///
/// # Arguments
///
/// * `file_path` - The destination path, e.g. `out.png` or `out.jpg`.
/// * `image` - The grayscale image to encode.
///
/// # Errors
///
/// Returns [`IoError::InvalidFileExtension`] when the extension does not name a known format.
pub fn write_image_gray8(file_path: impl AsRef<Path>, image: &Image<u8, 1>) -> Result<(), IoError> {
    let file_path = file_path.as_ref();

    let format = image::ImageFormat::from_path(file_path)
        .map_err(|_| IoError::InvalidFileExtension(file_path.to_path_buf()))?;

    image::save_buffer_with_format(
        file_path,
        image.as_slice(),
        image.width() as u32,
        image.height() as u32,
        image::ExtendedColorType::L8,
        format,
    )?;

    log::debug!("wrote {} as {:?}", file_path.display(), format);

    Ok(())
}
