/// An error type for the viz module.
#[derive(thiserror::Error, Debug)]
pub enum VizError {
    /// The native window could not be created or crashed.
    #[error("Failed to run the window. {0}")]
    WindowError(#[from] eframe::Error),

    /// The image to show could not be prepared.
    #[error("Failed to prepare the image. {0}")]
    ImageError(#[from] blurlab_image::ImageError),
}
