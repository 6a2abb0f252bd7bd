use std::path::PathBuf;

use argh::FromArgs;

/// Parameters of one blur run.
#[derive(Clone, Debug, PartialEq)]
pub struct BlurConfig {
    /// Image to load, read as 8-bit grayscale.
    pub image_path: PathBuf,
    /// Side of the square gaussian kernel, odd and positive.
    pub kernel_size: usize,
    /// Gaussian standard deviation. Non-positive values derive it from `kernel_size`.
    pub sigma: f32,
    /// Key that saves the filtered image when pressed on the image windows.
    pub save_key: char,
    /// Directory receiving the saved image.
    pub output_dir: PathBuf,
    /// Extension of the saved image, which also selects its encoder.
    pub output_extension: String,
    /// Top of the height axis of the kernel surface.
    pub z_factor: f32,
    /// Also show the kernel as a grayscale heat map before the surface.
    pub show_kernel_image: bool,
}

impl Default for BlurConfig {
    fn default() -> Self {
        Self {
            image_path: PathBuf::from("tutorials/data/images/Bumbu_Rawon.jpg"),
            kernel_size: 35,
            sigma: 4.0,
            save_key: 's',
            output_dir: PathBuf::from("."),
            output_extension: "png".to_string(),
            z_factor: 100.0,
            show_kernel_image: false,
        }
    }
}

#[derive(FromArgs, Debug)]
/// Blur an image with a gaussian kernel and inspect the kernel in 3D
pub struct Args {
    /// path to an input image
    #[argh(option, short = 'i')]
    image_path: Option<PathBuf>,

    /// the side of the square kernel (odd)
    #[argh(option, short = 'k')]
    kernel_size: Option<usize>,

    /// the gaussian sigma, non-positive derives it from the kernel size
    #[argh(option, short = 's')]
    sigma: Option<f32>,

    /// the directory where the filtered image is saved
    #[argh(option, short = 'o')]
    output_dir: Option<PathBuf>,

    /// the extension of the saved image (png, jpg, tiff, ...)
    #[argh(option)]
    output_extension: Option<String>,

    /// show the kernel as a grayscale image too
    #[argh(switch)]
    show_kernel_image: bool,
}

impl Args {
    /// Apply the command line on top of the default configuration.
    pub fn into_config(self) -> BlurConfig {
        let defaults = BlurConfig::default();
        BlurConfig {
            image_path: self.image_path.unwrap_or(defaults.image_path),
            kernel_size: self.kernel_size.unwrap_or(defaults.kernel_size),
            sigma: self.sigma.unwrap_or(defaults.sigma),
            output_dir: self.output_dir.unwrap_or(defaults.output_dir),
            output_extension: self
                .output_extension
                .unwrap_or(defaults.output_extension),
            show_kernel_image: self.show_kernel_image,
            ..defaults
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_keep_defaults() {
        let args = Args::from_args(&["blur_3d"], &[]).unwrap_or_else(|e| panic!("{}", e.output));
        assert_eq!(args.into_config(), BlurConfig::default());
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::from_args(
            &["blur_3d"],
            &["-i", "dog.png", "-k", "5", "-s", "1.5", "--show-kernel-image"],
        )
        .unwrap_or_else(|e| panic!("{}", e.output));
        let config = args.into_config();

        assert_eq!(config.image_path, PathBuf::from("dog.png"));
        assert_eq!(config.kernel_size, 5);
        assert_eq!(config.sigma, 1.5);
        assert!(config.show_kernel_image);
        assert_eq!(config.save_key, 's');
    }
}
