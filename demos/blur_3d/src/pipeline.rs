use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use blurlab::{
    image::{Image, ImageError},
    imgproc::{
        border::BorderMode,
        filter::{convolve2d, kernels, Kernel2d},
        parallel::ExecutionStrategy,
    },
    io::{functional as F, IoError},
    viz::KeyPress,
};

use crate::config::BlurConfig;

/// The sigma actually used, resolving the non-positive sentinel.
pub fn effective_sigma(config: &BlurConfig) -> f32 {
    if config.sigma > 0.0 {
        config.sigma
    } else {
        kernels::gaussian_sigma_from_size(config.kernel_size)
    }
}

/// Build the square gaussian kernel described by the configuration.
pub fn build_kernel(config: &BlurConfig) -> Result<Kernel2d, ImageError> {
    kernels::gaussian_kernel_2d(config.kernel_size, effective_sigma(config))
}

/// Render a sigma for titles and file names.
///
/// At most four decimals, trailing zeros dropped, so `4.0` reads `4` and a derived
/// `5.6000004` reads `5.6`.
pub fn format_sigma(sigma: f32) -> String {
    let text = format!("{sigma:.4}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    match text {
        "" | "-" | "-0" => "0".to_string(),
        _ => text.to_string(),
    }
}

/// Title of the kernel surface plot.
pub fn kernel_title(config: &BlurConfig) -> String {
    format!(
        "{n} by {n} Gaussian kernel (sigma={})",
        format_sigma(effective_sigma(config)),
        n = config.kernel_size
    )
}

/// Convolve the image with the kernel, timing only the convolution.
pub fn timed_convolution(
    image: &Image<u8, 1>,
    kernel: &Kernel2d,
) -> Result<(Image<u8, 1>, Duration), ImageError> {
    let mut result = Image::from_size_val(image.size(), 0u8)?;

    let start = Instant::now();
    convolve2d(
        image,
        &mut result,
        kernel,
        BorderMode::default(),
        ExecutionStrategy::Serial,
    )?;
    let elapsed = start.elapsed();

    Ok((result, elapsed))
}

/// The one-line timing summary printed after the convolution.
pub fn report_line(image: &Image<u8, 1>, kernel: &Kernel2d, elapsed: Duration) -> String {
    format!(
        "Computing the convolution of an image with a resolution of {} by {} and a kernel size of {} by {} took {} seconds.",
        image.width(),
        image.height(),
        kernel.rows(),
        kernel.cols(),
        elapsed.as_secs_f64()
    )
}

/// File name of the saved image, embedding kernel size and sigma.
pub fn output_filename(kernel_size: usize, sigma: f32, extension: &str) -> String {
    format!(
        "filtered_with_{kernel_size}x{kernel_size}_gauss_kernel_with_sigma_{}.{extension}",
        format_sigma(sigma)
    )
}

/// Save the filtered image if `key` is the configured save key.
///
/// Returns the written path, or `None` when another key (or none) was pressed.
pub fn save_on_key(
    key: KeyPress,
    config: &BlurConfig,
    result: &Image<u8, 1>,
) -> Result<Option<PathBuf>, IoError> {
    if !key.is_char(config.save_key) {
        log::debug!("{:?} is not the save key, skipping save", key);
        return Ok(None);
    }

    let path = config.output_dir.join(output_filename(
        config.kernel_size,
        effective_sigma(config),
        &config.output_extension,
    ));
    F::write_image_gray8(&path, result)?;

    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_in(dir: &std::path::Path) -> BlurConfig {
        BlurConfig {
            kernel_size: 5,
            sigma: 1.0,
            output_dir: dir.to_path_buf(),
            ..Default::default()
        }
    }

    #[test]
    fn constant_image_end_to_end() -> Result<(), ImageError> {
        let config = config_in(std::path::Path::new("."));
        let image = Image::<u8, 1>::from_size_val([100, 100].into(), 200)?;
        let kernel = build_kernel(&config)?;

        let (result, _) = timed_convolution(&image, &kernel)?;
        assert_eq!(result.size(), image.size());
        for y in 2..98 {
            for x in 2..98 {
                assert_eq!(result.get_pixel(x, y, 0)?, &200);
            }
        }
        Ok(())
    }

    #[test]
    fn report_mentions_sizes() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::from_size_val([640, 480].into(), 0)?;
        let kernel = kernels::gaussian_kernel_2d(35, 4.0)?;
        let line = report_line(&image, &kernel, Duration::from_millis(250));
        assert_eq!(
            line,
            "Computing the convolution of an image with a resolution of 640 by 480 and a kernel size of 35 by 35 took 0.25 seconds."
        );
        Ok(())
    }

    #[test]
    fn title_and_filename_use_effective_sigma() {
        let config = BlurConfig::default();
        assert_eq!(kernel_title(&config), "35 by 35 Gaussian kernel (sigma=4)");
        assert_eq!(
            output_filename(35, 4.0, "png"),
            "filtered_with_35x35_gauss_kernel_with_sigma_4.png"
        );

        let derived = BlurConfig {
            kernel_size: 3,
            sigma: 0.0,
            ..Default::default()
        };
        assert_eq!(effective_sigma(&derived), 0.8);
    }

    #[test]
    fn derived_sigma_has_no_float_noise() {
        let derived = BlurConfig {
            kernel_size: 35,
            sigma: 0.0,
            ..Default::default()
        };
        assert_eq!(kernel_title(&derived), "35 by 35 Gaussian kernel (sigma=5.6)");
        assert_eq!(
            output_filename(35, effective_sigma(&derived), "png"),
            "filtered_with_35x35_gauss_kernel_with_sigma_5.6.png"
        );
        assert_eq!(
            output_filename(7, kernels::gaussian_sigma_from_size(7), "png"),
            "filtered_with_7x7_gauss_kernel_with_sigma_1.4.png"
        );
    }

    #[test]
    fn sigma_formatting() {
        assert_eq!(format_sigma(4.0), "4");
        assert_eq!(format_sigma(0.8), "0.8");
        assert_eq!(format_sigma(1.25), "1.25");
        assert_eq!(format_sigma(10.0), "10");
        assert_eq!(format_sigma(0.0), "0");
    }

    #[test]
    fn save_key_writes_named_file() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let config = config_in(tmp_dir.path());
        let result = Image::<u8, 1>::from_size_val([10, 10].into(), 100)?;

        let path = save_on_key(KeyPress::Char('s'), &config, &result)?;
        let path = path.ok_or("nothing was saved")?;
        assert!(path.exists());

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or("bad file name")?;
        assert!(name.contains("5x5"));
        assert!(name.contains("sigma_1"));
        assert_eq!(name, "filtered_with_5x5_gauss_kernel_with_sigma_1.png");

        let back = F::read_image_any_gray8(&path)?;
        assert_eq!(back, result);
        Ok(())
    }

    #[test]
    fn other_keys_write_nothing() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let config = config_in(tmp_dir.path());
        let result = Image::<u8, 1>::from_size_val([10, 10].into(), 100)?;

        for key in [KeyPress::Char('q'), KeyPress::Other, KeyPress::None] {
            assert_eq!(save_on_key(key, &config, &result)?, None);
        }
        assert_eq!(std::fs::read_dir(tmp_dir.path())?.count(), 0);
        Ok(())
    }
}
