use blurlab::{
    io::functional as F,
    viz::{
        kernel_view::show_kernel_image,
        surface_view::{show_kernel_surface, SurfaceOptions},
        viewer::{show_images, ViewerOptions},
    },
};

mod config;
mod pipeline;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: config::Args = argh::from_env();
    let config = args.into_config();
    log::debug!("{:?}", config);

    // read the image
    let image = F::read_image_any_gray8(&config.image_path)?;

    // build the kernel
    let kernel = pipeline::build_kernel(&config)?;

    if config.show_kernel_image {
        show_kernel_image(&kernel)?;
    }

    // blocks until the plot window is closed
    show_kernel_surface(
        &kernel,
        &SurfaceOptions {
            title: pipeline::kernel_title(&config),
            z_factor: config.z_factor,
            ..Default::default()
        },
    )?;

    let (result, elapsed) = pipeline::timed_convolution(&image, &kernel)?;
    println!("{}", pipeline::report_line(&image, &kernel, elapsed));

    // blocks until a key is pressed or the windows are closed
    let key = show_images(&image, &result, &ViewerOptions::default())?;

    if let Some(path) = pipeline::save_on_key(key, &config, &result)? {
        log::info!("saved filtered image to {}", path.display());
    }

    Ok(())
}
