use blurlab_image::Image;
use eframe::egui;

/// Upload a grayscale image as a texture.
pub(crate) fn load_gray_texture(
    ctx: &egui::Context,
    name: &str,
    image: &Image<u8, 1>,
    options: egui::TextureOptions,
) -> egui::TextureHandle {
    let color_image = egui::ColorImage::from_gray([image.cols(), image.rows()], image.as_slice());
    ctx.load_texture(name, color_image, options)
}

/// Show a texture scaled to the available space, keeping its aspect ratio.
pub(crate) fn show_fitted(ui: &mut egui::Ui, texture: &egui::TextureHandle) {
    ui.centered_and_justified(|ui| {
        ui.add(egui::Image::new(texture).shrink_to_fit());
    });
}
