use std::{cell::Cell, rc::Rc};

use blurlab_image::{Image, ImageError};
use eframe::egui;

use crate::error::VizError;
use crate::keyboard::{poll_key_press, KeyPress};
use crate::texture::{load_gray_texture, show_fitted};

/// Options for [`show_images`].
#[derive(Clone, Debug)]
pub struct ViewerOptions {
    /// Title of the window holding the original image.
    pub original_title: String,
    /// Title of the window holding the filtered image.
    pub result_title: String,
    /// Largest initial window side in points, larger images are shown scaled down.
    pub max_window_side: f32,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            original_title: "Original image".to_string(),
            result_title: "Resulting image".to_string(),
            max_window_side: 1024.0,
        }
    }
}

impl ViewerOptions {
    /// Initial window size for an image, scaled down to fit `max_window_side`.
    pub fn window_size(&self, image: &Image<u8, 1>) -> [f32; 2] {
        let (w, h) = (image.width() as f32, image.height() as f32);
        let scale = (self.max_window_side / w.max(h).max(1.0)).min(1.0);
        [w * scale, h * scale]
    }
}

struct ImageViewerApp {
    original: Image<u8, 1>,
    result: Image<u8, 1>,
    textures: Option<(egui::TextureHandle, egui::TextureHandle)>,
    options: ViewerOptions,
    key: Rc<Cell<KeyPress>>,
}

impl ImageViewerApp {
    fn finish(&self, ctx: &egui::Context, press: KeyPress) {
        self.key.set(press);
        ctx.send_viewport_cmd_to(egui::ViewportId::ROOT, egui::ViewportCommand::Close);
    }
}

impl eframe::App for ImageViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(press) = poll_key_press(ctx) {
            self.finish(ctx, press);
        }

        let (original, result) = self.textures.get_or_insert_with(|| {
            let options = egui::TextureOptions::LINEAR;
            (
                load_gray_texture(ctx, "original", &self.original, options),
                load_gray_texture(ctx, "result", &self.result, options),
            )
        });
        let (original, result) = (original.clone(), result.clone());

        egui::CentralPanel::default().show(ctx, |ui| show_fitted(ui, &original));

        let builder = egui::ViewportBuilder::default()
            .with_title(&self.options.result_title)
            .with_inner_size(self.options.window_size(&self.result))
            .with_resizable(true);

        ctx.show_viewport_immediate(
            egui::ViewportId::from_hash_of("result"),
            builder,
            |ctx, _class| {
                egui::CentralPanel::default().show(ctx, |ui| show_fitted(ui, &result));

                if let Some(press) = poll_key_press(ctx) {
                    self.finish(ctx, press);
                }
                if ctx.input(|i| i.viewport().close_requested()) {
                    self.finish(ctx, KeyPress::None);
                }
            },
        );
    }
}

/// Show the original and filtered images side by side in two blocking windows.
///
/// Waits for the first key press in either window, then closes both. Closing a window
/// without pressing a key returns [`KeyPress::None`].
pub fn show_images(
    original: &Image<u8, 1>,
    result: &Image<u8, 1>,
    options: &ViewerOptions,
) -> Result<KeyPress, VizError> {
    if original.size() != result.size() {
        return Err(ImageError::InvalidImageSize(
            original.width(),
            original.height(),
            result.width(),
            result.height(),
        )
        .into());
    }

    let key = Rc::new(Cell::new(KeyPress::None));

    let app = ImageViewerApp {
        original: original.clone(),
        result: result.clone(),
        textures: None,
        options: options.clone(),
        key: key.clone(),
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&options.original_title)
            .with_inner_size(options.window_size(original))
            .with_resizable(true),
        ..Default::default()
    };

    log::debug!("waiting for a key on the image windows");
    eframe::run_native(
        &options.original_title,
        native_options,
        Box::new(|_cc| Ok(Box::new(app))),
    )?;

    Ok(key.get())
}
