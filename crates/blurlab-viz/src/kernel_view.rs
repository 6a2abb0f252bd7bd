use std::{cell::Cell, rc::Rc};

use blurlab_imgproc::{filter::Kernel2d, normalize::kernel_to_gray8};
use eframe::egui;

use crate::error::VizError;
use crate::keyboard::{poll_key_press, KeyPress};
use crate::texture::{load_gray_texture, show_fitted};

struct KernelImageApp {
    image: blurlab_image::Image<u8, 1>,
    texture: Option<egui::TextureHandle>,
    key: Rc<Cell<KeyPress>>,
}

impl eframe::App for KernelImageApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(press) = poll_key_press(ctx) {
            self.key.set(press);
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        let texture = self.texture.get_or_insert_with(|| {
            load_gray_texture(ctx, "kernel", &self.image, egui::TextureOptions::NEAREST)
        });

        egui::CentralPanel::default().show(ctx, |ui| show_fitted(ui, texture));
    }
}

/// Show a kernel as a grayscale heat map in a blocking 300x300 window.
///
/// The weights are min-max stretched to `0..=255`. Returns the key that closed the
/// window, or [`KeyPress::None`] if it was closed directly.
pub fn show_kernel_image(kernel: &Kernel2d) -> Result<KeyPress, VizError> {
    let title = "Kernel";
    let key = Rc::new(Cell::new(KeyPress::None));

    let app = KernelImageApp {
        image: kernel_to_gray8(kernel)?,
        texture: None,
        key: key.clone(),
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title)
            .with_inner_size([300.0, 300.0])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(title, native_options, Box::new(|_cc| Ok(Box::new(app))))?;

    Ok(key.get())
}
