use blurlab_imgproc::filter::Kernel2d;
use eframe::egui;

use crate::colormap::cividis;
use crate::error::VizError;
use crate::surface::{Camera, SurfaceMesh};

/// Options for [`show_kernel_surface`].
#[derive(Clone, Debug)]
pub struct SurfaceOptions {
    /// Window and plot title.
    pub title: String,
    /// Top of the displayed height range.
    pub z_factor: f32,
    /// Number of labelled ticks on the height axis, not counting zero.
    pub z_ticks: usize,
    /// Initial window size in points.
    pub window_size: [f32; 2],
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        Self {
            title: "Kernel".to_string(),
            z_factor: 100.0,
            z_ticks: 5,
            window_size: [640.0, 480.0],
        }
    }
}

struct SurfaceApp {
    mesh: SurfaceMesh,
    camera: Camera,
    options: SurfaceOptions,
}

impl SurfaceApp {
    fn paint(&self, painter: &egui::Painter, rect: egui::Rect) {
        let quads = self.mesh.project(&self.camera);

        // axis endpoints at the grid origin corner
        let z_max = self.mesh.z_factor();
        let axis_bottom = self.camera.project(self.mesh.to_box(0.0, 0.0, 0.0)).0;
        let axis_top = self.camera.project(self.mesh.to_box(0.0, 0.0, z_max)).0;

        // fit the projected geometry into the panel
        let mut bounds = egui::Rect::NOTHING;
        for p in quads
            .iter()
            .flat_map(|q| q.corners.iter())
            .chain([&axis_bottom, &axis_top])
        {
            bounds.extend_with(egui::pos2(p[0], p[1]));
        }
        if !bounds.is_positive() {
            return;
        }

        let inner = rect.shrink(48.0);
        let scale = (inner.width() / bounds.width()).min(inner.height() / bounds.height());
        let to_screen = |p: &[f32; 2]| {
            egui::pos2(
                inner.center().x + (p[0] - bounds.center().x) * scale,
                inner.center().y - (p[1] - bounds.center().y) * scale,
            )
        };

        let axis_stroke = egui::Stroke::new(1.0, egui::Color32::GRAY);
        painter.line_segment([to_screen(&axis_bottom), to_screen(&axis_top)], axis_stroke);
        for i in 0..=self.options.z_ticks {
            let z = z_max * i as f32 / self.options.z_ticks.max(1) as f32;
            let tick = to_screen(&self.camera.project(self.mesh.to_box(0.0, 0.0, z)).0);
            painter.line_segment([tick, tick - egui::vec2(6.0, 0.0)], axis_stroke);
            painter.text(
                tick - egui::vec2(8.0, 0.0),
                egui::Align2::RIGHT_CENTER,
                format!("{:.2}", z),
                egui::FontId::monospace(10.0),
                egui::Color32::GRAY,
            );
        }

        for quad in quads.iter() {
            let [r, g, b] = cividis(quad.level);
            painter.add(egui::Shape::convex_polygon(
                quad.corners.iter().map(to_screen).collect(),
                egui::Color32::from_rgb(r, g, b),
                egui::Stroke::NONE,
            ));
        }
    }
}

impl eframe::App for SurfaceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| ui.heading(&self.options.title));

            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::drag());
            if response.dragged() {
                let delta = response.drag_delta();
                self.camera.orbit(-delta.x * 0.5, delta.y * 0.5);
            }
            self.paint(&painter, response.rect);
        });
    }
}

/// Show a kernel as a 3D surface in a blocking window.
///
/// The weights are rescaled to `[0, z_factor]` for display only. Dragging rotates the
/// view. Returns once the window is closed.
pub fn show_kernel_surface(kernel: &Kernel2d, options: &SurfaceOptions) -> Result<(), VizError> {
    let app = SurfaceApp {
        mesh: SurfaceMesh::from_kernel(kernel, options.z_factor),
        camera: Camera::default(),
        options: options.clone(),
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&options.title)
            .with_inner_size(options.window_size)
            .with_resizable(true),
        ..Default::default()
    };

    log::debug!("opening kernel surface window: {}", options.title);
    eframe::run_native(
        &options.title,
        native_options,
        Box::new(|_cc| Ok(Box::new(app))),
    )?;
    log::debug!("kernel surface window closed");

    Ok(())
}
