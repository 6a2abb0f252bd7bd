//! Height field geometry for drawing a kernel as a 3D surface.
//!
//! The surface lives in a box of `[0, 1] x [0, 1] x [0, Z_ASPECT]` (columns, rows,
//! height) and is projected orthographically by a [`Camera`]. Quads come out sorted
//! back to front so they can be painted in order.

use blurlab_imgproc::{filter::Kernel2d, normalize::normalize_min_max};

/// Height of the box relative to its sides.
pub const Z_ASPECT: f32 = 0.75;

/// An orthographic camera orbiting the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    /// Rotation around the vertical axis, in degrees.
    pub azimuth_deg: f32,
    /// Angle above the base plane, in degrees.
    pub elevation_deg: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            azimuth_deg: -60.0,
            elevation_deg: 30.0,
        }
    }
}

impl Camera {
    /// Rotate the camera, keeping the elevation within `[-90, 90]`.
    pub fn orbit(&mut self, d_azimuth_deg: f32, d_elevation_deg: f32) {
        self.azimuth_deg = (self.azimuth_deg + d_azimuth_deg) % 360.0;
        self.elevation_deg = (self.elevation_deg + d_elevation_deg).clamp(-90.0, 90.0);
    }

    /// Project a point of the box into the screen plane.
    ///
    /// Returns `([x, y], depth)` with `y` pointing up and larger depth closer to the eye.
    pub fn project(&self, p: [f32; 3]) -> ([f32; 2], f32) {
        let (sa, ca) = self.azimuth_deg.to_radians().sin_cos();
        let (se, ce) = self.elevation_deg.to_radians().sin_cos();

        // center the box on the orbit axis
        let (x, y, z) = (p[0] - 0.5, p[1] - 0.5, p[2] - Z_ASPECT * 0.5);

        let sx = -sa * x + ca * y;
        let sy = -se * ca * x - se * sa * y + ce * z;
        let depth = ce * ca * x + ce * sa * y + se * z;
        ([sx, sy], depth)
    }
}

/// A surface cell projected to the screen.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectedQuad {
    /// Screen corners in winding order.
    pub corners: [[f32; 2]; 4],
    /// Mean depth of the corners, larger is closer.
    pub depth: f32,
    /// Mean height of the corners in `[0, 1]`, used for coloring.
    pub level: f32,
}

/// A kernel turned into a height field for display.
#[derive(Clone, Debug)]
pub struct SurfaceMesh {
    rows: usize,
    cols: usize,
    heights: Vec<f32>,
    z_factor: f32,
}

impl SurfaceMesh {
    /// Build a height field from a kernel, rescaling the weights to `[0, z_factor]`.
    ///
    /// The kernel itself is left untouched.
    pub fn from_kernel(kernel: &Kernel2d, z_factor: f32) -> Self {
        Self {
            rows: kernel.rows(),
            cols: kernel.cols(),
            heights: normalize_min_max(kernel.as_slice(), 0.0, z_factor),
            z_factor,
        }
    }

    /// Number of grid rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of grid columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The top of the height range.
    pub fn z_factor(&self) -> f32 {
        self.z_factor
    }

    /// The rescaled height at `(row, col)`.
    pub fn height(&self, row: usize, col: usize) -> Option<f32> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.heights.get(row * self.cols + col).copied()
    }

    /// Map a grid position and a height in `[0, z_factor]` into the unit box.
    pub fn to_box(&self, row: f32, col: f32, height: f32) -> [f32; 3] {
        let unit = |v: f32, n: usize| if n > 1 { v / (n - 1) as f32 } else { 0.5 };
        let z = if self.z_factor > 0.0 {
            height / self.z_factor * Z_ASPECT
        } else {
            0.0
        };
        [unit(col, self.cols), unit(row, self.rows), z]
    }

    /// Project every grid cell, sorted back to front.
    pub fn project(&self, camera: &Camera) -> Vec<ProjectedQuad> {
        if self.rows < 2 || self.cols < 2 {
            return Vec::new();
        }

        let mut quads = Vec::with_capacity((self.rows - 1) * (self.cols - 1));
        for r in 0..self.rows - 1 {
            for c in 0..self.cols - 1 {
                let cell = [(r, c), (r, c + 1), (r + 1, c + 1), (r + 1, c)];

                let mut corners = [[0.0; 2]; 4];
                let mut depth = 0.0;
                let mut level = 0.0;
                for (corner, &(row, col)) in corners.iter_mut().zip(cell.iter()) {
                    let h = self.heights[row * self.cols + col];
                    let (p, d) = camera.project(self.to_box(row as f32, col as f32, h));
                    *corner = p;
                    depth += d / 4.0;
                    level += h / 4.0;
                }

                let level = if self.z_factor > 0.0 {
                    (level / self.z_factor).clamp(0.0, 1.0)
                } else {
                    0.0
                };

                quads.push(ProjectedQuad {
                    corners,
                    depth,
                    level,
                });
            }
        }

        quads.sort_by(|a, b| a.depth.total_cmp(&b.depth));
        quads
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use blurlab_imgproc::filter::kernels::gaussian_kernel_2d;

    #[test]
    fn mesh_from_gaussian() -> Result<(), blurlab_image::ImageError> {
        let kernel = gaussian_kernel_2d(5, 1.0)?;
        let mesh = SurfaceMesh::from_kernel(&kernel, 100.0);

        assert_eq!(mesh.rows(), 5);
        assert_eq!(mesh.cols(), 5);
        assert_relative_eq!(mesh.height(2, 2).unwrap_or(0.0), 100.0, epsilon = 1e-3);
        assert_eq!(mesh.height(0, 0), Some(0.0));
        assert_eq!(mesh.height(5, 0), None);

        // display rescaling leaves the weights alone
        assert_relative_eq!(kernel.sum(), 1.0, epsilon = 1e-5);
        Ok(())
    }

    #[test]
    fn quads_are_back_to_front() -> Result<(), blurlab_image::ImageError> {
        let kernel = gaussian_kernel_2d(7, 1.5)?;
        let mesh = SurfaceMesh::from_kernel(&kernel, 100.0);
        let quads = mesh.project(&Camera::default());

        assert_eq!(quads.len(), 36);
        assert!(quads.windows(2).all(|w| w[0].depth <= w[1].depth));
        assert!(quads.iter().all(|q| (0.0..=1.0).contains(&q.level)));

        // the four cells around the peak are the highest ones
        let top = quads.iter().map(|q| q.level).fold(0.0, f32::max);
        let peak_cells = quads.iter().filter(|q| q.level > top - 1e-4).count();
        assert_eq!(peak_cells, 4);
        Ok(())
    }

    #[test]
    fn top_view_ignores_height() {
        let camera = Camera {
            azimuth_deg: 0.0,
            elevation_deg: 90.0,
        };
        let (low, _) = camera.project([0.2, 0.7, 0.0]);
        let (high, _) = camera.project([0.2, 0.7, Z_ASPECT]);
        assert_relative_eq!(low[0], high[0], epsilon = 1e-6);
        assert_relative_eq!(low[1], high[1], epsilon = 1e-6);
    }

    #[test]
    fn orbit_clamps_elevation() {
        let mut camera = Camera::default();
        camera.orbit(30.0, 100.0);
        assert_relative_eq!(camera.azimuth_deg, -30.0);
        assert_relative_eq!(camera.elevation_deg, 90.0);
    }

    #[test]
    fn single_weight_kernel_has_no_cells() -> Result<(), blurlab_image::ImageError> {
        let kernel = gaussian_kernel_2d(1, 1.0)?;
        let mesh = SurfaceMesh::from_kernel(&kernel, 100.0);
        assert!(mesh.project(&Camera::default()).is_empty());
        Ok(())
    }
}
