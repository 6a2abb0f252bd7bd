#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Colormaps for height fields.
pub mod colormap;

/// Error types for the viewer windows.
pub mod error;

/// Window showing a kernel as a grayscale heat map.
pub mod kernel_view;

/// Key press capture shared by the windows.
pub mod keyboard;

/// Height field geometry and projection.
pub mod surface;

/// Window showing a kernel as a 3D surface.
pub mod surface_view;

/// Windows showing the original and filtered images.
pub mod viewer;

mod texture;

pub use crate::error::VizError;
pub use crate::keyboard::KeyPress;
