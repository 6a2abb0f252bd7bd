//! Filter operations
//!
//! This module provides the kernels and the 2D correlation/convolution routines.

/// Filter kernels
pub mod kernels;
pub use kernels::Kernel2d;

/// 2D correlation and convolution
mod convolution;
pub use convolution::*;
