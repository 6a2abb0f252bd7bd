#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use blurlab_image as image;

#[doc(inline)]
pub use blurlab_imgproc as imgproc;

#[doc(inline)]
pub use blurlab_io as io;

#[doc(inline)]
pub use blurlab_viz as viz;
