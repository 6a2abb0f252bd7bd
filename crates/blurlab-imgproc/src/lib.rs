#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// border handling for out-of-image samples.
pub mod border;

/// image filtering module.
pub mod filter;

/// image flipping module.
pub mod flip;

/// operations to normalize values for display.
pub mod normalize;

/// module containing parallelization utilities.
pub mod parallel;
