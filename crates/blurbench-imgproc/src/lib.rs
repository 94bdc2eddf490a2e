#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// image filtering module.
pub mod filter;

/// image comparison metrics module.
pub mod metrics;

/// module containing parallelization utilities.
pub mod parallel;

/// synthetic test image generation module.
pub mod synthetic;
