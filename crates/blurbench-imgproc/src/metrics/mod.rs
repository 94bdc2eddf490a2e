//! Image comparison metrics.
//!
//! This module provides functions for quantitatively comparing images,
//! used to measure how closely the separable and frequency-domain blur
//! results track the spatial reference.
//!
//! # Available Metrics
//!
//! - **L1 Loss**: Mean absolute difference between pixels
//! - **MSE** (Mean Squared Error): Average squared difference between pixels

mod l1;
mod mse;

pub use l1::l1_loss;
pub use mse::mse;
