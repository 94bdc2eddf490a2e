//! Filter operations
//!
//! Three strategies for applying a Gaussian blur to a single-channel image:
//!
//! - [`convolve_spatial`] - direct sliding-window convolution, O(W·H·k²),
//!   replicate-edge boundaries; the reference semantics.
//! - [`convolve_separable`] - two 1-D passes, O(W·H·k), replicate-edge
//!   boundaries; algebraically identical to the spatial result because an
//!   isotropic Gaussian factors into an outer product of two 1-D Gaussians.
//! - [`convolve_fft`] - frequency-domain convolution, O(W·H·log(W·H)),
//!   circular boundaries; a stated approximation of the reference, valid
//!   while the kernel support is small relative to the image.

/// Filter kernels
pub mod kernels;

/// Direct spatial convolution
mod convolution;
pub use convolution::*;

/// Separable convolution
mod separable;
pub use separable::*;

/// Frequency-domain convolution
mod fft;
pub use fft::*;

pub use kernels::{gaussian_kernel_1d, gaussian_kernel_2d, Kernel1d, Kernel2d};
