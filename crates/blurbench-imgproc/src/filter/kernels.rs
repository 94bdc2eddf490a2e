use blurbench_image::ImageError;
use std::f32::consts::PI;

/// A normalized 2-D Gaussian kernel.
///
/// Owns a `size * size` weight buffer in row-major order. The size is
/// always odd and the weights sum to 1 after normalization.
#[derive(Debug, Clone)]
pub struct Kernel2d {
    weights: Vec<f32>,
    size: usize,
    sigma: f32,
}

impl Kernel2d {
    /// Get the kernel side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the sigma the kernel was generated with.
    pub fn sigma(&self) -> f32 {
        self.sigma
    }

    /// Get the kernel weights as a row-major slice.
    pub fn as_slice(&self) -> &[f32] {
        &self.weights
    }
}

/// A normalized 1-D Gaussian kernel.
///
/// The separable factor of a [`Kernel2d`] built with the same size and
/// sigma; the 2-D kernel equals the outer product of this kernel with
/// itself.
#[derive(Debug, Clone)]
pub struct Kernel1d {
    weights: Vec<f32>,
    size: usize,
    sigma: f32,
}

impl Kernel1d {
    /// Get the kernel length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the sigma the kernel was generated with.
    pub fn sigma(&self) -> f32 {
        self.sigma
    }

    /// Get the kernel weights as a slice.
    pub fn as_slice(&self) -> &[f32] {
        &self.weights
    }
}

fn check_kernel_params(kernel_size: usize, sigma: f32) -> Result<(), ImageError> {
    if kernel_size == 0 || kernel_size % 2 == 0 {
        return Err(ImageError::InvalidKernelSize(kernel_size));
    }
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(ImageError::InvalidKernelSigma(sigma));
    }
    Ok(())
}

/// Create a 2-D gaussian blur kernel.
///
/// Each weight is `exp(-(dx² + dy²) / (2σ²))` scaled by the 2-D Gaussian
/// normalization constant, with `(dx, dy)` the offset from the kernel
/// center; the buffer is then divided by its sum so the weights total 1.
///
/// # Arguments
///
/// * `kernel_size` - The side length of the kernel, odd and non-zero.
/// * `sigma` - The sigma of the gaussian kernel, positive and finite.
///
/// # Errors
///
/// Returns an error for an even or zero size, or a non-positive sigma.
pub fn gaussian_kernel_2d(kernel_size: usize, sigma: f32) -> Result<Kernel2d, ImageError> {
    check_kernel_params(kernel_size, sigma)?;

    let mean = (kernel_size - 1) as f32 / 2.0;
    let sigma_sq = sigma * sigma;
    let coeff = 1.0 / (2.0 * PI * sigma_sq);

    let mut weights = Vec::with_capacity(kernel_size * kernel_size);
    for y in 0..kernel_size {
        let dy = y as f32 - mean;
        for x in 0..kernel_size {
            let dx = x as f32 - mean;
            weights.push(coeff * (-(dx * dx + dy * dy) / (2.0 * sigma_sq)).exp());
        }
    }

    // normalize the kernel
    let norm = weights.iter().sum::<f32>();
    weights.iter_mut().for_each(|w| *w /= norm);

    Ok(Kernel2d {
        weights,
        size: kernel_size,
        sigma,
    })
}

/// Create a 1-D gaussian blur kernel.
///
/// Same exponential form as [`gaussian_kernel_2d`] in one dimension,
/// normalized to sum to 1.
///
/// # Arguments
///
/// * `kernel_size` - The length of the kernel, odd and non-zero.
/// * `sigma` - The sigma of the gaussian kernel, positive and finite.
///
/// # Errors
///
/// Returns an error for an even or zero size, or a non-positive sigma.
pub fn gaussian_kernel_1d(kernel_size: usize, sigma: f32) -> Result<Kernel1d, ImageError> {
    check_kernel_params(kernel_size, sigma)?;

    let mean = (kernel_size - 1) as f32 / 2.0;
    let sigma_sq = sigma * sigma;

    let mut weights = Vec::with_capacity(kernel_size);
    for i in 0..kernel_size {
        let x = i as f32 - mean;
        weights.push((-(x * x) / (2.0 * sigma_sq)).exp());
    }

    // normalize the kernel
    let norm = weights.iter().sum::<f32>();
    weights.iter_mut().for_each(|w| *w /= norm);

    Ok(Kernel1d {
        weights,
        size: kernel_size,
        sigma,
    })
}
