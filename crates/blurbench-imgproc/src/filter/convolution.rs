use blurbench_image::{Image, ImageError};
use rayon::prelude::*;

use super::kernels::Kernel2d;
use crate::parallel::ExecutionStrategy;

/// Apply a direct spatial convolution with execution strategy control.
///
/// For every output pixel the weighted sum over the `size x size`
/// neighborhood is accumulated, with each neighbor coordinate independently
/// clamped to the image bounds (replicate-edge boundary policy). This is
/// the reference semantics the separable and frequency-domain paths are
/// validated against.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `dst` - The destination image (must be same size as source).
/// * `kernel` - The 2-D gaussian kernel.
/// * `strategy` - Execution strategy: `Auto`, `Parallel`, or `Serial`.
pub fn convolve_spatial_with_strategy(
    src: &Image,
    dst: &mut Image,
    kernel: &Kernel2d,
    strategy: ExecutionStrategy,
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    let cols = src.width();
    let rows = src.height();
    if rows == 0 || cols == 0 {
        return Ok(());
    }

    let src_data = src.as_slice();
    let weights = kernel.as_slice();
    let ksize = kernel.size();
    let half = (ksize / 2) as isize;

    let convolve_row = |r: usize, dst_row: &mut [f32]| {
        for (c, dst_px) in dst_row.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for ky in 0..ksize {
                let y = (r as isize + ky as isize - half).clamp(0, rows as isize - 1) as usize;
                let row_offset = y * cols;
                for kx in 0..ksize {
                    let x = (c as isize + kx as isize - half).clamp(0, cols as isize - 1) as usize;
                    acc += src_data[row_offset + x] * weights[ky * ksize + kx];
                }
            }
            *dst_px = acc;
        }
    };

    if strategy.is_parallel(rows * cols) {
        dst.as_slice_mut()
            .par_chunks_mut(cols)
            .enumerate()
            .for_each(|(r, dst_row)| convolve_row(r, dst_row));
    } else {
        dst.as_slice_mut()
            .chunks_mut(cols)
            .enumerate()
            .for_each(|(r, dst_row)| convolve_row(r, dst_row));
    }

    Ok(())
}

/// Apply a direct spatial convolution to an image.
///
/// Uses [`ExecutionStrategy::Auto`]; for explicit control use
/// [`convolve_spatial_with_strategy`].
///
/// # Arguments
///
/// * `src` - The source image.
/// * `dst` - The destination image (must be same size as source).
/// * `kernel` - The 2-D gaussian kernel.
pub fn convolve_spatial(src: &Image, dst: &mut Image, kernel: &Kernel2d) -> Result<(), ImageError> {
    convolve_spatial_with_strategy(src, dst, kernel, ExecutionStrategy::Auto)
}
