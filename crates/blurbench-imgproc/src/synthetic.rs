use blurbench_image::{Image, ImageError, ImageSize};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Generate a checkerboard image with additive uniform noise.
///
/// Blocks of `block_size x block_size` pixels alternate between `low` and
/// `high`; each pixel then receives uniform noise drawn from
/// `[-noise_amplitude, noise_amplitude)` using a seeded generator, so the
/// same seed always reproduces the same image. Pass a zero amplitude for a
/// clean checkerboard.
///
/// # Arguments
///
/// * `size` - The size of the generated image.
/// * `block_size` - The checkerboard block side length, non-zero.
/// * `low` - The value of even-parity blocks.
/// * `high` - The value of odd-parity blocks.
/// * `noise_amplitude` - The half-width of the uniform noise interval.
/// * `seed` - The noise generator seed.
pub fn checkerboard_with_noise(
    size: ImageSize,
    block_size: usize,
    low: f32,
    high: f32,
    noise_amplitude: f32,
    seed: u64,
) -> Result<Image, ImageError> {
    debug_assert!(block_size > 0, "block_size must be non-zero");

    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(size.width * size.height);

    for y in 0..size.height {
        for x in 0..size.width {
            let base = if (x / block_size + y / block_size) % 2 == 0 {
                low
            } else {
                high
            };
            let noise = if noise_amplitude > 0.0 {
                rng.random_range(-noise_amplitude..noise_amplitude)
            } else {
                0.0
            };
            data.push(base + noise);
        }
    }

    Image::new(size, data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkerboard_blocks() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 8,
            height: 8,
        };
        let img = checkerboard_with_noise(size, 4, 50.0, 200.0, 0.0, 0)?;

        let data = img.as_slice();
        assert_eq!(data[0], 50.0); // block (0, 0)
        assert_eq!(data[4], 200.0); // block (1, 0)
        assert_eq!(data[4 * 8], 200.0); // block (0, 1)
        assert_eq!(data[4 * 8 + 4], 50.0); // block (1, 1)
        Ok(())
    }

    #[test]
    fn test_noise_stays_in_range() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 32,
            height: 32,
        };
        let img = checkerboard_with_noise(size, 8, 50.0, 200.0, 25.0, 42)?;

        for &px in img.as_slice() {
            assert!((25.0..75.0).contains(&px) || (175.0..225.0).contains(&px));
        }
        Ok(())
    }

    #[test]
    fn test_same_seed_is_deterministic() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 16,
            height: 16,
        };
        let a = checkerboard_with_noise(size, 4, 50.0, 200.0, 25.0, 7)?;
        let b = checkerboard_with_noise(size, 4, 50.0, 200.0, 25.0, 7)?;
        let c = checkerboard_with_noise(size, 4, 50.0, 200.0, 25.0, 8)?;

        assert_eq!(a.as_slice(), b.as_slice());
        assert_ne!(a.as_slice(), c.as_slice());
        Ok(())
    }
}
