use blurbench_image::{Image, ImageError};

/// Compute the mean squared error between two images.
///
/// $ MSE(a, b) = \frac{1}{N} \sum_{i=1}^{N} (a_i - b_i)^2 $
///
/// where `N` is the number of pixels.
///
/// # Arguments
///
/// * `image1` - The first input image.
/// * `image2` - The second input image.
///
/// # Errors
///
/// Returns an error if the two images have different sizes.
pub fn mse(image1: &Image, image2: &Image) -> Result<f32, ImageError> {
    if image1.size() != image2.size() {
        return Err(ImageError::InvalidImageSize(
            image1.width(),
            image1.height(),
            image2.width(),
            image2.height(),
        ));
    }

    let sq_sum = image1
        .as_slice()
        .iter()
        .zip(image2.as_slice().iter())
        .fold(0f32, |acc, (&a, &b)| acc + (a - b) * (a - b));

    Ok(sq_sum / (image1.numel() as f32))
}

#[cfg(test)]
mod tests {
    use blurbench_image::{Image, ImageError, ImageSize};

    #[test]
    fn test_mse() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 2,
            height: 2,
        };
        let image1 = Image::new(size, vec![0.0, 2.0, 4.0, 6.0])?;
        let image2 = Image::new(size, vec![1.0, 3.0, 5.0, 7.0])?;

        let mse = crate::metrics::mse(&image1, &image2)?;
        assert_eq!(mse, 1.0);

        let zero = crate::metrics::mse(&image1, &image1)?;
        assert_eq!(zero, 0.0);
        Ok(())
    }
}
