use blurbench_image::{Image, ImageError};

/// Compute the L1 loss between two images.
///
/// The L1 loss is the mean of the absolute differences between the two
/// images:
///
/// $ L1(a, b) = \frac{1}{N} \sum_{i=1}^{N} |a_i - b_i| $
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
///
/// # Example
///
/// ```
/// use blurbench_image::{Image, ImageSize};
/// use blurbench_imgproc::metrics::l1_loss;
///
/// let image1 = Image::new(
///     ImageSize {
///         width: 2,
///         height: 3,
///     },
///     vec![0f32, 1f32, 2f32, 3f32, 4f32, 5f32],
/// )
/// .unwrap();
///
/// let image2 = Image::new(
///     ImageSize {
///         width: 2,
///         height: 3,
///     },
///     vec![5f32, 4f32, 3f32, 2f32, 1f32, 0f32],
/// )
/// .unwrap();
///
/// let l1 = l1_loss(&image1, &image2).unwrap();
/// assert_eq!(l1, 3.0);
/// ```
pub fn l1_loss(image1: &Image, image2: &Image) -> Result<f32, ImageError> {
    if image1.size() != image2.size() {
        return Err(ImageError::InvalidImageSize(
            image1.width(),
            image1.height(),
            image2.width(),
            image2.height(),
        ));
    }

    let l1 = image1
        .as_slice()
        .iter()
        .zip(image2.as_slice().iter())
        .fold(0f32, |acc, (&a, &b)| acc + (a - b).abs());

    Ok(l1 / (image1.numel() as f32))
}
