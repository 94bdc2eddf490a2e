/// An error type shared by the image and imgproc crates.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when the pixel data length does not match the image dimensions.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidDataLength(usize, usize),

    /// Error when source and destination dimensions do not match.
    #[error("Image size mismatch: source is {0}x{1} but destination is {2}x{3}")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when the kernel size is even or zero.
    #[error("Kernel size must be odd and non-zero, got {0}")]
    InvalidKernelSize(usize),

    /// Error when the kernel sigma is non-positive or non-finite.
    #[error("Kernel sigma must be positive and finite, got {0}")]
    InvalidKernelSigma(f32),

    /// Error when the kernel does not fit inside the image.
    #[error("Kernel of size {0} does not fit in a {1}x{2} image")]
    KernelLargerThanImage(usize, usize, usize),
}
