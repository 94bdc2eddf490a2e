#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use blurbench_image as image;

#[doc(inline)]
pub use blurbench_imgproc as imgproc;
