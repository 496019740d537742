#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use planar_image as image;

#[doc(inline)]
pub use planar_imgproc as imgproc;

#[doc(inline)]
pub use planar_transform as transform;
