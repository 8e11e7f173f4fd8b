#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use imwarp_image as image;

#[doc(inline)]
pub use imwarp_imgproc as imgproc;

#[doc(inline)]
pub use imwarp_linalg as linalg;
