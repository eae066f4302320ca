/*
We need to be able to represent:
- RGB as it comes out of a decoder
- Luma/chroma, where equalization happens
*/
pub trait Colorspace {
	/// Number of elements per pixel
	const COMPONENTS: usize;
}

/// Gamma-encoded RGB, the way PNG and JPEG hand it to us.
pub struct Srgb {}

impl Colorspace for Srgb {
	const COMPONENTS: usize = 3;
}

/// Luma/chroma. Y carries brightness, Cb and Cr carry colour difference.
pub struct YCbCr {}

impl Colorspace for YCbCr {
	const COMPONENTS: usize = 3;
}
