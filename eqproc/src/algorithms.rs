use nalgebra::{Matrix3, Matrix3x1};

// ITU-R BT.601, full range. The same weights PIL uses for its "YCbCr"
// mode, so luma bins line up with what other tooling reports.
// https://en.wikipedia.org/wiki/YCbCr#JPEG_conversion
#[rustfmt::skip]
pub const RGB_TO_YCBCR: Matrix3<f32> = Matrix3::new(
	 0.299,     0.587,     0.114,
	-0.168736, -0.331264,  0.5,
	 0.5,      -0.418688, -0.081312,
);

#[rustfmt::skip]
pub const YCBCR_TO_RGB: Matrix3<f32> = Matrix3::new(
	1.0,  0.0,       1.402,
	1.0, -0.344136, -0.714136,
	1.0,  1.772,     0.0,
);

#[inline]
pub fn pixel_rgb_to_ycbcr(r: u8, g: u8, b: u8) -> (u8, u8, u8) {
	let ycc = RGB_TO_YCBCR * Matrix3x1::new(r as f32, g as f32, b as f32);

	// Chroma is signed around zero; shift it into byte range
	(
		round_u8(ycc[0]),
		round_u8(ycc[1] + 128.0),
		round_u8(ycc[2] + 128.0),
	)
}

#[inline]
pub fn pixel_ycbcr_to_rgb(y: u8, cb: u8, cr: u8) -> (u8, u8, u8) {
	let rgb = YCBCR_TO_RGB
		* Matrix3x1::new(y as f32, cb as f32 - 128.0, cr as f32 - 128.0);

	(round_u8(rgb[0]), round_u8(rgb[1]), round_u8(rgb[2]))
}

#[inline]
fn round_u8(value: f32) -> u8 {
	value.round().clamp(0.0, 255.0) as u8
}
