use std::path::Path;

use eqproc::colorspace::Srgb;
use eqproc::image::Image;
use image::{ColorType, ImageError, ImageFormat};

/// Decode a file into an RGB8 buffer the engine can work on.
pub fn load(path: &Path) -> Result<Image<u8, Srgb>, ImageError> {
	let decoded = image::open(path)?.into_rgb8();
	let (width, height) = decoded.dimensions();

	Ok(Image::from_raw_parts(
		width as usize,
		height as usize,
		decoded.into_raw(),
	))
}

/// Encode a buffer back out in the requested format.
pub fn save(buffer: &Image<u8, Srgb>, path: &Path, format: ImageFormat) -> Result<(), ImageError> {
	image::save_buffer_with_format(
		path,
		&buffer.data,
		buffer.width as u32,
		buffer.height as u32,
		ColorType::Rgb8,
		format,
	)
}
