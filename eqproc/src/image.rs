mod ycbcr;

use std::marker::PhantomData;

use crate::colorspace::Colorspace;

#[derive(Clone, Debug)]
pub struct Image<T: Copy + Clone, C: Colorspace> {
	pub width: usize,
	pub height: usize,

	pub data: Vec<T>,
	pub(crate) phantom: PhantomData<C>,
}

impl<T: Copy + Clone, C: Colorspace> Image<T, C> {
	/// Make an image from a flat, interleaved buffer. Panics if the data
	/// length does not agree with the dimensions.
	pub fn from_raw_parts(width: usize, height: usize, data: Vec<T>) -> Image<T, C> {
		if data.len() != width * height * C::COMPONENTS {
			panic!(
				"image is {width}x{height} with {} components per pixel, but data len was {}",
				C::COMPONENTS,
				data.len()
			)
		}

		Image {
			width,
			height,
			data,
			phantom: Default::default(),
		}
	}

	pub fn pixel_count(&self) -> usize {
		self.width * self.height
	}

	pub(crate) fn change_colorspace<N: Colorspace>(self, data: Option<Vec<T>>) -> Image<T, N> {
		Image {
			width: self.width,
			height: self.height,
			data: data.unwrap_or(self.data),
			phantom: Default::default(),
		}
	}
}
