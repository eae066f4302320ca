use crate::{
	algorithms,
	colorspace::{Srgb, YCbCr},
};

use super::Image;

impl From<Image<u8, Srgb>> for Image<u8, YCbCr> {
	fn from(mut value: Image<u8, Srgb>) -> Self {
		value.data.chunks_mut(3).for_each(|rgb| {
			let (y, cb, cr) = algorithms::pixel_rgb_to_ycbcr(rgb[0], rgb[1], rgb[2]);
			rgb[0] = y;
			rgb[1] = cb;
			rgb[2] = cr;
		});

		value.change_colorspace(None)
	}
}

impl From<Image<u8, YCbCr>> for Image<u8, Srgb> {
	fn from(mut value: Image<u8, YCbCr>) -> Self {
		value.data.chunks_mut(3).for_each(|ycc| {
			let (r, g, b) = algorithms::pixel_ycbcr_to_rgb(ycc[0], ycc[1], ycc[2]);
			ycc[0] = r;
			ycc[1] = g;
			ycc[2] = b;
		});

		value.change_colorspace(None)
	}
}
