use crate::{
	colorspace::{Srgb, YCbCr},
	histogram::{cdf, Cdf, Histogram, BINS},
	image::Image,
	Error,
};

/// Build the luma remap table from a CDF: entry i is floor(cdf[i] * 255).
///
/// The clamp only absorbs float error at the top end. When the CDF sums a
/// hair under 1.0 the last entry can come out 254, and it stays 254.
pub fn remap_table(cdf: &Cdf) -> [u8; BINS] {
	let mut table = [0u8; BINS];
	for (entry, &cumulative) in table.iter_mut().zip(cdf.iter()) {
		*entry = (cumulative * (BINS - 1) as f32).floor().clamp(0.0, 255.0) as u8;
	}

	table
}

/// Push every pixel's luma through the table. Chroma passes through.
pub fn apply_table(image: &mut Image<u8, YCbCr>, table: &[u8; BINS]) {
	for ycc in image.data.chunks_exact_mut(3) {
		ycc[0] = table[ycc[0] as usize];
	}
}

/// Equalize the luma histogram of an image.
///
/// Converts to YCbCr, remaps every luma value through the cumulative
/// distribution of the image's own luma histogram, and converts back.
/// Common luma values get spread apart and the image gains contrast.
///
/// A zero-pixel buffer comes back as [Error::EmptyImage] before any
/// pixel is touched.
pub fn equalize(image: Image<u8, Srgb>) -> Result<Image<u8, Srgb>, Error> {
	if image.pixel_count() == 0 {
		return Err(Error::EmptyImage);
	}

	let mut ycc: Image<u8, YCbCr> = image.into();

	let histogram = Histogram::build(&ycc);
	let table = remap_table(&cdf(&histogram.pmf()?));
	apply_table(&mut ycc, &table);

	Ok(ycc.into())
}

#[cfg(test)]
mod tests {
	use crate::colorspace::{Srgb, YCbCr};
	use crate::histogram::{cdf, Histogram, BINS};
	use crate::image::Image;
	use crate::Error;

	use super::{apply_table, equalize, remap_table};

	fn luma_image(width: usize, height: usize, lumas: &[u8]) -> Image<u8, YCbCr> {
		let data = lumas.iter().flat_map(|&y| [y, 128, 128]).collect();
		Image::from_raw_parts(width, height, data)
	}

	fn table_for(image: &Image<u8, YCbCr>) -> [u8; BINS] {
		remap_table(&cdf(&Histogram::build(image).pmf().unwrap()))
	}

	#[test]
	fn table_is_monotone_and_in_range() {
		let image = luma_image(7, 1, &[0, 3, 3, 90, 200, 254, 255]);
		let table = table_for(&image);

		for i in 1..BINS {
			assert!(table[i] >= table[i - 1], "table dipped at entry {i}");
		}
	}

	// Two black and two white pixels. Half the mass sits at luma 0, so
	// black maps to floor(0.5 * 255) = 127 and white stays put
	#[test]
	fn two_by_two_black_and_white() {
		let mut image = luma_image(2, 2, &[0, 0, 255, 255]);
		let table = table_for(&image);

		assert_eq!(table[0], 127);
		assert_eq!(table[255], 255);

		apply_table(&mut image, &table);
		let lumas: Vec<u8> = image.data.chunks_exact(3).map(|ycc| ycc[0]).collect();
		assert_eq!(lumas, vec![127, 127, 255, 255]);
	}

	// A lone pixel holds all the mass, so its luma maps to full white
	#[test]
	fn single_pixel_goes_white() {
		let mut image = luma_image(1, 1, &[100]);
		let table = table_for(&image);

		assert_eq!(table[100], 255);

		apply_table(&mut image, &table);
		assert_eq!(image.data, vec![255, 128, 128]);
	}

	// One pixel in every bin. The CDF is (i+1)/256, so the table is
	// floor(255 * (i+1) / 256), which works out to the identity. An
	// already uniform histogram is left alone
	#[test]
	fn uniform_histogram_maps_to_identity() {
		let lumas: Vec<u8> = (0..=255).collect();
		let image = luma_image(256, 1, &lumas);
		let table = table_for(&image);

		for i in 0..BINS {
			assert_eq!(table[i] as usize, (255 * (i + 1)) / 256);
			assert_eq!(table[i] as usize, i);
		}
	}

	#[test]
	fn chroma_passes_through() {
		let data = vec![40, 90, 200, 220, 13, 77];
		let mut image: Image<u8, YCbCr> = Image::from_raw_parts(2, 1, data);
		let table = table_for(&image);

		apply_table(&mut image, &table);
		assert_eq!(&image.data[1..3], &[90, 200]);
		assert_eq!(&image.data[4..6], &[13, 77]);
	}

	#[test]
	fn empty_image_is_rejected() {
		let image: Image<u8, Srgb> = Image::from_raw_parts(0, 0, vec![]);

		assert!(matches!(equalize(image), Err(Error::EmptyImage)));
	}

	// End to end over RGB. Gray pixels have chroma at the midpoint, so
	// the remapped luma is the gray level we get back out
	#[test]
	fn equalize_spreads_a_gray_ramp() {
		let data = [10u8, 10, 10, 10, 20, 20].iter().flat_map(|&v| [v, v, v]).collect();
		let image: Image<u8, Srgb> = Image::from_raw_parts(3, 2, data);

		let equalized = equalize(image).unwrap();

		// Four pixels at luma 10 carry 2/3 of the mass, two at luma 20
		// carry the rest. 255 * 2/3 = 170 exactly, floor(255 * 1) = 255
		let grays: Vec<u8> = equalized.data.chunks_exact(3).map(|rgb| rgb[0]).collect();
		assert_eq!(grays, vec![170, 170, 170, 170, 255, 255]);
		for rgb in equalized.data.chunks_exact(3) {
			assert_eq!(rgb[0], rgb[1]);
			assert_eq!(rgb[1], rgb[2]);
		}
	}
}
