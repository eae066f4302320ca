use crate::{colorspace::YCbCr, image::Image, Error};

/// One bin per possible luma value
pub const BINS: usize = 256;

pub type Pmf = [f32; BINS];
pub type Cdf = [f32; BINS];

#[derive(Clone, Debug)]
pub struct Histogram {
	counts: [u32; BINS],
}

impl Histogram {
	/// Count how often each luma value occurs. One linear pass over the
	/// buffer; the buffer itself is left alone.
	pub fn build(image: &Image<u8, YCbCr>) -> Self {
		let mut counts = [0u32; BINS];
		for ycc in image.data.chunks_exact(3) {
			counts[ycc[0] as usize] += 1;
		}

		Histogram { counts }
	}

	pub fn count(&self, luma: u8) -> u32 {
		self.counts[luma as usize]
	}

	/// Every pixel lands in exactly one bin, so this is the pixel count
	pub fn total(&self) -> u64 {
		self.counts.iter().map(|&c| c as u64).sum()
	}

	/// Probability mass function: each bin divided by the total count.
	/// An empty histogram has nothing to divide by and comes back as
	/// [Error::DivideByZero].
	pub fn pmf(&self) -> Result<Pmf, Error> {
		let total = self.total();
		if total == 0 {
			return Err(Error::DivideByZero);
		}

		let mut pmf = [0f32; BINS];
		for (probability, &count) in pmf.iter_mut().zip(self.counts.iter()) {
			*probability = count as f32 / total as f32;
		}

		Ok(pmf)
	}
}

/// Cumulative distribution: a running sum over the PMF. Never decreases,
/// and the last element lands on 1.0 give or take float error.
pub fn cdf(pmf: &Pmf) -> Cdf {
	let mut cdf = *pmf;
	for i in 1..BINS {
		cdf[i] += cdf[i - 1];
	}

	cdf
}
