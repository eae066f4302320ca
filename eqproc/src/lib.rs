pub mod algorithms;
pub mod colorspace;
pub mod histogram;
pub mod image;

mod equalize;

pub use equalize::{apply_table, equalize, remap_table};

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("image has no pixels; nothing to equalize")]
	EmptyImage,
	#[error("histogram total is zero; cannot build a distribution")]
	DivideByZero,
}
