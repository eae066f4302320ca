use std::error::Error;
use std::fmt;
use std::io::Error as IoError;
use std::path::PathBuf;

use getopts::Options;
use image::ImageFormat;

#[derive(Clone, Debug)]
pub struct CliArgs {
	pub in_path: PathBuf,
	pub in_is_dir: bool,

	pub out_path: PathBuf,
	pub out_type: ImageFormat,
}

impl CliArgs {
	fn usage(program: &str, opts: Options) -> String {
		let brief = format!("Usage: {} -i FILE [options]", program);
		format!("{}", opts.usage(&brief))
	}

	pub fn new() -> Result<Self, CliError> {
		Self::from_cli()
	}

	fn from_cli() -> Result<Self, CliError> {
		let args: Vec<String> = std::env::args().collect();
		let program = &args[0];

		let mut opts = Options::new();
		opts.reqopt(
			"i",
			"ipath",
			"Input path\n\
			If input is a file, the output path is optional.\n\
			If input is a directory, the output path is required",
			"FILE",
		);
		opts.optopt(
			"o",
			"opath",
			"Output path\n\
			If no output path is provided, the equalized image is written\n\
			back over the input path",
			"FILE",
		);
		opts.optopt(
			"",
			"type",
			"Set the output image type\nAvailable types are: png, jpeg",
			"TYPE",
		);
		let matches = match opts.parse(&args[1..]) {
			Ok(m) => m,
			Err(_e) => {
				return Err(CliError::MatchError(Self::usage(program, opts)));
			}
		};

		let in_path = PathBuf::from(
			matches
				.opt_str("ipath")
				.expect("How'd this happen? ipath isn't present"),
		);
		let in_is_dir = match in_path.metadata() {
			Ok(meta) => meta.is_dir(),
			Err(e) => return Err(CliError::InPathError(e)),
		};

		// Prefer an explicit --type. Failing that, keep whatever format
		// the input already is, like hitting "Save" in an editor would
		let mut out_type = if let Some(s) = matches.opt_str("type") {
			match ImageFormat::from_extension(&s) {
				Some(format) => format,
				None => return Err(CliError::FormatError(s)),
			}
		} else {
			in_path
				.extension()
				.and_then(ImageFormat::from_extension)
				.unwrap_or(ImageFormat::Jpeg)
		};

		let out_path = match matches.opt_str("opath").map(PathBuf::from) {
			Some(mut path) => {
				if !in_is_dir {
					if path.is_dir() {
						path.push(
							in_path
								.file_stem()
								.expect("File isn't dir but doesn't have stem. How?"),
						);
					}

					match path.extension() {
						None => {
							// No extension, add one from out_type
							path.set_extension(out_type.extensions_str()[0]);
						}
						Some(ext) => {
							// Out path has an extension, does it match a format?
							match ImageFormat::from_extension(ext) {
								Some(fmt) => {
									out_type = fmt;
								}
								None => {
									return Err(CliError::FormatError(
										ext.to_string_lossy().into_owned(),
									));
								}
							}
						}
					}
				}
				path
			}
			None => {
				if in_is_dir {
					return Err(CliError::OutPathError);
				} else {
					// Write back over the input, the way the original
					// file was opened
					in_path.clone()
				}
			}
		};

		Ok(Self {
			in_path,
			in_is_dir,
			out_path,
			out_type,
		})
	}
}

#[derive(Debug)]
pub enum CliError {
	InPathError(IoError),
	OutPathError,
	MatchError(String),
	FormatError(String),
}

impl Error for CliError {}

impl fmt::Display for CliError {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			CliError::InPathError(ioerr) => write!(f, "Failed to open input file: {}", ioerr),
			CliError::OutPathError => write!(
				f,
				"An output path is required if the input path is a directory\n\
				If you want to output in the current directory, use '.' as the out path"
			),
			CliError::MatchError(usage) => write!(f, "{}", usage),
			CliError::FormatError(ext) => write!(
				f,
				"'{}' is not an image type lumeq can write\n\
				Available types are: png, jpeg",
				ext
			),
		}
	}
}
