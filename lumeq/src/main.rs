mod cli;
mod codec;

use std::path::{Path, PathBuf};

use cli::CliArgs;

fn main() {
	let cli = match CliArgs::new() {
		Ok(cli) => cli,
		Err(e) => {
			println!("{}", e);
			return;
		}
	};

	if cli.in_is_dir {
		directory(cli);
	} else {
		file(&cli, &cli.in_path, &cli.out_path);
	}
}

fn file(cli: &CliArgs, in_file: &Path, out_file: &Path) {
	let buffer = match codec::load(in_file) {
		Ok(buffer) => buffer,
		Err(e) => {
			eprintln!("{}: {}", in_file.display(), e);
			return;
		}
	};

	let equalized = match eqproc::equalize(buffer) {
		Ok(equalized) => equalized,
		Err(e) => {
			eprintln!("{}: {}", in_file.display(), e);
			return;
		}
	};

	if let Err(e) = codec::save(&equalized, out_file, cli.out_type) {
		eprintln!("{}: {}", out_file.display(), e);
	}
}

fn directory(cli: CliArgs) {
	let threadpool = threadpool::Builder::new().build();

	let contents = std::fs::read_dir(&cli.in_path).expect("Failed to read input directory");

	for entry in contents {
		let entry = entry.expect("Failed reading a file");
		let mut filename = PathBuf::from(&entry.file_name());
		filename.set_extension(cli.out_type.extensions_str()[0]);

		let cliclone = cli.clone();

		let mut out_file = cli.out_path.clone();
		out_file.push(filename);

		if entry.metadata().expect("Failed getting a files metadata").is_file() {
			threadpool.execute(move || {
				file(&cliclone, &entry.path(), &out_file);
			})
		}
	}

	threadpool.join();
}
