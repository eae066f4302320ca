mod cliargs;

pub use cliargs::CliArgs;
