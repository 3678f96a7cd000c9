use clap::{crate_version, Command};

/// Only `--help` and `--version`, the run itself takes no arguments.
pub fn cmd_app() -> Command {
	Command::new("lsb3")
		.version(crate_version!())
		.about("List the S3 buckets of the ambient credentials, logged to the console and /tmp/S3buckets.txt.")
}
