use crate::cmd::app::cmd_app;
use crate::consts::DEFAULT_LOG_FILE;
use crate::lister;
use crate::logger::init_logging;
use crate::prelude::*;
use crate::s3w::{AmbientCred, S3ClientFactory};
use clap::error::ErrorKind;
use std::ffi::OsString;
use std::path::Path;

mod app;

pub async fn cmd_run() -> Result<()> {
	if let Some(display) = help_or_version(std::env::args_os()) {
		// prints and exits 0
		display.exit();
	}

	init_logging(Path::new(DEFAULT_LOG_FILE))?;

	let factory = S3ClientFactory::new(AmbientCred);
	lister::run(&factory).await?;

	Ok(())
}

// region:    Args Utils
/// Returns the clap help/version display if asked for. Any other argument is ignored.
fn help_or_version<I, T>(args: I) -> Option<clap::Error>
where
	I: IntoIterator<Item = T>,
	T: Into<OsString> + Clone,
{
	match cmd_app().try_get_matches_from(args) {
		Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => Some(err),
		_ => None,
	}
}
// endregion: Args Utils

// endregion: --- Tests
