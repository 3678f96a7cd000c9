//! Dual sink logging (console + file).
//!
//! One `fmt` formatter writes each line through a tee writer, so the console and the
//! log file always receive the same bytes in the same order.
//! Line format: `YYYY-MM-DD HH:MM:SS message`

use crate::consts::LOG_TIME_FORMAT;
use crate::prelude::*;
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Arc;
use tracing::level_filters::LevelFilter;
use tracing::Subscriber;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::fmt::MakeWriter;

/// Install the global subscriber writing to stdout and to `log_file` (create/append).
/// Must be called once, before anything logs.
pub fn init_logging(log_file: &Path) -> Result<()> {
	let file = open_log_file(log_file)?;
	let subscriber = new_dual_subscriber(std::io::stdout, Arc::new(file));

	tracing::subscriber::set_global_default(subscriber).map_err(|ex| Error::LogInit(ex.to_string()))?;

	Ok(())
}

pub fn open_log_file(path: &Path) -> Result<File> {
	OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.map_err(|ex| Error::LogFileOpen(path.display().to_string(), ex))
}

/// Build the subscriber without installing it (tests scope it with `set_default`).
pub fn new_dual_subscriber<C, F>(console: C, file: F) -> impl Subscriber + Send + Sync + 'static
where
	C: for<'a> MakeWriter<'a> + Send + Sync + 'static,
	F: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
	tracing_subscriber::fmt()
		.with_timer(ChronoLocal::new(LOG_TIME_FORMAT.to_string()))
		.with_level(false)
		.with_target(false)
		.with_ansi(false)
		.with_max_level(LevelFilter::INFO)
		.with_writer(console.and(file))
		.finish()
}

// endregion: --- Tests
