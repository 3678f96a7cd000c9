//! Bucket lister, the linear run of the program.
//!
//! `START -> CLIENT_READY -> LISTED -> DONE`, any failure logs a warning and ends the run.

use crate::prelude::*;
use crate::s3w::{BucketListing, BucketSource, ClientFactory};
use tracing::{info, warn};

pub async fn run<F: ClientFactory>(factory: &F) -> Result<BucketListing> {
	// -- START -> CLIENT_READY
	info!("Creating S3 client...");
	let client = match factory.new_client().await {
		Ok(client) => client,
		Err(ex) => return Err(log_failure(Error::ClientConstruction(Box::new(ex)))),
	};
	info!("Successfully created S3 client");

	// -- CLIENT_READY -> LISTED
	info!("Listing S3 buckets...");
	let listing = match client.fetch_listing().await {
		Ok(listing) => listing,
		Err(ex) => return Err(log_failure(Error::ListBuckets(Box::new(ex)))),
	};

	// -- LISTED -> DONE
	for record in listing.buckets.iter() {
		info!("{}", record.log_line());
	}

	if listing.is_truncated() {
		warn!("Bucket listing is truncated, more buckets are available (continuation token present)");
	}

	info!("Successfully listed S3 buckets");

	Ok(listing)
}

fn log_failure(err: Error) -> Error {
	warn!("{}", single_line(&err.to_string()));
	err
}

/// SDK error contexts can span several lines, one event must stay one timestamped line.
fn single_line(text: &str) -> String {
	text.lines().map(str::trim).filter(|l| !l.is_empty()).collect::<Vec<_>>().join(" ")
}

// endregion: --- Tests
