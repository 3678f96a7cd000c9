use crate::consts::{BUCKET_DATE_FORMAT, UNKNOWN_DATE};
use crate::prelude::*;
use aws_sdk_s3::types::Bucket;
use chrono::{DateTime, Utc};

// region:    --- BucketRecord
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketRecord {
	pub name: String,
	pub creation_date: Option<DateTime<Utc>>,
}

// builders
impl BucketRecord {
	/// Returns None for a bucket without a name.
	pub fn from_bucket(bucket: &Bucket) -> Option<BucketRecord> {
		let name = bucket.name()?.to_string();
		let creation_date = bucket
			.creation_date()
			.and_then(|d| DateTime::from_timestamp(d.secs(), d.subsec_nanos()));

		Some(BucketRecord { name, creation_date })
	}
}

impl BucketRecord {
	/// e.g., `2024-Mar-07` (UTC)
	pub fn display_date(&self) -> String {
		match &self.creation_date {
			Some(date) => date.format(BUCKET_DATE_FORMAT).to_string(),
			None => UNKNOWN_DATE.to_string(),
		}
	}

	pub fn log_line(&self) -> String {
		f!("Creation Date: {}, Bucket Name: {}", self.display_date(), self.name)
	}
}

#[cfg(test)]
impl BucketRecord {
	pub fn new(name: impl Into<String>, creation_date: DateTime<Utc>) -> BucketRecord {
		BucketRecord {
			name: name.into(),
			creation_date: Some(creation_date),
		}
	}
}
// endregion: --- BucketRecord

// region:    --- BucketListing
/// Result of a single ListBuckets call, in service order.
#[derive(Debug, Default)]
pub struct BucketListing {
	pub buckets: Vec<BucketRecord>,
	pub continuation_token: Option<String>,
}

impl BucketListing {
	pub fn is_truncated(&self) -> bool {
		self.continuation_token.is_some()
	}
}
// endregion: --- BucketListing

// endregion: --- Tests
