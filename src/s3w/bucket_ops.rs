use super::record::{BucketListing, BucketRecord};
use crate::prelude::*;
use aws_sdk_s3::Client;

/// The "list buckets" side of the storage service.
#[allow(async_fn_in_trait)]
pub trait BucketSource {
	/// One ListBuckets request, no paging.
	async fn fetch_listing(&self) -> Result<BucketListing>;
}

impl BucketSource for Client {
	async fn fetch_listing(&self) -> Result<BucketListing> {
		let buckets_output = self.list_buckets().send().await?;

		let buckets = buckets_output.buckets().iter().filter_map(BucketRecord::from_bucket).collect();
		let continuation_token = buckets_output.continuation_token().map(|t| t.to_string());

		Ok(BucketListing {
			buckets,
			continuation_token,
		})
	}
}
