//! AWS API Wrapper

// region:    --- Modules

// -- Sub-modules

pub mod bucket_ops;
pub mod cred;
pub mod record;

// -- Re-exports
pub use self::bucket_ops::BucketSource;
pub use self::cred::{AmbientCred, CredentialProvider};
pub use self::record::BucketListing;

// -- Imports
use crate::prelude::*;
use aws_sdk_s3::Client;

// endregion: --- Modules

// region:    --- Client factory

/// Produces the client the lister talks to.
#[allow(async_fn_in_trait)]
pub trait ClientFactory {
	type Client: BucketSource;

	async fn new_client(&self) -> Result<Self::Client>;
}

/// Production factory, an S3 `Client` from whatever the `CredentialProvider` resolves.
pub struct S3ClientFactory<P> {
	provider: P,
}

impl<P: CredentialProvider> S3ClientFactory<P> {
	pub fn new(provider: P) -> Self {
		S3ClientFactory { provider }
	}
}

impl<P: CredentialProvider> ClientFactory for S3ClientFactory<P> {
	type Client = Client;

	async fn new_client(&self) -> Result<Client> {
		cred::new_s3_client(&self.provider).await
	}
}

// endregion: --- Client factory

// endregion: --- Tests
