use crate::consts::DEFAULT_REGION;
use crate::prelude::*;
use aws_config::BehaviorVersion;
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_s3::config::retry::RetryConfig;
use aws_sdk_s3::config::{Builder, Region};
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::Client;
use aws_types::SdkConfig;

// region:    --- CredentialProvider

/// Credential discovery strategy, resolves the full sdk config the client is built from.
#[allow(async_fn_in_trait)]
pub trait CredentialProvider {
	async fn load_config(&self) -> Result<SdkConfig>;
}

/// Ambient discovery through the default AWS chains
/// (env, shared config/credentials files, sso, web identity, container and instance roles).
#[derive(Debug, Default, Clone, Copy)]
pub struct AmbientCred;

impl CredentialProvider for AmbientCred {
	/// Credentials are resolved eagerly, so a missing credential fails here rather than
	/// on the first request.
	async fn load_config(&self) -> Result<SdkConfig> {
		let sdk_config = aws_config::defaults(BehaviorVersion::latest()).load().await;

		let provider = sdk_config.credentials_provider().ok_or(Error::NoCredentialsProvider)?;
		provider
			.provide_credentials()
			.await
			.map_err(|ex| Error::CredentialsNotLoaded(DisplayErrorContext(&ex).to_string()))?;

		Ok(with_default_region(sdk_config))
	}
}

// endregion: --- CredentialProvider

pub async fn new_s3_client(provider: &impl CredentialProvider) -> Result<Client> {
	let sdk_config = provider.load_config().await?;
	Ok(client_from_config(&sdk_config))
}

/// S3 client from everything aws-config resolved, with SDK retries off.
/// A custom endpoint (e.g., `AWS_ENDPOINT_URL`) gets path style addressing.
pub fn client_from_config(sdk_config: &SdkConfig) -> Client {
	let mut builder = Builder::from(sdk_config).retry_config(RetryConfig::disabled());

	if sdk_config.endpoint_url().is_some() {
		builder = builder.force_path_style(true);
	}

	Client::from_conf(builder.build())
}

/// S3 global default when no region chain resolved one.
fn with_default_region(sdk_config: SdkConfig) -> SdkConfig {
	if sdk_config.region().is_some() {
		return sdk_config;
	}
	sdk_config.into_builder().region(Region::new(DEFAULT_REGION)).build()
}

// endregion: --- Tests
