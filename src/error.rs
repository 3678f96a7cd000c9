use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_s3::operation::list_buckets::ListBucketsError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
	// -- Run stages (logged by the lister before being returned)
	#[error("Failed to create S3 client. Error: {0}")]
	ClientConstruction(Box<Error>),

	#[error("Failed to list S3 buckets. Error: {0}")]
	ListBuckets(Box<Error>),

	// -- Credentials
	#[error("No credentials provider found in the default AWS chain.")]
	NoCredentialsProvider,

	#[error("Could not load credentials. Cause: {0}")]
	CredentialsNotLoaded(String),

	// -- Logging
	#[error("Cannot open log file '{0}'. Cause: {1}")]
	LogFileOpen(String, std::io::Error),

	#[error("Cannot initialize logging. Cause: {0}")]
	LogInit(String),

	// -- Aws
	#[error("AWS Service Error. Code: {0}, Message: {1}")]
	AwsServiceError(String, String), // code, message

	#[error("AWS SDK Error. {0}")]
	AwsSdk(String),
}

impl Error {
	/// True when the error was already written to the log sinks by the lister.
	pub fn is_logged(&self) -> bool {
		matches!(self, Error::ClientConstruction(_) | Error::ListBuckets(_))
	}
}

/// For better CLI error reporting.
/// Service errors keep their code and message, everything else (dispatch, timeout, ...)
/// gets the full SDK error context.
impl From<SdkError<ListBucketsError>> for Error {
	fn from(val: SdkError<ListBucketsError>) -> Self {
		if let Some(se) = val.as_service_error() {
			if let Some(code) = se.code() {
				let message = se.message().unwrap_or_default().to_string();
				return Error::AwsServiceError(code.to_string(), message);
			}
		}
		Error::AwsSdk(DisplayErrorContext(&val).to_string())
	}
}

// endregion: --- Tests
