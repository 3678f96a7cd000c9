use crate::_test_support::{capture_dual_logs, strip_timestamp, FakeFactory, FakeSource, Result};
use crate::lister::run;
use crate::prelude::Error as CrateError;
use crate::s3w::record::BucketRecord;
use chrono::{TimeZone, Utc};

fn fx_alpha_beta() -> Vec<BucketRecord> {
	vec![
		BucketRecord::new("alpha", Utc.with_ymd_and_hms(2024, 3, 7, 0, 0, 0).unwrap()),
		BucketRecord::new("beta", Utc.with_ymd_and_hms(2023, 12, 25, 0, 0, 0).unwrap()),
	]
}

/// The messages of the log, panics if a line has no timestamp prefix.
fn messages(log: &str) -> Vec<String> {
	log.lines()
		.map(|line| {
			strip_timestamp(line)
				.unwrap_or_else(|| panic!("line without timestamp prefix: '{line}'"))
				.to_string()
		})
		.collect()
}

#[tokio::test]
async fn test_lister_two_buckets() -> Result<()> {
	// -- Setup & Fixtures
	let (_guard, console, file) = capture_dual_logs();
	let factory = FakeFactory::with_source(FakeSource::listing(fx_alpha_beta()));

	// -- Exec
	let listing = run(&factory).await?;

	// -- Check
	assert_eq!(listing.buckets, fx_alpha_beta());
	assert_eq!(
		messages(&console.contents()),
		[
			"Creating S3 client...",
			"Successfully created S3 client",
			"Listing S3 buckets...",
			"Creation Date: 2024-Mar-07, Bucket Name: alpha",
			"Creation Date: 2023-Dec-25, Bucket Name: beta",
			"Successfully listed S3 buckets",
		]
	);
	assert_eq!(console.contents(), file.contents());

	Ok(())
}

#[tokio::test]
async fn test_lister_zero_buckets() -> Result<()> {
	// -- Setup & Fixtures
	let (_guard, console, file) = capture_dual_logs();
	let factory = FakeFactory::with_source(FakeSource::listing(vec![]));

	// -- Exec
	let listing = run(&factory).await?;

	// -- Check
	assert!(listing.buckets.is_empty());
	let msgs = messages(&console.contents());
	assert!(!msgs.iter().any(|m| m.starts_with("Creation Date:")), "no per bucket line");
	assert_eq!(msgs.last().map(|s| s.as_str()), Some("Successfully listed S3 buckets"));
	assert_eq!(factory.source().calls(), 1);
	assert_eq!(console.contents(), file.contents());

	Ok(())
}

#[tokio::test]
async fn test_lister_client_failure_does_not_list() -> Result<()> {
	// -- Setup & Fixtures
	let (_guard, console, file) = capture_dual_logs();
	let factory = FakeFactory::failing("no credentials in sight");

	// -- Exec
	let res = run(&factory).await;

	// -- Check
	let err = res.expect_err("client construction should fail");
	assert!(matches!(err, CrateError::ClientConstruction(_)));
	assert!(err.is_logged());
	assert_eq!(factory.source().calls(), 0, "list should not be attempted");
	assert_eq!(
		messages(&console.contents()),
		[
			"Creating S3 client...",
			"Failed to create S3 client. Error: Could not load credentials. Cause: no credentials in sight",
		]
	);
	assert_eq!(console.contents(), file.contents());

	Ok(())
}

#[tokio::test]
async fn test_lister_multiline_error_single_line() -> Result<()> {
	// -- Setup & Fixtures
	let (_guard, console, file) = capture_dual_logs();
	let factory = FakeFactory::failing(
		"no providers in chain provided credentials. Attempted:\n  Environment: environment variable not set\n  Profile: no profiles found\n",
	);

	// -- Exec
	let res = run(&factory).await;

	// -- Check
	assert!(matches!(res, Err(CrateError::ClientConstruction(_))));
	for log in [console.contents(), file.contents()] {
		// panics on any line without the timestamp prefix
		let msgs = messages(&log);
		assert_eq!(
			msgs.last().map(|s| s.as_str()),
			Some(
				"Failed to create S3 client. Error: Could not load credentials. Cause: no providers in chain provided credentials. Attempted: Environment: environment variable not set Profile: no profiles found"
			)
		);
	}

	Ok(())
}

#[tokio::test]
async fn test_lister_list_failure() -> Result<()> {
	// -- Setup & Fixtures
	let (_guard, console, file) = capture_dual_logs();
	let factory = FakeFactory::with_source(FakeSource::failing("AccessDenied"));

	// -- Exec
	let res = run(&factory).await;

	// -- Check
	assert!(matches!(res, Err(CrateError::ListBuckets(_))));
	let msgs = messages(&console.contents());
	assert_eq!(
		msgs.last().map(|s| s.as_str()),
		Some("Failed to list S3 buckets. Error: AWS Service Error. Code: AccessDenied, Message: Access Denied")
	);
	assert!(!msgs.iter().any(|m| m == "Successfully listed S3 buckets"));
	assert_eq!(factory.source().calls(), 1);
	assert_eq!(console.contents(), file.contents());

	Ok(())
}

#[tokio::test]
async fn test_lister_truncated_listing_warns() -> Result<()> {
	// -- Setup & Fixtures
	let (_guard, console, _file) = capture_dual_logs();
	let source = FakeSource::listing(fx_alpha_beta()).with_continuation_token("next-page");
	let factory = FakeFactory::with_source(source);

	// -- Exec
	let listing = run(&factory).await?;

	// -- Check
	assert!(listing.is_truncated());
	let msgs = messages(&console.contents());
	assert_eq!(msgs.len(), 7);
	assert!(msgs[5].starts_with("Bucket listing is truncated"), "got: {}", msgs[5]);
	assert_eq!(msgs[6], "Successfully listed S3 buckets");

	Ok(())
}
