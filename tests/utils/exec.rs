use anyhow::Result;
use std::fs;
use std::process::{Command, Stdio};
use std::sync::Mutex;

/// The binary always logs to this file.
pub const LOG_FILE: &str = "/tmp/S3buckets.txt";

/// Isolated AWS environment, nothing resolved from the host (no config files, no IMDS).
const ENV_ISOLATED: [(&str, &str); 4] = [
	("AWS_CONFIG_FILE", "/nonexistent/lsb3/config"),
	("AWS_SHARED_CREDENTIALS_FILE", "/nonexistent/lsb3/credentials"),
	("AWS_EC2_METADATA_DISABLED", "true"),
	("AWS_REGION", "us-east-1"),
];

/// Static keys, as the ambient env provider picks them.
pub const ENV_CREDS: [(&str, &str); 2] = [("AWS_ACCESS_KEY_ID", "minio"), ("AWS_SECRET_ACCESS_KEY", "miniominio")];

/// Runs share the log file, one at a time.
static EXEC_LOCK: Mutex<()> = Mutex::new(());

pub struct ExecOut {
	pub success: bool,
	pub code: Option<i32>,
	pub stdout: String,
	pub stderr: String,
	/// What this run appended to `LOG_FILE`.
	pub log_appended: String,
}

/// Run the lsb3 binary with a cleared environment, `ENV_ISOLATED` and the given `envs`.
pub fn exec_lsb3(args: &[&str], envs: &[(&str, &str)], print_exec: bool) -> Result<ExecOut> {
	let bin = env!("CARGO_BIN_EXE_lsb3");

	if print_exec {
		println!("> executing: {} {}", bin, args.join(" "));
	}

	let mut proc = Command::new(bin);
	proc.env_clear();
	proc.current_dir(std::env::temp_dir());
	proc.args(args);

	for (name, val) in ENV_ISOLATED.iter().chain(envs.iter()) {
		proc.env(name, val);
	}

	let _lock = EXEC_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
	let log_len_before = fs::read(LOG_FILE).map(|b| b.len()).unwrap_or(0);

	let output = proc.stdout(Stdio::piped()).stderr(Stdio::piped()).output()?;

	let log_after = fs::read(LOG_FILE).unwrap_or_default();
	let log_appended = String::from_utf8(log_after.get(log_len_before..).unwrap_or_default().to_vec())?;

	Ok(ExecOut {
		success: output.status.success(),
		code: output.status.code(),
		stdout: String::from_utf8(output.stdout)?,
		stderr: String::from_utf8(output.stderr)?,
		log_appended,
	})
}
