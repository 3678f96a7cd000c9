use cmd::cmd_run;
use std::process::ExitCode;

mod cmd;
mod consts;
mod error;
mod lister;
mod logger;
mod prelude;
mod s3w;

#[cfg(test)]
#[path = "_tests/test-lister.rs"]
mod test_lister;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
	match cmd_run().await {
		Ok(_) => ExitCode::SUCCESS,
		Err(e) => {
			// run stage failures are already in the log sinks
			if !e.is_logged() {
				eprintln!("Error:\n  {}", e)
			}
			ExitCode::FAILURE
		}
	}
}
