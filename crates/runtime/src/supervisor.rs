//! Waits on a launched workstation process.
//!
//! The launcher owns the child handle, so waiting is meaningful on every
//! supported target; there is no platform where these calls silently do
//! nothing.

use std::process::ExitStatus;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::error::Result;
use crate::launcher::LaunchedProcess;

/// Poll interval for [`wait_timeout`].
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Blocks the calling thread until the process exits.
///
/// There is no cancellation or timeout; the call suspends the entire
/// calling thread for as long as the workstation runs. Use
/// [`wait_timeout`] for a bounded wait.
pub fn wait(process: &mut LaunchedProcess) -> Result<ExitStatus> {
	debug!(target: "gxp", pid = process.id(), "waiting for workstation exit");
	Ok(process.child.wait()?)
}

/// Waits for the process to exit, giving up after `timeout`.
///
/// Polls the exit state at a fixed interval. Returns `Ok(None)` when the
/// process is still running at the deadline; the process is left running.
pub fn wait_timeout(
	process: &mut LaunchedProcess,
	timeout: Duration,
) -> Result<Option<ExitStatus>> {
	let deadline = Instant::now() + timeout;
	loop {
		if let Some(status) = process.try_wait()? {
			return Ok(Some(status));
		}
		if Instant::now() >= deadline {
			debug!(target: "gxp", pid = process.id(), "workstation still running at deadline");
			return Ok(None);
		}
		std::thread::sleep(POLL_INTERVAL.min(deadline.saturating_duration_since(Instant::now())));
	}
}
