//! Bootstrap sequence: launch the workstation, drive one control session.

use gxp_runtime::{LaunchConfig, LaunchedProcess, launch_workstation};
use tracing::{info, warn};

use crate::check::check_status;
use crate::session::RemoteSession;

/// Outcome of one bootstrap run.
#[derive(Debug)]
pub struct SessionOutcome {
	/// Handle to the launched workstation, when the launch succeeded.
	///
	/// Callers that want to block on workstation exit hand this to
	/// `gxp_runtime::supervisor`. Dropping it detaches without
	/// terminating the process.
	pub process: Option<LaunchedProcess>,
	/// Whether the connect operation validated on both status layers.
	pub connected: bool,
	/// Whether the disconnect operation validated on both status layers.
	pub disconnected: bool,
}

impl SessionOutcome {
	/// True when every session operation validated.
	pub fn succeeded(&self) -> bool {
		self.connected && self.disconnected
	}
}

/// Drives the bootstrap sequence against a remote session implementation.
///
/// The sequence is: launch the workstation, initialize the API, connect,
/// run the session work, disconnect, uninitialize. Disconnect runs even
/// when the connect failed validation, so a half-open session is never
/// left behind. Nothing is retried.
pub struct SessionDriver<A> {
	api: A,
	config: LaunchConfig,
}

impl<A: RemoteSession> SessionDriver<A> {
	/// Builds a driver from a session implementation and a launch config
	/// sourced by the composition root.
	pub fn new(api: A, config: LaunchConfig) -> Self {
		Self { api, config }
	}

	/// Runs the bootstrap sequence without session work.
	pub fn run(self) -> SessionOutcome {
		self.run_with(|_| {})
	}

	/// Runs the bootstrap sequence with `work` executed inside the
	/// connected session.
	///
	/// A failed launch is logged and the session sequence still runs: the
	/// workstation may already be up from an earlier start. `work` is
	/// skipped when the connect failed validation; disconnect and
	/// uninitialize run unconditionally afterwards.
	pub fn run_with<F>(mut self, work: F) -> SessionOutcome
	where
		F: FnOnce(&mut A),
	{
		let process = match launch_workstation(&self.config) {
			Ok(process) => {
				info!(target: "gxp", pid = process.id(), "workstation started");
				Some(process)
			}
			Err(err) => {
				warn!(
					target: "gxp",
					code = ?err.os_error_code(),
					"workstation launch failed: {err}"
				);
				None
			}
		};

		self.api.initialize_api();

		let connect_status = self.api.connect();
		let connected = check_status(&connect_status);

		if connected {
			work(&mut self.api);
		}

		// Unconditional: a failed connect must still be followed by a
		// disconnect.
		let disconnect_status = self.api.disconnect();
		let disconnected = check_status(&disconnect_status);

		self.api.uninitialize_api();

		SessionOutcome {
			process,
			connected,
			disconnected,
		}
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;
	use std::rc::Rc;

	use gxp_protocol::{CallStatus, CommStatus, SessionStatus};

	use super::*;

	/// Scripted in-memory session that records the call order.
	struct ScriptedApi {
		calls: Rc<RefCell<Vec<&'static str>>>,
		connect: CallStatus,
		disconnect: CallStatus,
	}

	impl ScriptedApi {
		fn new(connect: CallStatus, disconnect: CallStatus) -> (Self, Rc<RefCell<Vec<&'static str>>>) {
			let calls = Rc::new(RefCell::new(Vec::new()));
			let api = Self {
				calls: Rc::clone(&calls),
				connect,
				disconnect,
			};
			(api, calls)
		}
	}

	impl RemoteSession for ScriptedApi {
		fn initialize_api(&mut self) {
			self.calls.borrow_mut().push("initialize");
		}

		fn connect(&mut self) -> CallStatus {
			self.calls.borrow_mut().push("connect");
			self.connect.clone()
		}

		fn disconnect(&mut self) -> CallStatus {
			self.calls.borrow_mut().push("disconnect");
			self.disconnect.clone()
		}

		fn uninitialize_api(&mut self) {
			self.calls.borrow_mut().push("uninitialize");
		}
	}

	fn unlaunchable_config() -> LaunchConfig {
		// No install directory configured: the launch phase fails and the
		// session phase must still run.
		LaunchConfig::default()
	}

	#[test]
	fn sequence_runs_in_order_on_success() {
		let (api, calls) = ScriptedApi::new(CallStatus::ok(), CallStatus::ok());
		let outcome = SessionDriver::new(api, unlaunchable_config()).run_with(|api| {
			api.calls.borrow_mut().push("work");
		});

		assert!(outcome.connected);
		assert!(outcome.disconnected);
		assert!(outcome.succeeded());
		assert_eq!(
			*calls.borrow(),
			vec!["initialize", "connect", "work", "disconnect", "uninitialize"]
		);
	}

	#[test]
	fn failed_connect_still_disconnects_and_skips_work() {
		let failed = CallStatus::new(CommStatus::Failure, SessionStatus::ok());
		let (api, calls) = ScriptedApi::new(failed, CallStatus::ok());
		let outcome = SessionDriver::new(api, unlaunchable_config()).run_with(|api| {
			api.calls.borrow_mut().push("work");
		});

		assert!(!outcome.connected);
		assert!(outcome.disconnected);
		assert!(!outcome.succeeded());
		assert_eq!(
			*calls.borrow(),
			vec!["initialize", "connect", "disconnect", "uninitialize"]
		);
	}

	#[test]
	fn application_error_on_connect_fails_the_outcome() {
		let failed = CallStatus::new(
			CommStatus::Success,
			SessionStatus::failure(0x19, Some("no license".to_string())),
		);
		let (api, _calls) = ScriptedApi::new(failed, CallStatus::ok());
		let outcome = SessionDriver::new(api, unlaunchable_config()).run();

		assert!(!outcome.connected);
		assert!(outcome.disconnected);
	}

	#[test]
	fn launch_failure_leaves_no_process_handle() {
		let (api, _calls) = ScriptedApi::new(CallStatus::ok(), CallStatus::ok());
		let outcome = SessionDriver::new(api, unlaunchable_config()).run();
		assert!(outcome.process.is_none());
		assert!(outcome.succeeded());
	}

	#[cfg(unix)]
	#[test]
	fn successful_launch_hands_back_the_process() {
		use std::os::unix::fs::PermissionsExt;

		let dir = tempfile::tempdir().unwrap();
		let exe = dir.path().join(gxp_runtime::launcher::WORKSTATION_EXE);
		std::fs::write(&exe, "#!/bin/sh\nexit 0\n").unwrap();
		std::fs::set_permissions(&exe, std::fs::Permissions::from_mode(0o755)).unwrap();

		let config = LaunchConfig::with_install_dir(dir.path().to_str().unwrap());
		let (api, _calls) = ScriptedApi::new(CallStatus::ok(), CallStatus::ok());
		let outcome = SessionDriver::new(api, config).run();

		let mut process = outcome.process.expect("workstation should have launched");
		assert_ne!(process.id(), 0);
		gxp_runtime::supervisor::wait(&mut process).unwrap();
	}
}
