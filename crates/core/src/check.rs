//! Two-layer status validation for session operations.

use std::fmt::Write;

use gxp_protocol::CallStatus;
use tracing::error;

/// Validates one session operation against both status layers.
///
/// Overall success requires the transport layer and the application layer
/// to succeed independently. On failure a diagnostic block is logged; on
/// success nothing is emitted. The returned value is what callers use to
/// decide whether to proceed with dependent steps.
pub fn check_status(status: &CallStatus) -> bool {
	if status.is_success() {
		return true;
	}

	error!(target: "gxp", "{}", failure_report(status));
	false
}

/// Renders the diagnostic block for a failed session operation.
///
/// Both codes appear as 8-digit zero-padded hexadecimal, followed by the
/// workstation's error message when one was supplied. The report is an
/// owned `String` built from local state; no shared output stream is
/// touched during rendering.
pub fn failure_report(status: &CallStatus) -> String {
	let mut report = String::new();

	let _ = writeln!(report, " >> ERROR <<");
	let _ = writeln!(report, "Communication Error: 0x{:08x}", status.comm.code());
	let _ = writeln!(report, "GXP Error: 0x{:08x}", status.session.error_code());
	if let Some(message) = status.session.error_message() {
		let _ = writeln!(report, "GXP Error: {message}");
	}

	report
}
