//! Two-layer status codes reported by session operations.

use serde::{Deserialize, Serialize};

/// Numeric code of a successful status on either layer.
pub const STATUS_SUCCESS: u32 = 0;

/// Numeric code of a generic transport failure.
pub const STATUS_COMM_FAILURE: u32 = 0x8000_0000;

/// Transport-level status of one control-channel call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommStatus {
	/// The call reached the workstation and a reply came back.
	Success,
	/// The control channel itself failed.
	Failure,
}

impl CommStatus {
	/// Returns true when the transport layer succeeded.
	pub fn is_success(self) -> bool {
		matches!(self, CommStatus::Success)
	}

	/// Numeric code used in diagnostics.
	pub fn code(self) -> u32 {
		match self {
			CommStatus::Success => STATUS_SUCCESS,
			CommStatus::Failure => STATUS_COMM_FAILURE,
		}
	}
}

/// Application-level status object attached to a session operation.
///
/// Mirrors the status the workstation reports alongside each reply: a
/// numeric error code (0 on success) and an optional error message.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStatus {
	error_code: u32,
	error_message: Option<String>,
}

impl SessionStatus {
	/// A successful application status.
	pub fn ok() -> Self {
		Self::default()
	}

	/// A failed application status with `code` and an optional message.
	pub fn failure(code: u32, message: impl Into<Option<String>>) -> Self {
		Self {
			error_code: code,
			error_message: message.into().filter(|m| !m.is_empty()),
		}
	}

	/// Returns true when the workstation accepted the operation.
	pub fn is_success(&self) -> bool {
		self.error_code == STATUS_SUCCESS
	}

	/// Numeric error code (0 on success).
	pub fn error_code(&self) -> u32 {
		self.error_code
	}

	/// Error message text, when the workstation supplied one.
	pub fn error_message(&self) -> Option<&str> {
		self.error_message.as_deref()
	}
}

/// Combined outcome of one session operation.
///
/// Produced per operation (connect, disconnect, or any other remote call)
/// and consumed by validation; both layers must succeed independently.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallStatus {
	/// Transport-level status of the call.
	pub comm: CommStatus,
	/// Application-level status reported by the workstation.
	pub session: SessionStatus,
}

impl CallStatus {
	/// A fully successful call on both layers.
	pub fn ok() -> Self {
		Self {
			comm: CommStatus::Success,
			session: SessionStatus::ok(),
		}
	}

	/// Builds a status pair from both layers.
	pub fn new(comm: CommStatus, session: SessionStatus) -> Self {
		Self { comm, session }
	}

	/// Overall success: the transport AND the application layer succeeded.
	///
	/// A successful transport carrying a failed application code is a
	/// failure, and vice versa.
	pub fn is_success(&self) -> bool {
		self.comm.is_success() && self.session.is_success()
	}
}
