//! The consumed surface of the workstation session library.

use gxp_protocol::CallStatus;

/// Control session exposed by the workstation remote API.
///
/// Implementations wrap the vendor session library; the harness drives
/// this surface and never touches the wire protocol behind it. Every
/// remote call reports a [`CallStatus`] that the caller is expected to
/// validate before proceeding to dependent steps.
///
/// Call order is owned by [`SessionDriver`]: `initialize_api` once before
/// any session call, `uninitialize_api` once after the last, and
/// `disconnect` after every `connect` - including a failed one.
///
/// [`SessionDriver`]: crate::driver::SessionDriver
pub trait RemoteSession {
	/// Prepares the API layer. Called once, before any session call.
	fn initialize_api(&mut self);

	/// Opens a control session with the running workstation.
	fn connect(&mut self) -> CallStatus;

	/// Closes the control session.
	fn disconnect(&mut self) -> CallStatus;

	/// Releases the API layer. Called once, after the last session call.
	fn uninitialize_api(&mut self);
}
