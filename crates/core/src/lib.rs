//! GXP bootstrap harness - launch the workstation, drive a control session.
//!
//! The harness does three things:
//!
//! - launches the workstation executable from an environment-configured
//!   install directory (`gxp-runtime`)
//! - opens and tears down a control session through the remote control
//!   interface, which implementations supply behind [`RemoteSession`]
//! - validates every session operation against its two-layer status
//!   ([`check_status`])
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   gxp-cli    │  Command-line entry point
//! └──────┬───────┘
//! ┌──────▼───────┐
//! │     gxp      │  This crate
//! │  ┌────────┐  │
//! │  │ Driver │  │  Bootstrap sequence
//! │  └────────┘  │
//! │  ┌────────┐  │
//! │  │ Check  │  │  Two-layer status validation
//! │  └────────┘  │
//! └──┬────────┬──┘
//! ┌──▼─────┐┌─▼───────────┐
//! │runtime ││ RemoteSession│  Process spawn / vendor session library
//! └────────┘└─────────────┘
//! ```
//!
//! The remote control protocol itself is owned by the vendor session
//! library; this crate only consumes the [`RemoteSession`] surface.

pub mod check;
pub mod driver;
pub mod session;

pub use check::{check_status, failure_report};
pub use driver::{SessionDriver, SessionOutcome};
pub use gxp_protocol::{CallStatus, CommStatus, SessionStatus};
pub use gxp_runtime::{
	Error, LaunchConfig, LaunchedProcess, Result, launch_workstation, normalize_local_path,
	supervisor,
};
pub use session::RemoteSession;
