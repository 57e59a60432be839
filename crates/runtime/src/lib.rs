//! GXP runtime - workstation launch, path resolution, and supervision.
//!
//! This crate provides the OS-facing half of the bootstrap harness:
//!
//! - **Path resolution**: normalizing local paths against the working
//!   directory
//! - **Launcher**: locating the workstation executable from the configured
//!   install directory and spawning it
//! - **Supervisor**: blocking and bounded waits on the launched process
//!
//! The session layer that talks to the running workstation lives in `gxp`;
//! nothing here touches the control channel.

pub mod error;
pub mod launcher;
pub mod path;
pub mod supervisor;

pub use error::{Error, Result};
pub use launcher::{
	INSTALL_DIR_VAR, LaunchConfig, LaunchedProcess, WORKSTATION_EXE, launch, launch_workstation,
};
pub use path::normalize_local_path;
