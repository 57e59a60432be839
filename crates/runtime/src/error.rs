//! Error types for the GXP runtime.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for runtime operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while locating or launching the workstation.
#[derive(Debug, Error)]
pub enum Error {
	/// The install directory variable is not set.
	#[error("{var} is not set. Point it at the bin directory of the workstation install.")]
	InstallDirNotSet { var: &'static str },

	/// An empty executable path or name was supplied.
	#[error("executable name is empty")]
	EmptyExecutable,

	/// A relative path could not be resolved against the working directory.
	#[error("cannot resolve '{path}' against the working directory")]
	PathResolution { path: String },

	/// The operating system rejected process creation.
	#[error("failed to start {}: {source}", executable.display())]
	ProcessCreation {
		executable: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// I/O error while supervising a launched process.
	#[error(transparent)]
	Io(#[from] std::io::Error),
}

impl Error {
	/// OS error code carried by a process-creation failure, when the OS
	/// reported one.
	pub fn os_error_code(&self) -> Option<i32> {
		match self {
			Error::ProcessCreation { source, .. } => source.raw_os_error(),
			Error::Io(source) => source.raw_os_error(),
			_ => None,
		}
	}
}
