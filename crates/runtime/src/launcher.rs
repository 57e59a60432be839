//! Workstation launch.
//!
//! Locates the workstation executable from the configured install directory
//! and spawns it as a detached child process. The harness keeps the child
//! handle for optional supervision but otherwise leaves the workstation
//! alone; there is no teardown of the launched application here.

use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::path::normalize_local_path;

/// Environment variable naming the bin directory of the workstation
/// install. Set by the workstation's own start scripts.
pub const INSTALL_DIR_VAR: &str = "SOCETGXPEXE";

/// Base name of the workstation executable, without platform suffix.
pub const WORKSTATION_EXE: &str = "SocetGxp";

/// Launch configuration, sourced once by the composition root.
#[derive(Clone, Debug, Default)]
pub struct LaunchConfig {
	install_dir: Option<String>,
}

impl LaunchConfig {
	/// Reads the install directory from [`INSTALL_DIR_VAR`].
	///
	/// An unset or empty variable yields a config with no install
	/// directory; [`launch_workstation`] reports that as
	/// [`Error::InstallDirNotSet`].
	pub fn from_env() -> Self {
		let install_dir = std::env::var(INSTALL_DIR_VAR)
			.ok()
			.filter(|dir| !dir.is_empty());
		Self { install_dir }
	}

	/// Builds a config with an explicit install directory.
	pub fn with_install_dir(dir: impl Into<String>) -> Self {
		Self {
			install_dir: Some(dir.into()),
		}
	}

	/// Configured install directory, if any.
	pub fn install_dir(&self) -> Option<&str> {
		self.install_dir.as_deref()
	}
}

/// Handle to a launched workstation process.
///
/// Dropping the handle detaches from the process without terminating it.
pub struct LaunchedProcess {
	pub(crate) child: Child,
	executable: PathBuf,
}

impl LaunchedProcess {
	/// OS process id. Always non-zero for a live launch.
	pub fn id(&self) -> u32 {
		self.child.id()
	}

	/// Path of the executable that was spawned.
	pub fn executable(&self) -> &Path {
		&self.executable
	}

	/// Non-blocking exit probe. `Ok(None)` means still running.
	pub fn try_wait(&mut self) -> Result<Option<std::process::ExitStatus>> {
		Ok(self.child.try_wait()?)
	}
}

impl std::fmt::Debug for LaunchedProcess {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("LaunchedProcess")
			.field("pid", &self.child.id())
			.field("executable", &self.executable)
			.finish()
	}
}

/// Spawns `executable` (platform suffix appended) as a detached process.
///
/// The child runs with default creation flags and none of the harness's
/// stdio handles. An empty path fails fast with [`Error::EmptyExecutable`]
/// and no process creation is attempted.
///
/// # Errors
///
/// Returns [`Error::ProcessCreation`] when the OS rejects the spawn; the
/// OS error code is available through [`Error::os_error_code`].
pub fn launch(executable: &Path) -> Result<LaunchedProcess> {
	if executable.as_os_str().is_empty() {
		return Err(Error::EmptyExecutable);
	}

	let mut exe = executable.as_os_str().to_os_string();
	exe.push(std::env::consts::EXE_SUFFIX);
	let exe = PathBuf::from(exe);

	debug!(target: "gxp", executable = %exe.display(), "spawning workstation");

	let child = Command::new(&exe)
		.stdin(Stdio::null())
		.stdout(Stdio::null())
		.stderr(Stdio::null())
		.spawn()
		.map_err(|source| Error::ProcessCreation {
			executable: exe.clone(),
			source,
		})?;

	info!(target: "gxp", pid = child.id(), executable = %exe.display(), "workstation launched");

	Ok(LaunchedProcess {
		child,
		executable: exe,
	})
}

/// Launches the workstation from the configured install directory.
///
/// The install directory is normalized against the working directory, the
/// fixed executable base name is appended, and the result is handed to
/// [`launch`].
///
/// # Errors
///
/// Returns [`Error::InstallDirNotSet`] when the config carries no install
/// directory; no spawn is attempted in that case.
pub fn launch_workstation(config: &LaunchConfig) -> Result<LaunchedProcess> {
	let dir = config.install_dir().ok_or(Error::InstallDirNotSet {
		var: INSTALL_DIR_VAR,
	})?;

	let resolved = normalize_local_path(dir).ok_or_else(|| Error::PathResolution {
		path: dir.to_string(),
	})?;

	launch(&resolved.join(WORKSTATION_EXE))
}
