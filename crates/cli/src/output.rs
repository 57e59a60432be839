//! Structured output envelope for CLI commands.
//!
//! Every command produces human-readable text by default; `-f json` emits
//! a result envelope on stdout instead:
//!
//! ```json
//! { "ok": true, "command": "launch", "data": { ... } }
//! { "ok": false, "command": "launch", "error": { "message": "...", "os_code": 2 } }
//! ```
//!
//! Failures are always printed to stderr for humans, regardless of format.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// Output format for CLI results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
	/// Human-readable text (default)
	#[default]
	Text,
	/// JSON envelope
	Json,
}

/// Result envelope emitted in JSON mode.
#[derive(Debug, Serialize)]
struct CommandResult<'a, T: Serialize> {
	ok: bool,
	command: &'a str,
	#[serde(skip_serializing_if = "Option::is_none")]
	data: Option<&'a T>,
	#[serde(skip_serializing_if = "Option::is_none")]
	error: Option<CommandError>,
}

/// Error payload of a failed command.
#[derive(Debug, Serialize)]
pub struct CommandError {
	pub message: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub os_code: Option<i32>,
}

/// Data reported by a successful `launch`.
#[derive(Debug, Serialize)]
pub struct LaunchReport {
	pub pid: u32,
	pub executable: PathBuf,
	/// Exit code observed while waiting; absent when not waited or when
	/// the workstation was still running at the deadline.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub exit_code: Option<i32>,
	/// True when a bounded wait gave up with the workstation still up.
	#[serde(skip_serializing_if = "std::ops::Not::not")]
	pub still_running: bool,
}

impl fmt::Display for LaunchReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"workstation launched: {} (pid {})",
			self.executable.display(),
			self.pid
		)?;
		if let Some(code) = self.exit_code {
			write!(f, "\nworkstation exited with code {code}")?;
		}
		if self.still_running {
			write!(f, "\nworkstation still running at deadline")?;
		}
		Ok(())
	}
}

/// Data reported by a successful `resolve`.
#[derive(Debug, Serialize)]
pub struct ResolveReport {
	pub path: PathBuf,
}

impl fmt::Display for ResolveReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.path.display())
	}
}

/// Prints a successful command result on stdout.
pub fn print_success<T: Serialize + fmt::Display>(command: &str, data: &T, format: OutputFormat) {
	match format {
		OutputFormat::Text => println!("{data}"),
		OutputFormat::Json => {
			let result = CommandResult {
				ok: true,
				command,
				data: Some(data),
				error: None,
			};
			print_envelope(&result);
		}
	}
}

/// Prints a failed command result: stderr for humans, plus a JSON envelope
/// on stdout when requested.
pub fn print_failure(command: &str, error: CommandError, format: OutputFormat) {
	eprintln!("error: {}", error.message);
	if format == OutputFormat::Json {
		let result: CommandResult<'_, ()> = CommandResult {
			ok: false,
			command,
			data: None,
			error: Some(error),
		};
		print_envelope(&result);
	}
}

fn print_envelope<T: Serialize>(result: &CommandResult<'_, T>) {
	match serde_json::to_string(result) {
		Ok(json) => println!("{json}"),
		Err(err) => eprintln!("error: failed to encode result envelope: {err}"),
	}
}
