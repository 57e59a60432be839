//! Command dispatch for the bootstrap CLI.

use std::time::Duration;

use anyhow::Context;
use gxp::{LaunchConfig, launch_workstation, normalize_local_path, supervisor};

use crate::cli::{Cli, Commands, LaunchArgs, ResolveArgs};
use crate::output::{self, LaunchReport, OutputFormat, ResolveReport};

pub fn dispatch(cli: Cli) -> anyhow::Result<()> {
	let format = cli.format;
	match cli.command {
		Commands::Launch(args) => launch(args, format),
		Commands::Resolve(args) => resolve(args, format),
	}
}

/// Launches the workstation and optionally blocks on its exit.
fn launch(args: LaunchArgs, format: OutputFormat) -> anyhow::Result<()> {
	let config = match args.install_dir {
		Some(dir) => LaunchConfig::with_install_dir(dir),
		None => LaunchConfig::from_env(),
	};

	let mut process = launch_workstation(&config)?;
	let mut report = LaunchReport {
		pid: process.id(),
		executable: process.executable().to_path_buf(),
		exit_code: None,
		still_running: false,
	};

	if args.wait || args.timeout.is_some() {
		match args.timeout {
			Some(secs) => {
				let waited = supervisor::wait_timeout(&mut process, Duration::from_secs(secs))
					.context("waiting for workstation exit")?;
				match waited {
					Some(status) => report.exit_code = status.code(),
					None => report.still_running = true,
				}
			}
			None => {
				let status =
					supervisor::wait(&mut process).context("waiting for workstation exit")?;
				report.exit_code = status.code();
			}
		}
	}

	output::print_success("launch", &report, format);
	Ok(())
}

/// Normalizes a local path against the working directory.
fn resolve(args: ResolveArgs, format: OutputFormat) -> anyhow::Result<()> {
	let path = normalize_local_path(&args.path).ok_or(gxp::Error::PathResolution {
		path: args.path.clone(),
	})?;

	output::print_success("resolve", &ResolveReport { path }, format);
	Ok(())
}
