use clap::{Args, Parser, Subcommand};

use crate::output::OutputFormat;

/// Root CLI for the workstation bootstrap harness.
#[derive(Parser, Debug)]
#[command(name = "gxp")]
#[command(about = "SOCET GXP bootstrap - launch the workstation from its configured install")]
#[command(version)]
pub struct Cli {
	/// Increase verbosity (-v info, -vv debug)
	#[arg(short, long, global = true, action = clap::ArgAction::Count)]
	pub verbose: u8,

	/// Output format: text (default) or json
	#[arg(short = 'f', long, global = true, value_enum, default_value = "text")]
	pub format: OutputFormat,

	#[command(subcommand)]
	pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
	/// Launch the workstation from the configured install directory.
	Launch(LaunchArgs),
	/// Normalize a local path against the working directory.
	Resolve(ResolveArgs),
}

impl Commands {
	/// Command name used in output envelopes.
	pub fn name(&self) -> &'static str {
		match self {
			Commands::Launch(_) => "launch",
			Commands::Resolve(_) => "resolve",
		}
	}
}

#[derive(Args, Debug, Clone)]
pub struct LaunchArgs {
	/// Install bin directory (defaults to $SOCETGXPEXE).
	#[arg(long, value_name = "DIR")]
	pub install_dir: Option<String>,

	/// Block until the launched workstation exits.
	#[arg(long)]
	pub wait: bool,

	/// Give up waiting after this many seconds (implies --wait).
	#[arg(long, value_name = "SECS")]
	pub timeout: Option<u64>,
}

#[derive(Args, Debug, Clone)]
pub struct ResolveArgs {
	/// Path to normalize.
	#[arg(value_name = "PATH")]
	pub path: String,
}
