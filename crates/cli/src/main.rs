use clap::Parser;
use gxp_cli::{
	cli::Cli,
	commands, logging,
	output::{self, CommandError},
};

fn main() {
	let cli = Cli::parse();
	logging::init_logging(cli.verbose);

	let format = cli.format;
	let command = cli.command.name();

	if let Err(err) = commands::dispatch(cli) {
		let os_code = err
			.downcast_ref::<gxp::Error>()
			.and_then(gxp::Error::os_error_code);
		output::print_failure(
			command,
			CommandError {
				message: format!("{err:#}"),
				os_code,
			},
			format,
		);
		std::process::exit(1);
	}
}
