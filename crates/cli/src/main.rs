use clap::Parser;
use pagecheck_cli::{
	cli::Cli,
	commands, logging,
	output::{self, OutputFormat},
};

#[tokio::main]
async fn main() {
	let cli = Cli::parse();
	logging::init_logging(cli.verbose);

	let format = cli.format;

	match commands::dispatch(cli, format).await {
		Ok(true) => {}
		Ok(false) => std::process::exit(1),
		Err(err) => {
			let runner_err = output::runner_error(&err);
			// Always print to stderr for humans
			output::print_error_stderr(&runner_err);
			// Also emit the JSON envelope with ok=false (for machine consumers)
			if format == OutputFormat::Json {
				output::print_error_envelope(&runner_err);
			}
			std::process::exit(1);
		}
	}
}
