pub mod probe;
pub mod run;

use pagecheck_core::Result;

use crate::cli::{Cli, Commands};
use crate::output::OutputFormat;

/// Executes the selected command. `Ok(true)` means every check passed.
pub async fn dispatch(cli: Cli, format: OutputFormat) -> Result<bool> {
	match cli.command {
		Commands::Run(args) => run::execute(args, format).await,
		Commands::Probe(args) => probe::execute(args, format).await,
	}
}
