//! Single-selector visibility probe command.

use pagecheck_core::Result;
use tracing::info;

use crate::cli::ProbeArgs;
use crate::config::Settings;
use crate::output::{self, OutputFormat};
use crate::scenario;

pub async fn execute(args: ProbeArgs, format: OutputFormat) -> Result<bool> {
	let settings = Settings::direct(&args.url, &args.session);
	info!(target = "pagecheck", url = %settings.target_url, selector = %args.selector, "probe");

	let report = scenario::run_probe(&settings, &args.selector).await?;
	output::print_probe_report(&report, format);

	Ok(report.ok)
}
