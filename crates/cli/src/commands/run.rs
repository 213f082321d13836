//! Dashboard verification scenario command.

use pagecheck_core::Result;
use tracing::info;

use crate::cli::RunArgs;
use crate::config::Settings;
use crate::output::{self, OutputFormat};
use crate::scenario;

pub async fn execute(args: RunArgs, format: OutputFormat) -> Result<bool> {
	let settings = Settings::resolve(&args)?;
	info!(
		target = "pagecheck",
		url = %settings.target_url,
		webdriver = %settings.session.webdriver_url,
		timeout_ms = settings.session.wait.timeout_ms(),
		"run scenario"
	);

	let report = scenario::run_scenario(&settings).await?;
	output::print_scenario_report(&report, format);

	Ok(report.ok)
}
