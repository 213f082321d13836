use std::path::PathBuf;

use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{Args, Parser, Subcommand};
use pagecheck_core::session::DEFAULT_WEBDRIVER_URL;

use crate::output::OutputFormat;

/// Help output styled after cargo's colors.
fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().bold())
		.usage(AnsiColor::Green.on_default().bold())
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Cyan.on_default())
		.valid(AnsiColor::Cyan.on_default())
}

/// Root CLI for pagecheck.
#[derive(Parser, Debug)]
#[command(name = "pagecheck")]
#[command(about = "Browser-driven page verification - check that a page loads and renders its landmarks")]
#[command(version)]
#[command(styles = cli_styles())]
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
	/// Run the dashboard verification scenario against a target URL.
	Run(RunArgs),
	/// Check visibility of a single selector on a page.
	Probe(ProbeArgs),
}

/// Session flags shared by all subcommands.
#[derive(Args, Debug, Clone)]
pub struct SessionArgs {
	/// WebDriver server endpoint
	#[arg(long, value_name = "URL", default_value = DEFAULT_WEBDRIVER_URL)]
	pub webdriver: String,

	/// Wait window for navigation and element lookups, in seconds
	#[arg(long, value_name = "SECS")]
	pub wait_secs: Option<u64>,

	/// Maximize the browser window after session start
	#[arg(long)]
	pub maximize: bool,

	/// Run the browser with a visible window instead of headless
	#[arg(long)]
	pub headful: bool,
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
	/// Target URL (positional; may instead come from --config)
	#[arg(value_name = "URL")]
	pub url: Option<String>,

	/// JSON config file with target_url, implicit_wait_seconds, maximize
	#[arg(long, value_name = "FILE")]
	pub config: Option<PathBuf>,

	#[command(flatten)]
	pub session: SessionArgs,
}

#[derive(Args, Debug, Clone)]
pub struct ProbeArgs {
	/// Target URL
	#[arg(value_name = "URL")]
	pub url: String,

	/// CSS selector to check
	#[arg(short = 's', long, value_name = "SELECTOR")]
	pub selector: String,

	#[command(flatten)]
	pub session: SessionArgs,
}

#[cfg(test)]
mod tests {
	use clap::Parser;

	use super::*;

	#[test]
	fn parse_run_command() {
		let cli = Cli::try_parse_from(["pagecheck", "run", "https://example.com", "--wait-secs", "5"]).unwrap();
		match cli.command {
			Commands::Run(args) => {
				assert_eq!(args.url.as_deref(), Some("https://example.com"));
				assert_eq!(args.session.wait_secs, Some(5));
				assert!(!args.session.maximize);
				assert_eq!(args.session.webdriver, DEFAULT_WEBDRIVER_URL);
			}
			_ => panic!("Expected Run command"),
		}
	}

	#[test]
	fn parse_run_without_url() {
		let cli = Cli::try_parse_from(["pagecheck", "run", "--config", "dash.json"]).unwrap();
		match cli.command {
			Commands::Run(args) => {
				assert_eq!(args.url, None);
				assert_eq!(args.config, Some(PathBuf::from("dash.json")));
			}
			_ => panic!("Expected Run command"),
		}
	}

	#[test]
	fn parse_probe_command() {
		let cli = Cli::try_parse_from(["pagecheck", "probe", "https://example.com", "-s", "#header", "--maximize"]).unwrap();
		match cli.command {
			Commands::Probe(args) => {
				assert_eq!(args.url, "https://example.com");
				assert_eq!(args.selector, "#header");
				assert!(args.session.maximize);
			}
			_ => panic!("Expected Probe command"),
		}
	}

	#[test]
	fn probe_requires_selector() {
		assert!(Cli::try_parse_from(["pagecheck", "probe", "https://example.com"]).is_err());
	}

	#[test]
	fn verbose_flag_counts() {
		let cli = Cli::try_parse_from(["pagecheck", "-vv", "run", "https://example.com"]).unwrap();
		assert_eq!(cli.verbose, 2);
	}

	#[test]
	fn format_flag_parses_json() {
		let cli = Cli::try_parse_from(["pagecheck", "-f", "json", "run", "https://example.com"]).unwrap();
		assert_eq!(cli.format, OutputFormat::Json);
	}
}
