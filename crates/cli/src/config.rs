//! Runner configuration: CLI flags merged over an optional JSON config file.

use std::path::Path;

use anyhow::Context;
use pagecheck_core::{Error, Result, SessionConfig, WaitPolicy};
use serde::Deserialize;

use crate::cli::{RunArgs, SessionArgs};

/// Recognized config-file options.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
	pub target_url: Option<String>,
	pub implicit_wait_seconds: Option<u64>,
	pub maximize: Option<bool>,
}

impl FileConfig {
	pub fn load(path: &Path) -> anyhow::Result<Self> {
		let raw = std::fs::read_to_string(path).with_context(|| format!("read config file {}", path.display()))?;
		serde_json::from_str(&raw).with_context(|| format!("parse config file {}", path.display()))
	}
}

/// Fully resolved runner settings.
#[derive(Debug, Clone)]
pub struct Settings {
	pub target_url: String,
	pub session: SessionConfig,
}

impl Settings {
	/// Resolves run settings. Precedence: flag, then config file, then
	/// default (10s wait, no maximize).
	pub fn resolve(args: &RunArgs) -> Result<Self> {
		let file = match &args.config {
			Some(path) => FileConfig::load(path).map_err(|e| Error::Config(format!("{e:#}")))?,
			None => FileConfig::default(),
		};

		let target_url = args
			.url
			.clone()
			.or(file.target_url)
			.ok_or_else(|| Error::Config("no target URL: pass one as an argument or set target_url in the config file".into()))?;
		url::Url::parse(&target_url).map_err(|e| Error::Config(format!("invalid target URL {target_url}: {e}")))?;

		let wait_secs = args.session.wait_secs.or(file.implicit_wait_seconds).unwrap_or(10);
		let maximize = args.session.maximize || file.maximize.unwrap_or(false);

		let mut session = session_config(&args.session);
		session.wait = WaitPolicy::from_secs(wait_secs);
		session.maximize = maximize;

		Ok(Self { target_url, session })
	}

	/// Settings for commands that take their URL directly, with no config
	/// file in play.
	pub fn direct(url: &str, args: &SessionArgs) -> Self {
		let mut session = session_config(args);
		session.wait = WaitPolicy::from_secs(args.wait_secs.unwrap_or(10));
		Self {
			target_url: url.to_string(),
			session,
		}
	}
}

fn session_config(args: &SessionArgs) -> SessionConfig {
	let mut session = SessionConfig::new();
	session.webdriver_url = args.webdriver.clone();
	session.headless = !args.headful;
	session.maximize = args.maximize;
	session
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use clap::Parser;
	use tempfile::NamedTempFile;

	use super::*;
	use crate::cli::{Cli, Commands};

	fn run_args(argv: &[&str]) -> RunArgs {
		let cli = Cli::try_parse_from(argv).unwrap();
		match cli.command {
			Commands::Run(args) => args,
			_ => panic!("Expected Run command"),
		}
	}

	fn config_file(contents: &str) -> NamedTempFile {
		let mut file = NamedTempFile::new().unwrap();
		file.write_all(contents.as_bytes()).unwrap();
		file
	}

	#[test]
	fn file_supplies_recognized_options() {
		let file = config_file(r#"{"target_url": "https://dash.example.com", "implicit_wait_seconds": 3, "maximize": true}"#);
		let args = run_args(&["pagecheck", "run", "--config", file.path().to_str().unwrap()]);
		let settings = Settings::resolve(&args).unwrap();

		assert_eq!(settings.target_url, "https://dash.example.com");
		assert_eq!(settings.session.wait.timeout_ms(), 3_000);
		assert!(settings.session.maximize);
	}

	#[test]
	fn flags_take_precedence_over_file() {
		let file = config_file(r#"{"target_url": "https://dash.example.com", "implicit_wait_seconds": 3}"#);
		let args = run_args(&[
			"pagecheck",
			"run",
			"https://other.example.com",
			"--wait-secs",
			"7",
			"--config",
			file.path().to_str().unwrap(),
		]);
		let settings = Settings::resolve(&args).unwrap();

		assert_eq!(settings.target_url, "https://other.example.com");
		assert_eq!(settings.session.wait.timeout_ms(), 7_000);
	}

	#[test]
	fn unknown_file_fields_are_rejected() {
		let file = config_file(r#"{"target_url": "https://dash.example.com", "implicit_wait": 3}"#);
		let args = run_args(&["pagecheck", "run", "--config", file.path().to_str().unwrap()]);
		let err = Settings::resolve(&args).unwrap_err();
		assert!(err.to_string().contains("parse config file"));
	}

	#[test]
	fn relative_target_url_is_rejected() {
		let args = run_args(&["pagecheck", "run", "dash.example.com"]);
		let err = Settings::resolve(&args).unwrap_err();
		assert!(err.to_string().contains("invalid target URL"));
	}

	#[test]
	fn missing_target_url_is_an_error() {
		let args = run_args(&["pagecheck", "run"]);
		let err = Settings::resolve(&args).unwrap_err();
		assert!(err.to_string().contains("no target URL"));
	}

	#[test]
	fn defaults_apply_without_file_or_flags() {
		let args = run_args(&["pagecheck", "run", "https://dash.example.com"]);
		let settings = Settings::resolve(&args).unwrap();

		assert_eq!(settings.session.wait.timeout_ms(), 10_000);
		assert!(!settings.session.maximize);
		assert!(settings.session.headless);
	}
}
