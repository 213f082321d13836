//! Structured output for scenario and probe results.
//!
//! Every command prints one envelope on stdout: a human-readable rendering
//! in text mode, or a camelCase JSON object for machine consumption:
//!
//! ```json
//! {
//!   "ok": false,
//!   "scenario": "dashboard_loads_successfully",
//!   "loadState": "loaded",
//!   "checks": [
//!     { "name": "is_loaded", "passed": true },
//!     { "name": "header_is_visible", "passed": false, "message": "Header not visible" }
//!   ],
//!   "durationMs": 1234
//! }
//! ```

use colored::Colorize;
use pagecheck_core::{Error, LoadState};
use serde::Serialize;

/// Output format for CLI results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
	/// Human-readable text
	#[default]
	Text,
	/// JSON envelope
	Json,
}

impl std::fmt::Display for OutputFormat {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			OutputFormat::Text => write!(f, "text"),
			OutputFormat::Json => write!(f, "json"),
		}
	}
}

/// Standardized error codes for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
	/// Browser session could not be established
	SessionStartFailed,
	/// Operation on an already-released session
	SessionClosed,
	/// Navigation to URL failed at the session level
	NavigationFailed,
	/// Bounded wait elapsed
	Timeout,
	/// Invalid input or configuration
	InvalidInput,
	/// File I/O error
	IoError,
	/// Unknown/internal error
	InternalError,
}

impl std::fmt::Display for ErrorCode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ErrorCode::SessionStartFailed => write!(f, "SESSION_START_FAILED"),
			ErrorCode::SessionClosed => write!(f, "SESSION_CLOSED"),
			ErrorCode::NavigationFailed => write!(f, "NAVIGATION_FAILED"),
			ErrorCode::Timeout => write!(f, "TIMEOUT"),
			ErrorCode::InvalidInput => write!(f, "INVALID_INPUT"),
			ErrorCode::IoError => write!(f, "IO_ERROR"),
			ErrorCode::InternalError => write!(f, "INTERNAL_ERROR"),
		}
	}
}

/// Error information for failed commands.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunnerError {
	pub code: ErrorCode,
	pub message: String,
}

/// Classifies a harness error into a structured runner error.
pub fn runner_error(err: &Error) -> RunnerError {
	let code = match err {
		Error::SessionStart(_) => ErrorCode::SessionStartFailed,
		Error::SessionClosed => ErrorCode::SessionClosed,
		Error::Navigation { .. } => ErrorCode::NavigationFailed,
		Error::Timeout { .. } => ErrorCode::Timeout,
		Error::Config(_) => ErrorCode::InvalidInput,
		Error::Io(_) => ErrorCode::IoError,
		Error::WebDriver(_) | Error::Json(_) => ErrorCode::InternalError,
	};
	RunnerError {
		code,
		message: err.to_string(),
	}
}

/// One named assertion outcome.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
	pub name: String,

	pub passed: bool,

	/// Human-readable failure message (present only on failure).
	#[serde(skip_serializing_if = "Option::is_none")]
	pub message: Option<String>,
}

/// Result envelope for the `run` command.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioReport {
	/// Whether every check passed.
	pub ok: bool,

	pub scenario: String,

	pub url: String,

	/// Page title, when the load settled successfully.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,

	/// Terminal load state the navigation settled in.
	pub load_state: LoadState,

	pub checks: Vec<CheckResult>,

	pub duration_ms: u64,
}

/// Result envelope for the `probe` command.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbeReport {
	pub ok: bool,

	pub url: String,

	pub selector: String,

	pub visible: bool,

	pub duration_ms: u64,
}

pub fn print_scenario_report(report: &ScenarioReport, format: OutputFormat) {
	match format {
		OutputFormat::Json => print_json(report),
		OutputFormat::Text => {
			println!("scenario {} ({})", report.scenario.bold(), report.url);
			for check in &report.checks {
				if check.passed {
					println!("  {} {}", "PASS".green(), check.name);
				} else {
					let message = check.message.as_deref().unwrap_or("failed");
					println!("  {} {} - {}", "FAIL".red().bold(), check.name, message);
				}
			}
			let failed = report.checks.iter().filter(|c| !c.passed).count();
			if report.ok {
				println!("{} checks passed ({}ms)", report.checks.len(), report.duration_ms);
			} else {
				println!("{} of {} checks failed ({}ms)", failed, report.checks.len(), report.duration_ms);
			}
		}
	}
}

pub fn print_probe_report(report: &ProbeReport, format: OutputFormat) {
	match format {
		OutputFormat::Json => print_json(report),
		OutputFormat::Text => {
			let verdict = if report.visible { "visible".green() } else { "not visible".red() };
			println!("{} on {} is {} ({}ms)", report.selector, report.url, verdict, report.duration_ms);
		}
	}
}

/// Prints a structured error for humans on stderr.
pub fn print_error_stderr(err: &RunnerError) {
	eprintln!("{} [{}] {}", "error:".red().bold(), err.code, err.message);
}

/// Emits the JSON failure envelope on stdout (for machine consumers).
pub fn print_error_envelope(err: &RunnerError) {
	#[derive(Serialize)]
	struct ErrorEnvelope<'a> {
		ok: bool,
		error: &'a RunnerError,
	}
	print_json(&ErrorEnvelope { ok: false, error: err });
}

fn print_json<T: Serialize>(value: &T) {
	match serde_json::to_string_pretty(value) {
		Ok(json) => println!("{json}"),
		Err(err) => eprintln!("failed to serialize output: {err}"),
	}
}
