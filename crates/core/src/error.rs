use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
	/// WebDriver session could not be established. Fatal; callers do not
	/// retry.
	#[error("session start failed: {0}")]
	SessionStart(String),

	/// Operation attempted on a session that has already been released.
	#[error("session already closed")]
	SessionClosed,

	/// Session-level navigation transport failure. The page object degrades
	/// this to a timed-out load state; it only escapes for closed sessions.
	#[error("navigation failed: {url}")]
	Navigation {
		url: String,
		#[source]
		source: fantoccini::error::CmdError,
	},

	#[error("timeout after {ms}ms waiting for: {condition}")]
	Timeout { ms: u64, condition: String },

	#[error("invalid configuration: {0}")]
	Config(String),

	#[error(transparent)]
	WebDriver(#[from] fantoccini::error::CmdError),

	#[error(transparent)]
	Json(#[from] serde_json::Error),

	#[error(transparent)]
	Io(#[from] std::io::Error),
}

impl Error {
	/// True for failures that abort a scenario outright, as opposed to
	/// content conditions that degrade to a false predicate result.
	pub fn is_fatal(&self) -> bool {
		matches!(self, Error::SessionStart(_) | Error::SessionClosed)
	}
}
