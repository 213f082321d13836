use serde_json::json;

use crate::wait::WaitPolicy;

/// Default WebDriver endpoint (chromedriver).
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:9515";

/// Fully owned browser-session configuration.
///
/// This type is the stable handoff between scenario orchestration and the
/// session acquisition internals.
#[derive(Debug, Clone)]
pub struct SessionConfig {
	/// WebDriver server endpoint the session connects to.
	pub webdriver_url: String,
	/// Whether the browser runs headless.
	pub headless: bool,
	/// Whether the window is maximized after the session starts.
	pub maximize: bool,
	/// Wait policy handed to every element lookup made through the session.
	pub wait: WaitPolicy,
}

impl SessionConfig {
	pub fn new() -> Self {
		Self {
			webdriver_url: DEFAULT_WEBDRIVER_URL.to_string(),
			headless: true,
			maximize: false,
			wait: WaitPolicy::default(),
		}
	}

	/// W3C capabilities for the new-session request.
	pub(crate) fn capabilities(&self) -> serde_json::Map<String, serde_json::Value> {
		let mut caps = serde_json::map::Map::new();
		let mut args: Vec<&str> = Vec::new();
		if self.headless {
			args.push("--headless");
			args.push("--disable-gpu");
		}
		if self.maximize {
			args.push("--start-maximized");
		}
		caps.insert("goog:chromeOptions".to_string(), json!({ "args": args }));
		caps
	}
}

impl Default for SessionConfig {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_are_headless_chromedriver() {
		let cfg = SessionConfig::new();
		assert_eq!(cfg.webdriver_url, DEFAULT_WEBDRIVER_URL);
		assert!(cfg.headless);
		assert!(!cfg.maximize);
		assert_eq!(cfg.wait, WaitPolicy::from_secs(10));
	}

	#[test]
	fn capabilities_include_headless_args() {
		let cfg = SessionConfig::new();
		let caps = cfg.capabilities();
		let args = caps["goog:chromeOptions"]["args"].as_array().unwrap();
		assert!(args.contains(&serde_json::json!("--headless")));
	}

	#[test]
	fn capabilities_omit_headless_when_headful() {
		let mut cfg = SessionConfig::new();
		cfg.headless = false;
		cfg.maximize = true;
		let caps = cfg.capabilities();
		let args = caps["goog:chromeOptions"]["args"].as_array().unwrap();
		assert!(!args.contains(&serde_json::json!("--headless")));
		assert!(args.contains(&serde_json::json!("--start-maximized")));
	}
}
