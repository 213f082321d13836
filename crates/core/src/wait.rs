//! Explicit wait policy for bounded element lookups.
//!
//! Lookups never wait on ambient session state; every call site receives a
//! [`WaitPolicy`] value and opens a [`WaitWindow`] for one bounded poll loop.

use std::time::{Duration, Instant};

/// Upper bound and poll cadence for one class of lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitPolicy {
	timeout: Duration,
	poll_interval: Duration,
}

impl WaitPolicy {
	pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(250);

	/// Policy with the given timeout and the default poll cadence.
	///
	/// The poll interval is clamped to the timeout so a single sleep can
	/// never overshoot the window.
	pub fn new(timeout: Duration) -> Self {
		Self {
			timeout,
			poll_interval: Self::DEFAULT_POLL_INTERVAL.min(timeout),
		}
	}

	pub fn from_secs(secs: u64) -> Self {
		Self::new(Duration::from_secs(secs))
	}

	pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
		self.poll_interval = poll_interval.min(self.timeout);
		self
	}

	pub fn timeout(&self) -> Duration {
		self.timeout
	}

	pub fn timeout_ms(&self) -> u64 {
		self.timeout.as_millis() as u64
	}

	pub fn poll_interval(&self) -> Duration {
		self.poll_interval
	}

	/// Opens a fresh wait window starting now.
	pub fn window(&self) -> WaitWindow {
		WaitWindow {
			deadline: Instant::now() + self.timeout,
			poll_interval: self.poll_interval,
		}
	}
}

impl Default for WaitPolicy {
	fn default() -> Self {
		Self::from_secs(10)
	}
}

/// One in-flight bounded wait: a deadline plus the sleep between probes.
#[derive(Debug, Clone, Copy)]
pub struct WaitWindow {
	deadline: Instant,
	poll_interval: Duration,
}

impl WaitWindow {
	pub fn expired(&self) -> bool {
		Instant::now() >= self.deadline
	}

	/// Sleeps one poll interval, shortened to whatever remains of the window.
	pub async fn tick(&self) {
		let remaining = self.deadline.saturating_duration_since(Instant::now());
		tokio::time::sleep(self.poll_interval.min(remaining)).await;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn poll_interval_clamped_to_timeout() {
		let policy = WaitPolicy::new(Duration::from_millis(100));
		assert_eq!(policy.poll_interval(), Duration::from_millis(100));

		let policy = WaitPolicy::from_secs(10);
		assert_eq!(policy.poll_interval(), WaitPolicy::DEFAULT_POLL_INTERVAL);
	}

	#[test]
	fn with_poll_interval_clamps() {
		let policy = WaitPolicy::from_secs(1).with_poll_interval(Duration::from_secs(5));
		assert_eq!(policy.poll_interval(), Duration::from_secs(1));
	}

	#[test]
	fn timeout_ms_round_trip() {
		assert_eq!(WaitPolicy::from_secs(10).timeout_ms(), 10_000);
	}

	#[tokio::test]
	async fn window_expires() {
		let window = WaitPolicy::new(Duration::from_millis(20)).window();
		assert!(!window.expired());
		window.tick().await;
		window.tick().await;
		assert!(window.expired());
	}

	#[tokio::test]
	async fn tick_never_sleeps_past_deadline() {
		let window = WaitPolicy::new(Duration::from_millis(30))
			.with_poll_interval(Duration::from_millis(30))
			.window();
		let start = Instant::now();
		window.tick().await;
		window.tick().await;
		// Second tick sees an expired window and sleeps for (almost) nothing.
		assert!(start.elapsed() < Duration::from_millis(120));
	}
}
