use tracing::{debug, info};

use super::state::LoadState;
use super::{document_is_ready, element_is_visible};
use crate::error::{Error, Result};
use crate::locator::Locator;
use crate::session::Session;

/// Named locators for the dashboard under test.
///
/// Each locator is stable for the lifetime of the page; override the
/// defaults when the deployment uses different landmark ids.
#[derive(Debug, Clone)]
pub struct DashboardLocators {
	/// Root landmark whose presence defines "loaded".
	pub root: Locator,
	pub header: Locator,
	pub sidebar: Locator,
}

impl Default for DashboardLocators {
	fn default() -> Self {
		Self {
			root: Locator::css("#dashboard"),
			header: Locator::id("header"),
			sidebar: Locator::id("sidebar"),
		}
	}
}

/// Page object for the dashboard: a session handle, named locators, and the
/// load-state machine. Created per navigation and discarded with the
/// scenario; carries no state across scenarios.
pub struct DashboardPage {
	session: Session,
	locators: DashboardLocators,
	state: LoadState,
}

impl DashboardPage {
	pub fn new(session: &Session) -> Self {
		Self::with_locators(session, DashboardLocators::default())
	}

	pub fn with_locators(session: &Session, locators: DashboardLocators) -> Self {
		Self {
			session: session.clone(),
			locators,
			state: LoadState::NotNavigated,
		}
	}

	pub fn state(&self) -> LoadState {
		self.state
	}

	/// Loads `url` and blocks until the DOM reaches a ready state or the
	/// session's wait window elapses.
	///
	/// Navigation-level failures (unreachable host, ready-state timeout) end
	/// in [`LoadState::LoadTimedOut`] and are reported through the
	/// predicates; only session-level failures propagate.
	pub async fn navigate(&mut self, url: &str) -> Result<LoadState> {
		self.state = LoadState::Navigating;
		info!(target = "pagecheck", url, "navigate");

		match self.session.goto(url).await {
			Ok(()) => {}
			Err(Error::SessionClosed) => return Err(Error::SessionClosed),
			Err(err) => {
				debug!(target = "pagecheck", url, error = %err, "navigation failed");
				self.state = LoadState::LoadTimedOut;
				return Ok(self.state);
			}
		}

		self.state = if document_is_ready(&self.session, self.session.wait()).await? {
			LoadState::Loaded
		} else {
			LoadState::LoadTimedOut
		};

		debug!(target = "pagecheck", url, state = %self.state, "navigation settled");
		Ok(self.state)
	}

	/// Composite load predicate: true only when the root landmark resolves
	/// (displayed) within the wait window.
	pub async fn is_loaded(&self) -> Result<bool> {
		self.element_is_visible(&self.locators.root).await
	}

	pub async fn header_is_visible(&self) -> Result<bool> {
		self.element_is_visible(&self.locators.header).await
	}

	pub async fn sidebar_is_visible(&self) -> Result<bool> {
		self.element_is_visible(&self.locators.sidebar).await
	}

	/// Generic visibility predicate under the session's wait policy.
	pub async fn element_is_visible(&self, locator: &Locator) -> Result<bool> {
		element_is_visible(&self.session, locator, self.session.wait()).await
	}

	pub async fn title(&self) -> Result<String> {
		self.session.title().await
	}

	pub async fn current_url(&self) -> Result<url::Url> {
		self.session.current_url().await
	}
}
