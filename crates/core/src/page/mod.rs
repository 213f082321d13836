//! Page objects: session-backed wrappers with named locators and boolean
//! load-state predicates.

mod dashboard;
mod state;

pub use dashboard::{DashboardLocators, DashboardPage};
pub use state::LoadState;
use tracing::debug;

use crate::error::{Error, Result};
use crate::locator::Locator;
use crate::session::Session;
use crate::wait::WaitPolicy;

/// Returns whether an element matching `locator` exists and is rendered
/// (non-zero size, not hidden), polling within `wait`.
///
/// Absence and hiddenness both degrade to `false` after the wait window;
/// only session-level failures surface as errors.
pub async fn element_is_visible(session: &Session, locator: &Locator, wait: WaitPolicy) -> Result<bool> {
	let window = wait.window();

	loop {
		if let Some(element) = session.find(locator).await? {
			match element.is_displayed().await {
				Ok(true) => return Ok(true),
				// Hidden elements keep polling: they may still be revealed
				// within the window.
				Ok(false) => {}
				Err(err) if err.to_string().contains("stale") => {
					debug!(target = "pagecheck", locator = %locator, "element went stale, re-resolving");
				}
				Err(err) => return Err(err.into()),
			}
		}

		if window.expired() {
			debug!(
				target = "pagecheck",
				locator = %locator,
				timeout_ms = wait.timeout_ms(),
				"element not visible within wait window"
			);
			return Ok(false);
		}
		window.tick().await;
	}
}

/// Polls until `document.readyState` is `"complete"` or the window elapses.
pub(crate) async fn document_is_ready(session: &Session, wait: WaitPolicy) -> Result<bool> {
	let window = wait.window();

	loop {
		let ready = match session.execute("return document.readyState").await {
			Ok(value) => value.as_str() == Some("complete"),
			Err(Error::SessionClosed) => return Err(Error::SessionClosed),
			// Mid-navigation evaluation failures resolve on a later probe.
			Err(err) => {
				debug!(target = "pagecheck", error = %err, "readyState probe failed");
				false
			}
		};

		if ready {
			return Ok(true);
		}
		if window.expired() {
			return Ok(false);
		}
		window.tick().await;
	}
}
