//! Scenario definitions and execution over a scoped session.

use std::time::Instant;

use pagecheck_core::page::element_is_visible;
use pagecheck_core::{DashboardPage, LoadState, Locator, Result, with_session};
use tracing::info;

use crate::config::Settings;
use crate::output::{CheckResult, ProbeReport, ScenarioReport};

pub const DASHBOARD_SCENARIO: &str = "dashboard_loads_successfully";

/// One named assertion against the dashboard page.
pub struct Check {
	pub name: &'static str,
	/// Reported when the predicate comes back false.
	pub failure_message: &'static str,
	kind: CheckKind,
}

#[derive(Clone, Copy)]
enum CheckKind {
	IsLoaded,
	HeaderVisible,
	SidebarVisible,
}

/// The shipped dashboard scenario, in assertion order.
pub fn dashboard_checks() -> Vec<Check> {
	vec![
		Check {
			name: "is_loaded",
			failure_message: "Dashboard failed to load",
			kind: CheckKind::IsLoaded,
		},
		Check {
			name: "header_is_visible",
			failure_message: "Header not visible",
			kind: CheckKind::HeaderVisible,
		},
		Check {
			name: "sidebar_is_visible",
			failure_message: "Sidebar not visible",
			kind: CheckKind::SidebarVisible,
		},
	]
}

async fn evaluate(check: &Check, page: &DashboardPage) -> Result<bool> {
	match check.kind {
		CheckKind::IsLoaded => page.is_loaded().await,
		CheckKind::HeaderVisible => page.header_is_visible().await,
		CheckKind::SidebarVisible => page.sidebar_is_visible().await,
	}
}

/// Runs the dashboard scenario: acquire a session, navigate, evaluate every
/// check in order, release on all exit paths.
///
/// Failed checks are ordinary results, not errors; only infrastructure
/// failures surface as `Err`.
pub async fn run_scenario(settings: &Settings) -> Result<ScenarioReport> {
	let start = Instant::now();
	let target_url = settings.target_url.clone();

	let (load_state, title, checks) = with_session(&settings.session, |session| {
		Box::pin(async move {
			let mut page = DashboardPage::new(session);
			let load_state = page.navigate(&target_url).await?;
			let title = match load_state {
				LoadState::Loaded => page.title().await.ok().filter(|t| !t.is_empty()),
				_ => None,
			};

			let mut results = Vec::new();
			for check in dashboard_checks() {
				let passed = evaluate(&check, &page).await?;
				if !passed {
					info!(target = "pagecheck", check = check.name, "check failed");
				}
				results.push(CheckResult {
					name: check.name.to_string(),
					passed,
					message: (!passed).then(|| check.failure_message.to_string()),
				});
			}

			Ok((load_state, title, results))
		})
	})
	.await?;

	let ok = checks.iter().all(|c| c.passed);
	Ok(ScenarioReport {
		ok,
		scenario: DASHBOARD_SCENARIO.to_string(),
		url: settings.target_url.clone(),
		title,
		load_state,
		checks,
		duration_ms: start.elapsed().as_millis() as u64,
	})
}

/// One-off visibility check of a CSS selector on a page.
pub async fn run_probe(settings: &Settings, selector: &str) -> Result<ProbeReport> {
	let start = Instant::now();
	let target_url = settings.target_url.clone();
	let locator = Locator::css(selector);

	let visible = with_session(&settings.session, |session| {
		Box::pin(async move {
			session.goto(&target_url).await?;
			element_is_visible(session, &locator, session.wait()).await
		})
	})
	.await?;

	Ok(ProbeReport {
		ok: visible,
		url: settings.target_url.clone(),
		selector: selector.to_string(),
		visible,
		duration_ms: start.elapsed().as_millis() as u64,
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn dashboard_checks_keep_assertion_order() {
		let checks = dashboard_checks();
		let names: Vec<&str> = checks.iter().map(|c| c.name).collect();
		assert_eq!(names, ["is_loaded", "header_is_visible", "sidebar_is_visible"]);
	}

	#[test]
	fn failure_messages_are_human_readable() {
		let checks = dashboard_checks();
		assert_eq!(checks[0].failure_message, "Dashboard failed to load");
		assert_eq!(checks[1].failure_message, "Header not visible");
		assert_eq!(checks[2].failure_message, "Sidebar not visible");
	}
}
