use serde::Serialize;

/// Per-scenario page load state.
///
/// `NotNavigated -> Navigating -> Loaded | LoadTimedOut`. Both terminal
/// states permit predicate queries; after a timed-out load, predicates on
/// elements that depend on post-load rendering are expected to come back
/// false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadState {
	NotNavigated,
	Navigating,
	Loaded,
	LoadTimedOut,
}

impl LoadState {
	pub fn is_terminal(&self) -> bool {
		matches!(self, LoadState::Loaded | LoadState::LoadTimedOut)
	}
}

impl std::fmt::Display for LoadState {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			LoadState::NotNavigated => write!(f, "not_navigated"),
			LoadState::Navigating => write!(f, "navigating"),
			LoadState::Loaded => write!(f, "loaded"),
			LoadState::LoadTimedOut => write!(f, "load_timed_out"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn terminal_states() {
		assert!(!LoadState::NotNavigated.is_terminal());
		assert!(!LoadState::Navigating.is_terminal());
		assert!(LoadState::Loaded.is_terminal());
		assert!(LoadState::LoadTimedOut.is_terminal());
	}

	#[test]
	fn serializes_snake_case() {
		let json = serde_json::to_string(&LoadState::LoadTimedOut).unwrap();
		assert_eq!(json, "\"load_timed_out\"");
	}
}
