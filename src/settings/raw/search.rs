use std::time::Duration;

use serde::Deserialize;
use textpin::ui::DEFAULT_DEBOUNCE;

use crate::cli::CliArgs;

/// Search bar values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SearchSection {
	pub(super) debounce_ms: Option<u64>,
	pub(super) initial_query: Option<String>,
}

pub(super) struct SearchResolution {
	pub(super) debounce: Duration,
	pub(super) initial_query: String,
}

impl SearchSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(ms) = cli.debounce_ms {
			self.debounce_ms = Some(ms);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
	}

	pub(super) fn finalize(self) -> SearchResolution {
		SearchResolution {
			debounce: self
				.debounce_ms
				.map(Duration::from_millis)
				.unwrap_or(DEFAULT_DEBOUNCE),
			initial_query: self.initial_query.unwrap_or_default(),
		}
	}
}
