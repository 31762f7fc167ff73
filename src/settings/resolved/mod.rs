use std::path::PathBuf;
use std::time::Duration;

use textpin::ui::ThemeName;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
	pub multi_tap: Duration,
	pub tap_slop: u16,
	pub debounce: Duration,
	pub initial_query: String,
	pub theme: ThemeName,
	pub title: Option<String>,
	pub store_path: PathBuf,
	pub ephemeral: bool,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}

#[cfg(test)]
pub(super) fn sample() -> ResolvedConfig {
	ResolvedConfig {
		multi_tap: Duration::from_millis(500),
		tap_slop: 1,
		debounce: Duration::from_millis(300),
		initial_query: String::new(),
		theme: ThemeName::Light,
		title: None,
		store_path: PathBuf::from("/tmp/selections.json"),
		ephemeral: false,
	}
}
