use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use super::resolved::{ConfigError, ConfigSources, ResolvedConfig, SettingSource};
use crate::cli::CliArgs;

mod interaction;
mod search;
mod storage;
mod ui;

use interaction::InteractionSection;
use search::SearchSection;
use storage::StorageSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	interaction: InteractionSection,
	search: SearchSection,
	ui: UiSection,
	storage: StorageSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.interaction.apply_cli_overrides(cli);
		self.search.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
		self.storage.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			multi_tap_ms: detect_source(
				cli.multi_tap_ms.is_some(),
				self.interaction.multi_tap_ms.is_some(),
				"TEXTPIN__INTERACTION__MULTI_TAP_MS",
				"--multi-tap-ms",
				"interaction.multi_tap_ms",
			),
			debounce_ms: detect_source(
				cli.debounce_ms.is_some(),
				self.search.debounce_ms.is_some(),
				"TEXTPIN__SEARCH__DEBOUNCE_MS",
				"--debounce-ms",
				"search.debounce_ms",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"TEXTPIN__UI__THEME",
				"--theme",
				"ui.theme",
			),
		};

		let interaction = self.interaction.finalize();
		let search = self.search.finalize();
		let ui = self.ui.finalize().map_err(|(value, reason)| {
			Error::new(ConfigError::invalid(
				"ui.theme",
				value,
				sources.source_for_theme(),
				reason,
			))
		})?;
		let storage = self.storage.finalize()?;

		let config = ResolvedConfig {
			multi_tap: interaction.multi_tap,
			tap_slop: interaction.tap_slop,
			debounce: search.debounce,
			initial_query: search.initial_query,
			theme: ui.theme,
			title: ui.title,
			store_path: storage.path,
			ephemeral: storage.ephemeral,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
