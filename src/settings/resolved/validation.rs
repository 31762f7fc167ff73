use std::time::Duration;

use super::{ConfigError, ConfigSources, ResolvedConfig};

const MAX_DEBOUNCE: Duration = Duration::from_secs(5);

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.multi_tap.is_zero() {
		return Err(ConfigError::invalid(
			"interaction.multi_tap_ms",
			config.multi_tap.as_millis().to_string(),
			sources.source_for_multi_tap(),
			"must be greater than zero",
		));
	}

	if config.debounce > MAX_DEBOUNCE {
		return Err(ConfigError::invalid(
			"search.debounce_ms",
			config.debounce.as_millis().to_string(),
			sources.source_for_debounce(),
			format!("must be at most {}", MAX_DEBOUNCE.as_millis()),
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::super::{SettingSource, sample};
	use super::*;

	#[test]
	fn defaults_are_valid() {
		assert!(validate(&sample(), &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_zero_multi_tap_window() {
		let config = ResolvedConfig {
			multi_tap: Duration::ZERO,
			..sample()
		};
		let sources = ConfigSources {
			multi_tap_ms: Some(SettingSource::CliFlag("--multi-tap-ms")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert!(matches!(err.key, "interaction.multi_tap_ms"));
		let message = err.to_string();
		assert!(message.contains("value: 0"));
		assert!(message.contains("CLI flag"));
	}

	#[test]
	fn validation_rejects_long_debounce() {
		let config = ResolvedConfig {
			debounce: Duration::from_millis(5001),
			..sample()
		};
		let sources = ConfigSources {
			debounce_ms: Some(SettingSource::Environment("TEXTPIN__SEARCH__DEBOUNCE_MS")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert!(matches!(err.key, "search.debounce_ms"));
		let message = err.to_string();
		assert!(message.contains("value: 5001"));
		assert!(message.contains("environment variable"));
	}

	#[test]
	fn debounce_at_the_limit_is_accepted() {
		let config = ResolvedConfig {
			debounce: MAX_DEBOUNCE,
			..sample()
		};
		assert!(validate(&config, &ConfigSources::default()).is_ok());
	}
}
