use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use textpin::ui::ThemeName;

use super::RawConfig;
use crate::cli::CliArgs;

#[test]
fn cli_overrides_take_precedence() {
	let cli = CliArgs::parse_from([
		"textpin",
		"--multi-tap-ms",
		"250",
		"--tap-slop",
		"2",
		"--debounce-ms",
		"50",
		"--query",
		"needle",
		"--theme",
		"dark",
		"--title",
		"notes",
		"--store",
		"/tmp/picks.json",
		"--ephemeral",
	]);

	let mut config = RawConfig::default();
	config.search.debounce_ms = Some(900);
	config.ui.theme = Some("light".into());
	config.apply_cli_overrides(&cli);

	assert_eq!(config.interaction.multi_tap_ms, Some(250));
	assert_eq!(config.interaction.tap_slop, Some(2));
	assert_eq!(config.search.debounce_ms, Some(50));
	assert_eq!(config.search.initial_query.as_deref(), Some("needle"));
	assert_eq!(config.ui.theme.as_deref(), Some("dark"));
	assert_eq!(config.ui.title.as_deref(), Some("notes"));
	assert_eq!(config.storage.path, Some(PathBuf::from("/tmp/picks.json")));
	assert_eq!(config.storage.ephemeral, Some(true));
}

#[test]
fn defaults_resolve_when_nothing_is_set() {
	let cli = CliArgs::parse_from(["textpin", "--store", "/tmp/picks.json"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	let resolved = config.resolve(&cli).unwrap();
	assert_eq!(resolved.multi_tap, Duration::from_millis(500));
	assert_eq!(resolved.tap_slop, 1);
	assert_eq!(resolved.debounce, Duration::from_millis(300));
	assert!(resolved.initial_query.is_empty());
	assert_eq!(resolved.theme, ThemeName::Light);
	assert_eq!(resolved.title, None);
	assert!(!resolved.ephemeral);
}

#[test]
fn unknown_theme_names_the_config_key() {
	let cli = CliArgs::parse_from(["textpin", "--store", "/tmp/picks.json"]);
	let mut config = RawConfig::default();
	config.ui.theme = Some("solarized".into());

	let err = config.resolve(&cli).unwrap_err().to_string();
	assert!(err.contains("ui.theme"), "{err}");
	assert!(err.contains("solarized"), "{err}");
	assert!(err.contains("configuration key"), "{err}");
}

#[test]
fn zero_multi_tap_window_is_rejected_with_its_flag() {
	let cli = CliArgs::parse_from(["textpin", "--multi-tap-ms", "0", "--store", "/tmp/p.json"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	let err = config.resolve(&cli).unwrap_err().to_string();
	assert!(err.contains("--multi-tap-ms"), "{err}");
}
