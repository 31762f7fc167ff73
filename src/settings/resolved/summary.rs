use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	println!("  Multi-tap window: {} ms", config.multi_tap.as_millis());
	println!("  Tap slop: {} cells", config.tap_slop);
	println!("  Search debounce: {} ms", config.debounce.as_millis());
	if !config.initial_query.is_empty() {
		println!("  Initial query: {}", config.initial_query);
	}
	println!("  UI theme: {}", config.theme);
	if let Some(title) = &config.title {
		println!("  Title: {title}");
	}
	if config.ephemeral {
		println!("  Saved selections: in memory only");
	} else {
		println!("  Saved selections: {}", config.store_path.display());
	}
}
