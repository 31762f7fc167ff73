use clap::ValueEnum;

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

/// Themes selectable from the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum ThemeArg {
	Light,
	Dark,
}

impl ThemeArg {
	/// Return the name consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			ThemeArg::Light => "light",
			ThemeArg::Dark => "dark",
		}
	}
}
