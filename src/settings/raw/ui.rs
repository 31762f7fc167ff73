use serde::Deserialize;
use textpin::ui::ThemeName;

use super::super::util::non_blank;
use crate::cli::CliArgs;

/// Presentation values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) theme: Option<String>,
	pub(super) title: Option<String>,
}

pub(super) struct UiResolution {
	pub(super) theme: ThemeName,
	pub(super) title: Option<String>,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(theme) = cli.theme {
			self.theme = Some(theme.as_str().to_string());
		}
		if let Some(title) = cli.title.clone() {
			self.title = Some(title);
		}
	}

	/// Parse the theme name. On failure returns the offending value and the
	/// reason so the caller can attach its origin.
	pub(super) fn finalize(self) -> Result<UiResolution, (String, String)> {
		let theme = match self.theme {
			Some(raw) => raw.parse::<ThemeName>().map_err(|reason| (raw, reason))?,
			None => ThemeName::default(),
		};
		Ok(UiResolution {
			theme,
			title: non_blank(self.title),
		})
	}
}
