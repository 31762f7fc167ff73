use std::fmt;
use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};

/// Styles for every element of the selector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
	/// Title bar and overlay headers.
	pub header: Style,
	/// Body text.
	pub text: Style,
	/// Live selection, including a displayed pinned range.
	pub selection: Style,
	/// Every search match.
	pub search_match: Style,
	/// The match the search cursor points at.
	pub current_match: Style,
	/// Ranges marked for other purposes than search.
	pub annotation: Style,
	/// Zero-length cursor cell.
	pub cursor: Style,
	/// Prompts and the search bar label.
	pub prompt: Style,
	/// Hints and empty states.
	pub muted: Style,
	/// Transient notices.
	pub notice: Style,
	/// Highlighted row in lists.
	pub row_highlight: Style,
}

pub const LIGHT: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(226, 232, 240)),
	text: Style::new().fg(Color::Rgb(30, 30, 30)),
	selection: Style::new()
		.bg(Color::Rgb(147, 197, 253))
		.fg(Color::Rgb(15, 23, 42)),
	search_match: Style::new()
		.bg(Color::Rgb(254, 240, 138))
		.fg(Color::Rgb(30, 30, 30)),
	current_match: Style::new()
		.bg(Color::Rgb(250, 204, 21))
		.fg(Color::Rgb(15, 23, 42))
		.add_modifier(Modifier::BOLD),
	annotation: Style::new().add_modifier(Modifier::UNDERLINED),
	cursor: Style::new().add_modifier(Modifier::REVERSED),
	prompt: Style::new().fg(Color::Rgb(0, 102, 153)),
	muted: Style::new().fg(Color::Rgb(100, 100, 100)),
	notice: Style::new()
		.fg(Color::Rgb(120, 120, 0))
		.add_modifier(Modifier::BOLD),
	row_highlight: Style::new()
		.bg(Color::Rgb(200, 200, 200))
		.fg(Color::Rgb(15, 23, 42)),
};

pub const DARK: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(15, 23, 42)),
	text: Style::new().fg(Color::Rgb(226, 232, 240)),
	selection: Style::new()
		.bg(Color::Rgb(30, 64, 175))
		.fg(Color::Rgb(241, 245, 249)),
	search_match: Style::new()
		.bg(Color::Rgb(113, 63, 18))
		.fg(Color::Rgb(254, 243, 199)),
	current_match: Style::new()
		.bg(Color::Rgb(250, 204, 21))
		.fg(Color::Rgb(15, 23, 42))
		.add_modifier(Modifier::BOLD),
	annotation: Style::new().add_modifier(Modifier::UNDERLINED),
	cursor: Style::new().add_modifier(Modifier::REVERSED),
	prompt: Style::new().fg(Color::LightCyan),
	muted: Style::new().fg(Color::DarkGray),
	notice: Style::new()
		.fg(Color::Yellow)
		.add_modifier(Modifier::BOLD),
	row_highlight: Style::new()
		.bg(Color::Rgb(30, 41, 59))
		.fg(Color::Rgb(250, 204, 21)),
};

/// Built-in theme selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeName {
	#[default]
	Light,
	Dark,
}

impl ThemeName {
	pub fn theme(self) -> Theme {
		match self {
			Self::Light => LIGHT,
			Self::Dark => DARK,
		}
	}

	#[must_use]
	pub fn toggled(self) -> Self {
		match self {
			Self::Light => Self::Dark,
			Self::Dark => Self::Light,
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Light => "light",
			Self::Dark => "dark",
		}
	}
}

impl fmt::Display for ThemeName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for ThemeName {
	type Err = String;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_ascii_lowercase().as_str() {
			"light" => Ok(Self::Light),
			"dark" => Ok(Self::Dark),
			other => Err(format!("unknown theme '{other}' (expected light or dark)")),
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		ThemeName::default().theme()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn names_parse_case_insensitively() {
		assert_eq!("Dark".parse::<ThemeName>(), Ok(ThemeName::Dark));
		assert_eq!(" light ".parse::<ThemeName>(), Ok(ThemeName::Light));
		assert!("solarized".parse::<ThemeName>().is_err());
	}

	#[test]
	fn toggling_alternates() {
		assert_eq!(ThemeName::Light.toggled(), ThemeName::Dark);
		assert_eq!(ThemeName::Dark.toggled().theme(), LIGHT);
	}
}
