use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

/// Single-line text field backed by `tui-textarea`.
///
/// Callers intercept Enter and Esc before forwarding keys, so the buffer
/// never grows a second line.
#[derive(Debug, Clone)]
pub struct LineInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> LineInput<'a> {
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![initial.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or_default()
	}

	/// Forward a key; returns whether the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let before = self.text().to_string();
		self.textarea.input(key);
		self.text() != before
	}

	pub fn set_text(&mut self, text: impl Into<String>) {
		*self = Self::new(text);
	}

	pub fn clear(&mut self) {
		self.set_text(String::new());
	}

	pub fn set_style(&mut self, style: Style) {
		self.textarea.set_style(style);
	}

	pub fn render(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

impl Default for LineInput<'_> {
	fn default() -> Self {
		Self::new(String::new())
	}
}

#[cfg(test)]
mod tests {
	use ratatui::crossterm::event::{KeyCode, KeyModifiers};

	use super::*;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_appends_and_reports_change() {
		let mut input = LineInput::new("fo");
		assert!(input.input(key(KeyCode::Char('x'))));
		assert_eq!(input.text(), "fox");
		assert!(!input.input(key(KeyCode::Left)));
		assert!(input.input(key(KeyCode::Backspace)));
		assert_eq!(input.text(), "fx");
	}

	#[test]
	fn set_text_replaces_contents() {
		let mut input = LineInput::default();
		input.set_text("hello");
		assert_eq!(input.text(), "hello");
		input.clear();
		assert_eq!(input.text(), "");
	}
}
