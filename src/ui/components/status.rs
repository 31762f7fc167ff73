use std::ops::Range;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ui::state::Focus;
use crate::ui::theme::Theme;

/// Title on the left, pin banner on the right while a pinned range shows.
pub(crate) fn render_header(
	frame: &mut Frame,
	area: Rect,
	title: &str,
	pinned: Option<&Range<usize>>,
	theme: &Theme,
) {
	frame.render_widget(
		Paragraph::new(Line::from(Span::raw(format!(" {title}")))).style(theme.header),
		area,
	);
	if let Some(range) = pinned {
		let banner = format!("Pinned {}..{} ({} bytes) ", range.start, range.end, range.len());
		frame.render_widget(
			Paragraph::new(banner)
				.alignment(Alignment::Right)
				.style(theme.header),
			area,
		);
	}
}

/// Notice if one is live, otherwise key hints for the focused surface.
pub(crate) fn render_footer(
	frame: &mut Frame,
	area: Rect,
	notice: Option<&str>,
	focus: Focus,
	can_save: bool,
	theme: &Theme,
) {
	let line = match notice {
		Some(message) => Line::from(Span::styled(message.to_string(), theme.notice)),
		None => Line::from(Span::styled(hints(focus, can_save), theme.muted)),
	};
	frame.render_widget(Paragraph::new(line), area);
}

fn hints(focus: Focus, can_save: bool) -> String {
	match focus {
		Focus::Text => {
			let mut hints = String::from("/ search  n/N next/prev  c clear pins");
			if can_save {
				hints.push_str("  s save  y copy");
			}
			hints.push_str("  l library  t theme  enter accept  q quit");
			hints
		}
		Focus::Search => "enter next  \u{2191}/\u{2193} prev/next  tab text  esc close".into(),
		Focus::SaveName | Focus::Rename(_) => "enter confirm  esc cancel".into(),
		Focus::Library => "enter load  r rename  d delete  esc close".into(),
		Focus::ConfirmDelete(_) => "y delete  n keep".into(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn save_hint_follows_selection() {
		assert!(hints(Focus::Text, true).contains("s save"));
		assert!(!hints(Focus::Text, false).contains("s save"));
	}
}
