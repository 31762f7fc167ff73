use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ui::input::LineInput;
use crate::ui::theme::Theme;

pub(crate) struct SearchBarContext<'a, 'b> {
	pub input: &'a LineInput<'b>,
	/// One-based current match and match count, when the counter is shown.
	pub position: Option<(usize, usize)>,
	pub query_is_empty: bool,
	pub focused: bool,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Label, query field and `current / count` counter on one row.
pub(crate) fn render_search_bar(frame: &mut Frame, context: SearchBarContext<'_, '_>) {
	let SearchBarContext {
		input,
		position,
		query_is_empty,
		focused,
		area,
		theme,
	} = context;
	if area.height == 0 {
		return;
	}

	let counter = match position {
		Some((current, count)) => format!(" {current}/{count} "),
		None if !query_is_empty => " 0/0 ".to_string(),
		None => String::new(),
	};
	let [label_area, input_area, counter_area] = Layout::horizontal([
		Constraint::Length(2),
		Constraint::Min(1),
		Constraint::Length(counter.chars().count() as u16),
	])
	.areas(area);

	let label_style = if focused { theme.prompt } else { theme.muted };
	frame.render_widget(Paragraph::new(Span::styled("/ ", label_style)), label_area);
	input.render(frame, input_area);
	if !counter.is_empty() {
		frame.render_widget(
			Paragraph::new(Line::from(Span::styled(counter, theme.muted))),
			counter_area,
		);
	}
}
