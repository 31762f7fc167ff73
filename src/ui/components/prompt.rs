use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::centered;
use crate::ui::input::LineInput;
use crate::ui::theme::Theme;

const PROMPT_WIDTH: u16 = 60;

pub(crate) struct PromptContext<'a, 'b> {
	pub title: &'a str,
	pub input: &'a LineInput<'b>,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Single-field dialog used for naming and renaming selections.
pub(crate) fn render_prompt(frame: &mut Frame, context: PromptContext<'_, '_>) {
	let PromptContext {
		title,
		input,
		area,
		theme,
	} = context;
	let popup = centered(area, PROMPT_WIDTH, 4);
	frame.render_widget(Clear, popup);

	let block = Block::default()
		.borders(Borders::ALL)
		.title(Span::styled(format!(" {title} "), theme.header));
	let inner = block.inner(popup);
	frame.render_widget(block, popup);

	let [label_area, input_area] =
		Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(inner);
	frame.render_widget(
		Paragraph::new(Span::styled("Name (blank keeps the default)", theme.muted)),
		label_area,
	);
	input.render(frame, input_area);
}

pub(crate) fn render_confirm(frame: &mut Frame, area: Rect, name: &str, theme: &Theme) {
	let popup = centered(area, PROMPT_WIDTH, 3);
	frame.render_widget(Clear, popup);
	let block = Block::default()
		.borders(Borders::ALL)
		.title(Span::styled(" Delete ", theme.header));
	let inner = block.inner(popup);
	frame.render_widget(block, popup);
	frame.render_widget(
		Paragraph::new(Line::from(vec![
			Span::styled(format!("Delete \"{name}\"? "), theme.text),
			Span::styled("y/n", theme.prompt),
		])),
		inner,
	);
}
