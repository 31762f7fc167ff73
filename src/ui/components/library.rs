use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use unicode_truncate::UnicodeTruncateStr;

use super::centered;
use crate::store::{PREVIEW_CHARS, SavedSelection};
use crate::ui::theme::Theme;

const PREVIEW_WIDTH_MARGIN: usize = 4;

pub(crate) struct LibraryContext<'a> {
	pub records: &'a [SavedSelection],
	pub list_state: &'a mut ListState,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Overlay listing saved selections, newest first.
pub(crate) fn render_library(frame: &mut Frame, context: LibraryContext<'_>) {
	let LibraryContext {
		records,
		list_state,
		area,
		theme,
	} = context;

	let width = area.width.saturating_sub(4).max(10);
	let height = area.height.saturating_sub(2).max(3);
	let popup = centered(area, width, height);
	frame.render_widget(Clear, popup);

	let block = Block::default()
		.borders(Borders::ALL)
		.title(Span::styled(" Saved selections ", theme.header));
	let inner = block.inner(popup);
	frame.render_widget(block, popup);

	if records.is_empty() {
		frame.render_widget(Paragraph::new("Loading...").style(theme.muted), inner);
		return;
	}

	let text_width = usize::from(inner.width).saturating_sub(PREVIEW_WIDTH_MARGIN);
	let items: Vec<ListItem> = records
		.iter()
		.map(|record| {
			let stamp = record.created_at.format("%Y-%m-%d %H:%M").to_string();
			let preview = record.preview(PREVIEW_CHARS).replace('\n', " ");
			let (preview, _) = preview.unicode_truncate(text_width);
			ListItem::new(vec![
				Line::from(vec![
					Span::styled(record.name.clone(), theme.prompt),
					Span::styled(format!("  {stamp}"), theme.muted),
				]),
				Line::from(Span::styled(format!("  {preview}"), theme.text)),
			])
		})
		.collect();

	let list = List::new(items)
		.highlight_style(theme.row_highlight)
		.highlight_symbol("> ");
	frame.render_stateful_widget(list, inner, list_state);
}
