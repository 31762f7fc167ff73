use std::mem;
use std::ops::Range;

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::selection::{HighlightKind, HighlightLayer};
use crate::ui::layout::cell_width;
use crate::ui::theme::Theme;

/// Styles buffer rows for display.
///
/// Precedence, highest first: live selection, current match, other search
/// matches, annotations, plain text.
pub(crate) struct TextView<'a> {
	pub text: &'a str,
	pub selection: Range<usize>,
	pub current_match: Option<Range<usize>>,
	pub highlights: &'a HighlightLayer,
	pub show_cursor: bool,
	pub theme: &'a Theme,
}

impl TextView<'_> {
	/// Spans for one layout row. `ends_at_cursor` draws the cursor cell past
	/// the last character when the cursor sits at the row end.
	pub fn line(&self, row: Range<usize>, ends_at_cursor: bool) -> Line<'static> {
		let markers: Vec<(Range<usize>, HighlightKind)> = self
			.highlights
			.overlapping(row.clone())
			.map(|marker| (marker.range.clone(), marker.kind))
			.collect();

		let mut spans = Vec::new();
		let mut buffer = String::new();
		let mut current_style: Option<Style> = None;

		for (index, ch) in self.text[row.clone()].char_indices() {
			let offset = row.start + index;
			let Some(display) = display_char(ch) else {
				continue;
			};
			let style = self.style_at(offset, &markers);
			if current_style != Some(style) && !buffer.is_empty() {
				spans.push(Span::styled(
					mem::take(&mut buffer),
					current_style.unwrap_or_default(),
				));
			}
			current_style = Some(style);
			buffer.push(display);
		}
		if !buffer.is_empty() {
			spans.push(Span::styled(buffer, current_style.unwrap_or_default()));
		}

		if ends_at_cursor && self.cursor_at(row.end) {
			spans.push(Span::styled(" ", self.theme.cursor));
		}
		Line::from(spans)
	}

	fn cursor_at(&self, offset: usize) -> bool {
		self.show_cursor && self.selection.is_empty() && self.selection.start == offset
	}

	fn style_at(&self, offset: usize, markers: &[(Range<usize>, HighlightKind)]) -> Style {
		if self.selection.contains(&offset) {
			return self.theme.selection;
		}
		if self.cursor_at(offset) {
			return self.theme.cursor;
		}
		if self
			.current_match
			.as_ref()
			.is_some_and(|range| range.contains(&offset))
		{
			return self.theme.current_match;
		}

		let mut style = self.theme.text;
		for (range, kind) in markers {
			if !range.contains(&offset) {
				continue;
			}
			match kind {
				HighlightKind::SearchMatch => return self.theme.search_match,
				HighlightKind::Annotation(_) => style = self.theme.annotation,
			}
		}
		style
	}
}

fn display_char(ch: char) -> Option<char> {
	if ch == '\t' {
		Some(' ')
	} else if cell_width(ch) == 0 && ch.is_control() {
		None
	} else {
		Some(ch)
	}
}
