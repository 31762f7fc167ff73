use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::App;
use super::components::{
	LibraryContext, PromptContext, SearchBarContext, TextView, render_confirm, render_footer,
	render_header, render_library, render_prompt, render_search_bar,
};
use super::layout::TextLayout;
use super::state::Focus;

impl<'a> App<'a> {
	pub fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area();
		let search_height = u16::from(self.search_open);
		let [header_area, body_area, search_area, footer_area] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Min(3),
			Constraint::Length(search_height),
			Constraint::Length(1),
		])
		.areas(area);

		render_header(
			frame,
			header_area,
			&self.title,
			self.pinned.as_ref(),
			&self.theme,
		);
		self.render_text(frame, body_area);

		if self.search_open {
			let position = if self.show_counter {
				self.controller.search_position()
			} else {
				None
			};
			render_search_bar(
				frame,
				SearchBarContext {
					input: &self.search_input,
					position,
					query_is_empty: !self.show_counter,
					focused: self.focus == Focus::Search,
					area: search_area,
					theme: &self.theme,
				},
			);
		}

		render_footer(
			frame,
			footer_area,
			self.notice(),
			self.focus,
			self.can_save,
			&self.theme,
		);
		self.render_overlay(frame, body_area);
	}

	fn render_text(&mut self, frame: &mut Frame, area: Rect) {
		let block = Block::default()
			.borders(Borders::ALL)
			.border_style(self.theme.muted);
		let inner = block.inner(area);
		frame.render_widget(block, area);
		self.text_area = inner;

		self.layout = TextLayout::new(self.controller.text(), usize::from(inner.width));
		let height = usize::from(inner.height);
		if let Some(offset) = self.controller.take_reveal_request() {
			self.reveal_row(self.layout.row_of(offset), height);
		}
		let max_scroll = self.layout.row_count().saturating_sub(height);
		self.scroll = self.scroll.min(max_scroll);

		let selection = self.controller.selection();
		let cursor_row = selection
			.is_empty()
			.then(|| self.layout.row_of(selection.start));
		let view = TextView {
			text: self.controller.text(),
			selection,
			current_match: self.controller.search().current(),
			highlights: self.controller.highlights(),
			show_cursor: self.focus == Focus::Text,
			theme: &self.theme,
		};
		let lines: Vec<_> = self
			.layout
			.rows()
			.iter()
			.enumerate()
			.skip(self.scroll)
			.take(height)
			.map(|(index, row)| view.line(row.clone(), cursor_row == Some(index)))
			.collect();

		frame.render_widget(Paragraph::new(lines).style(self.theme.text), inner);
	}

	fn reveal_row(&mut self, row: usize, height: usize) {
		if height == 0 {
			return;
		}
		if row < self.scroll {
			self.scroll = row;
		} else if row >= self.scroll + height {
			self.scroll = row + 1 - height;
		}
	}

	fn render_overlay(&mut self, frame: &mut Frame, area: Rect) {
		match self.focus {
			Focus::Library => render_library(
				frame,
				LibraryContext {
					records: &self.library.records,
					list_state: &mut self.library.list_state,
					area,
					theme: &self.theme,
				},
			),
			Focus::SaveName => render_prompt(
				frame,
				PromptContext {
					title: "Save selection",
					input: &self.name_input,
					area,
					theme: &self.theme,
				},
			),
			Focus::Rename(_) => render_prompt(
				frame,
				PromptContext {
					title: "Rename selection",
					input: &self.name_input,
					area,
					theme: &self.theme,
				},
			),
			Focus::ConfirmDelete(id) => {
				let name = self
					.library
					.find(id)
					.map_or("selection", |record| record.name.as_str());
				render_confirm(frame, area, name, &self.theme);
			}
			Focus::Text | Focus::Search => {}
		}
	}
}
