use std::time::Instant;

use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use super::App;
use super::clipboard::copy_to_clipboard;
use super::layout::TextLayout;
use super::state::{Focus, Outcome};
use crate::selection::TapKind;
use crate::store::{SavedSelection, SelectionId, StoreCommand, default_name};

const COPIED_TAG: u32 = 1;

impl<'a> App<'a> {
	/// Process a keyboard event and return an outcome if the user exits.
	pub fn handle_key(&mut self, key: KeyEvent) -> Result<Option<Outcome>> {
		if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
			return Ok(Some(self.outcome(false)));
		}

		let outcome = match self.focus {
			Focus::Text => self.handle_text_key(key),
			Focus::Search => {
				self.handle_search_key(key, Instant::now());
				None
			}
			Focus::SaveName => {
				self.handle_save_key(key);
				None
			}
			Focus::Library => {
				self.handle_library_key(key);
				None
			}
			Focus::Rename(id) => {
				self.handle_rename_key(id, key);
				None
			}
			Focus::ConfirmDelete(id) => {
				self.handle_confirm_delete_key(id, key);
				None
			}
		};
		self.pump_controller_events();
		Ok(outcome)
	}

	fn handle_text_key(&mut self, key: KeyEvent) -> Option<Outcome> {
		match key.code {
			KeyCode::Esc | KeyCode::Char('q') => return Some(self.outcome(false)),
			KeyCode::Enter => return Some(self.outcome(true)),
			KeyCode::Char('/') => self.open_search(),
			KeyCode::Char('n') => self.next_match(),
			KeyCode::Char('N') => self.previous_match(),
			KeyCode::Char('p') => {
				let cursor = self.controller.selection().start;
				self.controller.tap(cursor, TapKind::Double);
			}
			KeyCode::Char('c') => self.controller.clear_pins(),
			KeyCode::Char('s') => self.open_save_prompt(),
			KeyCode::Char('l') => self.open_library(),
			KeyCode::Char('y') => self.copy_selection(),
			KeyCode::Char('t') => self.toggle_theme(),
			KeyCode::Left => self.move_cursor_left(),
			KeyCode::Right => self.move_cursor_right(),
			KeyCode::Home => self.controller.set_cursor(0),
			KeyCode::End => self.controller.set_cursor(self.controller.text().len()),
			KeyCode::Up => self.scroll_up(1),
			KeyCode::Down => self.scroll_down(1),
			KeyCode::PageUp => self.scroll_up(self.page_height()),
			KeyCode::PageDown => self.scroll_down(self.page_height()),
			_ => {}
		}
		None
	}

	pub(crate) fn handle_search_key(&mut self, key: KeyEvent, now: Instant) {
		match key.code {
			KeyCode::Esc => self.collapse_search(),
			KeyCode::Enter => {
				if !self.flush_pending_query() {
					self.next_match();
				}
			}
			KeyCode::Tab => self.focus = Focus::Text,
			KeyCode::Down => self.next_match(),
			KeyCode::Up => self.previous_match(),
			_ => {
				if self.search_input.input(key) {
					self.query_edited(now);
				}
			}
		}
	}

	fn handle_save_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Esc => self.focus = Focus::Text,
			KeyCode::Enter => self.save_selection(),
			_ => {
				self.name_input.input(key);
			}
		}
	}

	fn handle_library_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('l') => self.focus = Focus::Text,
			KeyCode::Up | KeyCode::Char('k') => self.library.select_previous(),
			KeyCode::Down | KeyCode::Char('j') => self.library.select_next(),
			KeyCode::Enter => self.load_selected(),
			KeyCode::Char('r') => {
				if let Some(record) = self.library.selected() {
					let id = record.id;
					self.name_input.set_text(record.name.clone());
					self.focus = Focus::Rename(id);
				}
			}
			KeyCode::Char('d') | KeyCode::Delete => {
				if let Some(record) = self.library.selected() {
					self.focus = Focus::ConfirmDelete(record.id);
				}
			}
			_ => {}
		}
	}

	fn handle_rename_key(&mut self, id: SelectionId, key: KeyEvent) {
		match key.code {
			KeyCode::Esc => self.focus = Focus::Library,
			KeyCode::Enter => {
				let renamed = self
					.library
					.find(id)
					.map(|record| record.renamed(self.name_input.text()));
				self.focus = Focus::Library;
				match renamed {
					Some(record) => self.send_store(StoreCommand::Update(record)),
					None => self.notify("Selection no longer exists"),
				}
			}
			_ => {
				self.name_input.input(key);
			}
		}
	}

	fn handle_confirm_delete_key(&mut self, id: SelectionId, key: KeyEvent) {
		match key.code {
			KeyCode::Char('y') | KeyCode::Enter => {
				self.focus = Focus::Library;
				self.send_store(StoreCommand::Delete(id));
			}
			KeyCode::Char('n') | KeyCode::Esc => self.focus = Focus::Library,
			_ => {}
		}
	}

	fn open_search(&mut self) {
		self.search_open = true;
		self.focus = Focus::Search;
	}

	/// Close the search bar, dropping the query and its highlights.
	pub(crate) fn collapse_search(&mut self) {
		self.search_input.clear();
		self.flush_pending_query();
		self.search_open = false;
		self.focus = Focus::Text;
		self.controller.clear_search_highlights(true);
	}

	fn next_match(&mut self) {
		self.flush_pending_query();
		if self.controller.next_search_result().is_none() && self.search_open {
			self.notify("No matches");
		}
	}

	fn previous_match(&mut self) {
		self.flush_pending_query();
		if self.controller.previous_search_result().is_none() && self.search_open {
			self.notify("No matches");
		}
	}

	fn open_save_prompt(&mut self) {
		if !self.can_save {
			self.notify("Select some text to save");
			return;
		}
		if !self.has_store() {
			self.notify("Saved selections are unavailable");
			return;
		}
		self.name_input
			.set_text(default_name(self.controller.selected_text()));
		self.focus = Focus::SaveName;
	}

	fn save_selection(&mut self) {
		self.focus = Focus::Text;
		let text = self.controller.selected_text();
		if text.is_empty() {
			self.notify("Select some text to save");
			return;
		}
		let record = SavedSelection::new(self.name_input.text(), text);
		debug!(id = %record.id, "saving selection");
		self.send_store(StoreCommand::Insert(record));
	}

	fn open_library(&mut self) {
		if !self.has_store() {
			self.notify("Saved selections are unavailable");
			return;
		}
		self.focus = Focus::Library;
		self.send_store(StoreCommand::Refresh);
	}

	/// Replace the buffer with the highlighted library entry.
	fn load_selected(&mut self) {
		let Some(record) = self.library.selected().cloned() else {
			return;
		};
		if self.search_open {
			self.collapse_search();
		}
		self.controller.set_text(record.text);
		self.layout = TextLayout::new(self.controller.text(), self.layout.width());
		self.copied = None;
		self.scroll = 0;
		self.focus = Focus::Text;
		self.notify(format!("Loaded \"{}\"", record.name));
	}

	fn copy_selection(&mut self) {
		let range = self.controller.selection();
		match copy_to_clipboard(self.controller.selected_text()) {
			Ok(()) => {
				if let Some(previous) = self.copied.take() {
					self.controller.remove_annotation(previous);
				}
				self.copied = Some(self.controller.annotate(range, COPIED_TAG));
				self.notify("Copied selection");
			}
			Err(err) => self.notify(format!("Copy failed: {err}")),
		}
	}

	fn toggle_theme(&mut self) {
		self.theme_name = self.theme_name.toggled();
		self.theme = self.theme_name.theme();
	}

	fn move_cursor_left(&mut self) {
		let cursor = self.controller.selection().start;
		let previous = self.controller.text()[..cursor]
			.chars()
			.next_back()
			.map_or(0, |ch| cursor - ch.len_utf8());
		self.controller.set_cursor(previous);
	}

	fn move_cursor_right(&mut self) {
		let cursor = self.controller.selection().end;
		let next = self.controller.text()[cursor..]
			.chars()
			.next()
			.map_or(cursor, |ch| cursor + ch.len_utf8());
		self.controller.set_cursor(next);
	}

	fn page_height(&self) -> usize {
		usize::from(self.text_area.height.max(1))
	}

	pub(crate) fn scroll_up(&mut self, rows: usize) {
		self.scroll = self.scroll.saturating_sub(rows);
	}

	pub(crate) fn scroll_down(&mut self, rows: usize) {
		self.scroll = self.scroll.saturating_add(rows);
	}
}
