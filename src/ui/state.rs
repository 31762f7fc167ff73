use std::ops::Range;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use tracing::debug;

use super::input::LineInput;
use super::layout::TextLayout;
use super::theme::{Theme, ThemeName};
use crate::selection::{MarkerId, SelectionController, SessionSnapshot};
use crate::store::{SavedSelection, SelectionId, StoreCommand, StoreEvent, StoreHandle};

const NOTICE_TTL: Duration = Duration::from_secs(3);
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Controller notifications, queued by the listeners and drained each frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ControllerEvent {
	PinChanged(Option<Range<usize>>),
	SearchCleared,
	SelectionChanged(Range<usize>),
}

/// Which surface receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
	Text,
	Search,
	SaveName,
	Library,
	Rename(SelectionId),
	ConfirmDelete(SelectionId),
}

#[derive(Debug, Clone)]
pub struct UiOptions {
	pub title: Option<String>,
	pub theme: ThemeName,
	pub debounce: Duration,
	pub initial_query: String,
}

impl Default for UiOptions {
	fn default() -> Self {
		Self {
			title: None,
			theme: ThemeName::default(),
			debounce: DEFAULT_DEBOUNCE,
			initial_query: String::new(),
		}
	}
}

/// How the session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
	pub accepted: bool,
	pub selection: Range<usize>,
	pub selected_text: String,
	pub session: SessionSnapshot,
}

#[derive(Debug, Clone)]
pub(crate) struct Notice {
	pub message: String,
	pub expires_at: Instant,
}

/// Rows shown by the saved-selections overlay.
#[derive(Debug, Default)]
pub(crate) struct Library {
	pub records: Vec<SavedSelection>,
	pub list_state: ListState,
}

impl Library {
	pub fn set_records(&mut self, records: Vec<SavedSelection>) {
		let selected = self.list_state.selected().unwrap_or(0);
		self.records = records;
		if self.records.is_empty() {
			self.list_state.select(None);
		} else {
			self.list_state
				.select(Some(selected.min(self.records.len() - 1)));
		}
	}

	pub fn selected(&self) -> Option<&SavedSelection> {
		self.list_state
			.selected()
			.and_then(|index| self.records.get(index))
	}

	pub fn find(&self, id: SelectionId) -> Option<&SavedSelection> {
		self.records.iter().find(|record| record.id == id)
	}

	pub fn select_next(&mut self) {
		if let Some(selected) = self.list_state.selected()
			&& selected + 1 < self.records.len()
		{
			self.list_state.select(Some(selected + 1));
		}
	}

	pub fn select_previous(&mut self) {
		if let Some(selected) = self.list_state.selected()
			&& selected > 0
		{
			self.list_state.select(Some(selected - 1));
		}
	}
}

pub struct App<'a> {
	pub controller: SelectionController,
	controller_events: Receiver<ControllerEvent>,
	pub(crate) focus: Focus,
	pub(crate) search_input: LineInput<'a>,
	pub(crate) name_input: LineInput<'a>,
	pub(crate) search_open: bool,
	pub(crate) show_counter: bool,
	pending_query: Option<Instant>,
	debounce: Duration,
	pub(crate) scroll: usize,
	pub(crate) text_area: Rect,
	pub(crate) layout: TextLayout,
	store: Option<StoreHandle>,
	pub(crate) library: Library,
	pub(crate) notice: Option<Notice>,
	pub(crate) theme_name: ThemeName,
	pub theme: Theme,
	pub(crate) title: String,
	pub(crate) pinned: Option<Range<usize>>,
	pub(crate) can_save: bool,
	pub(crate) copied: Option<MarkerId>,
}

impl<'a> App<'a> {
	pub fn new(mut controller: SelectionController, options: UiOptions) -> Self {
		let (event_tx, controller_events) = mpsc::channel();

		let tx = event_tx.clone();
		controller.set_pin_listener(Box::new(move |range| {
			let _ = tx.send(ControllerEvent::PinChanged(range));
		}));
		let tx = event_tx.clone();
		controller.set_search_cleared_listener(Box::new(move || {
			let _ = tx.send(ControllerEvent::SearchCleared);
		}));
		controller.set_selection_listener(Box::new(move |range| {
			let _ = event_tx.send(ControllerEvent::SelectionChanged(range));
		}));

		let pinned = controller.pinned_range().filter(|range| !range.is_empty());
		let can_save = !controller.selection().is_empty();
		let title = options.title.unwrap_or_else(|| "textpin".to_string());

		let mut app = Self {
			controller,
			controller_events,
			focus: Focus::Text,
			search_input: LineInput::default(),
			name_input: LineInput::default(),
			search_open: false,
			show_counter: false,
			pending_query: None,
			debounce: options.debounce,
			scroll: 0,
			text_area: Rect::default(),
			layout: TextLayout::default(),
			store: None,
			library: Library::default(),
			notice: None,
			theme_name: options.theme,
			theme: options.theme.theme(),
			title,
			pinned,
			can_save,
			copied: None,
		};

		if !options.initial_query.is_empty() {
			app.search_open = true;
			app.search_input.set_text(options.initial_query);
			app.apply_query();
		}
		app
	}

	/// Attach the saved-selection store and request the first listing.
	#[must_use]
	pub fn with_store(mut self, store: StoreHandle) -> Self {
		if let Err(err) = store.send(StoreCommand::Refresh) {
			self.notify(format!("Saved selections unavailable: {err}"));
		}
		self.store = Some(store);
		self
	}

	pub fn focus(&self) -> Focus {
		self.focus
	}

	pub fn notice(&self) -> Option<&str> {
		self.notice.as_ref().map(|notice| notice.message.as_str())
	}

	pub fn theme_name(&self) -> ThemeName {
		self.theme_name
	}

	pub(crate) fn notify(&mut self, message: impl Into<String>) {
		let message = message.into();
		debug!(%message, "notice");
		self.notice = Some(Notice {
			message,
			expires_at: Instant::now() + NOTICE_TTL,
		});
	}

	pub(crate) fn send_store(&mut self, command: StoreCommand) {
		let result = match self.store.as_ref() {
			Some(store) => store.send(command),
			None => {
				self.notify("Saved selections are unavailable");
				return;
			}
		};
		if let Err(err) = result {
			self.notify(format!("Store error: {err}"));
		}
	}

	pub(crate) fn has_store(&self) -> bool {
		self.store.is_some()
	}

	/// Apply queued controller notifications to the view state.
	pub(crate) fn pump_controller_events(&mut self) {
		loop {
			match self.controller_events.try_recv() {
				Ok(ControllerEvent::PinChanged(range)) => {
					self.pinned = range.filter(|range| !range.is_empty());
				}
				Ok(ControllerEvent::SearchCleared) => {
					self.show_counter = false;
				}
				Ok(ControllerEvent::SelectionChanged(range)) => {
					self.can_save = !range.is_empty();
				}
				Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
			}
		}
	}

	pub(crate) fn pump_store_events(&mut self) {
		while let Some(event) = self.store.as_ref().and_then(StoreHandle::try_recv) {
			self.apply_store_event(event);
		}
	}

	pub(crate) fn apply_store_event(&mut self, event: StoreEvent) {
		match event {
			StoreEvent::Listed(records) => {
				self.library.set_records(records);
				if self.focus == Focus::Library && self.library.records.is_empty() {
					self.focus = Focus::Text;
					self.notify("No saved selections");
				}
			}
			StoreEvent::Saved(record) => self.notify(format!("Saved \"{}\"", record.name)),
			StoreEvent::Updated(record) => self.notify(format!("Renamed to \"{}\"", record.name)),
			StoreEvent::Deleted(_) => self.notify("Deleted saved selection"),
			StoreEvent::Failed { action, message } => {
				self.notify(format!("Failed to {action}: {message}"));
			}
		}
	}

	/// Advance timers: the search debounce and notice expiry.
	pub fn tick(&mut self, now: Instant) {
		if let Some(edited_at) = self.pending_query
			&& now.saturating_duration_since(edited_at) >= self.debounce
		{
			self.apply_query();
		}
		if self
			.notice
			.as_ref()
			.is_some_and(|notice| now >= notice.expires_at)
		{
			self.notice = None;
		}
		self.pump_controller_events();
	}

	pub(crate) fn query_edited(&mut self, at: Instant) {
		self.pending_query = Some(at);
	}

	/// Run a pending search right away. Returns whether one was pending.
	pub(crate) fn flush_pending_query(&mut self) -> bool {
		if self.pending_query.is_some() {
			self.apply_query();
			true
		} else {
			false
		}
	}

	fn apply_query(&mut self) {
		self.pending_query = None;
		let query = self.search_input.text().to_string();
		self.controller.update_search(&query);
		self.show_counter = !query.is_empty();
		self.pump_controller_events();
	}

	pub(crate) fn session_snapshot(&self) -> SessionSnapshot {
		SessionSnapshot {
			text: self.controller.text().to_string(),
			pins: self.controller.pin_snapshot(),
			query: self.search_input.text().to_string(),
		}
	}

	pub(crate) fn outcome(&self, accepted: bool) -> Outcome {
		Outcome {
			accepted,
			selection: self.controller.selection(),
			selected_text: self.controller.selected_text().to_string(),
			session: self.session_snapshot(),
		}
	}
}
