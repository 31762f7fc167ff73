use std::ops::Range;
use std::time::Instant;

use tracing::debug;

use super::gesture::{TapKind, TapPoint, TapTracker};
use super::highlight::{HighlightKind, HighlightLayer, MarkerId};
use super::observer::{Listeners, PinListener, SearchClearedListener, SelectionListener};
use super::pins::{PinState, Pins};
use super::search::SearchState;
use super::snapshot::PinSnapshot;
use super::word::{clamp_offset, word_boundaries};

/// Owns a text buffer and keeps pins, search matches, highlight markers, and
/// the live selection consistent with each other.
///
/// Every operation is synchronous and infallible: offsets are clamped to the
/// buffer and snapped to char boundaries instead of being rejected.
#[derive(Debug, Default)]
pub struct SelectionController {
	text: String,
	selection: Range<usize>,
	pins: PinState,
	search: SearchState,
	highlights: HighlightLayer,
	taps: TapTracker,
	listeners: Listeners,
	reveal: Option<usize>,
}

impl SelectionController {
	pub fn new(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			..Self::default()
		}
	}

	#[must_use]
	pub fn with_tap_tracker(mut self, taps: TapTracker) -> Self {
		self.taps = taps;
		self
	}

	pub fn text(&self) -> &str {
		&self.text
	}

	/// Replace the buffer. Pins, search results, and all markers are dropped
	/// and the cursor returns to the start.
	pub fn set_text(&mut self, text: impl Into<String>) {
		if !self.search.query().is_empty() {
			self.clear_search_highlights(true);
		}
		if self.pins.clear() {
			self.listeners.pin_changed(None);
		}
		self.highlights.clear();
		self.taps.reset();
		self.reveal = None;
		self.text = text.into();
		self.selection = 0..0;
		self.listeners.selection_changed(0..0);
		debug!(len = self.text.len(), "loaded text");
	}

	// Listener registration

	pub fn set_pin_listener(&mut self, listener: PinListener) {
		self.listeners.set_pin_changed(listener);
	}

	pub fn set_search_cleared_listener(&mut self, listener: SearchClearedListener) {
		self.listeners.set_search_cleared(listener);
	}

	pub fn set_selection_listener(&mut self, listener: SelectionListener) {
		self.listeners.set_selection_changed(listener);
	}

	// Live selection

	pub fn selection(&self) -> Range<usize> {
		self.selection.clone()
	}

	pub fn selected_text(&self) -> &str {
		&self.text[self.selection.clone()]
	}

	/// Move the live selection, clamping and normalizing the range.
	pub fn set_selection(&mut self, range: Range<usize>) {
		let start = clamp_offset(&self.text, range.start);
		let end = clamp_offset(&self.text, range.end);
		let range = start.min(end)..start.max(end);
		if range != self.selection {
			self.selection = range.clone();
			self.listeners.selection_changed(range);
		}
	}

	pub fn set_cursor(&mut self, offset: usize) {
		self.set_selection(offset..offset);
	}

	// Gestures

	/// Feed a tap-down at buffer `offset` and screen `point` through the tap
	/// tracker and act on the resulting classification.
	pub fn pointer_down(&mut self, offset: usize, point: TapPoint, at: Instant) -> TapKind {
		let kind = self.taps.register(point, at);
		self.tap(offset, kind);
		kind
	}

	/// Act on an already classified tap.
	pub fn tap(&mut self, offset: usize, kind: TapKind) {
		match kind {
			TapKind::Single => self.set_cursor(offset),
			TapKind::Double => self.pin_word_at(offset),
			TapKind::Triple => self.clear_pins(),
		}
	}

	fn pin_word_at(&mut self, offset: usize) {
		let word = word_boundaries(&self.text, offset);
		let update = self.pins.apply_word(word.clone());
		let Some(range) = self.pins.range() else {
			return;
		};
		debug!(?word, ?update, ?range, "pins updated");

		// Pin updates keep the current scroll position.
		self.reveal = None;
		self.set_selection(range.clone());
		self.listeners.pin_changed(Some(range));
	}

	/// Drop both pins and collapse the selection to a cursor at its start.
	pub fn clear_pins(&mut self) {
		self.pins.clear();
		let cursor = self.selection.start;
		self.set_selection(cursor..cursor);
		debug!(cursor, "pins cleared");
		self.listeners.pin_changed(None);
	}

	pub fn pins(&self) -> Option<Pins> {
		self.pins.pins()
	}

	pub fn pinned_range(&self) -> Option<Range<usize>> {
		self.pins.range()
	}

	// Search

	/// Recompute search matches for `query` from scratch.
	///
	/// Previous search markers are removed first. When the query has matches
	/// the selection moves to the first one and a reveal is requested.
	pub fn update_search(&mut self, query: &str) {
		self.clear_search_highlights(false);
		if query.is_empty() {
			return;
		}

		let count = self.search.rebuild(&self.text, query);
		for range in self.search.matches() {
			self.highlights.add(range.clone(), HighlightKind::SearchMatch);
		}
		debug!(query, count, "search updated");

		if let Some(first) = self.search.current() {
			self.select_match(first);
		}
	}

	pub fn next_search_result(&mut self) -> Option<Range<usize>> {
		let range = self.search.next()?;
		self.select_match(range.clone());
		Some(range)
	}

	pub fn previous_search_result(&mut self) -> Option<Range<usize>> {
		let range = self.search.previous()?;
		self.select_match(range.clone());
		Some(range)
	}

	fn select_match(&mut self, range: Range<usize>) {
		self.set_selection(range.clone());
		self.reveal = Some(range.start);
	}

	/// Remove search markers (leaving other markers alone) and empty the
	/// search state. `notify` fires the search-cleared listener.
	pub fn clear_search_highlights(&mut self, notify: bool) {
		self.highlights.clear_kind(HighlightKind::SearchMatch);
		self.search.clear();
		if notify {
			self.listeners.search_cleared();
		}
	}

	pub fn search(&self) -> &SearchState {
		&self.search
	}

	pub fn match_count(&self) -> usize {
		self.search.len()
	}

	/// One-based index of the current match and the match count.
	pub fn search_position(&self) -> Option<(usize, usize)> {
		self.search.position()
	}

	// Markers

	pub fn highlights(&self) -> &HighlightLayer {
		&self.highlights
	}

	/// Add a host-defined marker; the range is clamped to the buffer.
	pub fn annotate(&mut self, range: Range<usize>, tag: u32) -> MarkerId {
		let start = clamp_offset(&self.text, range.start);
		let end = clamp_offset(&self.text, range.end);
		self.highlights
			.add(start.min(end)..start.max(end), HighlightKind::Annotation(tag))
	}

	pub fn remove_annotation(&mut self, id: MarkerId) -> bool {
		self.highlights.remove(id).is_some()
	}

	/// Offset the view should bring into sight, consumed once.
	pub fn take_reveal_request(&mut self) -> Option<usize> {
		self.reveal.take()
	}

	// Snapshots

	pub fn pin_snapshot(&self) -> PinSnapshot {
		PinSnapshot::capture(self.pins.pins())
	}

	/// Restore pins from a snapshot. Invalid snapshots leave pins unset.
	/// Returns whether pins were restored.
	pub fn restore_pins(&mut self, snapshot: &PinSnapshot) -> bool {
		let Some(pins) = snapshot.resolve(&self.text) else {
			return false;
		};
		self.pins.set(Some(pins));
		self.set_selection(pins.range());
		self.listeners.pin_changed(Some(pins.range()));
		true
	}
}
