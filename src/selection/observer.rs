use std::fmt;
use std::ops::Range;

/// Called with the displayed pinned range, or `None` once pins are cleared.
pub type PinListener = Box<dyn FnMut(Option<Range<usize>>)>;
/// Called when search highlighting is removed on behalf of the user.
pub type SearchClearedListener = Box<dyn FnMut()>;
/// Called with the live selection whenever it changes.
pub type SelectionListener = Box<dyn FnMut(Range<usize>)>;

/// One optional subscriber per controller event.
///
/// Registering a listener replaces the previous one for that event.
#[derive(Default)]
pub struct Listeners {
	pin_changed: Option<PinListener>,
	search_cleared: Option<SearchClearedListener>,
	selection_changed: Option<SelectionListener>,
}

impl Listeners {
	pub fn set_pin_changed(&mut self, listener: PinListener) {
		self.pin_changed = Some(listener);
	}

	pub fn set_search_cleared(&mut self, listener: SearchClearedListener) {
		self.search_cleared = Some(listener);
	}

	pub fn set_selection_changed(&mut self, listener: SelectionListener) {
		self.selection_changed = Some(listener);
	}

	pub(crate) fn pin_changed(&mut self, range: Option<Range<usize>>) {
		if let Some(listener) = self.pin_changed.as_mut() {
			listener(range);
		}
	}

	pub(crate) fn search_cleared(&mut self) {
		if let Some(listener) = self.search_cleared.as_mut() {
			listener();
		}
	}

	pub(crate) fn selection_changed(&mut self, range: Range<usize>) {
		if let Some(listener) = self.selection_changed.as_mut() {
			listener(range);
		}
	}
}

impl fmt::Debug for Listeners {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Listeners")
			.field("pin_changed", &self.pin_changed.is_some())
			.field("search_cleared", &self.search_cleared.is_some())
			.field("selection_changed", &self.selection_changed.is_some())
			.finish()
	}
}
