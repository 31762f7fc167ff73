use std::time::Instant;

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tracing::trace;

use super::App;
use super::state::Focus;
use crate::selection::{TapKind, TapPoint};

const WHEEL_ROWS: usize = 3;

pub(crate) fn point_in_rect(column: u16, row: u16, area: Rect) -> bool {
	column >= area.x
		&& column < area.x.saturating_add(area.width)
		&& row >= area.y
		&& row < area.y.saturating_add(area.height)
}

impl<'a> App<'a> {
	/// Left presses over the text are taps; the tap tracker decides whether
	/// they place the cursor, pin a word, or clear the pins.
	pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) -> Option<TapKind> {
		if !matches!(self.focus, Focus::Text | Focus::Search) {
			return None;
		}
		if !point_in_rect(mouse.column, mouse.row, self.text_area) {
			return None;
		}

		match mouse.kind {
			MouseEventKind::Down(MouseButton::Left) => {
				let offset = self.offset_at_cell(mouse.column, mouse.row);
				let point = TapPoint::new(mouse.column, mouse.row);
				let kind = self.controller.pointer_down(offset, point, now);
				trace!(offset, ?kind, "tap");
				self.focus = Focus::Text;
				self.pump_controller_events();
				Some(kind)
			}
			MouseEventKind::ScrollUp => {
				self.scroll_up(WHEEL_ROWS);
				None
			}
			MouseEventKind::ScrollDown => {
				self.scroll_down(WHEEL_ROWS);
				None
			}
			_ => None,
		}
	}

	fn offset_at_cell(&self, column: u16, row: u16) -> usize {
		let row = usize::from(row - self.text_area.y) + self.scroll;
		let column = usize::from(column - self.text_area.x);
		self.layout.offset_at(self.controller.text(), row, column)
	}
}
