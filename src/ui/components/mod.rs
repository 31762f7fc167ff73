//! Widgets drawn by [`App::draw`](super::App::draw).

mod library;
mod prompt;
mod search_bar;
mod status;
mod text;

pub(crate) use library::{LibraryContext, render_library};
pub(crate) use prompt::{PromptContext, render_confirm, render_prompt};
pub(crate) use search_bar::{SearchBarContext, render_search_bar};
pub(crate) use status::{render_footer, render_header};
pub(crate) use text::TextView;

use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Centered rectangle of at most `width` x `height` cells inside `area`.
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
	let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
		.flex(Flex::Center)
		.areas(area);
	let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
		.flex(Flex::Center)
		.areas(row);
	cell
}
