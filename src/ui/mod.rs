//! Interactive terminal selector.
//!
//! [`App`] hosts a [`SelectionController`](crate::selection::SelectionController):
//! left mouse presses over the text are fed to it as taps, the search bar
//! feeds it debounced queries, and its listeners drive the pin banner, the
//! save hint and the match counter. Saved selections go through a
//! [`StoreHandle`](crate::store::StoreHandle) so the UI never waits on disk.

mod actions;
mod clipboard;
mod components;
mod input;
mod layout;
mod mouse;
mod render;
mod runtime;
mod state;
mod theme;

#[cfg(test)]
mod tests;

pub use clipboard::{ClipboardError, copy_to_clipboard};
pub use input::LineInput;
pub use layout::TextLayout;
pub use state::{App, DEFAULT_DEBOUNCE, Focus, Outcome, UiOptions};
pub use theme::{DARK, LIGHT, Theme, ThemeName};
