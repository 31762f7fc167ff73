//! Terminal text selector built around a pinned-selection controller.
//!
//! [`selection`] holds the platform-neutral core: word boundaries, multi-click
//! detection, pin maintenance and in-text search. [`ui`] renders it with
//! ratatui, and [`store`] persists named selections.

pub mod app_dirs;
pub mod logging;
pub mod selection;
pub mod store;
pub mod ui;

pub use selection::{SelectionController, SessionSnapshot, TapKind};
pub use store::{SavedSelection, SelectionId, SelectionStore};
pub use ui::{App, Outcome, UiOptions};
