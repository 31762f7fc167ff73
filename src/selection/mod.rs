//! Pinned selections and in-text search over a single text buffer.
//!
//! [`SelectionController`] is the entry point: it owns the buffer together
//! with the live selection, the pinned word bounds built up by repeated
//! double taps, and the ordered set of search matches. The remaining modules
//! hold the pieces it is assembled from so they can be tested in isolation.

/// Single-subscriber callbacks fired by the controller.
pub mod observer;
/// The controller tying buffer, pins, search, and highlights together.
pub mod controller;
/// Tap streak detection (single, double, triple).
pub mod gesture;
/// Highlight markers projected over the buffer.
pub mod highlight;
/// Pin bounds and the replacement policy for repeated double taps.
pub mod pins;
/// Case-insensitive literal search and match navigation.
pub mod search;
/// Serializable pin and session snapshots.
pub mod snapshot;
/// Word boundary resolution.
pub mod word;

pub use controller::SelectionController;
pub use gesture::{DEFAULT_MULTI_TAP_WINDOW, DEFAULT_TAP_SLOP, TapKind, TapPoint, TapTracker};
pub use highlight::{HighlightKind, HighlightLayer, Marker, MarkerId};
pub use observer::Listeners;
pub use pins::{PinBound, PinState, PinUpdate, Pins};
pub use search::{SearchState, find_matches};
pub use snapshot::{PinSnapshot, SessionSnapshot};
pub use word::{clamp_offset, word_boundaries};
