use serde::{Deserialize, Serialize};

use super::pins::Pins;
use super::word::clamp_offset;

/// Pin offsets captured for state restore.
///
/// Either field may be missing in a stored snapshot; a snapshot only resolves
/// to pins when both bounds are present and valid for the target text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinSnapshot {
	#[serde(default)]
	pub start: Option<usize>,
	#[serde(default)]
	pub end: Option<usize>,
}

impl PinSnapshot {
	pub fn capture(pins: Option<Pins>) -> Self {
		match pins {
			Some(pins) => Self {
				start: Some(pins.start),
				end: Some(pins.end),
			},
			None => Self::default(),
		}
	}

	/// Resolve against `text`, dropping half-set or out-of-range offsets.
	pub fn resolve(&self, text: &str) -> Option<Pins> {
		let (start, end) = (self.start?, self.end?);
		let valid = |offset: usize| offset <= text.len() && clamp_offset(text, offset) == offset;
		(valid(start) && valid(end)).then(|| Pins::new(start, end))
	}
}

/// Everything needed to resume a session: buffer, pins, and search query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
	pub text: String,
	#[serde(default)]
	pub pins: PinSnapshot,
	#[serde(default)]
	pub query: String,
}
