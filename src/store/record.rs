use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const DEFAULT_NAME_CHARS: usize = 50;
const DEFAULT_NAME_WORDS: usize = 5;
pub const PREVIEW_CHARS: usize = 150;

static LAST_ID: AtomicU64 = AtomicU64::new(0);

/// Identifier of a saved selection: a millisecond timestamp that is bumped
/// when needed so ids handed out by one process never repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionId(u64);

impl SelectionId {
	pub const fn from_raw(raw: u64) -> Self {
		Self(raw)
	}

	pub fn get(self) -> u64 {
		self.0
	}

	pub fn generate() -> Self {
		let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default();
		let previous = LAST_ID
			.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
				Some(now.max(last + 1))
			})
			.unwrap_or_else(|last| last);
		Self(now.max(previous + 1))
	}
}

impl fmt::Display for SelectionId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl FromStr for SelectionId {
	type Err = ParseIntError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		s.trim().parse().map(Self)
	}
}

/// A named snapshot of selected text.
///
/// Records are values: renaming produces a new record with the same id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSelection {
	pub id: SelectionId,
	pub name: String,
	pub text: String,
	pub created_at: DateTime<Utc>,
}

impl SavedSelection {
	/// Create a record with a fresh id. A blank name falls back to
	/// [`default_name`] of the text.
	pub fn new(name: &str, text: impl Into<String>) -> Self {
		let text = text.into();
		let name = if name.trim().is_empty() {
			default_name(&text)
		} else {
			name.trim().to_string()
		};
		Self {
			id: SelectionId::generate(),
			name,
			text,
			created_at: Utc::now(),
		}
	}

	/// Copy of this record under a new name. Blank names keep the current one.
	#[must_use]
	pub fn renamed(&self, name: &str) -> Self {
		let mut record = self.clone();
		if !name.trim().is_empty() {
			record.name = name.trim().to_string();
		}
		record
	}

	/// First `max_chars` characters of the text, with `...` when truncated.
	pub fn preview(&self, max_chars: usize) -> String {
		let mut chars = self.text.chars();
		let preview: String = chars.by_ref().take(max_chars).collect();
		if chars.next().is_some() {
			format!("{preview}...")
		} else {
			preview
		}
	}
}

/// Suggested name for a selection: up to five words from its first fifty
/// characters, with line breaks flattened to spaces.
pub fn default_name(text: &str) -> String {
	let head: String = text
		.chars()
		.take(DEFAULT_NAME_CHARS)
		.map(|ch| if ch == '\n' || ch == '\r' { ' ' } else { ch })
		.collect();
	head.split(' ')
		.take(DEFAULT_NAME_WORDS)
		.collect::<Vec<_>>()
		.join(" ")
		.trim()
		.to_string()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn generated_ids_are_strictly_increasing() {
		let ids: Vec<_> = (0..64).map(|_| SelectionId::generate()).collect();
		for pair in ids.windows(2) {
			assert!(pair[0] < pair[1]);
		}
	}

	#[test]
	fn id_parses_from_display() {
		let id = SelectionId::from_raw(1_700_000_000_123);
		assert_eq!(id.to_string().parse::<SelectionId>().unwrap(), id);
		assert!("abc".parse::<SelectionId>().is_err());
	}

	#[test]
	fn default_name_takes_first_five_words() {
		assert_eq!(
			default_name("The quick brown fox jumps over the lazy dog"),
			"The quick brown fox jumps"
		);
		assert_eq!(default_name("line one\nline two"), "line one line two");
		assert_eq!(default_name(""), "");
	}

	#[test]
	fn default_name_only_considers_first_fifty_chars() {
		let text = format!("{} tail", "x".repeat(60));
		assert_eq!(default_name(&text), "x".repeat(50));
	}

	#[test]
	fn blank_name_falls_back_to_default() {
		let record = SavedSelection::new("   ", "alpha beta");
		assert_eq!(record.name, "alpha beta");
		let named = SavedSelection::new(" notes ", "alpha beta");
		assert_eq!(named.name, "notes");
	}

	#[test]
	fn rename_keeps_identity() {
		let record = SavedSelection::new("old", "text");
		let renamed = record.renamed("new");
		assert_eq!(renamed.id, record.id);
		assert_eq!(renamed.name, "new");
		assert_eq!(renamed.text, record.text);
		assert_eq!(record.renamed("  ").name, "old");
	}

	#[test]
	fn preview_truncates_long_text() {
		let record = SavedSelection::new("n", "abcdef");
		assert_eq!(record.preview(3), "abc...");
		assert_eq!(record.preview(6), "abcdef");
	}
}
