//! Persistence for saved selections.
//!
//! The UI and CLI only talk to [`SelectionStore`]; the JSON file backend is
//! the default and [`MemoryStore`] backs ephemeral sessions and tests. Long
//! running callers go through [`StoreHandle`], which performs operations on a
//! background thread and reports back over a channel.

mod error;
mod json;
mod memory;
mod record;
mod session;
mod worker;

pub use error::StoreError;
pub use json::JsonFileStore;
pub use memory::MemoryStore;
pub use record::{PREVIEW_CHARS, SavedSelection, SelectionId, default_name};
pub use session::SessionFile;
pub use worker::{StoreAction, StoreCommand, StoreEvent, StoreHandle};

/// Storage for [`SavedSelection`] records keyed by id.
pub trait SelectionStore: Send {
	/// All records, newest first.
	fn list(&self) -> Result<Vec<SavedSelection>, StoreError>;

	/// Insert a record, replacing any record with the same id.
	fn insert(&mut self, record: SavedSelection) -> Result<(), StoreError>;

	/// Replace the record with the same id.
	fn update(&mut self, record: SavedSelection) -> Result<(), StoreError>;

	/// Remove the record with `id`.
	fn delete(&mut self, id: SelectionId) -> Result<(), StoreError>;

	fn get(&self, id: SelectionId) -> Result<Option<SavedSelection>, StoreError> {
		Ok(self.list()?.into_iter().find(|record| record.id == id))
	}
}

/// Sort records newest first, breaking timestamp ties by id.
pub(crate) fn sort_newest_first(records: &mut [SavedSelection]) {
	records.sort_by(|a, b| {
		b.created_at
			.cmp(&a.created_at)
			.then_with(|| b.id.cmp(&a.id))
	});
}
