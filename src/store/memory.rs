use super::{SavedSelection, SelectionId, SelectionStore, StoreError, sort_newest_first};

/// Store that lives only as long as the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
	records: Vec<SavedSelection>,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_records(records: impl IntoIterator<Item = SavedSelection>) -> Self {
		Self {
			records: records.into_iter().collect(),
		}
	}
}

impl SelectionStore for MemoryStore {
	fn list(&self) -> Result<Vec<SavedSelection>, StoreError> {
		let mut records = self.records.clone();
		sort_newest_first(&mut records);
		Ok(records)
	}

	fn insert(&mut self, record: SavedSelection) -> Result<(), StoreError> {
		self.records.retain(|existing| existing.id != record.id);
		self.records.push(record);
		Ok(())
	}

	fn update(&mut self, record: SavedSelection) -> Result<(), StoreError> {
		let slot = self
			.records
			.iter_mut()
			.find(|existing| existing.id == record.id)
			.ok_or(StoreError::NotFound(record.id))?;
		*slot = record;
		Ok(())
	}

	fn delete(&mut self, id: SelectionId) -> Result<(), StoreError> {
		let before = self.records.len();
		self.records.retain(|existing| existing.id != id);
		if self.records.len() == before {
			return Err(StoreError::NotFound(id));
		}
		Ok(())
	}
}
