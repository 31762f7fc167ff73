use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::{SavedSelection, SelectionId, SelectionStore, StoreError, sort_newest_first};

/// Bumped whenever the on-disk layout changes. Files carrying any other
/// version are discarded.
const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct StoreFile {
	version: u32,
	#[serde(default)]
	selections: Vec<SavedSelection>,
}

/// Saved selections kept in a single JSON document.
///
/// Every mutation rewrites the whole file through a temporary sibling and a
/// rename, so a crash mid-write leaves the previous contents in place.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
	path: PathBuf,
}

impl JsonFileStore {
	pub fn open(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	fn read(&self) -> Result<Vec<SavedSelection>, StoreError> {
		let contents = match fs::read_to_string(&self.path) {
			Ok(contents) => contents,
			Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
			Err(err) => return Err(StoreError::io(&self.path, err)),
		};

		match serde_json::from_str::<StoreFile>(&contents) {
			Ok(file) if file.version == SCHEMA_VERSION => Ok(file.selections),
			Ok(file) => {
				warn!(
					path = %self.path.display(),
					found = file.version,
					expected = SCHEMA_VERSION,
					"discarding saved selections with unsupported schema version"
				);
				Ok(Vec::new())
			}
			Err(err) => {
				warn!(path = %self.path.display(), %err, "discarding unreadable saved selections");
				Ok(Vec::new())
			}
		}
	}

	fn write(&self, selections: Vec<SavedSelection>) -> Result<(), StoreError> {
		if let Some(parent) = self.path.parent()
			&& !parent.as_os_str().is_empty()
		{
			fs::create_dir_all(parent).map_err(|err| StoreError::io(parent, err))?;
		}

		let file = StoreFile {
			version: SCHEMA_VERSION,
			selections,
		};
		let encoded = serde_json::to_string_pretty(&file)?;
		let tmp = self.path.with_extension("json.tmp");
		fs::write(&tmp, encoded).map_err(|err| StoreError::io(&tmp, err))?;
		fs::rename(&tmp, &self.path).map_err(|err| StoreError::io(&self.path, err))
	}
}

impl SelectionStore for JsonFileStore {
	fn list(&self) -> Result<Vec<SavedSelection>, StoreError> {
		let mut selections = self.read()?;
		sort_newest_first(&mut selections);
		Ok(selections)
	}

	fn insert(&mut self, record: SavedSelection) -> Result<(), StoreError> {
		let mut selections = self.read()?;
		selections.retain(|existing| existing.id != record.id);
		info!(id = %record.id, name = %record.name, "saving selection");
		selections.push(record);
		self.write(selections)
	}

	fn update(&mut self, record: SavedSelection) -> Result<(), StoreError> {
		let mut selections = self.read()?;
		let slot = selections
			.iter_mut()
			.find(|existing| existing.id == record.id)
			.ok_or(StoreError::NotFound(record.id))?;
		info!(id = %record.id, name = %record.name, "updating selection");
		*slot = record;
		self.write(selections)
	}

	fn delete(&mut self, id: SelectionId) -> Result<(), StoreError> {
		let mut selections = self.read()?;
		let before = selections.len();
		selections.retain(|existing| existing.id != id);
		if selections.len() == before {
			return Err(StoreError::NotFound(id));
		}
		info!(%id, "deleting selection");
		self.write(selections)
	}
}
