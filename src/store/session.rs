use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::StoreError;
use crate::selection::SessionSnapshot;

/// Location of the last session's snapshot.
#[derive(Debug, Clone)]
pub struct SessionFile {
	path: PathBuf,
}

impl SessionFile {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Load the snapshot, or `None` if no session was saved yet.
	pub fn load(&self) -> Result<Option<SessionSnapshot>, StoreError> {
		let contents = match fs::read_to_string(&self.path) {
			Ok(contents) => contents,
			Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
			Err(err) => return Err(StoreError::io(&self.path, err)),
		};
		Ok(Some(serde_json::from_str(&contents)?))
	}

	pub fn save(&self, snapshot: &SessionSnapshot) -> Result<(), StoreError> {
		if let Some(parent) = self.path.parent()
			&& !parent.as_os_str().is_empty()
		{
			fs::create_dir_all(parent).map_err(|err| StoreError::io(parent, err))?;
		}
		let encoded = serde_json::to_string(snapshot)?;
		fs::write(&self.path, encoded).map_err(|err| StoreError::io(&self.path, err))
	}
}

#[cfg(test)]
mod tests {
	use tempfile::tempdir;

	use super::*;
	use crate::selection::PinSnapshot;

	#[test]
	fn missing_session_loads_as_none() {
		let dir = tempdir().unwrap();
		let file = SessionFile::new(dir.path().join("session.json"));
		assert!(file.load().unwrap().is_none());
	}

	#[test]
	fn session_round_trips_through_disk() {
		let dir = tempdir().unwrap();
		let file = SessionFile::new(dir.path().join("state/session.json"));
		let snapshot = SessionSnapshot {
			text: "pinned words".into(),
			pins: PinSnapshot {
				start: Some(0),
				end: Some(6),
			},
			query: "words".into(),
		};

		file.save(&snapshot).unwrap();
		assert_eq!(file.load().unwrap(), Some(snapshot));
	}

	#[test]
	fn corrupt_session_is_an_error() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("session.json");
		fs::write(&path, "garbage").unwrap();
		assert!(matches!(
			SessionFile::new(path).load(),
			Err(StoreError::Encode(_))
		));
	}
}
