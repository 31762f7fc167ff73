use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::SelectionId;

#[derive(Debug, Error)]
pub enum StoreError {
	#[error("failed to access {}: {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("failed to encode saved selections: {0}")]
	Encode(#[from] serde_json::Error),
	#[error("no saved selection with id {0}")]
	NotFound(SelectionId),
	#[error("selection store worker is not running")]
	Disconnected,
}

impl StoreError {
	pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
		Self::Io {
			path: path.into(),
			source,
		}
	}
}
