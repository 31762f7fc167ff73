use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;
use textpin::app_dirs;

use super::super::util::expand_home;
use crate::cli::CliArgs;

/// Saved selection storage values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct StorageSection {
	pub(super) path: Option<PathBuf>,
	pub(super) ephemeral: Option<bool>,
}

pub(super) struct StorageResolution {
	pub(super) path: PathBuf,
	pub(super) ephemeral: bool,
}

impl StorageSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.store.clone() {
			self.path = Some(path);
		}
		if let Some(ephemeral) = cli.ephemeral {
			self.ephemeral = Some(ephemeral);
		}
	}

	pub(super) fn finalize(self) -> Result<StorageResolution> {
		let path = match self.path {
			Some(path) => expand_home(&path),
			None => app_dirs::default_store_path()
				.context("failed to determine the saved selection file")?,
		};
		Ok(StorageResolution {
			path,
			ephemeral: self.ephemeral.unwrap_or(false),
		})
	}
}
