//! Resolve configuration, cache, and data directories for `textpin`.
//!
//! Environment overrides win; otherwise the platform locations from the
//! `directories` crate are used.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "albo";
const APPLICATION: &str = "textpin";

const CONFIG_DIR_ENV: &str = "TEXTPIN_CONFIG_DIR";
const DATA_DIR_ENV: &str = "TEXTPIN_DATA_DIR";
const CACHE_DIR_ENV: &str = "TEXTPIN_CACHE_DIR";

const SELECTIONS_FILE: &str = "selections.json";
const SESSION_FILE: &str = "session.json";

fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for textpin"))
}

/// An empty value counts as unset.
fn dir_from_env(name: &str) -> Option<PathBuf> {
	let value = env::var_os(name)?;
	if value.is_empty() {
		None
	} else {
		Some(PathBuf::from(value))
	}
}

/// Directory holding `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.config_local_dir().to_path_buf())
}

/// Directory holding saved selections and the last session.
pub fn get_data_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(DATA_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.data_local_dir().to_path_buf())
}

/// Directory holding log files.
pub fn get_cache_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CACHE_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.cache_dir().to_path_buf())
}

/// Default location of the saved selection store.
pub fn default_store_path() -> Result<PathBuf> {
	Ok(get_data_dir()?.join(SELECTIONS_FILE))
}

/// Location of the snapshot written on exit and read by `--restore`.
pub fn session_path() -> Result<PathBuf> {
	Ok(get_data_dir()?.join(SESSION_FILE))
}
