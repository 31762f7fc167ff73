//! File logging for `textpin`.
//!
//! The terminal belongs to the UI, so events only go to a log file. The
//! filter honours `TEXTPIN_LOG` first, then `RUST_LOG`, and defaults to
//! `warn`.
//!
//! Default location: `<cache_dir>/logs/textpin-<pid>.log`. Override with
//! `--log-file`; a path with an extension names the file, anything else
//! names the directory.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::app_dirs;

const LOG_ENV: &str = "TEXTPIN_LOG";

#[derive(Debug, Error)]
pub enum LogError {
	#[error("failed to resolve log directory: {0}")]
	Directory(#[from] anyhow::Error),
	#[error("failed to create log directory {}: {source}", path.display())]
	CreateDir {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("invalid log filter: {0}")]
	Filter(#[from] tracing_subscriber::filter::ParseError),
	#[error("logging already initialised: {0}")]
	Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Keeps the background writer alive; dropping it flushes the log file.
pub struct LogGuard {
	_file_guard: WorkerGuard,
	pub log_file: PathBuf,
}

#[derive(Debug, Default, Clone)]
pub struct LogConfig {
	pub log_file_path: Option<PathBuf>,
}

pub fn init(config: LogConfig) -> Result<LogGuard, LogError> {
	let (log_dir, filename) = resolve_log_path(config.log_file_path)?;
	fs::create_dir_all(&log_dir).map_err(|source| LogError::CreateDir {
		path: log_dir.clone(),
		source,
	})?;

	let file_appender = tracing_appender::rolling::never(&log_dir, &filename);
	let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

	let file_layer = fmt::layer()
		.with_writer(non_blocking_file)
		.with_ansi(false)
		.with_filter(create_filter()?);

	Registry::default().with(file_layer).try_init()?;

	Ok(LogGuard {
		_file_guard: file_guard,
		log_file: log_dir.join(filename),
	})
}

/// Route events to the test harness output. Safe to call from every test.
pub fn test() {
	if let Ok(filter) = create_filter() {
		let _ = fmt()
			.with_env_filter(filter)
			.with_test_writer()
			.try_init();
	}
}

fn resolve_log_path(override_path: Option<PathBuf>) -> Result<(PathBuf, String), LogError> {
	let filename = format!("textpin-{}.log", std::process::id());

	if let Some(path) = override_path {
		if path.extension().is_some() {
			let dir = path
				.parent()
				.filter(|parent| !parent.as_os_str().is_empty())
				.unwrap_or_else(|| Path::new("."))
				.to_path_buf();
			let name = path
				.file_name()
				.map(|name| name.to_string_lossy().into_owned())
				.unwrap_or(filename);
			return Ok((dir, name));
		}
		return Ok((path, filename));
	}

	Ok((app_dirs::get_cache_dir()?.join("logs"), filename))
}

fn create_filter() -> Result<EnvFilter, LogError> {
	if let Ok(value) = env::var(LOG_ENV) {
		return Ok(EnvFilter::try_new(expand_level(&value))?);
	}
	if let Ok(value) = env::var("RUST_LOG") {
		return Ok(EnvFilter::try_new(value)?);
	}
	Ok(EnvFilter::new("warn"))
}

/// A bare level applies to this crate only; directive lists pass through.
fn expand_level(value: &str) -> String {
	if value.contains('=') || value.contains(',') {
		value.to_string()
	} else {
		format!("warn,textpin={value}")
	}
}
