use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use textpin::app_dirs;
use textpin::selection::{PinSnapshot, SelectionController, TapTracker, find_matches};
use textpin::store::{
	JsonFileStore, MemoryStore, SelectionId, SelectionStore, SessionFile, StoreHandle,
};
use textpin::ui::{App, Outcome, UiOptions};
use tracing::{info, warn};

use crate::cli::{CliArgs, Command, OutputFormat, print_matches, print_record, print_records};
use crate::settings::ResolvedConfig;

/// Where the interactive session gets its text from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum StartingPoint {
	File(PathBuf),
	Stdin,
	Restore,
	Saved(SelectionId),
}

impl StartingPoint {
	/// Pick the text source from the command line. Without a file argument,
	/// stdin is used only when it is not a terminal.
	pub(crate) fn from_cli(cli: &CliArgs) -> Result<Self> {
		if cli.restore {
			return Ok(Self::Restore);
		}
		if let Some(id) = cli.open {
			return Ok(Self::Saved(id));
		}
		match &cli.file {
			Some(path) if path.as_os_str() == "-" => Ok(Self::Stdin),
			Some(path) => Ok(Self::File(path.clone())),
			None if !io::stdin().is_terminal() => Ok(Self::Stdin),
			None => bail!("no input: pass a FILE, pipe text on stdin, or use --restore"),
		}
	}
}

/// Text, pins and query the controller starts from.
#[derive(Debug, Default)]
struct InitialState {
	text: String,
	pins: PinSnapshot,
	query: Option<String>,
	title: Option<String>,
}

/// Coordinates building and running the interactive selector.
pub(crate) struct SelectionWorkflow {
	config: ResolvedConfig,
}

impl SelectionWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Self {
		Self { config }
	}

	pub(crate) fn run(self, start: StartingPoint) -> Result<Outcome> {
		let session = SessionFile::new(app_dirs::session_path()?);
		let initial = self.initial_state(&start, &session)?;

		let mut controller = SelectionController::new(initial.text).with_tap_tracker(
			TapTracker::new(self.config.multi_tap, self.config.tap_slop),
		);
		if !controller.restore_pins(&initial.pins) && initial.pins != PinSnapshot::default() {
			warn!("discarding restored pins that do not fit the text");
		}

		let options = UiOptions {
			title: self.config.title.clone().or(initial.title),
			theme: self.config.theme,
			debounce: self.config.debounce,
			initial_query: initial
				.query
				.unwrap_or_else(|| self.config.initial_query.clone()),
		};

		let mut app = App::new(controller, options);
		match StoreHandle::spawn(open_store(&self.config)) {
			Ok(handle) => app = app.with_store(handle),
			Err(err) => warn!(error = %err, "saved selections unavailable"),
		}

		let outcome = app.run()?;

		if let Err(err) = session.save(&outcome.session) {
			warn!(error = %err, "failed to save session");
		}

		Ok(outcome)
	}

	fn initial_state(&self, start: &StartingPoint, session: &SessionFile) -> Result<InitialState> {
		match start {
			StartingPoint::File(path) => Ok(InitialState {
				text: read_file(path)?,
				title: path
					.file_name()
					.map(|name| name.to_string_lossy().into_owned()),
				..InitialState::default()
			}),
			StartingPoint::Stdin => {
				let mut text = String::new();
				io::stdin()
					.read_to_string(&mut text)
					.context("failed to read stdin")?;
				Ok(InitialState {
					text,
					..InitialState::default()
				})
			}
			StartingPoint::Restore => match session.load() {
				Ok(Some(snapshot)) => {
					info!(path = %session.path().display(), "restoring session");
					Ok(InitialState {
						text: snapshot.text,
						pins: snapshot.pins,
						query: Some(snapshot.query),
						title: None,
					})
				}
				Ok(None) => bail!("no previous session to restore"),
				Err(err) => {
					warn!(error = %err, "ignoring unreadable session");
					bail!("previous session could not be read: {err}")
				}
			},
			StartingPoint::Saved(id) => {
				let record = open_store(&self.config)
					.get(*id)?
					.with_context(|| format!("no saved selection with id {id}"))?;
				Ok(InitialState {
					text: record.text,
					title: Some(record.name),
					..InitialState::default()
				})
			}
		}
	}
}

/// Run a non-interactive subcommand against the store or a file.
pub(crate) fn run_command(
	command: Command,
	config: &ResolvedConfig,
	format: OutputFormat,
) -> Result<()> {
	match command {
		Command::List => {
			let records = open_store(config).list()?;
			print_records(format, &records)
		}
		Command::Show { id } => {
			let record = open_store(config)
				.get(id)?
				.with_context(|| format!("no saved selection with id {id}"))?;
			print_record(format, &record)
		}
		Command::Rename { id, name } => {
			let mut store = open_store(config);
			let record = store
				.get(id)?
				.with_context(|| format!("no saved selection with id {id}"))?;
			let renamed = record.renamed(&name);
			store.update(renamed.clone())?;
			print_record(format, &renamed)
		}
		Command::Delete { id } => {
			open_store(config).delete(id)?;
			if format == OutputFormat::Plain {
				println!("Deleted {id}");
			}
			Ok(())
		}
		Command::Find { file, query } => {
			let text = read_file(&file)?;
			let matches = find_matches(&text, &query);
			print_matches(format, &text, &matches)
		}
	}
}

fn open_store(config: &ResolvedConfig) -> Box<dyn SelectionStore> {
	if config.ephemeral {
		Box::new(MemoryStore::new())
	} else {
		Box::new(JsonFileStore::open(&config.store_path))
	}
}

fn read_file(path: &Path) -> Result<String> {
	fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
