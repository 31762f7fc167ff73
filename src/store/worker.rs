//! Background thread that owns a [`SelectionStore`].
//!
//! The UI never blocks on disk access: it sends [`StoreCommand`]s and drains
//! [`StoreEvent`]s once per frame. Every mutation is followed by a fresh
//! listing so the library view can simply replace its rows.

use std::fmt;
use std::io;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, warn};

use super::{SavedSelection, SelectionId, SelectionStore, StoreError};

/// Work requested from the store thread.
#[derive(Debug, Clone)]
pub enum StoreCommand {
	Refresh,
	Insert(SavedSelection),
	Update(SavedSelection),
	Delete(SelectionId),
	Shutdown,
}

/// Operation named in a [`StoreEvent::Failed`] report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreAction {
	List,
	Save,
	Rename,
	Delete,
}

impl fmt::Display for StoreAction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let label = match self {
			Self::List => "load saved selections",
			Self::Save => "save selection",
			Self::Rename => "rename selection",
			Self::Delete => "delete selection",
		};
		f.write_str(label)
	}
}

/// Results reported by the store thread.
#[derive(Debug, Clone)]
pub enum StoreEvent {
	Listed(Vec<SavedSelection>),
	Saved(SavedSelection),
	Updated(SavedSelection),
	Deleted(SelectionId),
	Failed { action: StoreAction, message: String },
}

/// Channel pair talking to the store thread.
pub struct StoreHandle {
	command_tx: Sender<StoreCommand>,
	event_rx: Receiver<StoreEvent>,
	thread: Option<JoinHandle<()>>,
}

impl StoreHandle {
	/// Move `store` onto a dedicated thread.
	pub fn spawn(store: Box<dyn SelectionStore>) -> io::Result<Self> {
		let (command_tx, command_rx) = mpsc::channel();
		let (event_tx, event_rx) = mpsc::channel();

		let thread = thread::Builder::new()
			.name("selection-store".into())
			.spawn(move || worker_loop(store, command_rx, event_tx))?;

		Ok(Self {
			command_tx,
			event_rx,
			thread: Some(thread),
		})
	}

	pub fn send(&self, command: StoreCommand) -> Result<(), StoreError> {
		self.command_tx
			.send(command)
			.map_err(|_| StoreError::Disconnected)
	}

	/// Next pending event, if any, without blocking.
	pub fn try_recv(&self) -> Option<StoreEvent> {
		match self.event_rx.try_recv() {
			Ok(event) => Some(event),
			Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
		}
	}

	pub fn recv_timeout(&self, timeout: Duration) -> Result<StoreEvent, StoreError> {
		self.event_rx
			.recv_timeout(timeout)
			.map_err(|err| match err {
				RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected => {
					StoreError::Disconnected
				}
			})
	}

	/// Stop the thread after it drains already queued commands.
	pub fn shutdown(&mut self) {
		let _ = self.command_tx.send(StoreCommand::Shutdown);
		if let Some(thread) = self.thread.take()
			&& thread.join().is_err()
		{
			warn!("selection store thread panicked");
		}
	}
}

impl Drop for StoreHandle {
	fn drop(&mut self) {
		self.shutdown();
	}
}

impl fmt::Debug for StoreHandle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("StoreHandle")
			.field("running", &self.thread.is_some())
			.finish()
	}
}

fn worker_loop(
	mut store: Box<dyn SelectionStore>,
	command_rx: Receiver<StoreCommand>,
	event_tx: Sender<StoreEvent>,
) {
	while let Ok(command) = command_rx.recv() {
		if !handle_command(store.as_mut(), &event_tx, command) {
			break;
		}
	}
	debug!("selection store thread exiting");
}

fn handle_command(
	store: &mut dyn SelectionStore,
	event_tx: &Sender<StoreEvent>,
	command: StoreCommand,
) -> bool {
	let outcome = match command {
		StoreCommand::Refresh => Ok(None),
		StoreCommand::Insert(record) => store
			.insert(record.clone())
			.map(|()| Some(StoreEvent::Saved(record)))
			.map_err(|err| (StoreAction::Save, err)),
		StoreCommand::Update(record) => store
			.update(record.clone())
			.map(|()| Some(StoreEvent::Updated(record)))
			.map_err(|err| (StoreAction::Rename, err)),
		StoreCommand::Delete(id) => store
			.delete(id)
			.map(|()| Some(StoreEvent::Deleted(id)))
			.map_err(|err| (StoreAction::Delete, err)),
		StoreCommand::Shutdown => return false,
	};

	match outcome {
		Ok(Some(event)) => {
			if event_tx.send(event).is_err() {
				return false;
			}
		}
		Ok(None) => {}
		Err((action, err)) => {
			warn!(%action, %err, "store operation failed");
			let failed = StoreEvent::Failed {
				action,
				message: err.to_string(),
			};
			if event_tx.send(failed).is_err() {
				return false;
			}
		}
	}

	let listed = match store.list() {
		Ok(records) => StoreEvent::Listed(records),
		Err(err) => {
			warn!(%err, "listing saved selections failed");
			StoreEvent::Failed {
				action: StoreAction::List,
				message: err.to_string(),
			}
		}
	};
	event_tx.send(listed).is_ok()
}
