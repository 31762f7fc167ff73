//! Terminal event loop.

use std::collections::VecDeque;
use std::io::stdout;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::crossterm::execute;
use tracing::debug;

use super::App;
use super::state::Outcome;

impl<'a> App<'a> {
	/// Pump the terminal event loop until the user exits.
	///
	/// The terminal is restored and mouse capture released on every exit
	/// path, including errors from the loop.
	pub fn run(&mut self) -> Result<Outcome> {
		let mut terminal = ratatui::init();
		let setup = terminal
			.clear()
			.and_then(|()| execute!(stdout(), EnableMouseCapture));
		if let Err(err) = setup {
			ratatui::restore();
			return Err(err.into());
		}

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let result = self.event_loop(&mut terminal, &event_rx);

		ratatui::restore();
		let released = execute!(stdout(), DisableMouseCapture);

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}
		released?;

		result
	}

	/// Handle queued input and redraw each frame until the user exits. Input
	/// already queued is still handled when the event source disconnects.
	pub(crate) fn event_loop<B: Backend>(
		&mut self,
		terminal: &mut Terminal<B>,
		events: &Receiver<Event>,
	) -> Result<Outcome> {
		let mut pending_events = VecDeque::new();

		loop {
			let mut disconnected = false;
			loop {
				match events.try_recv() {
					Ok(Event::Resize(_, _)) => {}
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						disconnected = true;
						break;
					}
				}
			}

			while let Some(event) = pending_events.pop_front() {
				match event {
					Event::Key(key) if key.kind == KeyEventKind::Press => {
						if let Some(outcome) = self.handle_key(key)? {
							debug!(accepted = outcome.accepted, "event loop finished");
							return Ok(outcome);
						}
					}
					Event::Mouse(mouse) => {
						self.handle_mouse(mouse, Instant::now());
					}
					_ => {}
				}
			}

			if disconnected {
				return Err(anyhow!("input event channel disconnected"));
			}

			self.pump_store_events();
			self.tick(Instant::now());

			terminal.draw(|frame| self.draw(frame))?;

			thread::sleep(Duration::from_millis(16));
		}
	}
}
