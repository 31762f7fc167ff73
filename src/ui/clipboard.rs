use std::env;
use std::io::{self, IsTerminal, Write};
use std::process::{Command, Stdio};

use base64::Engine;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
	#[error("nothing selected to copy")]
	Empty,
	#[error("no clipboard tool available")]
	Unavailable,
}

/// Copy text to the clipboard.
///
/// When stdout is a terminal the text is sent as an OSC 52 sequence (works
/// over tmux and ssh). Terminals do not acknowledge OSC 52, so a successful
/// write counts as a copy. Otherwise native tools are used.
pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
	copy_with(
		text,
		io::stdout().is_terminal(),
		try_osc52_copy,
		try_native_clipboard,
	)
}

fn copy_with(
	text: &str,
	stdout_is_terminal: bool,
	osc52: impl FnOnce(&str) -> bool,
	native: impl FnOnce(&str) -> Result<(), ClipboardError>,
) -> Result<(), ClipboardError> {
	if text.is_empty() {
		return Err(ClipboardError::Empty);
	}
	if stdout_is_terminal && osc52(text) {
		return Ok(());
	}
	native(text)
}

fn osc52_sequence(text: &str, inside_tmux: bool) -> String {
	let encoded = base64::engine::general_purpose::STANDARD.encode(text);
	if inside_tmux {
		format!("\x1bPtmux;\x1b\x1b]52;c;{encoded}\x07\x1b\\")
	} else {
		format!("\x1b]52;c;{encoded}\x07")
	}
}

fn try_osc52_copy(text: &str) -> bool {
	let sequence = osc52_sequence(text, env::var_os("TMUX").is_some());
	let mut stdout = io::stdout().lock();
	stdout.write_all(sequence.as_bytes()).is_ok() && stdout.flush().is_ok()
}

fn pipe_into(program: &str, args: &[&str], text: &str) -> bool {
	let Ok(mut child) = Command::new(program)
		.args(args)
		.stdin(Stdio::piped())
		.stdout(Stdio::null())
		.stderr(Stdio::null())
		.spawn()
	else {
		return false;
	};
	let written = child
		.stdin
		.take()
		.is_some_and(|mut stdin| stdin.write_all(text.as_bytes()).is_ok());
	written && child.wait().is_ok_and(|status| status.success())
}

fn try_native_clipboard(text: &str) -> Result<(), ClipboardError> {
	if env::var_os("WAYLAND_DISPLAY").is_some() && pipe_into("wl-copy", &[], text) {
		return Ok(());
	}
	let candidates: [(&str, &[&str]); 3] = [
		("xclip", &["-selection", "clipboard"]),
		("xsel", &["--clipboard", "--input"]),
		("pbcopy", &[]),
	];
	if candidates
		.iter()
		.any(|(program, args)| pipe_into(program, args, text))
	{
		return Ok(());
	}
	Err(ClipboardError::Unavailable)
}
