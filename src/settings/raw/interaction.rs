use std::time::Duration;

use serde::Deserialize;
use textpin::selection::{DEFAULT_MULTI_TAP_WINDOW, DEFAULT_TAP_SLOP};

use crate::cli::CliArgs;

/// Click handling values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct InteractionSection {
	pub(super) multi_tap_ms: Option<u64>,
	pub(super) tap_slop: Option<u16>,
}

pub(super) struct InteractionResolution {
	pub(super) multi_tap: Duration,
	pub(super) tap_slop: u16,
}

impl InteractionSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(ms) = cli.multi_tap_ms {
			self.multi_tap_ms = Some(ms);
		}
		if let Some(slop) = cli.tap_slop {
			self.tap_slop = Some(slop);
		}
	}

	pub(super) fn finalize(self) -> InteractionResolution {
		InteractionResolution {
			multi_tap: self
				.multi_tap_ms
				.map(Duration::from_millis)
				.unwrap_or(DEFAULT_MULTI_TAP_WINDOW),
			tap_slop: self.tap_slop.unwrap_or(DEFAULT_TAP_SLOP),
		}
	}
}
