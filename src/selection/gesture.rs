use std::time::{Duration, Instant};

/// Taps landing within this window of the previous one extend the streak.
pub const DEFAULT_MULTI_TAP_WINDOW: Duration = Duration::from_millis(500);
/// Taps further apart than this (in cells, per axis) start a new streak.
pub const DEFAULT_TAP_SLOP: u16 = 1;

/// Classification of a tap within the current streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapKind {
	Single,
	Double,
	Triple,
}

/// Screen position of a tap (column, row in screen coords).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TapPoint {
	pub column: u16,
	pub row: u16,
}

impl TapPoint {
	pub fn new(column: u16, row: u16) -> Self {
		Self { column, row }
	}

	fn within(self, other: TapPoint, slop: u16) -> bool {
		self.column.abs_diff(other.column) <= slop && self.row.abs_diff(other.row) <= slop
	}
}

/// Counts consecutive taps to tell single, double, and triple taps apart.
///
/// The tracker only looks at tap-down timestamps and positions, so it can be
/// driven from any input source. A completed triple tap resets the streak; the
/// next tap starts over as a single tap.
#[derive(Debug, Clone)]
pub struct TapTracker {
	window: Duration,
	slop: u16,
	tap_count: u8,
	last_tap_at: Option<Instant>,
	last_point: Option<TapPoint>,
}

impl Default for TapTracker {
	fn default() -> Self {
		Self::new(DEFAULT_MULTI_TAP_WINDOW, DEFAULT_TAP_SLOP)
	}
}

impl TapTracker {
	pub fn new(window: Duration, slop: u16) -> Self {
		Self {
			window,
			slop,
			tap_count: 0,
			last_tap_at: None,
			last_point: None,
		}
	}

	/// Record a tap-down at `point` and classify it.
	pub fn register(&mut self, point: TapPoint, at: Instant) -> TapKind {
		let continues = match (self.last_tap_at, self.last_point) {
			(Some(last_at), Some(last_point)) => {
				at.saturating_duration_since(last_at) < self.window
					&& last_point.within(point, self.slop)
			}
			_ => false,
		};

		self.tap_count = if continues { self.tap_count + 1 } else { 1 };
		self.last_tap_at = Some(at);
		self.last_point = Some(point);

		match self.tap_count {
			3 => {
				self.tap_count = 0;
				TapKind::Triple
			}
			2 => TapKind::Double,
			_ => TapKind::Single,
		}
	}

	/// Forget the current streak.
	pub fn reset(&mut self) {
		self.tap_count = 0;
		self.last_tap_at = None;
		self.last_point = None;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn ms(value: u64) -> Duration {
		Duration::from_millis(value)
	}

	#[test]
	fn streak_counts_up_to_triple() {
		let mut tracker = TapTracker::default();
		let t0 = Instant::now();
		let p = TapPoint::new(4, 2);

		assert_eq!(tracker.register(p, t0), TapKind::Single);
		assert_eq!(tracker.register(p, t0 + ms(120)), TapKind::Double);
		assert_eq!(tracker.register(p, t0 + ms(240)), TapKind::Triple);
		assert_eq!(tracker.register(p, t0 + ms(360)), TapKind::Single);
	}

	#[test]
	fn slow_taps_restart_the_streak() {
		let mut tracker = TapTracker::default();
		let t0 = Instant::now();
		let p = TapPoint::new(0, 0);

		assert_eq!(tracker.register(p, t0), TapKind::Single);
		assert_eq!(tracker.register(p, t0 + ms(500)), TapKind::Single);
		assert_eq!(tracker.register(p, t0 + ms(999)), TapKind::Double);
	}

	#[test]
	fn distant_taps_restart_the_streak() {
		let mut tracker = TapTracker::new(ms(500), 1);
		let t0 = Instant::now();

		assert_eq!(tracker.register(TapPoint::new(10, 3), t0), TapKind::Single);
		assert_eq!(
			tracker.register(TapPoint::new(11, 4), t0 + ms(50)),
			TapKind::Double
		);
		assert_eq!(
			tracker.register(TapPoint::new(30, 4), t0 + ms(100)),
			TapKind::Single
		);
	}

	#[test]
	fn reset_forgets_previous_tap() {
		let mut tracker = TapTracker::default();
		let t0 = Instant::now();
		let p = TapPoint::new(1, 1);

		tracker.register(p, t0);
		tracker.reset();
		assert_eq!(tracker.register(p, t0 + ms(10)), TapKind::Single);
	}
}
