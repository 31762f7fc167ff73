use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Both pinned bounds, always normalized so that `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pins {
	pub start: usize,
	pub end: usize,
}

/// Which bound a double tap replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinBound {
	Start,
	End,
}

/// Outcome of feeding a tapped word into [`PinState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinUpdate {
	/// No pins existed; the word became the initial pin.
	Created,
	/// One bound was moved to the word's edge.
	Replaced(PinBound),
}

impl Pins {
	pub fn new(start: usize, end: usize) -> Self {
		Self {
			start: start.min(end),
			end: start.max(end),
		}
	}

	pub fn range(&self) -> Range<usize> {
		self.start..self.end
	}

	pub fn is_empty(&self) -> bool {
		self.start == self.end
	}

	/// Pick the bound a tap on `word` should replace.
	///
	/// A word entirely before the pins moves `start`, a word entirely after
	/// moves `end`. A word overlapping the pins moves whichever bound is
	/// closer: the distance from the word's start to `start` against the
	/// distance from the word's end to `end`. Ties move `start`.
	pub fn bound_for(&self, word: &Range<usize>) -> PinBound {
		if word.end <= self.start {
			return PinBound::Start;
		}
		if word.start >= self.end {
			return PinBound::End;
		}

		let to_start = word.start.abs_diff(self.start);
		let to_end = word.end.abs_diff(self.end);
		if to_start <= to_end {
			PinBound::Start
		} else {
			PinBound::End
		}
	}

	fn replace(&mut self, bound: PinBound, word: &Range<usize>) {
		let (start, end) = match bound {
			PinBound::Start => (word.start, self.end),
			PinBound::End => (self.start, word.end),
		};
		*self = Pins::new(start, end);
	}
}

/// Pinned selection state: either no pins or both bounds set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PinState {
	pins: Option<Pins>,
}

impl PinState {
	pub fn is_set(&self) -> bool {
		self.pins.is_some()
	}

	pub fn pins(&self) -> Option<Pins> {
		self.pins
	}

	pub fn range(&self) -> Option<Range<usize>> {
		self.pins.map(|pins| pins.range())
	}

	/// Apply a double-tapped word to the pins.
	pub fn apply_word(&mut self, word: Range<usize>) -> PinUpdate {
		if let Some(pins) = self.pins.as_mut() {
			let bound = pins.bound_for(&word);
			pins.replace(bound, &word);
			return PinUpdate::Replaced(bound);
		}

		self.pins = Some(Pins::new(word.start, word.end));
		PinUpdate::Created
	}

	/// Replace the state wholesale, e.g. when restoring a snapshot.
	pub fn set(&mut self, pins: Option<Pins>) {
		self.pins = pins;
	}

	/// Drop both pins. Returns whether any were set.
	pub fn clear(&mut self) -> bool {
		self.pins.take().is_some()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn first_word_becomes_the_pin() {
		let mut state = PinState::default();
		assert_eq!(state.apply_word(4..9), PinUpdate::Created);
		assert_eq!(state.range(), Some(4..9));
	}

	#[test]
	fn word_before_moves_start_and_after_moves_end() {
		let mut state = PinState::default();
		state.apply_word(10..15);

		assert_eq!(state.apply_word(20..24), PinUpdate::Replaced(PinBound::End));
		assert_eq!(state.range(), Some(10..24));

		assert_eq!(state.apply_word(0..3), PinUpdate::Replaced(PinBound::Start));
		assert_eq!(state.range(), Some(0..24));
	}

	#[test]
	fn adjacent_words_count_as_outside() {
		let pins = Pins::new(10, 20);
		assert_eq!(pins.bound_for(&(5..10)), PinBound::Start);
		assert_eq!(pins.bound_for(&(20..25)), PinBound::End);
	}

	#[test]
	fn overlapping_word_moves_the_closer_bound() {
		let pins = Pins::new(0, 40);
		assert_eq!(pins.bound_for(&(5..9)), PinBound::Start);
		assert_eq!(pins.bound_for(&(30..35)), PinBound::End);

		let mut state = PinState::default();
		state.apply_word(0..40);
		state.apply_word(30..35);
		assert_eq!(state.range(), Some(0..35));
	}

	#[test]
	fn overlap_ties_move_start() {
		let pins = Pins::new(10, 20);
		// Both distances are 2.
		assert_eq!(pins.bound_for(&(12..18)), PinBound::Start);

		let mut state = PinState::default();
		state.apply_word(10..20);
		state.apply_word(12..18);
		assert_eq!(state.range(), Some(12..20));
	}

	#[test]
	fn pins_stay_normalized() {
		let pins = Pins::new(9, 3);
		assert_eq!(pins.range(), 3..9);
	}

	#[test]
	fn clear_reports_previous_state() {
		let mut state = PinState::default();
		assert!(!state.clear());
		state.apply_word(1..2);
		assert!(state.clear());
		assert!(!state.is_set());
	}
}
