//! Soft-wrapped view of the text buffer.
//!
//! Rows hold byte ranges into the buffer so screen positions map straight
//! to controller offsets and back.

use std::ops::Range;

use unicode_width::UnicodeWidthChar;

use crate::selection::clamp_offset;

/// Display width of a buffer character. Tabs take one cell and other
/// control characters take none.
pub(crate) fn cell_width(ch: char) -> usize {
	if ch == '\t' {
		1
	} else {
		ch.width().unwrap_or(0)
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextLayout {
	width: usize,
	rows: Vec<Range<usize>>,
}

impl TextLayout {
	pub fn new(text: &str, width: usize) -> Self {
		let width = width.max(1);
		let mut rows = Vec::new();
		let mut line_start = 0;

		for line in text.split('\n') {
			let mut row_start = line_start;
			let mut used = 0;
			for (index, ch) in line.char_indices() {
				let offset = line_start + index;
				let w = cell_width(ch);
				if used + w > width && offset > row_start {
					rows.push(row_start..offset);
					row_start = offset;
					used = 0;
				}
				used += w;
			}
			let line_end = line_start + line.len();
			rows.push(row_start..line_end);
			line_start = line_end + 1;
		}

		Self { width, rows }
	}

	pub fn width(&self) -> usize {
		self.width
	}

	pub fn rows(&self) -> &[Range<usize>] {
		&self.rows
	}

	pub fn row_count(&self) -> usize {
		self.rows.len()
	}

	/// Row containing `offset`. Offsets past the buffer land on the last row.
	pub fn row_of(&self, offset: usize) -> usize {
		self.rows
			.partition_point(|row| row.start <= offset)
			.saturating_sub(1)
	}

	/// Buffer offset under the cell at `row`, `column`. Cells past the end of
	/// a row map to the row's end; rows past the buffer map to its end.
	///
	/// Row bounds are clamped to `text`, so a layout built for another buffer
	/// still yields a valid offset.
	pub fn offset_at(&self, text: &str, row: usize, column: usize) -> usize {
		let Some(range) = self.rows.get(row) else {
			return text.len();
		};
		let start = clamp_offset(text, range.start);
		let end = clamp_offset(text, range.end).max(start);
		let mut used = 0;
		for (index, ch) in text[start..end].char_indices() {
			let w = cell_width(ch);
			if column < used + w.max(1) {
				return start + index;
			}
			used += w;
		}
		end
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn wraps_long_lines_and_keeps_newlines_out_of_rows() {
		let text = "abcdef\ngh";
		let layout = TextLayout::new(text, 4);
		assert_eq!(layout.rows(), &[0..4, 4..6, 7..9]);
	}

	#[test]
	fn empty_lines_get_their_own_row() {
		let layout = TextLayout::new("a\n\nb", 10);
		assert_eq!(layout.rows(), &[0..1, 2..2, 3..4]);
		assert_eq!(TextLayout::new("", 10).rows(), &[0..0]);
	}

	#[test]
	fn offsets_map_between_cells_and_bytes() {
		let text = "The quick brown fox";
		let layout = TextLayout::new(text, 10);
		assert_eq!(layout.rows(), &[0..10, 10..19]);
		assert_eq!(layout.offset_at(text, 0, 4), 4);
		assert_eq!(layout.offset_at(text, 1, 0), 10);
		assert_eq!(layout.offset_at(text, 1, 50), 19);
		assert_eq!(layout.offset_at(text, 7, 0), text.len());
		assert_eq!(layout.row_of(16), 1);
	}

	#[test]
	fn wide_characters_take_two_cells() {
		let text = "日本語";
		let layout = TextLayout::new(text, 4);
		assert_eq!(layout.rows(), &[0..6, 6..9]);
		assert_eq!(layout.offset_at(text, 0, 1), 0);
		assert_eq!(layout.offset_at(text, 0, 2), 3);
	}

	#[test]
	fn layout_for_another_buffer_stays_in_bounds() {
		let layout = TextLayout::new("The quick brown fox jumps", 10);
		assert_eq!(layout.offset_at("hi", 0, 5), 2);
		assert_eq!(layout.offset_at("hi", 2, 3), 2);
		assert_eq!(layout.offset_at("hi", 1, 0), 2);
		// Row 0 of the old layout ends inside 'é'.
		assert_eq!(layout.offset_at("ab cdefghé x", 0, 20), 9);
	}
}
