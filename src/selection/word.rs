use std::ops::Range;

/// Clamp `offset` into `text` and snap it back onto a char boundary.
pub fn clamp_offset(text: &str, offset: usize) -> usize {
	let mut offset = offset.min(text.len());
	while !text.is_char_boundary(offset) {
		offset -= 1;
	}
	offset
}

/// Resolve the whitespace-delimited word around `offset`.
///
/// Scans left while the preceding character is not whitespace and right while
/// the current character is not whitespace. Offsets past the end are clamped,
/// so a tap at the very end of the buffer yields the trailing word (or an
/// empty range after trailing whitespace). An empty buffer yields `0..0`.
pub fn word_boundaries(text: &str, offset: usize) -> Range<usize> {
	if text.is_empty() {
		return 0..0;
	}

	let offset = clamp_offset(text, offset);
	let start = text[..offset]
		.char_indices()
		.rev()
		.take_while(|(_, ch)| !ch.is_whitespace())
		.last()
		.map_or(offset, |(idx, _)| idx);
	let end = text[offset..]
		.char_indices()
		.find(|(_, ch)| ch.is_whitespace())
		.map_or(text.len(), |(idx, _)| offset + idx);

	start..end
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn resolves_word_under_offset() {
		let text = "The quick brown fox";
		assert_eq!(word_boundaries(text, 6), 4..9);
		assert_eq!(&text[word_boundaries(text, 4)], "quick");
		assert_eq!(&text[word_boundaries(text, 0)], "The");
	}

	#[test]
	fn offset_on_whitespace_takes_preceding_word() {
		let text = "ab cd";
		assert_eq!(word_boundaries(text, 2), 0..2);
	}

	#[test]
	fn empty_buffer_yields_empty_range() {
		assert_eq!(word_boundaries("", 0), 0..0);
		assert_eq!(word_boundaries("", 42), 0..0);
	}

	#[test]
	fn out_of_range_offset_is_clamped() {
		let text = "hello world";
		assert_eq!(word_boundaries(text, 500), 6..11);
		assert_eq!(word_boundaries("trailing ", 9), 9..9);
	}

	#[test]
	fn punctuation_stays_attached_to_word() {
		let text = "lazy dog. The";
		assert_eq!(&text[word_boundaries(text, 6)], "dog.");
	}

	#[test]
	fn multibyte_offsets_snap_to_char_boundaries() {
		let text = "naïve café";
		// Byte 3 lands inside 'ï'.
		assert_eq!(clamp_offset(text, 3), 2);
		assert_eq!(&text[word_boundaries(text, 3)], "naïve");
		assert_eq!(&text[word_boundaries(text, text.len())], "café");
	}

	#[test]
	fn boundaries_always_bracket_the_offset() {
		let text = "  one\ttwo  three\nfour ";
		for offset in 0..=text.len() {
			let range = word_boundaries(text, offset);
			assert!(range.start <= offset && offset <= range.end, "offset {offset}");
			assert!(!text[range.clone()].chars().any(char::is_whitespace));
			if range.start > 0 {
				let before = text[..range.start].chars().next_back().unwrap();
				assert!(before.is_whitespace());
			}
			if let Some(after) = text[range.end..].chars().next() {
				assert!(after.is_whitespace());
			}
		}
	}
}
