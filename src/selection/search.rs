use std::ops::Range;

/// Find every non-overlapping, case-insensitive occurrence of `query`.
///
/// Matches are literal (no pattern syntax) and reported left to right as byte
/// ranges into `text`. An empty query has no matches.
pub fn find_matches(text: &str, query: &str) -> Vec<Range<usize>> {
	if query.is_empty() {
		return Vec::new();
	}

	let mut matches = Vec::new();
	let mut cursor = 0;
	while cursor < text.len() {
		let rest = &text[cursor..];
		if let Some(len) = match_len(rest, query) {
			matches.push(cursor..cursor + len);
			cursor += len;
		} else {
			cursor += rest.chars().next().map_or(1, char::len_utf8);
		}
	}
	matches
}

/// Byte length of the prefix of `haystack` matching `needle`, if any.
fn match_len(haystack: &str, needle: &str) -> Option<usize> {
	let mut hay = haystack.char_indices();
	for expected in needle.chars() {
		let (_, actual) = hay.next()?;
		if !chars_eq_ignore_case(actual, expected) {
			return None;
		}
	}
	Some(hay.next().map_or(haystack.len(), |(idx, _)| idx))
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
	a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Ordered search matches plus the index of the current one.
///
/// The match list is rebuilt from scratch for every query; there is no
/// incremental update. Navigation wraps in both directions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
	query: String,
	matches: Vec<Range<usize>>,
	current: usize,
}

impl SearchState {
	/// Recompute matches of `query` in `text` and reset the cursor to the first.
	pub fn rebuild(&mut self, text: &str, query: &str) -> usize {
		self.query = query.to_string();
		self.matches = find_matches(text, query);
		self.current = 0;
		self.matches.len()
	}

	pub fn clear(&mut self) {
		self.query.clear();
		self.matches.clear();
		self.current = 0;
	}

	pub fn query(&self) -> &str {
		&self.query
	}

	pub fn matches(&self) -> &[Range<usize>] {
		&self.matches
	}

	pub fn len(&self) -> usize {
		self.matches.len()
	}

	pub fn is_empty(&self) -> bool {
		self.matches.is_empty()
	}

	pub fn current_index(&self) -> Option<usize> {
		(!self.matches.is_empty()).then_some(self.current)
	}

	pub fn current(&self) -> Option<Range<usize>> {
		self.matches.get(self.current).cloned()
	}

	/// One-based position of the current match and the total count.
	pub fn position(&self) -> Option<(usize, usize)> {
		self.current_index()
			.map(|index| (index + 1, self.matches.len()))
	}

	pub fn next(&mut self) -> Option<Range<usize>> {
		if self.matches.is_empty() {
			return None;
		}
		self.current = (self.current + 1) % self.matches.len();
		self.current()
	}

	pub fn previous(&mut self) -> Option<Range<usize>> {
		if self.matches.is_empty() {
			return None;
		}
		let count = self.matches.len();
		self.current = (self.current + count - 1) % count;
		self.current()
	}
}
