use std::collections::BTreeMap;
use std::ops::Range;

/// Opaque handle for a highlight marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarkerId(u64);

/// What a marker highlights. Clearing search results only touches
/// [`HighlightKind::SearchMatch`] markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightKind {
	SearchMatch,
	/// Host-defined markers, tagged with a caller-chosen value.
	Annotation(u32),
}

/// A background highlight applied to a byte range of the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
	pub id: MarkerId,
	pub range: Range<usize>,
	pub kind: HighlightKind,
}

/// Set of highlight markers over the buffer.
///
/// Markers are a disposable projection of state held elsewhere (the search
/// matches, for instance); renderers read them to decorate text.
#[derive(Debug, Clone, Default)]
pub struct HighlightLayer {
	next_id: u64,
	markers: BTreeMap<MarkerId, Marker>,
}

impl HighlightLayer {
	pub fn add(&mut self, range: Range<usize>, kind: HighlightKind) -> MarkerId {
		let id = MarkerId(self.next_id);
		self.next_id += 1;
		self.markers.insert(id, Marker { id, range, kind });
		id
	}

	pub fn remove(&mut self, id: MarkerId) -> Option<Marker> {
		self.markers.remove(&id)
	}

	pub fn get(&self, id: MarkerId) -> Option<&Marker> {
		self.markers.get(&id)
	}

	/// Remove every marker of `kind`, returning how many were dropped.
	pub fn clear_kind(&mut self, kind: HighlightKind) -> usize {
		let before = self.markers.len();
		self.markers.retain(|_, marker| marker.kind != kind);
		before - self.markers.len()
	}

	pub fn clear(&mut self) {
		self.markers.clear();
	}

	/// Markers overlapping `range`.
	pub fn overlapping(&self, range: Range<usize>) -> impl Iterator<Item = &Marker> {
		self.markers
			.values()
			.filter(move |marker| marker.range.start < range.end && range.start < marker.range.end)
	}

	pub fn count_of(&self, kind: HighlightKind) -> usize {
		self.markers.values().filter(|marker| marker.kind == kind).count()
	}

	pub fn len(&self) -> usize {
		self.markers.len()
	}

	pub fn is_empty(&self) -> bool {
		self.markers.is_empty()
	}
}
