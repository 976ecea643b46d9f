//! Chunked iteration over address book entries.

use crate::models::Record;

/// A window of consecutive records, viewed as a name → record mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordPage<'a> {
    records: Vec<&'a Record>,
}

impl<'a> RecordPage<'a> {
    /// Look up a record in this page by name.
    pub fn get(&self, name: &str) -> Option<&'a Record> {
        self.records
            .iter()
            .copied()
            .find(|record| record.name().as_str() == name)
    }

    /// Whether this page holds a record for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Names in this page, in book order.
    pub fn names(&self) -> Vec<&'a str> {
        self.records.iter().map(|record| record.name().as_str()).collect()
    }

    pub fn records(&self) -> &[&'a Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.records.iter().copied()
    }
}

impl<'a> IntoIterator for RecordPage<'a> {
    type Item = &'a Record;
    type IntoIter = std::vec::IntoIter<&'a Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

/// Lazy iterator yielding [`RecordPage`]s of at most `chunk_size` records.
///
/// The entry order is captured when the iterator is created. Pages are
/// built one at a time as the iterator is advanced; an empty snapshot
/// yields no pages at all.
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    snapshot: Vec<&'a Record>,
    chunk_size: usize,
    position: usize,
}

impl<'a> Chunks<'a> {
    /// Iterate over `snapshot` in windows of `chunk_size`.
    ///
    /// A `chunk_size` of zero is treated as one.
    pub fn new(snapshot: Vec<&'a Record>, chunk_size: usize) -> Self {
        Self {
            snapshot,
            chunk_size: chunk_size.max(1),
            position: 0,
        }
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = RecordPage<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.snapshot.len() {
            return None;
        }
        let end = (self.position + self.chunk_size).min(self.snapshot.len());
        let records = self.snapshot[self.position..end].to_vec();
        self.position = end;
        Some(RecordPage { records })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.snapshot.len() - self.position;
        let pages = remaining.div_ceil(self.chunk_size);
        (pages, Some(pages))
    }
}

impl ExactSizeIterator for Chunks<'_> {}

impl std::iter::FusedIterator for Chunks<'_> {}
