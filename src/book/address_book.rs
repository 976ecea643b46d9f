//! In-memory address book.

use super::chunks::Chunks;
use crate::models::Record;
use std::collections::HashMap;

/// Default number of records per page, used by [`AddressBook::pages`].
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Records keyed by contact name, kept in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
    page_size: usize,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    /// Create a book whose [`pages`](Self::pages) hold `page_size` records.
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            records: HashMap::new(),
            order: Vec::new(),
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Insert a record under its name, replacing any record with that name.
    ///
    /// A replaced record keeps its position in the book order.
    pub fn add_record(&mut self, record: Record) {
        let name = record.name().as_str().to_string();
        if self.records.insert(name.clone(), record).is_some() {
            tracing::debug!(name = %name, "Replaced record");
        } else {
            tracing::debug!(name = %name, "Added record");
            self.order.push(name);
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record for `name`, returning it. Missing names are ignored.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.remove(name)?;
        self.order.retain(|key| key != name);
        tracing::debug!(name = %name, "Deleted record");
        Some(removed)
    }

    /// Lazily iterate over the book in pages of `chunk_size` records.
    ///
    /// The key order is captured now; an empty book yields no pages.
    pub fn iterator(&self, chunk_size: usize) -> Chunks<'_> {
        Chunks::new(self.records(), chunk_size)
    }

    /// Iterate using the book's own page size.
    pub fn pages(&self) -> Chunks<'_> {
        self.iterator(self.page_size)
    }

    /// Contact names in book order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// All records in book order.
    pub fn records(&self) -> Vec<&Record> {
        self.order
            .iter()
            .filter_map(|name| self.records.get(name))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for AddressBook {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book_with(names: &[&str]) -> AddressBook {
        let mut book = AddressBook::new();
        for name in names {
            book.add_record(Record::new(*name));
        }
        book
    }

    fn page_names(book: &AddressBook, size: usize) -> Vec<Vec<String>> {
        book.iterator(size)
            .map(|page| page.names().into_iter().map(str::to_string).collect())
            .collect()
    }

    #[test]
    fn test_add_then_find() {
        let mut book = AddressBook::new();
        let mut record = Record::with_birthday("John", "1990-05-17").unwrap();
        record.add_phone("1112223333").unwrap();
        book.add_record(record.clone());

        assert_eq!(book.find("John"), Some(&record));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_find_missing_is_none() {
        let book = book_with(&["John"]);
        assert!(book.find("Jane").is_none());
        assert!(book.find("john").is_none());
    }

    #[test]
    fn test_add_record_overwrites_in_place() {
        let mut book = book_with(&["A", "B", "C"]);
        let mut replacement = Record::new("B");
        replacement.add_phone("1112223333").unwrap();
        book.add_record(replacement);

        assert_eq!(book.len(), 3);
        assert_eq!(book.names().collect::<Vec<_>>(), vec!["A", "B", "C"]);
        assert_eq!(book.find("B").unwrap().phones().len(), 1);
    }

    #[test]
    fn test_delete_then_find() {
        let mut book = book_with(&["John", "Jane"]);
        let removed = book.delete("John");
        assert_eq!(removed.map(|r| r.name().as_str().to_string()), Some("John".to_string()));
        assert!(book.find("John").is_none());
        assert_eq!(book.names().collect::<Vec<_>>(), vec!["Jane"]);
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut book = book_with(&["John"]);
        assert!(book.delete("Nobody").is_none());
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_find_mut_edits_stored_record() {
        let mut book = book_with(&["John"]);
        book.find_mut("John").unwrap().add_phone("1112223333").unwrap();
        assert!(book.find("John").unwrap().find_phone("1112223333").is_some());
    }

    #[test]
    fn test_iterator_windows_follow_insertion_order() {
        let book = book_with(&["A", "B", "C", "D", "E"]);
        assert_eq!(
            page_names(&book, 2),
            vec![
                vec!["A".to_string(), "B".to_string()],
                vec!["C".to_string(), "D".to_string()],
                vec!["E".to_string()],
            ]
        );
    }

    #[test]
    fn test_iterator_empty_book_yields_no_windows() {
        let book = AddressBook::new();
        for size in [1, 2, 5, 100] {
            assert_eq!(book.iterator(size).count(), 0);
        }
    }

    #[test]
    fn test_iterator_after_delete_skips_removed() {
        let mut book = book_with(&["A", "B", "C"]);
        book.delete("B");
        assert_eq!(
            page_names(&book, 5),
            vec![vec!["A".to_string(), "C".to_string()]]
        );
    }

    #[test]
    fn test_pages_use_configured_size() {
        let book = {
            let mut book = AddressBook::with_page_size(3);
            for name in ["A", "B", "C", "D"] {
                book.add_record(Record::new(name));
            }
            book
        };
        let sizes: Vec<usize> = book.pages().map(|page| page.len()).collect();
        assert_eq!(sizes, vec![3, 1]);
    }

    #[test]
    fn test_default_page_size() {
        let book = book_with(&["A", "B", "C", "D", "E", "F"]);
        assert_eq!(book.page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(book.pages().count(), 2);
    }
}
