use crate::book::Chunks;
use crate::models::Record;

/// Repository for managing contact records.
///
/// Abstracts over record storage so the console layer can run against the
/// in-memory [`AddressBook`](crate::book::AddressBook) or a test double.
pub trait RecordRepository {
    /// Store a record under its name, replacing an existing one.
    fn add_record(&mut self, record: Record);

    /// Retrieve a record by name.
    fn find(&self, name: &str) -> Option<&Record>;

    /// Retrieve a record by name for editing.
    fn find_mut(&mut self, name: &str) -> Option<&mut Record>;

    /// Remove a record, returning it if it existed.
    fn delete(&mut self, name: &str) -> Option<Record>;

    /// All records in storage order.
    fn records(&self) -> Vec<&Record>;

    /// Records in pages of `chunk_size`.
    fn chunks(&self, chunk_size: usize) -> Chunks<'_> {
        Chunks::new(self.records(), chunk_size)
    }

    /// Whether a record exists for `name`.
    fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }
}
