use super::traits::RecordRepository;
use crate::book::{AddressBook, Chunks};
use crate::models::Record;

impl RecordRepository for AddressBook {
    fn add_record(&mut self, record: Record) {
        AddressBook::add_record(self, record);
    }

    fn find(&self, name: &str) -> Option<&Record> {
        AddressBook::find(self, name)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        AddressBook::find_mut(self, name)
    }

    fn delete(&mut self, name: &str) -> Option<Record> {
        AddressBook::delete(self, name)
    }

    fn records(&self) -> Vec<&Record> {
        AddressBook::records(self)
    }

    fn chunks(&self, chunk_size: usize) -> Chunks<'_> {
        self.iterator(chunk_size)
    }
}
