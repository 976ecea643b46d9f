use contact_book::models::Record;
use contact_book::repositories::RecordRepository;
use std::cell::RefCell;
use std::collections::HashMap;

/// Mock record repository for testing.
///
/// Keeps records in a plain vector and tracks method calls for
/// verification.
#[allow(dead_code)]
#[derive(Default)]
pub struct MockRecordRepository {
    records: Vec<Record>,
    call_counts: RefCell<HashMap<String, usize>>,
}

#[allow(dead_code)]
impl MockRecordRepository {
    /// Create a new empty MockRecordRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository without counting a call.
    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        *self.call_counts.borrow().get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        self.call_counts.borrow_mut().clear();
    }

    fn track_call(&self, method: &str) {
        *self
            .call_counts
            .borrow_mut()
            .entry(method.to_string())
            .or_insert(0) += 1;
    }
}

impl RecordRepository for MockRecordRepository {
    fn add_record(&mut self, record: Record) {
        self.track_call("add_record");

        match self
            .records
            .iter_mut()
            .find(|r| r.name() == record.name())
        {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
    }

    fn find(&self, name: &str) -> Option<&Record> {
        self.track_call("find");
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.track_call("find_mut");
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    fn delete(&mut self, name: &str) -> Option<Record> {
        self.track_call("delete");
        let index = self.records.iter().position(|r| r.name().as_str() == name)?;
        Some(self.records.remove(index))
    }

    fn records(&self) -> Vec<&Record> {
        self.track_call("records");
        self.records.iter().collect()
    }
}
