mod mock_record_repository;

pub use mock_record_repository::MockRecordRepository;
