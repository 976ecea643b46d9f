mod address_book_repository;
mod traits;

pub use traits::RecordRepository;
