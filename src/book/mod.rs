//! The address book store and its paginated iteration.

pub mod address_book;
pub mod chunks;

pub use address_book::{AddressBook, DEFAULT_PAGE_SIZE};
pub use chunks::{Chunks, RecordPage};
