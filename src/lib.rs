//! Contact Book - a console address book with validated contact fields.
//!
//! # Architecture
//!
//! - **domain**: Validated field types (`Name`, `Phone`, `Birthday`)
//! - **models**: The contact `Record`
//! - **book**: The in-memory `AddressBook` and its paginated iteration
//! - **repositories**: Storage abstraction used by the console
//! - **matching**: Fuzzy name and phone search
//! - **cli**: Command parsing, dispatch and the console loop
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types for precise error handling

pub mod book;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;
pub mod repositories;

pub use book::{AddressBook, Chunks, RecordPage};
pub use cli::{Command, CommandHandler, Reply};
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidatedField, ValidationError};
pub use error::{BookError, BookResult, ConfigError};
pub use matching::{MatchResult, RecordMatcher, RecordQuery};
pub use models::Record;
pub use repositories::RecordRepository;
