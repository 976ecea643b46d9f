//! Domain value objects and types.
//!
//! Contact fields are validated at construction time so that an invalid
//! phone number or birthday can never be stored in a record.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::{Birthday, BirthdayRule};
pub use errors::{FieldKind, ValidationError};
pub use field::{FieldRule, ValidatedField};
pub use name::{Name, NameRule};
pub use phone::{Phone, PhoneRule};
