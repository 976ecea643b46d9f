//! Phone number field.

use super::errors::FieldKind;
use super::field::{FieldRule, ValidatedField};
use once_cell::sync::Lazy;
use regex::Regex;

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("Failed to compile phone regex"));

/// Rule for phone numbers: exactly 10 ASCII digits, no formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneRule;

impl FieldRule for PhoneRule {
    const KIND: FieldKind = FieldKind::Phone;
    type Parsed = ();

    fn parse(raw: &str) -> Option<()> {
        PHONE_REGEX.is_match(raw).then_some(())
    }
}

/// A validated 10-digit phone number.
///
/// # Example
///
/// ```
/// use contact_book::domain::Phone;
///
/// let phone = Phone::new("0671234567").unwrap();
/// assert_eq!(phone.to_string(), "0671234567");
/// assert!(Phone::new("+380671234567").is_err());
/// ```
pub type Phone = ValidatedField<PhoneRule>;
