//! Contact name field.

use super::errors::FieldKind;
use super::field::{FieldRule, ValidatedField};

/// Rule for contact names. Any text is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameRule;

impl FieldRule for NameRule {
    const KIND: FieldKind = FieldKind::Name;
    type Parsed = ();

    fn parse(_raw: &str) -> Option<()> {
        Some(())
    }
}

/// The name a contact is filed under.
pub type Name = ValidatedField<NameRule>;

impl ValidatedField<NameRule> {
    /// Names never fail validation, so this constructor is infallible.
    pub fn from_text(raw: impl Into<String>) -> Self {
        Self::accepted(raw.into(), ())
    }
}
