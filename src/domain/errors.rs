//! Domain validation errors.

use std::fmt;
use thiserror::Error;

/// The kind of contact field a value was validated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    Phone,
    Birthday,
}

impl FieldKind {
    /// Human readable description of the accepted format.
    pub fn expected_format(self) -> &'static str {
        match self {
            Self::Name => "any text",
            Self::Phone => "exactly 10 digits",
            Self::Birthday => "a date in YYYY-MM-DD format",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Phone => write!(f, "phone number"),
            Self::Birthday => write!(f, "birthday"),
        }
    }
}

/// A value was rejected by a field's validation rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {kind}: {value:?} (expected {})", .kind.expected_format())]
pub struct ValidationError {
    /// Field the value was meant for
    pub kind: FieldKind,

    /// The rejected raw value
    pub value: String,
}

impl ValidationError {
    pub fn new(kind: FieldKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}
