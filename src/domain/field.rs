//! Generic validated field.
//!
//! Every contact field stores its raw text and guarantees that the text
//! satisfies the field's rule. The rule is a zero-sized type implementing
//! [`FieldRule`]; `Name`, `Phone` and `Birthday` are aliases of
//! [`ValidatedField`] over their rule.

use super::errors::{FieldKind, ValidationError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Validation strategy for a [`ValidatedField`].
pub trait FieldRule {
    /// Which field this rule validates (used in error reports).
    const KIND: FieldKind;

    /// Typed form of an accepted value.
    type Parsed: Clone + fmt::Debug + PartialEq;

    /// Parse a raw value, returning `None` when the rule rejects it.
    fn parse(raw: &str) -> Option<Self::Parsed>;

    /// Whether the rule accepts `raw`.
    fn validate(raw: &str) -> bool {
        Self::parse(raw).is_some()
    }
}

/// A raw string value that always satisfies the rule `R`.
///
/// # Example
///
/// ```
/// use contact_book::domain::Phone;
///
/// let mut phone = Phone::new("0501234567").unwrap();
/// assert!(phone.try_set("not-a-phone").is_err());
/// assert_eq!(phone.as_str(), "0501234567");
/// ```
pub struct ValidatedField<R: FieldRule> {
    raw: String,
    parsed: R::Parsed,
    _rule: PhantomData<R>,
}

impl<R: FieldRule> ValidatedField<R> {
    /// Create a field, validating the value first.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` tagged with `R::KIND` if the rule
    /// rejects the value.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        match R::parse(&raw) {
            Some(parsed) => Ok(Self::accepted(raw, parsed)),
            None => Err(ValidationError::new(R::KIND, raw)),
        }
    }

    /// Build a field from a value the rule has already parsed.
    pub(super) fn accepted(raw: String, parsed: R::Parsed) -> Self {
        Self {
            raw,
            parsed,
            _rule: PhantomData,
        }
    }

    /// Replace the value. On failure the current value is kept.
    pub fn try_set(&mut self, raw: impl Into<String>) -> Result<(), ValidationError> {
        *self = Self::new(raw)?;
        Ok(())
    }

    /// Get the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Typed form of the value, as produced by the rule.
    pub fn parsed(&self) -> &R::Parsed {
        &self.parsed
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.raw
    }
}

impl<R: FieldRule> Clone for ValidatedField<R> {
    fn clone(&self) -> Self {
        Self {
            raw: self.raw.clone(),
            parsed: self.parsed.clone(),
            _rule: PhantomData,
        }
    }
}

impl<R: FieldRule> fmt::Debug for ValidatedField<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ValidatedField")
            .field(&R::KIND)
            .field(&self.raw)
            .finish()
    }
}

// The parsed form is derived from the raw text, so equality and hashing
// only look at the raw text.
impl<R: FieldRule> PartialEq for ValidatedField<R> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<R: FieldRule> Eq for ValidatedField<R> {}

impl<R: FieldRule> Hash for ValidatedField<R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<R: FieldRule> PartialEq<str> for ValidatedField<R> {
    fn eq(&self, other: &str) -> bool {
        self.raw == other
    }
}

// Serde support - serialize as string
impl<R: FieldRule> Serialize for ValidatedField<R> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de, R: FieldRule> Deserialize<'de> for ValidatedField<R> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(serde::de::Error::custom)
    }
}

impl<R: FieldRule> fmt::Display for ValidatedField<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Accepts lowercase ASCII words only.
    struct LowercaseRule;

    impl FieldRule for LowercaseRule {
        const KIND: FieldKind = FieldKind::Name;
        type Parsed = usize;

        fn parse(raw: &str) -> Option<usize> {
            (!raw.is_empty() && raw.chars().all(|c| c.is_ascii_lowercase())).then(|| raw.len())
        }
    }

    type Lowercase = ValidatedField<LowercaseRule>;

    #[test]
    fn test_new_accepts_valid_value() {
        let field = Lowercase::new("alice").unwrap();
        assert_eq!(field.as_str(), "alice");
        assert_eq!(*field.parsed(), 5);
    }

    #[test]
    fn test_new_rejects_invalid_value() {
        let err = Lowercase::new("Alice").unwrap_err();
        assert_eq!(err.kind, FieldKind::Name);
        assert_eq!(err.value, "Alice");
    }

    #[test]
    fn test_try_set_keeps_previous_value_on_failure() {
        let mut field = Lowercase::new("alice").unwrap();
        assert!(field.try_set("B0B").is_err());
        assert_eq!(field.as_str(), "alice");
        assert_eq!(*field.parsed(), 5);

        field.try_set("bob").unwrap();
        assert_eq!(field.as_str(), "bob");
        assert_eq!(*field.parsed(), 3);
    }

    #[test]
    fn test_validate_is_derived_from_parse() {
        assert!(LowercaseRule::validate("abc"));
        assert!(!LowercaseRule::validate(""));
    }

    #[test]
    fn test_display_and_equality() {
        let a = Lowercase::new("carol").unwrap();
        let b = a.clone();
        assert_eq!(a, b);
        assert!(a == *"carol");
        assert_eq!(format!("{}", a), "carol");
        assert_eq!(a.into_inner(), "carol");
    }
}
