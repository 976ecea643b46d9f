//! Birthday field.

use super::errors::FieldKind;
use super::field::{FieldRule, ValidatedField};
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

static BIRTHDAY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("Failed to compile birthday regex"));

const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

/// Rule for birthdays: a real calendar date written as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayRule;

impl FieldRule for BirthdayRule {
    const KIND: FieldKind = FieldKind::Birthday;
    type Parsed = NaiveDate;

    fn parse(raw: &str) -> Option<NaiveDate> {
        // chrono alone would accept "1990-1-5" or "+1990-01-05"
        if !BIRTHDAY_REGEX.is_match(raw) {
            return None;
        }
        NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT).ok()
    }
}

/// A validated birth date.
pub type Birthday = ValidatedField<BirthdayRule>;

impl ValidatedField<BirthdayRule> {
    /// The birth date.
    pub fn date(&self) -> NaiveDate {
        *self.parsed()
    }

    /// The anniversary of this birthday in `year`.
    ///
    /// A 29 February birthday falls on 28 February in non-leap years.
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        let date = self.date();
        NaiveDate::from_ymd_opt(year, date.month(), date.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, date.month(), date.day() - 1))
    }
}
