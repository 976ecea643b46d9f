//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: a name, zero or more phones and an optional birthday.
///
/// The name is fixed once the record exists. Phones keep insertion order
/// and may contain duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::from_text(name),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Create a record with a birthday.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if the birthday is not a `YYYY-MM-DD` date.
    pub fn with_birthday(
        name: impl Into<String>,
        birthday: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let mut record = Self::new(name);
        record.birthday = Some(Birthday::new(birthday)?);
        Ok(record)
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Set or replace the birthday. On failure the current one is kept.
    pub fn set_birthday(&mut self, birthday: impl Into<String>) -> Result<(), ValidationError> {
        match self.birthday.as_mut() {
            Some(current) => current.try_set(birthday),
            None => {
                self.birthday = Some(Birthday::new(birthday)?);
                Ok(())
            }
        }
    }

    /// Validate and append a phone. Duplicates are allowed.
    pub fn add_phone(&mut self, phone: impl Into<String>) -> Result<(), ValidationError> {
        self.phones.push(Phone::new(phone)?);
        Ok(())
    }

    /// Remove every phone equal to `phone`.
    pub fn remove_phone(&mut self, phone: &str) {
        self.phones.retain(|p| p.as_str() != phone);
    }

    /// Replace `old` with `new`.
    ///
    /// All phones equal to `old` are removed and a single `new` is appended,
    /// so duplicates of `old` collapse into one entry. Does nothing when
    /// `old` is not present. `new` is validated before anything is removed.
    pub fn edit_phone(&mut self, old: &str, new: impl Into<String>) -> Result<(), ValidationError> {
        if self.find_phone(old).is_none() {
            return Ok(());
        }
        let new = Phone::new(new)?;
        self.remove_phone(old);
        self.phones.push(new);
        Ok(())
    }

    /// First phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Days from today (local time) until the next birthday.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next birthday, `None` without a birthday.
    ///
    /// A birthday falling on `today` gives 0; the next year is used only
    /// once this year's date has passed.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        let birthday = self.birthday.as_ref()?;
        let mut next = birthday.in_year(today.year())?;
        if today > next {
            next = birthday.in_year(today.year() + 1)?;
        }
        Some((next - today).num_days())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)
    }
}
