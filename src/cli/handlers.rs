//! Command handlers for the console.
//!
//! The handler executes parsed commands against a [`RecordRepository`]
//! and turns every failure into a one-line message for the user.

use super::commands::Command;
use crate::config::Config;
use crate::domain::{Birthday, Phone};
use crate::error::{BookError, BookResult};
use crate::matching::{RecordMatcher, RecordQuery};
use crate::models::Record;
use crate::repositories::RecordRepository;
use std::fmt::Write as _;

/// What the console should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the message and read the next command
    Continue(String),

    /// Print the message and stop
    Exit(String),
}

impl Reply {
    pub fn message(&self) -> &str {
        match self {
            Self::Continue(message) | Self::Exit(message) => message,
        }
    }
}

/// Executes console commands against a record repository.
pub struct CommandHandler<R: RecordRepository> {
    repo: R,
    matcher: RecordMatcher,
    page_size: usize,
    max_match_results: usize,
    match_confidence_threshold: u8,
}

impl<R: RecordRepository> CommandHandler<R> {
    pub fn new(repo: R, config: &Config) -> Self {
        Self {
            repo,
            matcher: RecordMatcher::new(),
            page_size: config.page_size,
            max_match_results: config.max_match_results,
            match_confidence_threshold: config.match_confidence_threshold,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn into_repository(self) -> R {
        self.repo
    }

    /// Parse and execute one input line.
    ///
    /// Returns `None` for blank input. Errors never escape: they become a
    /// `Reply::Continue` carrying the error message.
    pub fn respond(&mut self, line: &str) -> Option<Reply> {
        let result = Command::parse(line).and_then(|command| match command {
            Some(command) => self.handle(command).map(Some),
            None => Ok(None),
        });

        match result {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(error = %e, input = line, "Command failed");
                Some(Reply::Continue(e.to_string()))
            }
        }
    }

    /// Execute a parsed command.
    pub fn handle(&mut self, command: Command) -> BookResult<Reply> {
        tracing::debug!(?command, "Handling command");

        let message = match command {
            Command::Hello => "How can I help you?".to_string(),
            Command::Add {
                name,
                phone,
                birthday,
            } => self.add(name, phone, birthday)?,
            Command::Change { name, old, new } => self.change(&name, old, new)?,
            Command::Phone { name } => self.phone(&name)?,
            Command::Birthday { name } => self.birthday(&name)?,
            Command::Delete { name } => self.delete(&name)?,
            Command::Search { term } => self.search(&term),
            Command::ShowAll => self.show_all(),
            Command::Export => serde_json::to_string_pretty(&self.repo.records())?,
            Command::Exit => return Ok(Reply::Exit("Good bye!".to_string())),
        };

        Ok(Reply::Continue(message))
    }

    fn add(&mut self, name: String, phone: String, birthday: Option<String>) -> BookResult<String> {
        // Validate everything before touching the repository
        let phone = Phone::new(phone)?;
        let birthday = birthday.map(Birthday::new).transpose()?;

        if let Some(record) = self.repo.find_mut(&name) {
            if let Some(birthday) = birthday {
                record.set_birthday(birthday.into_inner())?;
            }
            record.add_phone(phone.as_str())?;
            tracing::info!(name = %name, "Phone added to existing contact");
            return Ok(format!("Phone {} added to {}.", phone, name));
        }

        let mut record = match birthday {
            Some(birthday) => Record::with_birthday(name.as_str(), birthday.into_inner())?,
            None => Record::new(name.as_str()),
        };
        record.add_phone(phone.into_inner())?;
        self.repo.add_record(record);
        tracing::info!(name = %name, "Contact added");
        Ok(format!("Contact {} added.", name))
    }

    fn change(&mut self, name: &str, old: Option<String>, new: String) -> BookResult<String> {
        let record = self
            .repo
            .find_mut(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;

        let old = match old {
            Some(old) => {
                if record.find_phone(&old).is_none() {
                    return Err(BookError::PhoneNotFound {
                        name: name.to_string(),
                        phone: old,
                    });
                }
                Some(old)
            }
            None => record.phones().first().map(|p| p.as_str().to_string()),
        };

        match old {
            Some(old) => record.edit_phone(&old, new.as_str())?,
            None => record.add_phone(new.as_str())?,
        }

        tracing::info!(name = %name, "Phone changed");
        Ok(format!("Phone for {} changed to {}.", name, new))
    }

    fn phone(&self, name: &str) -> BookResult<String> {
        let record = self.find(name)?;
        if record.phones().is_empty() {
            return Ok(format!("{} has no phones.", name));
        }
        let phones = record
            .phones()
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        Ok(format!("{}: {}", name, phones))
    }

    fn birthday(&self, name: &str) -> BookResult<String> {
        let days = self
            .find(name)?
            .days_to_birthday()
            .ok_or_else(|| BookError::NoBirthday(name.to_string()))?;
        Ok(match days {
            0 => format!("Today is {}'s birthday!", name),
            1 => format!("1 day until {}'s birthday.", name),
            n => format!("{} days until {}'s birthday.", n, name),
        })
    }

    fn delete(&mut self, name: &str) -> BookResult<String> {
        self.repo
            .delete(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
        tracing::info!(name = %name, "Contact deleted");
        Ok(format!("Contact {} deleted.", name))
    }

    fn search(&self, term: &str) -> String {
        let records = self.repo.records();
        let matches = self.matcher.find_matches(
            &RecordQuery::from_term(term),
            &records,
            self.max_match_results,
            self.match_confidence_threshold,
        );

        if matches.is_empty() {
            return format!("No contacts match '{}'.", term);
        }
        matches
            .iter()
            .map(|m| format!("{} ({}%)", m.record, m.confidence))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn show_all(&self) -> String {
        let mut out = String::new();
        for (index, page) in self.repo.chunks(self.page_size).enumerate() {
            if index > 0 {
                out.push('\n');
            }
            let _ = write!(out, "Page {}:", index + 1);
            for record in page {
                let _ = write!(out, "\n{}", record);
            }
        }

        if out.is_empty() {
            "No contacts saved.".to_string()
        } else {
            out
        }
    }

    fn find(&self, name: &str) -> BookResult<&Record> {
        self.repo
            .find(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }
}
