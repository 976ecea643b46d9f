//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while executing a console command.
#[derive(Error, Debug)]
pub enum BookError {
    /// A phone number or birthday failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No record is stored under this name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// The record has no such phone
    #[error("Phone {phone} not found for {name}")]
    PhoneNotFound { name: String, phone: String },

    /// The record has no birthday set
    #[error("No birthday set for {0}")]
    NoBirthday(String),

    /// A command was given too few arguments
    #[error("Not enough arguments for '{command}'. Usage: {usage}")]
    MissingArguments {
        command: &'static str,
        usage: &'static str,
    },

    /// Input did not match any command
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Failed to render records as JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
