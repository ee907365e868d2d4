//! Error types for the multilingual parser.
//!
//! Parsing itself never fails: unrecognized spans become `unknown` tokens,
//! a non-matching input is `None`, and a low-confidence match is a policy
//! decision reported through [`crate::ParseOutcome`]. The errors here are
//! programmer errors caught while assembling a [`crate::Registry`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("pattern '{pattern}' binds role '{role}', which command '{command}' does not declare")]
    SchemaMismatch {
        pattern: String,
        command: String,
        role: String,
    },

    #[error("pattern '{pattern}' targets unknown command '{command}'")]
    UnknownCommand { pattern: String, command: String },

    #[error("pattern '{pattern}' is written for language '{language}', which has no profile")]
    UnknownLanguage { pattern: String, language: String },

    #[error("command '{action}' declares role '{role}' more than once")]
    DuplicateRole { action: String, role: String },

    #[error("primary role '{role}' of command '{action}' is not one of its roles")]
    InvalidPrimaryRole { action: String, role: String },

    #[error("command '{action}' is registered more than once")]
    DuplicateSchema { action: String },

    #[error("a normalizer is registered for '{language}', which has no profile")]
    MissingProfile { language: String },

    #[error("invalid parser configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}
