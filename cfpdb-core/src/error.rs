//! Error types for the cfpdb engine.

use thiserror::Error;

/// Errors that can occur while loading and ranking the conference database.
#[derive(Error, Debug)]
pub enum CfpError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input error: {0}")]
    Input(String),

    #[error("Conference '{conference}' is missing required field '{field}'")]
    MissingField {
        conference: String,
        field: &'static str,
    },

    #[error(
        "Conference '{conference}' field '{field}' must be a complete YYYY-MM-DD date, got '{value}'"
    )]
    UnresolvedSpan {
        conference: String,
        field: &'static str,
        value: String,
    },

    #[error("Date spec '{value}' resolved to impossible calendar date {year:04}-{month:02}-{day:02}")]
    ImpossibleDate {
        value: String,
        year: i32,
        month: u32,
        day: u32,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for cfpdb operations.
pub type CfpResult<T> = Result<T, CfpError>;
