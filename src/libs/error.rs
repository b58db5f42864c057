use thiserror::Error;

/// Failures while reading grouping keys from user input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GroupingError {
    #[error("unknown grouping key '{0}', expected one of: none, date, user, client, project, task")]
    UnknownKey(String),
}

/// Failures while parsing command-line values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("expected KEY=VALUE, got '{0}'")]
    MissingSeparator(String),

    #[error("invalid number '{value}' in '{input}'")]
    InvalidNumber { input: String, value: String },

    #[error("invalid id '{value}' in '{input}'")]
    InvalidId { input: String, value: String },
}
