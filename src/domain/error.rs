//! Domain error types

use thiserror::Error;

/// Error when an invalid era is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid era: \"{input}\". Valid eras are: modern, 2016")]
pub struct InvalidEraError {
    pub input: String,
}

/// Error when an invalid direction is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid direction: \"{input}\". Valid directions are: to-slang, to-normal")]
pub struct InvalidDirectionError {
    pub input: String,
}

/// Error when a vibe score falls outside the accepted range
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Vibe stat '{slot}' out of range: {value} (expected 0-100)")]
pub struct StatsError {
    pub slot: &'static str,
    pub value: i64,
}

/// Error when a generated response does not match the expected schema
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseShapeError {
    #[error("Response is not valid JSON: {0}")]
    NotJson(String),

    #[error("Response is not a JSON object")]
    NotAnObject,

    #[error("Missing field '{0}'")]
    MissingField(String),

    #[error("Field '{field}' has the wrong type (expected {expected})")]
    WrongType {
        field: String,
        expected: &'static str,
    },

    #[error("Field 'translatedText' is empty")]
    EmptyText,

    #[error(transparent)]
    OutOfRange(#[from] StatsError),
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
