//! Domain error types

use thiserror::Error;

/// Errors raised while turning caller input into filter expressions.
///
/// Compilation is pure — these errors never wrap I/O failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unrecognized date: {0}")]
    InvalidDate(String),
}

/// Errors raised while normalizing a raw remote response.
///
/// A required field missing from a raw entity means the projection and
/// the remote schema disagree, which is a contract violation rather than
/// a recoverable condition. Optional fields never produce these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("{entity} response is missing required field '{field}'")]
    MissingField {
        entity: &'static str,
        field: String,
    },

    #[error("{entity} response is not an object")]
    NotAnObject { entity: &'static str },
}

impl SchemaError {
    pub fn missing(entity: &'static str, field: impl Into<String>) -> Self {
        SchemaError::MissingField {
            entity,
            field: field.into(),
        }
    }
}
