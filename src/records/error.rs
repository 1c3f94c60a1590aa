//! Per-record error types.

use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// A string-valued field of a redirect record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Target,
    Title,
    Description,
    Icon,
    Banner,
    Color,
}

impl Field {
    /// Field name as it appears in a record.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Target => "target",
            Field::Title => "title",
            Field::Description => "description",
            Field::Icon => "icon",
            Field::Banner => "banner",
            Field::Color => "color",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors from validating a single raw record.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("expected record to be an object")]
    NotAnObject,

    #[error("expected record to include a target property")]
    MissingTarget,

    #[error("expected target property to be either a string or a resolver")]
    InvalidTargetType,

    #[error("expected extended property to be either a boolean or not defined")]
    InvalidExtendedType,

    #[error("expected {0} property to be either a string or a resolver")]
    InvalidFieldType(Field),

    #[error("expected {0} resolver to return a string")]
    ResolverReturnedNonString(Field),

    #[error("{field} resolver failed: {message}")]
    ResolverFailed { field: Field, message: String },

    #[error("{field} resolver timed out after {after:?}")]
    ResolverTimedOut { field: Field, after: Duration },
}

/// Errors collected while building a redirect tree. Each names the record
/// it came from and never aborts the rest of the batch.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("failed to load redirect data from {origin}: {error}")]
    Validation { origin: String, error: ValidationError },

    #[error("redirect data from {origin} already defined for path {path}")]
    DuplicatePath { origin: String, path: String },

    #[error("failed to read redirect data from {origin}: {message}")]
    Io { origin: String, message: String },

    #[error("failed to parse redirect data from {origin}: {message}")]
    Parse { origin: String, message: String },
}

impl BuildError {
    /// Identifier of the offending record.
    pub fn origin(&self) -> &str {
        match self {
            BuildError::Validation { origin, .. }
            | BuildError::DuplicatePath { origin, .. }
            | BuildError::Io { origin, .. }
            | BuildError::Parse { origin, .. } => origin,
        }
    }
}
