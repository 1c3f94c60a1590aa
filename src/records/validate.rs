//! Record validation.
//!
//! # Responsibilities
//! - Check the shape of every known field of a raw record
//! - Invoke resolvers, exactly once per field, under an optional deadline
//! - Produce canonical redirect data with every field a literal string
//!
//! # Design Decisions
//! - A literal `null` is a wrong shape, not an absent field
//! - `extended` must be a literal boolean; resolvers are not accepted for it
//! - Unknown fields are ignored

use std::time::Duration;

use serde_json::Value;

use crate::observability::reporter::{NullReporter, Reporter};
use crate::records::error::{Field, ValidationError};
use crate::records::raw::{RawRecord, RawValue};
use crate::resilience::timeouts::{with_deadline, Deadline};
use crate::tree::RedirectData;

/// Validates raw records, reporting resolver activity to a reporter.
pub struct Validator<'r> {
    reporter: &'r dyn Reporter,
    resolver_timeout: Option<Duration>,
}

impl<'r> Validator<'r> {
    pub fn new(reporter: &'r dyn Reporter) -> Self {
        Self {
            reporter,
            resolver_timeout: None,
        }
    }

    /// Bound how long each resolver may run.
    pub fn with_resolver_timeout(mut self, limit: Option<Duration>) -> Self {
        self.resolver_timeout = limit;
        self
    }

    /// Validate `raw`, which came from `origin`.
    pub async fn validate(&self, origin: &str, raw: &RawRecord) -> Result<RedirectData, ValidationError> {
        let target = match raw.get(Field::Target.as_str()) {
            None => return Err(ValidationError::MissingTarget),
            Some(value) => self
                .resolve_string(origin, Field::Target, value)
                .await
                .map_err(|e| match e {
                    ValidationError::InvalidFieldType(_) => ValidationError::InvalidTargetType,
                    other => other,
                })?,
        };

        let extended = match raw.get("extended") {
            None => true,
            Some(RawValue::Value(Value::Bool(extended))) => *extended,
            Some(_) => return Err(ValidationError::InvalidExtendedType),
        };

        let mut data = RedirectData::new(target).with_extended(extended);
        let slots = [
            (Field::Title, &mut data.title),
            (Field::Description, &mut data.description),
            (Field::Icon, &mut data.icon),
            (Field::Banner, &mut data.banner),
            (Field::Color, &mut data.color),
        ];
        for (field, slot) in slots {
            if let Some(value) = raw.get(field.as_str()) {
                *slot = Some(self.resolve_string(origin, field, value).await?);
            }
        }

        Ok(data)
    }

    async fn resolve_string(&self, origin: &str, field: Field, value: &RawValue) -> Result<String, ValidationError> {
        match value {
            RawValue::Value(Value::String(s)) => Ok(s.clone()),
            RawValue::Value(_) => Err(ValidationError::InvalidFieldType(field)),
            RawValue::Resolver(resolver) => {
                self.reporter.resolving(origin, field);
                match with_deadline(resolver.resolve(), self.resolver_timeout).await {
                    Deadline::Completed(Ok(Value::String(s))) => Ok(s),
                    Deadline::Completed(Ok(_)) => Err(ValidationError::ResolverReturnedNonString(field)),
                    Deadline::Completed(Err(e)) => Err(ValidationError::ResolverFailed {
                        field,
                        message: e.to_string(),
                    }),
                    Deadline::Elapsed(after) => Err(ValidationError::ResolverTimedOut { field, after }),
                }
            }
        }
    }
}

/// Validate a raw record with no reporter and no resolver deadline.
pub async fn validate(raw: &RawRecord) -> Result<RedirectData, ValidationError> {
    Validator::new(&NullReporter).validate("<record>", raw).await
}
