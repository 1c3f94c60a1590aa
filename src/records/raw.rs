//! Untyped candidate records.
//!
//! A raw record is what a record author hands us: a bag of named fields,
//! each either a literal value or a zero-argument resolver that produces
//! the value asynchronously (e.g. a lookup against a remote service).

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures_util::future::{BoxFuture, FutureExt};
use serde_json::Value;
use thiserror::Error;

use crate::records::error::ValidationError;

/// Error produced by a resolver that could not compute its value.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct ResolverError(pub String);

impl ResolverError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

type ResolveFn = dyn Fn() -> BoxFuture<'static, Result<Value, ResolverError>> + Send + Sync;

/// A zero-argument asynchronous field resolver.
#[derive(Clone)]
pub struct Resolver {
    inner: Arc<ResolveFn>,
}

impl Resolver {
    /// Wrap an async closure. The output may be anything convertible into
    /// an untyped value; validation checks that it is actually a string.
    pub fn new<F, Fut, V>(f: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<V, ResolverError>> + Send + 'static,
        V: Into<Value>,
    {
        Self {
            inner: Arc::new(move || f().map(|res| res.map(Into::<Value>::into)).boxed()),
        }
    }

    /// Resolver that immediately yields a fixed value.
    pub fn ready(value: impl Into<Value>) -> Self {
        let value = value.into();
        Self::new(move || {
            let value = value.clone();
            async move { Ok::<_, ResolverError>(value) }
        })
    }

    /// Invoke the resolver.
    pub fn resolve(&self) -> BoxFuture<'static, Result<Value, ResolverError>> {
        (self.inner)()
    }
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Resolver(..)")
    }
}

/// One field of a raw record.
#[derive(Debug, Clone)]
pub enum RawValue {
    /// A literal, untyped value.
    Value(Value),
    /// A value computed on demand during validation.
    Resolver(Resolver),
}

impl From<Value> for RawValue {
    fn from(value: Value) -> Self {
        RawValue::Value(value)
    }
}

impl From<Resolver> for RawValue {
    fn from(resolver: Resolver) -> Self {
        RawValue::Resolver(resolver)
    }
}

/// An untyped candidate redirect record.
#[derive(Debug, Clone, Default)]
pub struct RawRecord {
    fields: HashMap<String, RawValue>,
}

impl RawRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from an untyped value, which must be an object.
    pub fn from_value(value: Value) -> Result<Self, ValidationError> {
        match value {
            Value::Object(map) => Ok(Self {
                fields: map.into_iter().map(|(k, v)| (k, RawValue::Value(v))).collect(),
            }),
            _ => Err(ValidationError::NotAnObject),
        }
    }

    /// Set a literal field.
    pub fn value(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), RawValue::Value(value.into()));
        self
    }

    /// Set a resolver field.
    pub fn resolver(mut self, name: impl Into<String>, resolver: Resolver) -> Self {
        self.fields.insert(name.into(), RawValue::Resolver(resolver));
        self
    }

    /// Get a field by name.
    pub fn get(&self, name: &str) -> Option<&RawValue> {
        self.fields.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_value_requires_object() {
        let record = RawRecord::from_value(serde_json::json!({ "target": "https://x.test" })).unwrap();
        assert!(matches!(record.get("target"), Some(RawValue::Value(Value::String(_)))));

        let err = RawRecord::from_value(serde_json::json!(["https://x.test"])).unwrap_err();
        assert_eq!(err, ValidationError::NotAnObject);
    }

    #[tokio::test]
    async fn test_resolver_converts_output() {
        let resolver = Resolver::new(|| async { Ok::<_, ResolverError>("https://x.test") });
        assert_eq!(resolver.resolve().await.unwrap(), Value::from("https://x.test"));

        let ready = Resolver::ready(42);
        assert_eq!(ready.resolve().await.unwrap(), Value::from(42));
        // Resolvers may be invoked more than once.
        assert_eq!(ready.resolve().await.unwrap(), Value::from(42));
    }
}
