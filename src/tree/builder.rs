//! Redirect tree construction.
//!
//! # Responsibilities
//! - Validate every record (resolvers included)
//! - Insert validated data at the record's segment path
//! - Collect per-record failures without aborting the batch
//!
//! # Design Decisions
//! - Validation runs concurrently up to a bound; insertion is done by a
//!   single consumer, in input order, so the tree never needs a lock
//! - A rejected record leaves no trace in the tree

use std::time::Duration;

use futures_util::stream::{self, StreamExt};

use crate::observability::reporter::{Reporter, TracingReporter};
use crate::records::error::BuildError;
use crate::records::raw::RawRecord;
use crate::records::validate::Validator;
use crate::tree::node::{display_path, RedirectTree};

/// One record to build from: where it came from and where it goes.
#[derive(Debug, Clone)]
pub struct SourceRecord {
    /// Identifier used when reporting problems (e.g. a file path).
    pub origin: String,
    /// Case-folded path segments; empty for the root.
    pub segments: Vec<String>,
    /// The untyped record itself.
    pub record: RawRecord,
}

impl SourceRecord {
    pub fn new(origin: impl Into<String>, segments: &[&str], record: RawRecord) -> Self {
        Self {
            origin: origin.into(),
            segments: segments.iter().map(|s| s.to_lowercase()).collect(),
            record,
        }
    }
}

/// A freshly built tree and the records that could not be part of it.
#[derive(Debug, Clone, Default)]
pub struct BuildOutcome {
    pub tree: RedirectTree,
    pub errors: Vec<BuildError>,
}

/// Builds redirect trees from source records.
pub struct TreeBuilder<'r> {
    reporter: &'r dyn Reporter,
    concurrency: usize,
    resolver_timeout: Option<Duration>,
}

impl<'r> TreeBuilder<'r> {
    pub fn new(reporter: &'r dyn Reporter) -> Self {
        Self {
            reporter,
            concurrency: 1,
            resolver_timeout: None,
        }
    }

    /// Maximum number of records validated at once (minimum 1).
    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Deadline for each field resolver.
    pub fn resolver_timeout(mut self, limit: Option<Duration>) -> Self {
        self.resolver_timeout = limit;
        self
    }

    /// Build a tree from `records`.
    pub async fn build<I>(&self, records: I) -> BuildOutcome
    where
        I: IntoIterator<Item = SourceRecord>,
    {
        let validator = Validator::new(self.reporter).with_resolver_timeout(self.resolver_timeout);

        // `buffered` yields results in input order, whatever order they finish in.
        let mut validated = stream::iter(records)
            .map(|source| {
                let validator = &validator;
                async move {
                    let result = validator.validate(&source.origin, &source.record).await;
                    (source, result)
                }
            })
            .buffered(self.concurrency);

        let mut outcome = BuildOutcome::default();
        let mut inserted = 0usize;
        while let Some((source, result)) = validated.next().await {
            let error = match result {
                Ok(data) => match outcome.tree.insert(source.segments.as_slice(), data) {
                    Ok(()) => {
                        inserted += 1;
                        self.reporter.inserted(&source.origin, &display_path(source.segments.as_slice()));
                        continue;
                    }
                    Err(occupied) => BuildError::DuplicatePath {
                        origin: source.origin,
                        path: occupied.path,
                    },
                },
                Err(error) => BuildError::Validation {
                    origin: source.origin,
                    error,
                },
            };
            self.reporter.rejected(&error);
            outcome.errors.push(error);
        }

        self.reporter.finished(inserted, outcome.errors.len());
        outcome
    }
}

/// Build a tree sequentially, reporting through `tracing`.
pub async fn build_tree<I>(records: I) -> BuildOutcome
where
    I: IntoIterator<Item = SourceRecord>,
{
    TreeBuilder::new(&TracingReporter).build(records).await
}
