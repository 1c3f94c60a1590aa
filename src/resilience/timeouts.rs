//! Timeout enforcement.
//!
//! # Responsibilities
//! - Put a deadline on record resolvers (possibly network-backed)
//! - Keep timeout errors distinct from resolver failures
//!
//! # Design Decisions
//! - Uses Tokio's timeout facilities
//! - `None` means no deadline; resolution itself defines no timeout

use std::future::Future;
use std::time::Duration;
use tokio::time::timeout;

/// Outcome of a call that ran under an optional deadline.
#[derive(Debug, PartialEq, Eq)]
pub enum Deadline<T> {
    Completed(T),
    Elapsed(Duration),
}

/// Await `fut`, giving up after `limit` if one is set.
pub async fn with_deadline<F: Future>(fut: F, limit: Option<Duration>) -> Deadline<F::Output> {
    match limit {
        Some(limit) => match timeout(limit, fut).await {
            Ok(output) => Deadline::Completed(output),
            Err(_) => Deadline::Elapsed(limit),
        },
        None => Deadline::Completed(fut.await),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_completes_within_deadline() {
        let out = with_deadline(async { 7 }, Some(Duration::from_secs(1))).await;
        assert_eq!(out, Deadline::Completed(7));
    }

    #[tokio::test]
    async fn test_elapses() {
        let slow = async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            7
        };
        let out = with_deadline(slow, Some(Duration::from_millis(20))).await;
        assert_eq!(out, Deadline::Elapsed(Duration::from_millis(20)));
    }

    #[tokio::test]
    async fn test_no_deadline() {
        assert_eq!(with_deadline(async { "ok" }, None).await, Deadline::Completed("ok"));
    }
}
