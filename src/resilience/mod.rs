//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Record resolver invoked during validation:
//!     → timeouts.rs (enforce resolver deadline)
//!     → Completed(value) | Elapsed(limit) → validation error
//! ```
//!
//! # Design Decisions
//! - Every external call made while building has a deadline
//! - Request-time resolution is pure and needs none

pub mod timeouts;
