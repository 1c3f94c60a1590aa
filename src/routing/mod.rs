//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request path
//!     → router.rs (normalize: strip one leading/trailing slash, case-fold, split)
//!     → recursive descent into the redirect tree
//!     → backtrack toward the root while a node refuses the remainder
//!     → Return: Resolution { target, extended, data } or None
//! ```
//!
//! # Design Decisions
//! - Tree built at startup (or reload), immutable while serving
//! - No regex in the hot path
//! - Deterministic: same path and tree always give the same result
//! - Deepest willing node wins

pub mod router;

pub use router::{resolve, Resolution};
