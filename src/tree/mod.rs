//! Redirect tree subsystem.
//!
//! # Data Flow
//! ```text
//! SourceRecord[] (origin, segments, raw record)
//!     → builder.rs (validate concurrently, insert in input order)
//!     → node.rs (RedirectTree: data + ordered subpaths)
//!     → BuildOutcome { tree, errors }
//!
//! Export:
//!     RedirectTree → flatten.rs (post-order) → Vec<T>
//! ```
//!
//! # Design Decisions
//! - Tree built once from an empty root, then frozen and shared
//! - The builder is the only writer; nodes are never mutated after a build
//! - Duplicate paths are per-record errors, first record wins

pub mod builder;
pub mod flatten;
pub mod node;

pub use builder::{build_tree, BuildOutcome, SourceRecord, TreeBuilder};
pub use flatten::flatten;
pub use node::{RedirectData, RedirectTree};
