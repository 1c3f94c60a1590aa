//! Redirect record subsystem.
//!
//! # Data Flow
//! ```text
//! data directory
//!     → discovery.rs (walk files, parse TOML/JSON)
//!     → segments.rs (file path → case-folded segments)
//!     → raw.rs (RawRecord: literal values and resolvers)
//!     → validate.rs (shape checks, resolver invocation)
//!     → RedirectData
//! ```
//!
//! # Design Decisions
//! - Records are independent; one bad record never affects another
//! - Every resolver is asynchronous and runs exactly once per build
//! - Errors carry the record's origin for reporting

pub mod discovery;
pub mod error;
pub mod raw;
pub mod segments;
pub mod validate;

pub use error::{BuildError, Field, ValidationError};
pub use raw::{RawRecord, RawValue, Resolver, ResolverError};
pub use validate::{validate, Validator};
