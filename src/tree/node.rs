//! Redirect tree nodes and redirect data.
//!
//! # Responsibilities
//! - Hold the canonical, fully resolved redirect data for one path
//! - Own child nodes keyed by case-folded path segment
//! - Reject a second write of data to the same node
//!
//! # Design Decisions
//! - Children kept in insertion order (IndexMap) so flattening is reproducible
//! - Absent members are omitted when serialized, matching the nested
//!   `{ data, subpaths }` bundle shape consumed by edge routers

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Canonical redirect data attached to a tree node.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RedirectData {
    /// Redirect target URL.
    pub target: String,

    /// Whether extra trailing segments are forwarded to the target.
    #[serde(default = "default_extended")]
    pub extended: bool,

    /// Title shown when a short link is unfurled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Description shown when a short link is unfurled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Icon URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Banner image URL (replaces the icon when unfurled).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,

    /// Theme color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

fn default_extended() -> bool {
    true
}

impl RedirectData {
    /// Create extended redirect data with no presentation fields.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            extended: true,
            title: None,
            description: None,
            icon: None,
            banner: None,
            color: None,
        }
    }

    /// Set the extended routing flag.
    pub fn with_extended(mut self, extended: bool) -> Self {
        self.extended = extended;
        self
    }
}

/// A node of the redirect tree.
///
/// The root node is addressed by the empty segment path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RedirectTree {
    /// Redirect data for the path ending at this node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<RedirectData>,

    /// Child nodes, keyed by lowercase segment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subpaths: Option<IndexMap<String, RedirectTree>>,
}

/// Returned when data is inserted at a path that already has data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occupied {
    /// Display form of the clashing path, e.g. `/docs/api`.
    pub path: String,
}

impl RedirectTree {
    /// Create an empty root node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the node has neither data nor subpaths.
    pub fn is_empty(&self) -> bool {
        self.data.is_none() && self.subpaths.is_none()
    }

    /// Look up a direct child by segment.
    pub fn child(&self, segment: &str) -> Option<&RedirectTree> {
        self.subpaths.as_ref().and_then(|s| s.get(segment))
    }

    /// Insert data at the node addressed by `segments`, creating
    /// intermediate nodes as needed. Segments are case-folded.
    ///
    /// Fails if the terminal node already carries data; the existing data
    /// is left untouched.
    pub fn insert<S: AsRef<str>>(&mut self, segments: &[S], data: RedirectData) -> Result<(), Occupied> {
        let mut node = self;
        for segment in segments {
            node = node
                .subpaths
                .get_or_insert_with(IndexMap::new)
                .entry(segment.as_ref().to_lowercase())
                .or_default();
        }

        if node.data.is_some() {
            return Err(Occupied {
                path: display_path(segments),
            });
        }

        node.data = Some(data);
        Ok(())
    }
}

/// Render a segment path as an absolute URL path (`/a/b`, or `/` for the root).
pub fn display_path<S: AsRef<str>>(segments: &[S]) -> String {
    let joined = segments
        .iter()
        .map(|s| s.as_ref().to_lowercase())
        .collect::<Vec<_>>()
        .join("/");
    format!("/{}", joined)
}
