//! Redirect resolution.
//!
//! # Responsibilities
//! - Normalize a request path into case-folded segments
//! - Find the deepest node willing to accept the remaining segments
//! - Append any remainder to that node's target
//!
//! # Design Decisions
//! - Recursive descent with backtracking: a deeper node that cannot match
//!   hands the request back to its parent
//! - Non-extended nodes match only an exact segment count
//! - Pure read of an immutable tree: safe to call concurrently, no locks
//! - Explicit `None` for no match rather than a silent default

use crate::tree::{RedirectData, RedirectTree};

/// A successful resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'t> {
    /// Final redirect target, including any forwarded segments.
    pub target: String,
    /// Whether trailing segments were captured and forwarded.
    pub extended: bool,
    /// Data of the node that matched.
    pub data: &'t RedirectData,
}

/// Break a request path into segments: one leading and one trailing slash
/// are dropped, the rest is case-folded and split on `/`.
///
/// The empty path yields a single empty segment.
pub fn segments(path: &str) -> Vec<String> {
    let path = path.strip_prefix('/').unwrap_or(path);
    let path = path.strip_suffix('/').unwrap_or(path);
    path.to_lowercase().split('/').map(str::to_string).collect()
}

/// Resolve `path` against `tree`, returning `None` if nothing matches.
pub fn resolve<'t>(path: &str, tree: &'t RedirectTree) -> Option<Resolution<'t>> {
    let segments = segments(path);
    resolve_segments(segments.as_slice(), tree)
}

/// Resolve already-normalized segments against `node`.
pub fn resolve_segments<'t, S: AsRef<str>>(segments: &[S], node: &'t RedirectTree) -> Option<Resolution<'t>> {
    if let Some((first, rest)) = segments.split_first() {
        if let Some(child) = node.child(first.as_ref()) {
            if let Some(found) = resolve_segments(rest, child) {
                return Some(found);
            }
        }
    }

    let data = node.data.as_ref()?;
    if !segments.is_empty() && !data.extended {
        return None;
    }

    let remainder: Vec<&str> = segments.iter().map(|s| s.as_ref()).collect();
    let remainder = remainder.join("/");
    Some(Resolution {
        target: join_target(&data.target, &remainder),
        extended: !remainder.is_empty(),
        data,
    })
}

/// Append a forwarded remainder to a target, with exactly one slash between.
fn join_target(base: &str, remainder: &str) -> String {
    if remainder.is_empty() {
        base.to_string()
    } else if base.ends_with('/') {
        format!("{}{}", base, remainder)
    } else {
        format!("{}/{}", base, remainder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a tree from `(path, target, extended)` entries; `""` is the root.
    fn tree(entries: &[(&str, &str, bool)]) -> RedirectTree {
        let mut tree = RedirectTree::new();
        for (path, target, extended) in entries {
            let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
            tree.insert(segments.as_slice(), RedirectData::new(*target).with_extended(*extended))
                .unwrap();
        }
        tree
    }

    fn target(path: &str, tree: &RedirectTree) -> Option<String> {
        resolve(path, tree).map(|r| r.target)
    }

    #[test]
    fn test_segments() {
        assert_eq!(segments("/a/B/"), vec!["a", "b"]);
        assert_eq!(segments("a/b"), vec!["a", "b"]);
        assert_eq!(segments(""), vec![""]);
        assert_eq!(segments("/"), vec![""]);
        // Only one slash is stripped at each end.
        assert_eq!(segments("//a//"), vec!["", "a", ""]);
    }

    #[test]
    fn test_longest_match() {
        let t = tree(&[("a", "https://a.test", false), ("a/b", "https://x.test", true)]);

        let deep = resolve("/a/b/c", &t).unwrap();
        assert_eq!(deep.target, "https://x.test/c");
        assert!(deep.extended);
        assert_eq!(deep.data.target, "https://x.test");

        let exact = resolve("/a/b", &t).unwrap();
        assert_eq!(exact.target, "https://x.test");
        assert!(!exact.extended);

        assert_eq!(resolve("/a/x", &t), None);
        assert_eq!(target("/a", &t).as_deref(), Some("https://a.test"));
    }

    #[test]
    fn test_extended_off_boundary() {
        let t = tree(&[("node", "https://x.test", false)]);
        assert_eq!(target("/node", &t).as_deref(), Some("https://x.test"));
        assert_eq!(target("/node/", &t).as_deref(), Some("https://x.test"));
        assert_eq!(resolve("/node/extra", &t), None);
    }

    #[test]
    fn test_trailing_slash_join() {
        let slashed = tree(&[("s", "https://x.test/", true)]);
        assert_eq!(target("/s/foo/bar", &slashed).as_deref(), Some("https://x.test/foo/bar"));

        let bare = tree(&[("s", "https://x.test", true)]);
        assert_eq!(target("/s/foo/bar", &bare).as_deref(), Some("https://x.test/foo/bar"));
    }

    #[test]
    fn test_case_insensitive() {
        let t = tree(&[("abc", "https://x.test", true)]);
        assert_eq!(resolve("/Abc", &t), resolve("/abc", &t));
        assert!(resolve("/ABC", &t).is_some());
    }

    #[test]
    fn test_backtracks_past_non_extended_to_extended_ancestor() {
        let t = tree(&[("a", "https://a.test", true), ("a/b", "https://b.test", false)]);
        // /a/b refuses the remainder, /a accepts the whole of it.
        assert_eq!(target("/a/b/c", &t).as_deref(), Some("https://a.test/b/c"));
        assert_eq!(target("/a/b", &t).as_deref(), Some("https://b.test"));
    }

    #[test]
    fn test_backtracks_through_data_less_nodes() {
        let t = tree(&[("go", "https://go.test", true), ("go/deep/er", "https://deeper.test", true)]);
        assert_eq!(target("/go/deep", &t).as_deref(), Some("https://go.test/deep"));
        assert_eq!(target("/go/deep/er/x", &t).as_deref(), Some("https://deeper.test/x"));
    }

    #[test]
    fn test_root_catch_all() {
        let t = tree(&[("", "https://home.test", true), ("a", "https://a.test", false)]);
        assert_eq!(target("/", &t).as_deref(), Some("https://home.test"));
        assert_eq!(target("", &t).as_deref(), Some("https://home.test"));
        assert_eq!(target("/a/x", &t).as_deref(), Some("https://home.test/a/x"));
        assert_eq!(target("/unknown", &t).as_deref(), Some("https://home.test/unknown"));
    }

    #[test]
    fn test_non_extended_root_refuses_empty_segment() {
        // "/" normalizes to one empty segment, which a non-extended root
        // will not absorb.
        let t = tree(&[("", "https://home.test", false)]);
        assert_eq!(resolve("/", &t), None);
        assert_eq!(resolve("", &t), None);
        assert_eq!(resolve("/anything", &t), None);
    }

    #[test]
    fn test_extended_root_answers_bare_path_without_capture() {
        let t = tree(&[("", "https://home.test", true)]);
        let root = resolve("/", &t).unwrap();
        assert_eq!(root.target, "https://home.test");
        assert!(!root.extended);
    }

    #[test]
    fn test_empty_segment_child_is_reachable() {
        let mut t = tree(&[("", "https://home.test", true)]);
        t.insert(&[""], RedirectData::new("https://blank.test").with_extended(false))
            .unwrap();
        assert_eq!(target("/", &t).as_deref(), Some("https://blank.test"));
        assert_eq!(target("", &t).as_deref(), Some("https://blank.test"));
        assert_eq!(target("/other", &t).as_deref(), Some("https://home.test/other"));
    }

    #[test]
    fn test_empty_tree() {
        assert_eq!(resolve("/a", &RedirectTree::new()), None);
        assert_eq!(resolve("/", &RedirectTree::new()), None);
    }

    #[test]
    fn test_resolution_is_repeatable() {
        let t = tree(&[("a", "https://a.test", true)]);
        let first = resolve("/a/b/c", &t);
        let second = resolve("/a/b/c", &t);
        assert_eq!(first, second);
        assert_eq!(t, tree(&[("a", "https://a.test", true)]));
    }
}
