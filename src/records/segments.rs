//! Path segments for record files.

use std::path::{Component, Path};

/// Get the tree path segments for a record file stored under `base`.
///
/// The extension is dropped, every component is case-folded and a trailing
/// `index` segment is removed, so `Docs/Index.toml` addresses `/docs` and a
/// top-level `index.toml` addresses the root.
pub fn segments_for(base: &Path, file: &Path) -> Vec<String> {
    let relative = file.strip_prefix(base).unwrap_or(file);
    let stem = relative.with_extension("");

    let mut segments: Vec<String> = stem
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().to_lowercase()),
            _ => None,
        })
        .collect();

    if segments.last().map(String::as_str) == Some("index") {
        segments.pop();
    }
    segments
}

/// Source identifier for a record file: its path relative to `base`,
/// always `/`-separated.
pub fn origin_for(base: &Path, file: &Path) -> String {
    let relative = file.strip_prefix(base).unwrap_or(file);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn segments(file: &str) -> Vec<String> {
        let base = PathBuf::from("/srv/data");
        segments_for(&base, &base.join(file))
    }

    #[test]
    fn test_plain_file() {
        assert_eq!(segments("github.toml"), vec!["github"]);
    }

    #[test]
    fn test_nested_and_case_folded() {
        assert_eq!(segments("Docs/API.json"), vec!["docs", "api"]);
    }

    #[test]
    fn test_index_is_dropped() {
        assert_eq!(segments("docs/index.toml"), vec!["docs"]);
        assert_eq!(segments("Docs/INDEX.toml"), vec!["docs"]);
        assert!(segments("index.toml").is_empty());
        // Only a trailing index is special.
        assert_eq!(segments("index/docs.toml"), vec!["index", "docs"]);
    }

    #[test]
    fn test_origin() {
        let base = PathBuf::from("/srv/data");
        assert_eq!(origin_for(&base, &base.join("docs").join("api.toml")), "docs/api.toml");
    }
}
