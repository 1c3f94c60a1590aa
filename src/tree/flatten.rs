//! Post-order flattening of a redirect tree.

use crate::tree::node::{RedirectData, RedirectTree};

/// Flatten a redirect tree with post-order traversal, applying `transform`
/// to every node that carries data.
///
/// Descendants are emitted before their parent, siblings in insertion order.
/// Paths are relative (no leading slash); the root's path is `""`.
pub fn flatten<T, F>(tree: &RedirectTree, mut transform: F) -> Vec<T>
where
    F: FnMut(&str, &RedirectData) -> T,
{
    let mut results = Vec::new();
    walk(tree, "", &mut transform, &mut results);
    results
}

fn walk<T, F>(node: &RedirectTree, current_path: &str, transform: &mut F, results: &mut Vec<T>)
where
    F: FnMut(&str, &RedirectData) -> T,
{
    if let Some(subpaths) = &node.subpaths {
        for (segment, child) in subpaths {
            let child_path = if current_path.is_empty() {
                segment.clone()
            } else {
                format!("{}/{}", current_path, segment)
            };
            walk(child, &child_path, transform, results);
        }
    }

    if let Some(data) = &node.data {
        results.push(transform(current_path, data));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RedirectTree {
        let mut tree = RedirectTree::new();
        let root: [&str; 0] = [];
        tree.insert(&root, RedirectData::new("https://home.test")).unwrap();
        tree.insert(&["b"], RedirectData::new("https://b.test")).unwrap();
        tree.insert(&["a", "y"], RedirectData::new("https://ay.test")).unwrap();
        tree.insert(&["a"], RedirectData::new("https://a.test")).unwrap();
        tree.insert(&["a", "x"], RedirectData::new("https://ax.test")).unwrap();
        tree
    }

    #[test]
    fn test_post_order_with_insertion_ordered_siblings() {
        let paths = flatten(&sample(), |path, _| path.to_string());
        assert_eq!(paths, vec!["b", "a/y", "a/x", "a", ""]);
    }

    #[test]
    fn test_transform_receives_data() {
        let targets = flatten(&sample(), |_, data| data.target.clone());
        assert_eq!(targets.last().map(String::as_str), Some("https://home.test"));
        assert_eq!(targets.len(), 5);
    }

    #[test]
    fn test_flatten_is_idempotent() {
        let tree = sample();
        let first = flatten(&tree, |path, data| (path.to_string(), data.clone()));
        let second = flatten(&tree, |path, data| (path.to_string(), data.clone()));
        assert_eq!(first, second);
    }

    #[test]
    fn test_data_less_nodes_contribute_nothing() {
        let mut tree = RedirectTree::new();
        tree.insert(&["deep", "down", "here"], RedirectData::new("https://x.test")).unwrap();
        assert_eq!(flatten(&tree, |path, _| path.to_string()), vec!["deep/down/here"]);
        assert!(flatten(&RedirectTree::new(), |path, _| path.to_string()).is_empty());
    }
}
