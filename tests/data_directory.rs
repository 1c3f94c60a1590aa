//! Building, flattening and reloading trees from a data directory.

use redirect_tree::lifecycle::startup::build_from_directory;
use redirect_tree::observability::CollectingReporter;
use redirect_tree::{flatten, resolve};

mod common;

#[tokio::test]
async fn test_directory_builds_nested_tree() {
    let dir = tempfile::tempdir().unwrap();
    common::write_records(
        dir.path(),
        &[
            ("docs/index.toml", "target = \"https://docs.test\""),
            ("docs/API.toml", "target = \"https://docs.test/reference\"\ntitle = \"API\""),
            ("docs/api/v2.json", r#"{"target": "https://v2.docs.test", "extended": false}"#),
            ("notes.txt", "ignored"),
        ],
    );

    let reporter = CollectingReporter::new();
    let outcome = build_from_directory(&common::config_for(dir.path()), &reporter)
        .await
        .unwrap();

    assert!(outcome.errors.is_empty());
    let paths = flatten(&outcome.tree, |path, _| path.to_string());
    assert_eq!(paths, vec!["docs/api/v2", "docs/api", "docs"]);

    let api = resolve("/docs/api", &outcome.tree).unwrap();
    assert_eq!(api.data.title.as_deref(), Some("API"));
    // The non-extended child refuses the remainder, so its parent takes it.
    assert_eq!(
        resolve("/docs/api/v2/users", &outcome.tree).unwrap().target,
        "https://docs.test/reference/v2/users"
    );
}

#[tokio::test]
async fn test_bad_files_are_reported_without_aborting() {
    let dir = tempfile::tempdir().unwrap();
    common::write_records(
        dir.path(),
        &[
            ("a.toml", "target = \"https://a.test\""),
            ("a/index.json", r#"{"target": "https://other.test"}"#),
            ("broken.toml", "target = "),
            ("list.json", "[1, 2]"),
            ("typed.toml", "target = \"https://t.test\"\nextended = \"yes\""),
        ],
    );

    let reporter = CollectingReporter::new();
    let outcome = build_from_directory(&common::config_for(dir.path()), &reporter)
        .await
        .unwrap();

    assert_eq!(outcome.errors.len(), 4);
    // "a/index.json" sorts before "a.toml" and claims /a first.
    assert_eq!(resolve("/a", &outcome.tree).unwrap().target, "https://other.test");
    assert!(resolve("/typed", &outcome.tree).is_none());
    assert!(reporter.events().contains(&"finished 1 2".to_string()));
}

#[tokio::test]
async fn test_rebuild_swaps_published_tree() {
    let dir = tempfile::tempdir().unwrap();
    common::write_records(dir.path(), &[("old.toml", "target = \"https://old.test\"")]);
    let server = common::start_server(common::config_for(dir.path())).await;
    let client = common::client();

    let res = client.get(server.url("/new")).send().await.unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::NOT_FOUND);

    common::write_records(dir.path(), &[("new.toml", "target = \"https://new.test\"")]);
    let summary = server.state.rebuild().await.unwrap();
    assert_eq!(summary.records, 2);

    let res = client.get(server.url("/new/page")).send().await.unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::FOUND);
    assert_eq!(res.headers()["location"], "https://new.test/page");

    server.shutdown.trigger();
}
