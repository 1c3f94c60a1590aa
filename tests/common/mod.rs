//! Shared utilities for integration testing.

use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use redirect_tree::config::AppConfig;
use redirect_tree::http::RedirectServer;
use redirect_tree::lifecycle::{RedirectState, Shutdown};
use redirect_tree::observability::NullReporter;
use tokio::net::TcpListener;

/// Write record files under `dir`, creating parent directories.
pub fn write_records(dir: &Path, files: &[(&str, &str)]) {
    for (name, content) in files {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
}

/// Config pointing at `dir` with watching disabled.
pub fn config_for(dir: &Path) -> AppConfig {
    let mut config = AppConfig::default();
    config.data.directory = dir.to_path_buf();
    config.data.watch = false;
    config
}

/// A running redirect server bound to an ephemeral port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub state: Arc<RedirectState>,
    pub shutdown: Shutdown,
}

#[allow(dead_code)]
impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Build the tree from `config` and serve it on 127.0.0.1:0.
pub async fn start_server(config: AppConfig) -> TestServer {
    let state = Arc::new(RedirectState::with_reporter(config, Arc::new(NullReporter)));
    state.rebuild().await.unwrap();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Shutdown::new();
    let server = RedirectServer::new(state.clone());
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        server.run(listener, rx).await.unwrap();
    });

    TestServer { addr, state, shutdown }
}

/// HTTP client that reports redirects instead of following them.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}
