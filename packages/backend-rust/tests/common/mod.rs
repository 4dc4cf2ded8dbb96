use std::io::Write;
use std::net::{IpAddr, Ipv4Addr};

use axum::Router;
use tempfile::TempDir;

use palabra_backend_rust::config::Config;

const FIXTURE_WORDS: &str = r#"{
  "words": [
    {"id": 1, "english": "red", "spanish": ["rojo", "roja"], "category": "adjective", "rank": 20},
    {"id": 2, "english": "house", "spanish": ["casa"], "category": "noun", "rank": 5, "hint": "where you live"},
    {"id": 3, "english": "water", "spanish": ["agua"], "category": "noun", "rank": 2}
  ]
}"#;

/// Test app over a tempdir-backed file store. The tempdir handle must
/// stay alive as long as the router is used.
pub struct TestApp {
    pub router: Router,
    _dir: TempDir,
}

pub async fn create_test_app() -> TestApp {
    let dir = tempfile::tempdir().unwrap();

    let words_file = dir.path().join("words.json");
    let mut file = std::fs::File::create(&words_file).unwrap();
    write!(file, "{FIXTURE_WORDS}").unwrap();

    let config = Config {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        log_level: "info".to_string(),
        words_file,
        progress_file: dir.path().join("user_progress.json"),
        database_url: None,
    };

    let router = palabra_backend_rust::create_app(&config).await.unwrap();
    TestApp { router, _dir: dir }
}
