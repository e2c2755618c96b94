//! Shared test utilities.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use newsdesk::api::ArticleClient;
use newsdesk::articles::Article;
use newsdesk::config::{ApiConfig, Config};
use std::net::TcpListener;

pub const FULL_DETAIL_JSON: &str = r#"{
    "id": 42,
    "title": "Late winner seals the title",
    "summary": "A stoppage-time goal decided the season.",
    "thumbnail": "https://img.example.com/42.jpg",
    "sport": {"id": 1, "name": "Football"},
    "date": "2024-05-19T18:00:00.000Z",
    "content": "The match was level until the 94th minute.",
    "teams": [{"id": 10, "name": "Reds"}, {"id": 11, "name": "Blues"}]
}"#;

pub fn config_for(endpoint: &str) -> Config {
    Config {
        api: ApiConfig {
            endpoint: endpoint.to_string(),
            timeout_seconds: 2,
            connect_timeout_seconds: 1,
        },
        ..Config::default()
    }
}

pub fn client_for(endpoint: &str) -> ArticleClient {
    ArticleClient::new(&config_for(endpoint).api).expect("client")
}

/// Endpoint on a port nothing listens on.
pub fn unreachable_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

pub fn article(id: u64, title: &str) -> Article {
    Article {
        id,
        title: title.to_string(),
        summary: None,
        thumbnail: None,
        sport: None,
        date: None,
    }
}
