use std::fs;
use std::path::PathBuf;

use serde_json::{json, Value};
use tempfile::TempDir;

use snooze::api::ApiClient;
use snooze::config::ApiConfig;

#[allow(dead_code)]
pub fn temp_config_file(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("failed to create tempdir");
    let config_path = temp_dir.path().join("config.yaml");
    fs::write(&config_path, contents).expect("failed to write config file");
    (temp_dir, config_path)
}

/// An `ApiClient` speaking real HTTP to `base_url`
#[allow(dead_code)]
pub fn http_client(base_url: &str) -> ApiClient {
    let config = ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
        ..ApiConfig::default()
    };
    ApiClient::from_config(&config).expect("valid api config")
}

/// A story as the service sends it
#[allow(dead_code)]
pub fn story_body(story_id: &str, username: &str) -> Value {
    json!({
        "storyId": story_id,
        "title": format!("Story {}", story_id),
        "author": "Some Author",
        "url": format!("https://www.example.com/{}", story_id),
        "username": username,
        "createdAt": "2024-03-01T12:00:00.000Z",
        "updatedAt": "2024-03-01T12:00:00.000Z"
    })
}

/// A user as the service sends it
#[allow(dead_code)]
pub fn user_body(username: &str, favorites: &[Value], stories: &[Value]) -> Value {
    json!({
        "username": username,
        "name": format!("{} name", username),
        "createdAt": "2024-01-15T08:30:00.000Z",
        "updatedAt": "2024-01-15T08:30:00.000Z",
        "favorites": favorites,
        "stories": stories
    })
}
