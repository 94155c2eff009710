//! Snooze - Hack-or-Snooze client library
//!
//! This library talks to a Hack-or-Snooze story sharing service and keeps a
//! local picture of the feed and the logged-in user in step with it.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `api`: transport abstraction, typed endpoint client and wire records
//! - `models`: `Story`, `User` and `StoryList` with their remote operations
//! - `session`: the logged-in state of a front end and its persistence
//! - `render`: terminal output for stories and profiles
//! - `commands`: CLI command handlers
//! - `config`: configuration management and validation
//! - `error`: error types and result aliases
//! - `cli`: command-line interface definition
//!
//! # Example
//!
//! ```no_run
//! use snooze::{ApiClient, StoryDraft, StoryList, User};
//! use snooze::config::ApiConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ApiClient::from_config(&ApiConfig::default())?;
//!     let mut stories = StoryList::fetch_all(&client).await?;
//!     let mut user = User::authenticate(&client, "alice", "secret").await?;
//!
//!     let draft = StoryDraft::new("Title", "Author", "https://example.com");
//!     let story = stories.add(&client, &mut user, draft).await?;
//!     assert!(user.is_own_story(&story.story_id));
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod session;

// Re-export commonly used types
pub use api::ApiClient;
pub use config::Config;
pub use error::{Result, SnoozeError};
pub use models::{Story, StoryDraft, StoryList, User};
pub use session::Session;
