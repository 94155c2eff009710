//! Wire types for the Hack-or-Snooze JSON API
//!
//! Field names follow the service's camelCase convention on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A story exactly as the service returns it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryRecord {
    /// Server-assigned identifier
    pub story_id: String,
    /// Headline
    pub title: String,
    /// Author credited for the linked article
    pub author: String,
    /// Link target
    pub url: String,
    /// Username of the submitter
    pub username: String,
    /// When the story was submitted
    pub created_at: DateTime<Utc>,
    /// When the story was last changed
    pub updated_at: DateTime<Utc>,
}

/// A user exactly as the service returns it
///
/// `favorites` and `stories` are only present on the login and user
/// details responses; they default to empty elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Unique username
    pub username: String,
    /// Display name
    pub name: String,
    /// Account creation time
    pub created_at: DateTime<Utc>,
    /// Last profile change
    pub updated_at: DateTime<Utc>,
    /// Stories the user marked as favorite
    #[serde(default)]
    pub favorites: Vec<StoryRecord>,
    /// Stories the user submitted
    #[serde(default)]
    pub stories: Vec<StoryRecord>,
}

/// Fields of a story submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewStory {
    /// Headline
    pub title: String,
    /// Author credited for the linked article
    pub author: String,
    /// Link target
    pub url: String,
    /// Submitting user
    pub username: String,
}

/// Partial change set for a story
///
/// Only `author`, `title` and `url` are accepted by the service; everything
/// else on a story is server-controlled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoryChanges {
    /// New headline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New author
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// New link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl StoryChanges {
    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.url.is_none()
    }
}

/// Partial change set for a user profile
///
/// The password is forwarded to the service but never kept locally.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileChanges {
    /// New display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New password
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl ProfileChanges {
    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.password.is_none()
    }
}

impl std::fmt::Debug for ProfileChanges {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileChanges")
            .field("name", &self.name)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// `GET /stories`
#[derive(Debug, Deserialize)]
pub(crate) struct StoriesResponse {
    pub stories: Vec<StoryRecord>,
}

/// `POST /stories`, `PATCH /stories/{id}`
#[derive(Debug, Deserialize)]
pub(crate) struct StoryResponse {
    pub story: StoryRecord,
}

/// `POST /signup`, `POST /login`
#[derive(Debug, Deserialize)]
pub(crate) struct AuthResponse {
    pub user: UserRecord,
    pub token: String,
}

/// `GET /users/{username}`
#[derive(Debug, Deserialize)]
pub(crate) struct UserResponse {
    pub user: UserRecord,
}

/// User fields echoed by `PATCH /users/{username}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    /// Display name after the update
    pub name: String,
    /// Update time, when reported
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// `PATCH /users/{username}`
#[derive(Debug, Deserialize)]
pub(crate) struct ProfileResponse {
    pub user: ProfileRecord,
}
