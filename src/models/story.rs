//! A single submitted story

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::{ApiClient, NewStory, StoryChanges, StoryRecord};
use crate::error::Result;
use crate::models::User;

/// One submitted link
///
/// Only `title`, `author`, `url` and `updated_at` ever change after
/// creation, and only through [`Story::update`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
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

impl Story {
    /// Build a story from a record returned by the service
    ///
    /// The record is trusted as is.
    pub fn new(record: StoryRecord) -> Self {
        Self {
            story_id: record.story_id,
            title: record.title,
            author: record.author,
            url: record.url,
            username: record.username,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }

    /// Send `changes` for this story on behalf of `user`
    ///
    /// On success the author, title, url and update time are overwritten
    /// from the service's response. On failure the story is left as it was.
    ///
    /// # Errors
    ///
    /// Propagates `Unauthorized` for a rejected token, `NotFound` for an
    /// unknown identifier, and any transport failure.
    pub async fn update(
        &mut self,
        client: &ApiClient,
        user: &User,
        changes: &StoryChanges,
    ) -> Result<&mut Self> {
        let record = client
            .update_story(user.token(), &self.story_id, changes)
            .await?;
        self.author = record.author;
        self.title = record.title;
        self.url = record.url;
        self.updated_at = record.updated_at;
        tracing::debug!("Updated story {}", self.story_id);
        Ok(self)
    }

    /// Copy the mutable fields of another copy of the same story
    pub(crate) fn sync_from(&mut self, other: &Story) {
        self.author.clone_from(&other.author);
        self.title.clone_from(&other.title);
        self.url.clone_from(&other.url);
        self.updated_at = other.updated_at;
    }
}

impl From<StoryRecord> for Story {
    fn from(record: StoryRecord) -> Self {
        Self::new(record)
    }
}

/// The user-supplied fields of a new story
///
/// The submitting username is always taken from the acting user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryDraft {
    /// Headline
    pub title: String,
    /// Author credited for the linked article
    pub author: String,
    /// Link target
    pub url: String,
}

impl StoryDraft {
    /// Create a draft
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            url: url.into(),
        }
    }

    pub(crate) fn into_submission(self, username: &str) -> NewStory {
        NewStory {
            title: self.title,
            author: self.author,
            url: self.url,
            username: username.to_string(),
        }
    }
}
