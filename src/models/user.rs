//! The user identity, its session token, and its owned story collections

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::api::{ApiClient, ProfileChanges, StoryRecord, UserRecord};
use crate::error::Result;
use crate::models::Story;

/// A Hack-or-Snooze account
///
/// A user is *authenticated* while it holds a non-empty token. The favorites
/// and own-stories collections never contain two stories with the same
/// identifier; they are replaced wholesale whenever details are re-fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    username: String,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    login_token: String,
    favorites: Vec<Story>,
    own_stories: Vec<Story>,
}

impl User {
    /// Build a user from a service record and the token that goes with it
    pub fn from_record(record: UserRecord, token: impl Into<String>) -> Self {
        Self {
            username: record.username,
            name: record.name,
            created_at: record.created_at,
            updated_at: record.updated_at,
            login_token: token.into(),
            favorites: to_stories(record.favorites),
            own_stories: to_stories(record.stories),
        }
    }

    /// Sign up a new account
    ///
    /// # Errors
    ///
    /// Returns `Conflict` when the username is taken, `Validation` when the
    /// service rejects the fields, or any transport failure. No user-facing
    /// feedback is produced here; that is the caller's job.
    pub async fn create(
        client: &ApiClient,
        username: &str,
        password: &str,
        name: &str,
    ) -> Result<Self> {
        let (record, token) = client.signup(username, password, name).await?;
        tracing::info!("Created account {}", record.username);
        Ok(Self::from_record(record, token))
    }

    /// Log in with a username and password
    ///
    /// The returned user has its favorites and own stories populated.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown username, `Unauthorized` for a
    /// wrong password, or any other failure unchanged.
    pub async fn authenticate(client: &ApiClient, username: &str, password: &str) -> Result<Self> {
        let (record, token) = client.login(username, password).await?;
        tracing::info!("Logged in as {}", record.username);
        Ok(Self::from_record(record, token))
    }

    /// Restore a user from a previously issued token
    ///
    /// Returns `Ok(None)` without contacting the service when either the
    /// token or the username is missing or empty.
    pub async fn fetch_by_token(
        client: &ApiClient,
        token: Option<&str>,
        username: Option<&str>,
    ) -> Result<Option<Self>> {
        let (token, username) = match (token, username) {
            (Some(t), Some(u)) if !t.is_empty() && !u.is_empty() => (t, u),
            _ => return Ok(None),
        };

        let record = client.get_user(token, username).await?;
        tracing::debug!("Restored session for {}", record.username);
        Ok(Some(Self::from_record(record, token)))
    }

    /// Re-read name, timestamps, favorites and own stories from the service
    pub async fn refresh_details(&mut self, client: &ApiClient) -> Result<&mut Self> {
        let record = client.get_user(&self.login_token, &self.username).await?;
        self.name = record.name;
        self.created_at = record.created_at;
        self.updated_at = record.updated_at;
        self.favorites = to_stories(record.favorites);
        self.own_stories = to_stories(record.stories);
        Ok(self)
    }

    /// Mark a story as favorite, then resynchronize from the service
    pub async fn add_favorite(&mut self, client: &ApiClient, story_id: &str) -> Result<&mut Self> {
        client
            .add_favorite(&self.login_token, &self.username, story_id)
            .await?;
        tracing::debug!("Added favorite {} for {}", story_id, self.username);
        self.refresh_details(client).await
    }

    /// Unmark a favorite story, then resynchronize from the service
    pub async fn remove_favorite(
        &mut self,
        client: &ApiClient,
        story_id: &str,
    ) -> Result<&mut Self> {
        client
            .remove_favorite(&self.login_token, &self.username, story_id)
            .await?;
        tracing::debug!("Removed favorite {} for {}", story_id, self.username);
        self.refresh_details(client).await
    }

    /// Update the profile; only the name is kept locally
    pub async fn update_profile(
        &mut self,
        client: &ApiClient,
        changes: &ProfileChanges,
    ) -> Result<&mut Self> {
        let record = client
            .update_user(&self.login_token, &self.username, changes)
            .await?;
        self.name = record.name;
        Ok(self)
    }

    /// Delete this account on the service
    ///
    /// Local state, including the token, is left untouched. Clearing any
    /// stored session record is up to the caller.
    pub async fn remove(&self, client: &ApiClient) -> Result<()> {
        client.delete_user(&self.login_token, &self.username).await?;
        tracing::info!("Deleted account {}", self.username);
        Ok(())
    }

    /// Unique username
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Account creation time
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Last profile change
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Session token; empty when unauthenticated
    pub fn token(&self) -> &str {
        &self.login_token
    }

    /// True while the user holds a token
    pub fn is_authenticated(&self) -> bool {
        !self.login_token.is_empty()
    }

    /// Favorite stories, in service order
    pub fn favorites(&self) -> &[Story] {
        &self.favorites
    }

    /// Stories this user submitted, most recent first after an add
    pub fn own_stories(&self) -> &[Story] {
        &self.own_stories
    }

    /// True if the story is among the favorites
    pub fn is_favorite(&self, story_id: &str) -> bool {
        self.favorites.iter().any(|s| s.story_id == story_id)
    }

    /// True if this user submitted the story
    pub fn is_own_story(&self, story_id: &str) -> bool {
        self.own_stories.iter().any(|s| s.story_id == story_id)
    }

    pub(crate) fn insert_own_story(&mut self, story: Story) {
        self.own_stories.retain(|s| s.story_id != story.story_id);
        self.own_stories.insert(0, story);
    }

    /// Drop every copy of a deleted story, own and favorite
    pub(crate) fn forget_story(&mut self, story_id: &str) {
        self.own_stories.retain(|s| s.story_id != story_id);
        self.favorites.retain(|s| s.story_id != story_id);
    }

    /// Apply an edited story to every copy this user holds
    pub(crate) fn sync_story(&mut self, updated: &Story) {
        self.own_stories
            .iter_mut()
            .chain(self.favorites.iter_mut())
            .filter(|s| s.story_id == updated.story_id)
            .for_each(|s| s.sync_from(updated));
    }
}

/// Convert records to stories, keeping the first of any duplicate ids
fn to_stories(records: Vec<StoryRecord>) -> Vec<Story> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|r| seen.insert(r.story_id.clone()))
        .map(Story::new)
        .collect()
}
