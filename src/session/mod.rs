//! Explicit session state
//!
//! A [`Session`] holds what a front end needs between actions: the API
//! client, the current feed, the logged-in user (if any), and the
//! [`SessionStore`] where the token and username are kept between runs.
//!
//! The core models never write to the store. The session writes the record
//! after signup and login and clears it on logout and account deletion.

use std::sync::Arc;

use crate::api::{ApiClient, ProfileChanges, StoryChanges};
use crate::error::{Result, SnoozeError};
use crate::models::{Story, StoryDraft, StoryList, User};

pub mod store;

pub use store::{FileSessionStore, SessionStore, StoredSession};

/// State threaded through every front-end action
pub struct Session {
    client: ApiClient,
    store: Arc<dyn SessionStore>,
    stories: StoryList,
    user: Option<User>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("stories", &self.stories.len())
            .field("user", &self.user.as_ref().map(User::username))
            .finish()
    }
}

fn not_logged_in() -> SnoozeError {
    SnoozeError::Session("not logged in".to_string())
}

impl Session {
    /// An anonymous session with an empty feed
    pub fn new(client: ApiClient, store: Arc<dyn SessionStore>) -> Self {
        Self {
            client,
            store,
            stories: StoryList::default(),
            user: None,
        }
    }

    /// Resume the user recorded in `store`, if any
    ///
    /// A stored token the service no longer accepts (`Unauthorized` or
    /// `NotFound`) is cleared and the session continues anonymously, as is
    /// an unreadable stored record. Any other failure propagates.
    pub async fn restore(client: ApiClient, store: Arc<dyn SessionStore>) -> Result<Self> {
        let mut session = Self::new(client, store);
        let stored = match session.store.load() {
            Ok(Some(stored)) => stored,
            Ok(None) => return Ok(session),
            Err(err) if matches!(SnoozeError::classify(&err), Some(SnoozeError::Session(_))) => {
                tracing::warn!("Discarding stored session: {}", err);
                session.store.clear()?;
                return Ok(session);
            }
            Err(err) => return Err(err),
        };

        match User::fetch_by_token(
            &session.client,
            Some(stored.token.as_str()),
            Some(stored.username.as_str()),
        )
        .await
        {
            Ok(user) => session.user = user,
            Err(err)
                if matches!(
                    SnoozeError::classify(&err),
                    Some(SnoozeError::Unauthorized(_) | SnoozeError::NotFound(_))
                ) =>
            {
                tracing::warn!("Stored session for {} is no longer valid: {}", stored.username, err);
                session.store.clear()?;
            }
            Err(err) => return Err(err),
        }

        Ok(session)
    }

    /// Replace the feed with a fresh copy from the service
    pub async fn load_stories(&mut self) -> Result<&StoryList> {
        self.stories = StoryList::fetch_all(&self.client).await?;
        Ok(&self.stories)
    }

    /// Log in and remember the session
    pub async fn login(&mut self, username: &str, password: &str) -> Result<&User> {
        let user = User::authenticate(&self.client, username, password).await?;
        self.remember(user)
    }

    /// Sign up and remember the session
    pub async fn signup(&mut self, username: &str, password: &str, name: &str) -> Result<&User> {
        let user = User::create(&self.client, username, password, name).await?;
        self.remember(user)
    }

    fn remember(&mut self, user: User) -> Result<&User> {
        self.store.save(&StoredSession {
            token: user.token().to_string(),
            username: user.username().to_string(),
        })?;
        Ok(&*self.user.insert(user))
    }

    /// Forget the user locally and in the store
    pub fn logout(&mut self) -> Result<()> {
        self.store.clear()?;
        if let Some(user) = self.user.take() {
            tracing::info!("Logged out {}", user.username());
        }
        Ok(())
    }

    /// Delete the account on the service, then forget the session
    ///
    /// If the deletion fails the session is kept as it was.
    pub async fn delete_account(&mut self) -> Result<()> {
        let user = self.user.as_ref().ok_or_else(not_logged_in)?;
        user.remove(&self.client).await?;
        self.logout()
    }

    /// Re-read the logged-in user's details
    pub async fn refresh_user(&mut self) -> Result<&User> {
        let user = self.user.as_mut().ok_or_else(not_logged_in)?;
        user.refresh_details(&self.client).await?;
        Ok(&*user)
    }

    /// Submit a story as the logged-in user
    pub async fn submit_story(&mut self, draft: StoryDraft) -> Result<Story> {
        let user = self.user.as_mut().ok_or_else(not_logged_in)?;
        self.stories.add(&self.client, user, draft).await
    }

    /// Edit a story the logged-in user can change
    ///
    /// Stories outside the loaded feed can still be edited when they are
    /// among the user's own stories.
    pub async fn edit_story(&mut self, story_id: &str, changes: &StoryChanges) -> Result<Story> {
        let user = self.user.as_mut().ok_or_else(not_logged_in)?;
        if self.stories.get(story_id).is_some() {
            return self.stories.update(&self.client, user, story_id, changes).await;
        }

        let mut story = user
            .own_stories()
            .iter()
            .find(|s| s.story_id == story_id)
            .cloned()
            .ok_or_else(|| SnoozeError::NotFound(format!("No story with id {}", story_id)))?;
        story.update(&self.client, user, changes).await?;
        user.sync_story(&story);
        Ok(story)
    }

    /// Delete a story as the logged-in user
    pub async fn delete_story(&mut self, story_id: &str) -> Result<()> {
        let user = self.user.as_mut().ok_or_else(not_logged_in)?;
        self.stories.remove(&self.client, user, story_id).await
    }

    /// Make a story a favorite or not
    pub async fn set_favorite(&mut self, story_id: &str, favorite: bool) -> Result<()> {
        let user = self.user.as_mut().ok_or_else(not_logged_in)?;
        if favorite {
            user.add_favorite(&self.client, story_id).await?;
        } else {
            user.remove_favorite(&self.client, story_id).await?;
        }
        Ok(())
    }

    /// Flip the favorite state of a story, returning the new state
    pub async fn toggle_favorite(&mut self, story_id: &str) -> Result<bool> {
        let favorite = !self
            .user
            .as_ref()
            .ok_or_else(not_logged_in)?
            .is_favorite(story_id);
        self.set_favorite(story_id, favorite).await?;
        Ok(favorite)
    }

    /// Update the logged-in user's profile
    pub async fn update_profile(&mut self, changes: &ProfileChanges) -> Result<&User> {
        let user = self.user.as_mut().ok_or_else(not_logged_in)?;
        user.update_profile(&self.client, changes).await?;
        Ok(&*user)
    }

    /// The logged-in user, if any
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// The logged-in user, or a `Session` error
    pub fn require_user(&self) -> Result<&User> {
        Ok(self.user.as_ref().ok_or_else(not_logged_in)?)
    }

    /// The currently loaded feed
    pub fn stories(&self) -> &StoryList {
        &self.stories
    }
}
