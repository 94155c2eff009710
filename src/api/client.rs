//! Typed access to every Hack-or-Snooze endpoint
//!
//! [`ApiClient`] turns endpoint calls into [`ApiRequest`]s, hands them to a
//! [`Transport`], and decodes the JSON replies into wire records.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::api::http::HttpTransport;
use crate::api::types::{
    AuthResponse, NewStory, ProfileChanges, ProfileRecord, ProfileResponse, StoriesResponse,
    StoryChanges, StoryRecord, StoryResponse, UserRecord, UserResponse,
};
use crate::api::{ApiRequest, Transport};
use crate::config::ApiConfig;
use crate::error::{Result, SnoozeError};

/// Typed client for the Hack-or-Snooze service
///
/// Cloning is cheap; clones share the underlying transport.
///
/// # Examples
///
/// ```no_run
/// use snooze::api::ApiClient;
/// use snooze::config::ApiConfig;
///
/// # async fn example() -> snooze::error::Result<()> {
/// let client = ApiClient::from_config(&ApiConfig::default())?;
/// let stories = client.get_stories().await?;
/// println!("{} stories", stories.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    /// Wrap an existing transport
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Build a client that talks HTTP to the configured base URL
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if the base URL is invalid or the HTTP
    /// client cannot be initialized
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        Ok(Self::new(Arc::new(HttpTransport::new(config)?)))
    }

    /// `GET /stories` (no authentication)
    pub async fn get_stories(&self) -> Result<Vec<StoryRecord>> {
        let value = self.transport.execute(ApiRequest::get(["stories"])).await?;
        let response: StoriesResponse = decode(value, "stories")?;
        tracing::debug!("Fetched {} stories", response.stories.len());
        Ok(response.stories)
    }

    /// `POST /stories`
    pub async fn create_story(&self, token: &str, story: &NewStory) -> Result<StoryRecord> {
        let request =
            ApiRequest::post(["stories"]).with_body(json!({ "token": token, "story": story }));
        let response: StoryResponse = decode(self.transport.execute(request).await?, "story")?;
        Ok(response.story)
    }

    /// `PATCH /stories/{id}`
    pub async fn update_story(
        &self,
        token: &str,
        story_id: &str,
        changes: &StoryChanges,
    ) -> Result<StoryRecord> {
        let request = ApiRequest::patch(["stories", story_id])
            .with_body(json!({ "token": token, "story": changes }));
        let response: StoryResponse = decode(self.transport.execute(request).await?, "story")?;
        Ok(response.story)
    }

    /// `DELETE /stories/{id}`
    pub async fn delete_story(&self, token: &str, story_id: &str) -> Result<()> {
        let request = ApiRequest::delete(["stories", story_id]).with_body(json!({ "token": token }));
        self.transport.execute(request).await?;
        Ok(())
    }

    /// `POST /signup`, returning the new user and its token
    pub async fn signup(
        &self,
        username: &str,
        password: &str,
        name: &str,
    ) -> Result<(UserRecord, String)> {
        let request = ApiRequest::post(["signup"]).with_body(json!({
            "user": { "username": username, "password": password, "name": name }
        }));
        let response: AuthResponse = decode(self.transport.execute(request).await?, "signup")?;
        Ok((response.user, response.token))
    }

    /// `POST /login`, returning the full user record and its token
    pub async fn login(&self, username: &str, password: &str) -> Result<(UserRecord, String)> {
        let request = ApiRequest::post(["login"]).with_body(json!({
            "user": { "username": username, "password": password }
        }));
        let response: AuthResponse = decode(self.transport.execute(request).await?, "login")?;
        Ok((response.user, response.token))
    }

    /// `GET /users/{username}?token=...`
    pub async fn get_user(&self, token: &str, username: &str) -> Result<UserRecord> {
        let request = ApiRequest::get(["users", username]).with_query("token", token);
        let response: UserResponse = decode(self.transport.execute(request).await?, "user")?;
        Ok(response.user)
    }

    /// `PATCH /users/{username}`
    pub async fn update_user(
        &self,
        token: &str,
        username: &str,
        changes: &ProfileChanges,
    ) -> Result<ProfileRecord> {
        let request = ApiRequest::patch(["users", username])
            .with_body(json!({ "user": changes, "token": token }));
        let response: ProfileResponse = decode(self.transport.execute(request).await?, "user")?;
        Ok(response.user)
    }

    /// `DELETE /users/{username}`
    pub async fn delete_user(&self, token: &str, username: &str) -> Result<()> {
        let request = ApiRequest::delete(["users", username]).with_body(json!({ "token": token }));
        self.transport.execute(request).await?;
        Ok(())
    }

    /// `POST /users/{username}/favorites/{storyId}`
    pub async fn add_favorite(&self, token: &str, username: &str, story_id: &str) -> Result<()> {
        let request = ApiRequest::post(["users", username, "favorites", story_id])
            .with_body(json!({ "token": token }));
        self.transport.execute(request).await?;
        Ok(())
    }

    /// `DELETE /users/{username}/favorites/{storyId}`
    pub async fn remove_favorite(&self, token: &str, username: &str, story_id: &str) -> Result<()> {
        let request = ApiRequest::delete(["users", username, "favorites", story_id])
            .with_body(json!({ "token": token }));
        self.transport.execute(request).await?;
        Ok(())
    }
}

fn decode<T: DeserializeOwned>(value: Value, what: &str) -> Result<T> {
    serde_json::from_value(value).map_err(|e| {
        tracing::error!("Failed to parse {} response: {}", what, e);
        SnoozeError::Transport(format!("Unexpected {} response: {}", what, e)).into()
    })
}
