//! The global story feed
//!
//! Mutations on a [`StoryList`] take the acting [`User`] explicitly and keep
//! its own-stories collection in step with the feed: the remote call happens
//! first, and only a successful call touches either collection.

use crate::api::{ApiClient, StoryChanges};
use crate::error::{Result, SnoozeError};
use crate::models::{Story, StoryDraft, User};

/// Ordered list of stories
///
/// Server order after [`StoryList::fetch_all`]; newly added stories go to
/// the front.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoryList {
    stories: Vec<Story>,
}

impl StoryList {
    /// Wrap an already built list of stories
    pub fn new(stories: Vec<Story>) -> Self {
        Self { stories }
    }

    /// Fetch the public feed
    ///
    /// Produces a fresh list; existing lists are never modified.
    pub async fn fetch_all(client: &ApiClient) -> Result<Self> {
        let records = client.get_stories().await?;
        Ok(Self::new(records.into_iter().map(Story::new).collect()))
    }

    /// Submit a story as `user` and put it at the front of both the feed
    /// and the user's own stories
    ///
    /// # Errors
    ///
    /// Propagates any failure of the remote call; neither collection is
    /// touched in that case.
    pub async fn add(
        &mut self,
        client: &ApiClient,
        user: &mut User,
        draft: StoryDraft,
    ) -> Result<Story> {
        let submission = draft.into_submission(user.username());
        let record = client.create_story(user.token(), &submission).await?;
        let story = Story::new(record);

        self.stories.retain(|s| s.story_id != story.story_id);
        self.stories.insert(0, story.clone());
        user.insert_own_story(story.clone());

        tracing::info!("Added story {} for {}", story.story_id, user.username());
        Ok(story)
    }

    /// Delete a story as `user` and drop it from the feed and from the
    /// user's own stories and favorites
    ///
    /// A collection that does not contain `story_id` is left unchanged.
    ///
    /// # Errors
    ///
    /// Propagates any failure of the remote call; neither collection is
    /// touched in that case.
    pub async fn remove(&mut self, client: &ApiClient, user: &mut User, story_id: &str) -> Result<()> {
        client.delete_story(user.token(), story_id).await?;

        self.stories.retain(|s| s.story_id != story_id);
        user.forget_story(story_id);

        tracing::info!("Removed story {} for {}", story_id, user.username());
        Ok(())
    }

    /// Edit a story in the feed and carry the result to every copy `user`
    /// holds (own stories and favorites)
    ///
    /// # Errors
    ///
    /// Returns `NotFound` without contacting the service when the story is
    /// not in this list; otherwise propagates any failure of the remote
    /// call, leaving every copy unchanged.
    pub async fn update(
        &mut self,
        client: &ApiClient,
        user: &mut User,
        story_id: &str,
        changes: &StoryChanges,
    ) -> Result<Story> {
        let story = self
            .stories
            .iter_mut()
            .find(|s| s.story_id == story_id)
            .ok_or_else(|| SnoozeError::NotFound(format!("No story with id {}", story_id)))?;

        let updated = story.update(client, user, changes).await?.clone();
        user.sync_story(&updated);
        Ok(updated)
    }

    /// All stories in order
    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    /// Look up a story by identifier
    pub fn get(&self, story_id: &str) -> Option<&Story> {
        self.stories.iter().find(|s| s.story_id == story_id)
    }

    /// Number of stories
    pub fn len(&self) -> usize {
        self.stories.len()
    }

    /// True if the list holds no stories
    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }

    /// Iterate over the stories in order
    pub fn iter(&self) -> std::slice::Iter<'_, Story> {
        self.stories.iter()
    }
}

impl<'a> IntoIterator for &'a StoryList {
    type Item = &'a Story;
    type IntoIter = std::slice::Iter<'a, Story>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
