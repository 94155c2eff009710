//! Story commands: list, submit, edit and delete

use crate::api::StoryChanges;
use crate::error::{Result, SnoozeError};
use crate::models::{Story, StoryDraft};
use crate::render;
use crate::session::Session;

/// List the feed, or the user's own stories or favorites
pub async fn list(session: &mut Session, mine: bool, favorites: bool, json: bool) -> Result<()> {
    let (heading, stories): (&str, Vec<Story>) = if mine {
        ("My Stories", session.require_user()?.own_stories().to_vec())
    } else if favorites {
        ("Favorites", session.require_user()?.favorites().to_vec())
    } else {
        ("All Stories", session.load_stories().await?.stories().to_vec())
    };
    tracing::debug!("Listing {} stories ({})", stories.len(), heading);

    if json {
        render::print_stories_json(&stories)
    } else {
        render::print_stories(heading, &stories, session.user());
        Ok(())
    }
}

/// Submit a story as the logged-in user
pub async fn submit(session: &mut Session, title: String, author: String, url: String) -> Result<()> {
    let story = session
        .submit_story(StoryDraft::new(title, author, url))
        .await?;
    render::success(&format!(
        "Added story {} ({})",
        story.story_id,
        render::host_name(&story.url)
    ));
    Ok(())
}

/// Edit one of the logged-in user's stories
pub async fn edit(
    session: &mut Session,
    story_id: &str,
    title: Option<String>,
    author: Option<String>,
    url: Option<String>,
) -> Result<()> {
    let changes = StoryChanges { title, author, url };
    if changes.is_empty() {
        return Err(SnoozeError::Validation(
            "nothing to change, pass --title, --author or --url".to_string(),
        )
        .into());
    }

    session.require_user()?;
    session.load_stories().await?;
    let story = session.edit_story(story_id, &changes).await?;
    render::success(&format!("Updated story {}: {}", story.story_id, story.title));
    Ok(())
}

/// Delete one of the logged-in user's stories
pub async fn delete(session: &mut Session, story_id: &str) -> Result<()> {
    session.delete_story(story_id).await?;
    render::success(&format!("Deleted story {}", story_id));
    Ok(())
}
