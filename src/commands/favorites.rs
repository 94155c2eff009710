//! Favorite commands

use crate::error::Result;
use crate::render;
use crate::session::Session;

/// Mark or unmark a favorite for the logged-in user
pub async fn set(session: &mut Session, story_id: &str, favorite: bool) -> Result<()> {
    session.set_favorite(story_id, favorite).await?;
    if favorite {
        render::success(&format!("★ Added {} to favorites", story_id));
    } else {
        render::success(&format!("☆ Removed {} from favorites", story_id));
    }
    Ok(())
}
