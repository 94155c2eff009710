//! Account commands
//!
//! Signup and login persist the session through the session's store; logout
//! and account deletion clear it.

use crate::api::ProfileChanges;
use crate::error::{Result, SnoozeError};
use crate::render;
use crate::session::Session;

/// Create an account and log in
pub async fn signup(session: &mut Session, username: &str, name: &str, password: &str) -> Result<()> {
    let user = session.signup(username, password, name).await?;
    render::success(&format!("Welcome, {}! You are logged in as {}", user.name(), user.username()));
    Ok(())
}

/// Log in with an existing account
pub async fn login(session: &mut Session, username: &str, password: &str) -> Result<()> {
    let user = session.login(username, password).await?;
    render::success(&format!("Logged in as {}", user.username()));
    Ok(())
}

/// Forget the stored session
pub fn logout(session: &mut Session) -> Result<()> {
    session.logout()?;
    render::success("Logged out");
    Ok(())
}

/// Show the logged-in user's profile
pub fn profile(session: &mut Session) -> Result<()> {
    render::print_profile(session.require_user()?);
    Ok(())
}

/// Change the display name and/or password
pub async fn update_profile(
    session: &mut Session,
    name: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let changes = ProfileChanges { name, password };
    if changes.is_empty() {
        return Err(SnoozeError::Validation(
            "nothing to change, pass --name or --password".to_string(),
        )
        .into());
    }

    let user = session.update_profile(&changes).await?;
    render::success(&format!("Profile updated for {}", user.username()));
    Ok(())
}

/// Delete the account on the server and log out
pub async fn delete_account(session: &mut Session) -> Result<()> {
    let username = session.require_user()?.username().to_string();
    session.delete_account().await?;
    render::success(&format!("Deleted account {}", username));
    Ok(())
}
