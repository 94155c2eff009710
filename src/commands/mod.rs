/*!
Command handlers for the CLI

Each handler works on an already restored [`Session`] and prints its result
to stdout:

- `stories`: list, submit, edit and delete stories
- `favorites`: mark and unmark favorites
- `account`: signup, login, logout and profile management

Failures propagate unchanged; [`user_message`] turns them into the text
shown to the person at the terminal.
*/

use crate::cli::Commands;
use crate::error::{Result, SnoozeError};
use crate::session::Session;

pub mod account;
pub mod favorites;
pub mod stories;

/// Run one CLI command against the session
pub async fn dispatch(command: Commands, session: &mut Session) -> Result<()> {
    match command {
        Commands::Stories {
            mine,
            favorites,
            json,
        } => stories::list(session, mine, favorites, json).await,
        Commands::Submit { title, author, url } => {
            stories::submit(session, title, author, url).await
        }
        Commands::Edit {
            story_id,
            title,
            author,
            url,
        } => stories::edit(session, &story_id, title, author, url).await,
        Commands::Delete { story_id } => stories::delete(session, &story_id).await,
        Commands::Favorite { story_id } => favorites::set(session, &story_id, true).await,
        Commands::Unfavorite { story_id } => favorites::set(session, &story_id, false).await,
        Commands::Signup {
            username,
            name,
            password,
        } => account::signup(session, &username, &name, &password).await,
        Commands::Login { username, password } => {
            account::login(session, &username, &password).await
        }
        Commands::Logout => account::logout(session),
        Commands::Profile => account::profile(session),
        Commands::UpdateProfile { name, password } => {
            account::update_profile(session, name, password).await
        }
        Commands::DeleteAccount => account::delete_account(session).await,
    }
}

/// Text shown to the user when `command` failed with `err`
pub fn user_message(command: &Commands, err: &anyhow::Error) -> String {
    let Some(snooze_err) = SnoozeError::classify(err) else {
        return format!("Error: {:#}", err);
    };

    match (command, snooze_err) {
        (Commands::Login { .. }, SnoozeError::NotFound(_)) => {
            "Sorry, username was not found".to_string()
        }
        (Commands::Login { .. }, SnoozeError::Unauthorized(_)) => {
            "Sorry, username or password is incorrect".to_string()
        }
        (Commands::Signup { .. }, SnoozeError::Conflict(_)) => {
            "Sorry, that username is already taken".to_string()
        }
        (_, SnoozeError::Session(msg)) if msg == "not logged in" => {
            "You need to log in first: snooze login --username <USERNAME>".to_string()
        }
        (_, SnoozeError::Unauthorized(_)) => {
            "Your session is no longer valid, please log in again".to_string()
        }
        (_, SnoozeError::NotFound(msg)) => format!("Sorry, {}", lowercase_first(msg)),
        (_, SnoozeError::Validation(msg)) => format!("Invalid input: {}", msg),
        (_, SnoozeError::Transport(msg)) => format!("Could not reach the server: {}", msg),
        (_, err) if err.is_rejection() => format!("The server refused the request: {}", err),
        _ => format!("Error: {}", snooze_err),
    }
}

fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
