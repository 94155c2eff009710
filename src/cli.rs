//! Command-line interface definition for Snooze
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands for browsing, submitting, and favoriting stories
//! and for managing the account.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Snooze - Hack-or-Snooze client
///
/// Browse the story feed, submit links, and keep favorites on a
/// Hack-or-Snooze server from the terminal.
#[derive(Parser, Debug, Clone)]
#[command(name = "snooze")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the API base URL from config
    #[arg(long)]
    pub base_url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for Snooze
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List stories from the feed
    Stories {
        /// Only show stories you submitted
        #[arg(long, conflicts_with = "favorites")]
        mine: bool,

        /// Only show your favorite stories
        #[arg(long)]
        favorites: bool,

        /// Output in JSON format
        #[arg(short, long)]
        json: bool,
    },

    /// Create an account and log in
    Signup {
        /// Username for the new account
        #[arg(short, long)]
        username: String,

        /// Display name
        #[arg(short, long)]
        name: String,

        /// Password for the new account
        #[arg(short, long, env = "SNOOZE_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Log in with an existing account
    Login {
        /// Account username
        #[arg(short, long)]
        username: String,

        /// Account password
        #[arg(short, long, env = "SNOOZE_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Forget the stored session
    Logout,

    /// Submit a new story
    Submit {
        /// Story title
        #[arg(short, long)]
        title: String,

        /// Story author
        #[arg(short, long)]
        author: String,

        /// Link to the story
        #[arg(long)]
        url: String,
    },

    /// Edit one of your stories
    Edit {
        /// Identifier of the story to edit
        story_id: String,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New author
        #[arg(short, long)]
        author: Option<String>,

        /// New link
        #[arg(long)]
        url: Option<String>,
    },

    /// Delete one of your stories
    Delete {
        /// Identifier of the story to delete
        story_id: String,
    },

    /// Mark a story as favorite
    Favorite {
        /// Identifier of the story
        story_id: String,
    },

    /// Remove a story from favorites
    Unfavorite {
        /// Identifier of the story
        story_id: String,
    },

    /// Show the logged-in user's profile
    Profile,

    /// Change your display name or password
    UpdateProfile {
        /// New display name
        #[arg(short, long)]
        name: Option<String>,

        /// New password
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Permanently delete your account and log out
    DeleteAccount,
}

impl Cli {
    /// Parse command line arguments
    ///
    /// # Returns
    ///
    /// Returns the parsed CLI structure
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
