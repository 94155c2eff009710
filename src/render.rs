//! Terminal output for stories and profiles

use colored::Colorize;
use prettytable::{cell, format, row, Table};

use crate::error::{Result, SnoozeError};
use crate::models::{Story, User};

/// Host part of a story link, without any leading `www.`
///
/// Links without a scheme are treated as starting with the host.
pub fn host_name(url: &str) -> &str {
    let rest = match url.find("://") {
        Some(idx) => &url[idx + 3..],
        None => url,
    };
    let host = rest.split('/').next().unwrap_or(rest);
    host.strip_prefix("www.").unwrap_or(host)
}

/// Favorite marker shown next to a story for a logged-in user
fn star(user: Option<&User>, story: &Story) -> &'static str {
    match user {
        Some(user) if user.is_favorite(&story.story_id) => "★",
        Some(_) => "☆",
        None => "",
    }
}

/// Build the story table; the favorite column only appears for a user
pub fn story_table(stories: &[Story], user: Option<&User>) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BORDERS_ONLY);
    let header = ["Id", "Title", "Host", "Author", "Posted By"].map(|h| h.bold());
    let [id, title, host, author, posted_by] = header;
    if user.is_some() {
        table.add_row(row!["", id, title, host, author, posted_by]);
    } else {
        table.add_row(row![id, title, host, author, posted_by]);
    }

    for story in stories {
        let host = format!("({})", host_name(&story.url));
        if user.is_some() {
            table.add_row(row![
                star(user, story),
                story.story_id.cyan(),
                story.title,
                host,
                story.author,
                story.username
            ]);
        } else {
            table.add_row(row![
                story.story_id.cyan(),
                story.title,
                host,
                story.author,
                story.username
            ]);
        }
    }
    table
}

/// Print stories as a table under a heading
pub fn print_stories(heading: &str, stories: &[Story], user: Option<&User>) {
    println!("\n{}\n", heading.bold());
    if stories.is_empty() {
        println!("{}", "No stories to show".yellow());
    } else {
        story_table(stories, user).printstd();
    }
    println!();
}

/// Print stories as pretty JSON
pub fn print_stories_json(stories: &[Story]) -> Result<()> {
    let json = serde_json::to_string_pretty(stories).map_err(SnoozeError::Serialization)?;
    println!("{}", json);
    Ok(())
}

/// Profile lines: name, username and account creation date
pub fn profile_lines(user: &User) -> Vec<String> {
    vec![
        format!("Name:          {}", user.name()),
        format!("Username:      {}", user.username()),
        format!("Account Since: {}", user.created_at().format("%Y-%m-%d")),
        format!("Favorites:     {}", user.favorites().len()),
        format!("Stories:       {}", user.own_stories().len()),
    ]
}

/// Print the profile of `user`
pub fn print_profile(user: &User) {
    println!("\n{}\n", "User Profile".bold());
    for line in profile_lines(user) {
        println!("{}", line);
    }
    println!();
}

/// Print a one-line success message
pub fn success(message: &str) {
    println!("{}", message.green());
}
