//! Domain objects backed by the remote service
//!
//! - [`Story`]: one submitted link
//! - [`User`]: an identity with its token, favorites and own stories
//! - [`StoryList`]: the feed, whose mutators keep a user's own stories in step

pub mod story;
pub mod story_list;
pub mod user;

pub use story::{Story, StoryDraft};
pub use story_list::StoryList;
pub use user::User;
