// Host trait — what the handlers need from the platform.

use anyhow::Result;
use async_trait::async_trait;

use super::models::{Comment, Post, ReportTarget};

#[async_trait]
pub trait Host: Send + Sync {
    /// Fetch a post's full content. `None` when the id is unknown.
    async fn get_post(&self, id: &str) -> Result<Option<Post>>;

    /// Fetch a comment's full content. `None` when the id is unknown.
    async fn get_comment(&self, id: &str) -> Result<Option<Comment>>;

    /// Put an item in the moderator review queue with a reason.
    async fn report(&self, target: &ReportTarget, reason: &str) -> Result<()>;
}
