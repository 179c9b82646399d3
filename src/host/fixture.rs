// JSON fixture host — content from a file, reports kept in memory.
//
// Document shape:
//   { "posts": [{"id", "title", "body"?}], "comments": [{"id", "body"?}] }

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::info;

use super::models::{Comment, FiledReport, Post, ReportTarget};
use super::traits::Host;

#[derive(Debug, Default, Deserialize)]
struct FixtureDocument {
    #[serde(default)]
    posts: Vec<Post>,
    #[serde(default)]
    comments: Vec<Comment>,
}

pub struct FixtureHost {
    posts: HashMap<String, Post>,
    comments: HashMap<String, Comment>,
    reports: Mutex<Vec<FiledReport>>,
}

impl FixtureHost {
    pub fn new(posts: Vec<Post>, comments: Vec<Comment>) -> Self {
        Self {
            posts: posts.into_iter().map(|p| (p.id.clone(), p)).collect(),
            comments: comments.into_iter().map(|c| (c.id.clone(), c)).collect(),
            reports: Mutex::new(Vec::new()),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let doc: FixtureDocument =
            serde_json::from_str(json).context("Failed to parse fixture content")?;
        Ok(Self::new(doc.posts, doc.comments))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read fixture {}", path.display()))?;
        Self::from_json(&json)
    }

    /// Reports filed so far, in order.
    pub async fn reports(&self) -> Vec<FiledReport> {
        self.reports.lock().await.clone()
    }
}

#[async_trait]
impl Host for FixtureHost {
    async fn get_post(&self, id: &str) -> Result<Option<Post>> {
        Ok(self.posts.get(id).cloned())
    }

    async fn get_comment(&self, id: &str) -> Result<Option<Comment>> {
        Ok(self.comments.get(id).cloned())
    }

    async fn report(&self, target: &ReportTarget, reason: &str) -> Result<()> {
        info!(item = %target, reason, "Reported to moderators");
        self.reports.lock().await.push(FiledReport {
            target: target.clone(),
            reason: reason.to_string(),
        });
        Ok(())
    }
}
