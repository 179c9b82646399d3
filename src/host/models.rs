// Content and event types exchanged with the host.

use std::fmt;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    /// Link and image posts have no body.
    #[serde(default)]
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Comment {
    pub id: String,
    #[serde(default)]
    pub body: Option<String>,
}

/// A content lifecycle event delivered by the host.
///
/// The id is optional because the host does not guarantee one; handlers
/// treat a missing id as a fatal error for that event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum TriggerEvent {
    PostCreate { id: Option<String> },
    PostUpdate { id: Option<String> },
    CommentCreate { id: Option<String> },
    CommentUpdate { id: Option<String> },
}

impl TriggerEvent {
    pub fn name(&self) -> &'static str {
        match self {
            TriggerEvent::PostCreate { .. } => "PostCreate",
            TriggerEvent::PostUpdate { .. } => "PostUpdate",
            TriggerEvent::CommentCreate { .. } => "CommentCreate",
            TriggerEvent::CommentUpdate { .. } => "CommentUpdate",
        }
    }

    pub fn content_id(&self) -> Option<&str> {
        match self {
            TriggerEvent::PostCreate { id }
            | TriggerEvent::PostUpdate { id }
            | TriggerEvent::CommentCreate { id }
            | TriggerEvent::CommentUpdate { id } => id.as_deref(),
        }
    }
}

/// The item a report is filed against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportTarget {
    Post(String),
    Comment(String),
}

impl fmt::Display for ReportTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportTarget::Post(id) => write!(f, "post {id}"),
            ReportTarget::Comment(id) => write!(f, "comment {id}"),
        }
    }
}

/// A report as recorded by a host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiledReport {
    pub target: ReportTarget,
    pub reason: String,
}
