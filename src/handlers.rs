// Trigger handlers — react to post and comment lifecycle events.
//
// Each handler reads the settings it was handed, fetches the content from
// the host, cleans each enabled field and runs the decision policy on it.
// Flagged fields are reported to the host's moderation queue.
//
// Fields are checked one after another. The first error ends the event:
// a failed title check means the body is never looked at.

use tracing::{debug, info, warn};

use crate::classifier::{Classifier, FeedbackReportKind};
use crate::error::{ModerationError, RemoteError};
use crate::host::{Host, ReportTarget, TriggerEvent};
use crate::policy;
use crate::settings::{ContentTarget, ModerationSettings};
use crate::text::normalize;

/// Everything a handler needs, passed in explicitly per event.
pub struct TriggerContext<'a> {
    pub settings: &'a ModerationSettings,
    pub host: &'a dyn Host,
    pub classifier: &'a dyn Classifier,
}

/// A field that was flagged and reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlaggedField {
    PostTitle,
    PostBody,
    Comment,
}

impl FlaggedField {
    /// Reason attached to the report.
    pub fn reason(self) -> &'static str {
        match self {
            FlaggedField::PostTitle => "Post title flagged as toxic by MHS model",
            FlaggedField::PostBody => "Post body flagged as toxic by MHS model",
            FlaggedField::Comment => "Comment flagged as toxic by MHS model",
        }
    }
}

/// Route an event to its handler.
pub async fn handle_event(
    event: &TriggerEvent,
    ctx: &TriggerContext<'_>,
) -> Result<Vec<FlaggedField>, ModerationError> {
    let id = event.content_id();
    match event {
        TriggerEvent::PostCreate { .. } => on_post_create(id, ctx).await,
        TriggerEvent::PostUpdate { .. } => on_post_update(id, ctx).await,
        TriggerEvent::CommentCreate { .. } => on_comment_create(id, ctx).await,
        TriggerEvent::CommentUpdate { .. } => on_comment_update(id, ctx).await,
    }
}

/// Outcome of running a batch of events.
#[derive(Debug, Default)]
pub struct ReplaySummary {
    /// Fields reported across all events, in order.
    pub flagged: Vec<FlaggedField>,
    /// Events that ended in an error.
    pub failed: usize,
}

/// Run events one after another. Each stands alone, like a separate host
/// delivery: a failed event is logged and the rest still run.
pub async fn replay(events: &[TriggerEvent], ctx: &TriggerContext<'_>) -> ReplaySummary {
    let mut summary = ReplaySummary::default();

    for event in events {
        let id = event.content_id().unwrap_or("-");
        match handle_event(event, ctx).await {
            Ok(flagged) => {
                info!(event = event.name(), id, flagged = flagged.len(), "Event handled");
                summary.flagged.extend(flagged);
            }
            Err(e) => {
                summary.failed += 1;
                warn!(event = event.name(), id, error = %e, "Event failed");
            }
        }
    }

    summary
}

pub async fn on_post_create(
    post_id: Option<&str>,
    ctx: &TriggerContext<'_>,
) -> Result<Vec<FlaggedField>, ModerationError> {
    let check_title = ctx.settings.checks(ContentTarget::PostTitle);
    let check_body = ctx.settings.checks(ContentTarget::PostBody);
    if !check_title && !check_body {
        info!(
            targets = %ctx.settings.targets_display(),
            "Skipping post check, not enabled in settings"
        );
        return Ok(Vec::new());
    }

    let post_id = require_id(post_id, "post")?;
    let post = ctx
        .host
        .get_post(post_id)
        .await
        .map_err(ModerationError::Host)?
        .ok_or_else(|| ModerationError::UnresolvableContent(format!("post {post_id} not found")))?;

    let (api_key, threshold) = required_settings(ctx.settings)?;
    let target = ReportTarget::Post(post.id.clone());

    let fields = [
        (check_title, FlaggedField::PostTitle, Some(post.title.as_str())),
        (check_body, FlaggedField::PostBody, post.body.as_deref()),
    ];

    let mut flagged = Vec::new();
    for (enabled, field, raw) in fields {
        if !enabled {
            continue;
        }
        let text = normalize(raw);
        if text.is_empty() {
            info!(post_id, field = ?field, "Skipping post field check, no text");
            continue;
        }
        if check_text(ctx, api_key, threshold, field, &text, &target).await? {
            flagged.push(field);
        }
    }

    Ok(flagged)
}

pub async fn on_post_update(
    post_id: Option<&str>,
    ctx: &TriggerContext<'_>,
) -> Result<Vec<FlaggedField>, ModerationError> {
    if !ctx.settings.check_edits {
        debug!("Skipping post edit, rechecking edits is disabled");
        return Ok(Vec::new());
    }
    on_post_create(post_id, ctx).await
}

pub async fn on_comment_create(
    comment_id: Option<&str>,
    ctx: &TriggerContext<'_>,
) -> Result<Vec<FlaggedField>, ModerationError> {
    if !ctx.settings.checks(ContentTarget::Comment) {
        info!(
            targets = %ctx.settings.targets_display(),
            "Skipping comment check, not enabled in settings"
        );
        return Ok(Vec::new());
    }

    let comment_id = require_id(comment_id, "comment")?;
    let comment = ctx
        .host
        .get_comment(comment_id)
        .await
        .map_err(ModerationError::Host)?
        .ok_or_else(|| {
            ModerationError::UnresolvableContent(format!("comment {comment_id} not found"))
        })?;

    // Empty comments are dropped before settings are even consulted.
    let text = normalize(comment.body.as_deref());
    if text.is_empty() {
        info!(comment_id, "Skipping comment check, no body text");
        return Ok(Vec::new());
    }

    let (api_key, threshold) = required_settings(ctx.settings)?;
    let target = ReportTarget::Comment(comment.id.clone());

    let field = FlaggedField::Comment;
    if check_text(ctx, api_key, threshold, field, &text, &target).await? {
        Ok(vec![field])
    } else {
        Ok(Vec::new())
    }
}

pub async fn on_comment_update(
    comment_id: Option<&str>,
    ctx: &TriggerContext<'_>,
) -> Result<Vec<FlaggedField>, ModerationError> {
    if !ctx.settings.check_edits {
        debug!("Skipping comment edit, rechecking edits is disabled");
        return Ok(Vec::new());
    }
    on_comment_create(comment_id, ctx).await
}

fn require_id<'a>(id: Option<&'a str>, kind: &str) -> Result<&'a str, ModerationError> {
    id.filter(|id| !id.is_empty())
        .ok_or_else(|| ModerationError::UnresolvableContent(format!("event carries no {kind} id")))
}

/// API key and threshold fraction, or the first one that is missing.
fn required_settings(settings: &ModerationSettings) -> Result<(&str, f64), ModerationError> {
    let min_confidence = settings
        .min_confidence
        .ok_or(ModerationError::MissingConfiguration("minimum confidence"))?;
    let api_key = settings
        .api_key()
        .ok_or(ModerationError::MissingConfiguration("API key"))?;
    Ok((api_key, min_confidence.as_fraction()))
}

/// Run the policy on cleaned text and report it when flagged.
async fn check_text(
    ctx: &TriggerContext<'_>,
    api_key: &str,
    threshold: f64,
    field: FlaggedField,
    text: &str,
    target: &ReportTarget,
) -> Result<bool, ModerationError> {
    if !policy::is_flagged(ctx.classifier, api_key, text, threshold).await? {
        return Ok(false);
    }

    ctx.host
        .report(target, field.reason())
        .await
        .map_err(ModerationError::Host)?;
    Ok(true)
}

/// Clean `text` and send it back to the classifier as a correction.
///
/// Returns `false` without contacting the API when nothing is left after
/// cleanup.
pub async fn send_feedback(
    classifier: &dyn Classifier,
    api_key: &str,
    text: &str,
    kind: FeedbackReportKind,
) -> Result<bool, RemoteError> {
    let text = normalize(Some(text));
    if text.is_empty() {
        debug!(kind = %kind, "Skipping feedback, no text");
        return Ok(false);
    }
    classifier.report_mistake(&text, api_key, kind).await?;
    Ok(true)
}
