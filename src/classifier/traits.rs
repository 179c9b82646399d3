// Classifier trait — the seam between the handlers and the remote API.

use async_trait::async_trait;

use super::models::{ClassificationResult, FeedbackReportKind};
use crate::error::RemoteError;

/// A remote hate-speech classifier keyed per call by the caller's API key.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Score a single text. One request per call, nothing cached.
    async fn classify(&self, text: &str, api_key: &str) -> Result<ClassificationResult, RemoteError>;

    /// Tell the classifier it got a previous verdict wrong.
    async fn report_mistake(
        &self,
        text: &str,
        api_key: &str,
        kind: FeedbackReportKind,
    ) -> Result<(), RemoteError>;
}
