// Shared test doubles.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use hategate::classifier::{Classifier, ClassificationResult, FeedbackReportKind, Label};
use hategate::error::RemoteError;
use hategate::host::{Comment, FixtureHost, Host, Post, ReportTarget};

/// Classifier that answers from a script keyed by exact text.
///
/// Unscripted texts come back as confidently normal.
#[derive(Default)]
pub struct ScriptedClassifier {
    verdicts: HashMap<String, Option<(f64, Label)>>,
    calls: Mutex<Vec<(String, String)>>,
    feedback: Mutex<Vec<(String, FeedbackReportKind)>>,
}

impl ScriptedClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn verdict(mut self, text: &str, confidence: f64, label: Label) -> Self {
        self.verdicts
            .insert(text.to_string(), Some((confidence, label)));
        self
    }

    /// Make classification of `text` fail as if the API refused it.
    pub fn failing(mut self, text: &str) -> Self {
        self.verdicts.insert(text.to_string(), None);
        self
    }

    /// Texts sent for classification, in order.
    pub fn classified(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(text, _)| text.clone())
            .collect()
    }

    /// API keys used, in order.
    pub fn keys_used(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, key)| key.clone())
            .collect()
    }

    pub fn feedback(&self) -> Vec<(String, FeedbackReportKind)> {
        self.feedback.lock().unwrap().clone()
    }
}

#[async_trait]
impl Classifier for ScriptedClassifier {
    async fn classify(&self, text: &str, api_key: &str) -> Result<ClassificationResult, RemoteError> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), api_key.to_string()));

        match self.verdicts.get(text) {
            Some(Some((confidence, label))) => Ok(ClassificationResult {
                confidence: *confidence,
                label: *label,
                status: "Success".to_string(),
            }),
            Some(None) => Err(RemoteError::Rejected("Invalid token".to_string())),
            None => Ok(ClassificationResult {
                confidence: 0.99,
                label: Label::Normal,
                status: "Success".to_string(),
            }),
        }
    }

    async fn report_mistake(
        &self,
        text: &str,
        _api_key: &str,
        kind: FeedbackReportKind,
    ) -> Result<(), RemoteError> {
        self.feedback.lock().unwrap().push((text.to_string(), kind));
        Ok(())
    }
}

/// Host whose calls can be made to fail, delegating to a fixture otherwise.
pub struct BrokenHost {
    pub inner: FixtureHost,
    pub fail_fetch: bool,
    pub fail_report: bool,
}

impl BrokenHost {
    pub fn failing_fetch(inner: FixtureHost) -> Self {
        Self {
            inner,
            fail_fetch: true,
            fail_report: false,
        }
    }

    pub fn failing_report(inner: FixtureHost) -> Self {
        Self {
            inner,
            fail_fetch: false,
            fail_report: true,
        }
    }
}

#[async_trait]
impl Host for BrokenHost {
    async fn get_post(&self, id: &str) -> anyhow::Result<Option<Post>> {
        if self.fail_fetch {
            anyhow::bail!("platform API unavailable");
        }
        self.inner.get_post(id).await
    }

    async fn get_comment(&self, id: &str) -> anyhow::Result<Option<Comment>> {
        if self.fail_fetch {
            anyhow::bail!("platform API unavailable");
        }
        self.inner.get_comment(id).await
    }

    async fn report(&self, target: &ReportTarget, reason: &str) -> anyhow::Result<()> {
        if self.fail_report {
            anyhow::bail!("report queue rejected {target}");
        }
        self.inner.report(target, reason).await
    }
}
