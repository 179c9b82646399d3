// ModerateHatespeech API implementation.
//
// Two endpoints: `moderate/` scores a text, `report/` sends feedback on a
// previous score. Both take the API key as a `token` field in the JSON body.
// There is no retry and no caching; every call is exactly one request.

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::models::{ClassificationResult, FeedbackReportKind, Label};
use super::traits::Classifier;
use crate::error::RemoteError;
use crate::output::truncate_chars;

pub const DEFAULT_API_URL: &str = "https://api.moderatehatespeech.com/api/v1";

const MODERATE_ENDPOINT: &str = "moderate";
const REPORT_ENDPOINT: &str = "report";

/// HTTP client for ModerateHatespeech. Holds no credentials; the key travels
/// with each call.
pub struct ModerateHatespeechClient {
    client: Client,
    base_url: String,
}

impl ModerateHatespeechClient {
    /// Create a client pointing at the given API base URL.
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("hategate/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}/", self.base_url, endpoint)
    }

    async fn post<T: Serialize + ?Sized>(
        &self,
        endpoint: &'static str,
        body: &T,
    ) -> Result<reqwest::Response, RemoteError> {
        let response = self
            .client
            .post(self.url(endpoint))
            .json(body)
            .send()
            .await
            .map_err(|source| RemoteError::Transport { endpoint, source })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(RemoteError::Status {
                endpoint,
                status,
                body,
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl Classifier for ModerateHatespeechClient {
    async fn classify(&self, text: &str, api_key: &str) -> Result<ClassificationResult, RemoteError> {
        let request = ScoreRequest {
            token: api_key,
            text,
        };

        let response = self.post(MODERATE_ENDPOINT, &request).await?;
        let body = response
            .text()
            .await
            .map_err(|source| RemoteError::Transport {
                endpoint: MODERATE_ENDPOINT,
                source,
            })?;

        let result = parse_score_response(&body)?;

        debug!(
            confidence = result.confidence,
            class = %result.label,
            text_preview = %truncate_chars(text, 50),
            "Scored text"
        );

        Ok(result)
    }

    async fn report_mistake(
        &self,
        text: &str,
        api_key: &str,
        kind: FeedbackReportKind,
    ) -> Result<(), RemoteError> {
        let request = ReportRequest {
            token: api_key,
            text,
            intended: kind.code(),
        };

        // The body carries nothing we act on.
        self.post(REPORT_ENDPOINT, &request).await?;

        debug!(
            kind = %kind,
            text_preview = %truncate_chars(text, 50),
            "Sent classifier feedback"
        );

        Ok(())
    }
}

/// Validate a raw `moderate/` response body.
///
/// Every field is checked: `confidence` must be a number in [0, 1], `class`
/// must be "flag" or "normal", and `response` must be a string equal to
/// "success" ignoring case.
pub fn parse_score_response(body: &str) -> Result<ClassificationResult, RemoteError> {
    let raw: ScoreResponse = serde_json::from_str(body)
        .map_err(|e| RemoteError::Shape(format!("{e}\n{body}")))?;

    if !(0.0..=1.0).contains(&raw.confidence) {
        return Err(RemoteError::Shape(format!(
            "confidence {} out of range\n{body}",
            raw.confidence
        )));
    }

    if !raw.response.eq_ignore_ascii_case("success") {
        return Err(RemoteError::Rejected(raw.response));
    }

    Ok(ClassificationResult {
        confidence: raw.confidence,
        label: raw.class,
        status: raw.response,
    })
}

// --- ModerateHatespeech request/response types ---

#[derive(Serialize)]
struct ScoreRequest<'a> {
    token: &'a str,
    text: &'a str,
}

#[derive(Serialize)]
struct ReportRequest<'a> {
    token: &'a str,
    text: &'a str,
    intended: u8,
}

#[derive(Deserialize)]
struct ScoreResponse {
    confidence: f64,
    class: Label,
    response: String,
}
