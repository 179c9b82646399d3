use std::collections::BTreeSet;
use std::env;

use anyhow::Result;

use crate::classifier::mhs::DEFAULT_API_URL;
use crate::error::ModerationError;
use crate::settings::{ConfidencePercent, ContentTarget, ModerationSettings, DEFAULT_CHECK_EDITS};

/// Central configuration loaded from environment variables.
///
/// The API key comes from MHS_API_KEY (never hardcoded). The .env file
/// is loaded automatically at startup via dotenvy.
pub struct Config {
    /// ModerateHatespeech API base (defaults to the public v1 API).
    pub api_url: String,
    pub settings: ModerationSettings,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every setting except the API key has a default. Bad values fail the
    /// load with a validation error.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key/value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let min_confidence = match lookup("MHS_MIN_CONFIDENCE") {
            Some(raw) => raw.parse::<ConfidencePercent>()?,
            None => ConfidencePercent::default(),
        };

        let targets = match lookup("MHS_TARGETS") {
            Some(raw) => parse_targets(&raw)?,
            None => ContentTarget::ALL.into_iter().collect(),
        };

        let check_edits = match lookup("MHS_CHECK_EDITS") {
            Some(raw) => parse_bool("MHS_CHECK_EDITS", &raw)?,
            None => DEFAULT_CHECK_EDITS,
        };

        Ok(Self {
            api_url: lookup("MHS_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            settings: ModerationSettings {
                api_key: lookup("MHS_API_KEY").filter(|k| !k.is_empty()),
                min_confidence: Some(min_confidence),
                targets,
                check_edits,
            },
        })
    }

    /// Check that the API key is configured.
    /// Call this before any operation that talks to ModerateHatespeech.
    pub fn require_api_key(&self) -> Result<&str> {
        match self.settings.api_key() {
            Some(key) => Ok(key),
            None => anyhow::bail!(
                "MHS_API_KEY not set. Add your ModerateHatespeech.com API key to your .env file."
            ),
        }
    }
}

/// Parse a comma-separated list of content target tags. Blank means none.
fn parse_targets(raw: &str) -> Result<BTreeSet<ContentTarget>, ModerationError> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::parse)
        .collect()
}

fn parse_bool(name: &str, raw: &str) -> Result<bool, ModerationError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ModerationError::Validation(format!(
            "{name} must be true or false, got '{other}'"
        ))),
    }
}
