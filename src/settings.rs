// Moderation settings as the host hands them to the handlers.
//
// Values are owned by the host's configuration store. Handlers only read
// them, and tolerate any of them being unset.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::ModerationError;

pub const DEFAULT_MIN_CONFIDENCE: u8 = 90;
pub const DEFAULT_CHECK_EDITS: bool = true;

/// Which parts of user content get checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContentTarget {
    PostTitle,
    PostBody,
    Comment,
}

impl ContentTarget {
    pub const ALL: [ContentTarget; 3] = [
        ContentTarget::PostTitle,
        ContentTarget::PostBody,
        ContentTarget::Comment,
    ];

    /// Tag used in settings storage.
    pub fn tag(self) -> &'static str {
        match self {
            ContentTarget::PostTitle => "postTitle",
            ContentTarget::PostBody => "postBody",
            ContentTarget::Comment => "comment",
        }
    }

    /// Label shown in settings forms.
    pub fn label(self) -> &'static str {
        match self {
            ContentTarget::PostTitle => "Post Titles",
            ContentTarget::PostBody => "Post Bodies",
            ContentTarget::Comment => "Comments",
        }
    }
}

impl fmt::Display for ContentTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ContentTarget {
    type Err = ModerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentTarget::ALL
            .into_iter()
            .find(|target| target.tag() == s)
            .ok_or_else(|| {
                ModerationError::Validation(format!(
                    "Unknown content type '{s}' (expected postTitle, postBody or comment)"
                ))
            })
    }
}

/// Minimum confidence, as a whole percentage between 0 and 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ConfidencePercent(u8);

impl ConfidencePercent {
    pub fn new(value: i64) -> Result<Self, ModerationError> {
        validate_percentage(Some(value))?;
        Ok(Self(value as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Threshold fraction in [0, 1] for the decision policy.
    pub fn as_fraction(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl Default for ConfidencePercent {
    fn default() -> Self {
        Self(DEFAULT_MIN_CONFIDENCE)
    }
}

impl FromStr for ConfidencePercent {
    type Err = ModerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| ModerationError::invalid_percentage())?;
        Self::new(value)
    }
}

impl fmt::Display for ConfidencePercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Settings-form validator for percentage fields. An unset value is fine.
pub fn validate_percentage(value: Option<i64>) -> Result<(), ModerationError> {
    match value {
        Some(v) if !(0..=100).contains(&v) => Err(ModerationError::invalid_percentage()),
        _ => Ok(()),
    }
}

#[derive(Debug, Clone)]
pub struct ModerationSettings {
    /// Secret: never log this.
    pub api_key: Option<String>,
    pub min_confidence: Option<ConfidencePercent>,
    pub targets: BTreeSet<ContentTarget>,
    /// Recheck content when it is edited.
    pub check_edits: bool,
}

impl ModerationSettings {
    pub fn checks(&self, target: ContentTarget) -> bool {
        self.targets.contains(&target)
    }

    /// API key, treating an empty string as unset.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.is_empty())
    }

    pub fn targets_display(&self) -> String {
        self.targets
            .iter()
            .map(|t| t.tag())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl Default for ModerationSettings {
    // Mirrors the defaults a fresh installation starts with.
    fn default() -> Self {
        Self {
            api_key: None,
            min_confidence: Some(ConfidencePercent::default()),
            targets: ContentTarget::ALL.into_iter().collect(),
            check_edits: DEFAULT_CHECK_EDITS,
        }
    }
}
