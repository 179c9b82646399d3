// Classification data types and score linearization.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Which class the model picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// Hate speech
    Flag,
    Normal,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Flag => f.write_str("flag"),
            Label::Normal => f.write_str("normal"),
        }
    }
}

/// One verdict from the classifier, already validated.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationResult {
    /// Confidence in `label`, between 0.5 and 1.0.
    pub confidence: f64,
    pub label: Label,
    /// Status string reported alongside the verdict ("Success").
    pub status: String,
}

impl ClassificationResult {
    /// Hate-speech likelihood on a single axis. See [`linearize`].
    pub fn score(&self) -> f64 {
        linearize(self.confidence, self.label)
    }
}

/// Map a two-sided confidence onto one 0..1 axis where 1 is most hateful.
///
/// The API reports confidence relative to whichever class it chose, so a
/// 0.95 "normal" verdict means a 0.05 hate-speech score.
pub fn linearize(confidence: f64, label: Label) -> f64 {
    match label {
        Label::Flag => confidence,
        Label::Normal => 1.0 - confidence,
    }
}

/// A correction sent back to the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackReportKind {
    /// Was not flagged, should have been.
    FalseNegative,
    /// Was flagged, should not have been.
    FalsePositive,
}

impl FeedbackReportKind {
    /// Wire value of the `intended` field.
    pub fn code(self) -> u8 {
        match self {
            FeedbackReportKind::FalseNegative => 1,
            FeedbackReportKind::FalsePositive => 2,
        }
    }
}

impl FromStr for FeedbackReportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "false-negative" => Ok(FeedbackReportKind::FalseNegative),
            "false-positive" => Ok(FeedbackReportKind::FalsePositive),
            other => Err(format!(
                "unknown feedback kind '{other}' (expected false-positive or false-negative)"
            )),
        }
    }
}

impl fmt::Display for FeedbackReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedbackReportKind::FalseNegative => f.write_str("false-negative"),
            FeedbackReportKind::FalsePositive => f.write_str("false-positive"),
        }
    }
}
