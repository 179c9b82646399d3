// Decision policy: is this text hateful enough to report?

use tracing::info;

use crate::classifier::Classifier;
use crate::error::RemoteError;

/// Classify `text` and compare its linearized score against `threshold`.
///
/// `threshold` is a fraction in [0, 1]. A score equal to the threshold
/// counts as flagged.
pub async fn is_flagged(
    classifier: &dyn Classifier,
    api_key: &str,
    text: &str,
    threshold: f64,
) -> Result<bool, RemoteError> {
    let result = classifier.classify(text, api_key).await?;
    let score = result.score();
    info!(score, threshold, "ModerateHatespeech returned a confidence");
    Ok(meets_threshold(score, threshold))
}

/// Scores this close to the threshold count as equal to it.
///
/// `1.0 - 0.9` is 0.09999999999999998, which would otherwise miss a 10%
/// threshold it mathematically meets.
const SCORE_TOLERANCE: f64 = 1e-9;

/// Inclusive comparison used by [`is_flagged`].
pub fn meets_threshold(score: f64, threshold: f64) -> bool {
    score + SCORE_TOLERANCE >= threshold
}
