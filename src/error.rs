// Error kinds surfaced to the host.
//
// Configuration and event failures are fatal for the event being handled.
// Remote failures abort the field check in progress and every field after it.

use thiserror::Error;

/// Message shown when a confidence percentage is out of range or not a number.
pub const INVALID_PERCENTAGE: &str = "Percentage must be a number between 0 and 100!";

#[derive(Debug, Error)]
pub enum ModerationError {
    /// A configuration value was rejected. Blocks saving/loading the config.
    #[error("{0}")]
    Validation(String),

    /// A setting the handlers need was never provided.
    #[error("missing configuration: {0}")]
    MissingConfiguration(&'static str),

    /// The event did not point at content the host could find.
    #[error("unresolvable content: {0}")]
    UnresolvableContent(String),

    #[error(transparent)]
    Remote(#[from] RemoteError),

    /// The host's own fetch or report call failed.
    #[error(transparent)]
    Host(anyhow::Error),
}

impl ModerationError {
    pub fn invalid_percentage() -> Self {
        Self::Validation(INVALID_PERCENTAGE.to_string())
    }
}

/// Failure talking to ModerateHatespeech.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("request to {endpoint} failed")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} returned {status}: {body}")]
    Status {
        endpoint: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },

    /// The body did not have the expected shape.
    #[error("invalid response from ModerateHatespeech: {0}")]
    Shape(String),

    /// Well-formed response whose status field was not "success".
    #[error("ModerateHatespeech returned an error: {0}")]
    Rejected(String),
}
