//! Error taxonomy for the random video endpoint.
//!
//! Every failure an invocation can hit is classified into exactly one
//! variant, and each variant maps to exactly one HTTP status. All paths
//! are terminal: there is no retry or recovery anywhere in the service.

use thiserror::Error;
use vercel_runtime::StatusCode;

/// A required secret was missing or empty at invocation time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `YOUTUBE_API_KEY` was not set or was empty.
    #[error("YOUTUBE_API_KEY is missing or empty")]
    MissingApiKey,
    /// `YOUTUBE_CHANNEL_ID` was not set or was empty.
    #[error("YOUTUBE_CHANNEL_ID is missing or empty")]
    MissingChannelId,
}

/// Everything that can stop an invocation from producing a video.
#[derive(Debug, Error)]
pub enum SelectionError {
    /// Configuration error — the outbound call is never attempted.
    #[error("server configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The upstream API reported a structured failure in its response body
    /// (quota exceeded, invalid key, ...).
    #[error("YouTube API error: {message}")]
    Upstream {
        /// Status code the upstream attached to its error object, if any.
        code: Option<u16>,
        /// Upstream-provided error text.
        message: String,
    },

    /// The search succeeded but the channel has no matching videos.
    #[error("no videos found in the configured channel")]
    NoVideos,

    /// Network or body-decoding failure while talking to the upstream API.
    #[error("unexpected error while fetching videos")]
    Transport(#[from] reqwest::Error),
}

impl SelectionError {
    /// HTTP status this error is surfaced with.
    ///
    /// Upstream errors forward the upstream-provided code when it is a
    /// valid HTTP status; a missing or out-of-range code collapses to 500.
    pub fn status_code(&self) -> StatusCode {
        match self {
            SelectionError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            SelectionError::Upstream { code, .. } => code
                .and_then(|code| StatusCode::from_u16(code).ok())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            SelectionError::NoVideos => StatusCode::NOT_FOUND,
            SelectionError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
