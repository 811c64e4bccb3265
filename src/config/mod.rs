//! Environment configuration for the video endpoints.
//!
//! Two secrets, read once per invocation. The environment lookup is a
//! thin wrapper over a pure constructor so tests never have to mutate
//! process-wide state.

use crate::error::ConfigError;
use std::env;

/// Environment variable holding the YouTube Data API key.
pub const API_KEY_VAR: &str = "YOUTUBE_API_KEY";
/// Environment variable holding the channel to pick videos from.
pub const CHANNEL_ID_VAR: &str = "YOUTUBE_CHANNEL_ID";

/// Secrets required to call the YouTube search API.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key authenticating the outbound call.
    pub api_key: String,
    /// Channel whose recent uploads are searched.
    pub channel_id: String,
}

impl Config {
    /// Read both secrets from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(env::var(API_KEY_VAR).ok(), env::var(CHANNEL_ID_VAR).ok())
    }

    /// Build a configuration from already-looked-up values.
    ///
    /// Absent and empty values are rejected alike: an empty secret is as
    /// unusable as a missing one.
    pub fn from_values(
        api_key: Option<String>,
        channel_id: Option<String>,
    ) -> Result<Self, ConfigError> {
        let api_key = api_key
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;
        let channel_id = channel_id
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingChannelId)?;

        Ok(Config {
            api_key,
            channel_id,
        })
    }
}
