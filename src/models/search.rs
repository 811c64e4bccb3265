use serde::Deserialize;

/// Response envelope of the YouTube `search.list` endpoint.
///
/// The upstream reports failures as a structured `error` object inside
/// the body, alongside whatever transport status it chose, so both the
/// success and the failure shape live in one type. Callers check
/// `error` first, then `items`.
#[derive(Debug, Deserialize)]
pub struct SearchListResponse {
    /// Search results, newest first. Absent on error responses.
    #[serde(default)]
    pub items: Vec<SearchResult>,
    /// Structured upstream failure (quota exceeded, invalid key, ...).
    pub error: Option<ApiError>,
}

/// One search result of `type=video`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    /// Resource identifier object.
    pub id: ResourceId,
    /// Display fields of the video.
    pub snippet: SearchSnippet,
}

/// Identifier object of a video search result.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceId {
    /// YouTube video identifier.
    #[serde(rename = "videoId")]
    pub video_id: String,
}

/// Display fields of a search result.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchSnippet {
    /// Video title.
    pub title: String,
    /// Video description. May be empty.
    #[serde(default)]
    pub description: String,
}

/// Error object the upstream embeds in failing response bodies.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    /// HTTP-style status code chosen by the upstream, if any.
    pub code: Option<u16>,
    /// Upstream-provided error text.
    #[serde(default)]
    pub message: String,
}
