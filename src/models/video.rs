use serde::{Deserialize, Serialize};

use super::search::SearchResult;

/// Reduced payload served to the frontend for one selected video.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoSummary {
    /// YouTube video identifier.
    #[serde(rename = "videoId")]
    pub video_id: String,
    /// Video title.
    pub title: String,
    /// Video description.
    pub description: String,
}

impl From<SearchResult> for VideoSummary {
    fn from(result: SearchResult) -> Self {
        VideoSummary {
            video_id: result.id.video_id,
            title: result.snippet.title,
            description: result.snippet.description,
        }
    }
}
