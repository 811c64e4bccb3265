//! Uniform random selection over a search result set.
//!
//! The selection decision: an upstream-reported error wins over whatever
//! `items` carries, an empty result set is its own condition, and
//! otherwise one item is drawn uniformly at random. Each invocation is
//! an independent trial; nothing is seeded or persisted.

use crate::error::SelectionError;
use crate::models::search::SearchListResponse;
use crate::models::video::VideoSummary;
use rand::Rng;

/// Reduce a search response to one randomly chosen video.
pub fn select_random_video(response: SearchListResponse) -> Result<VideoSummary, SelectionError> {
    select_with_rng(response, &mut rand::thread_rng())
}

/// Selection generic over the RNG.
///
/// Production goes through [`select_random_video`] and `thread_rng`;
/// tests pass a seeded `StdRng` and assert the distribution rather than
/// a fixed sequence.
pub fn select_with_rng<R: Rng>(
    response: SearchListResponse,
    rng: &mut R,
) -> Result<VideoSummary, SelectionError> {
    if let Some(error) = response.error {
        return Err(SelectionError::Upstream {
            code: error.code,
            message: error.message,
        });
    }

    if response.items.is_empty() {
        return Err(SelectionError::NoVideos);
    }

    let mut items = response.items;
    let index = rng.gen_range(0..items.len());
    let chosen = items.swap_remove(index);

    Ok(VideoSummary::from(chosen))
}
