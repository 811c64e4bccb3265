use random_video_api::config::Config;
use random_video_api::error::SelectionError;
use random_video_api::response;
use random_video_api::selector::select_random_video;
use random_video_api::youtube::YouTubeClient;
use vercel_runtime::{run, Body, Error, Request, Response};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .init();
    run(handler).await
}

/// GET /api/get-random-video — one video chosen uniformly at random from
/// the configured channel's 50 most recent uploads.
///
/// Linear flow, every branch terminal: configuration check, one outbound
/// search call, random selection, reduced JSON payload. Errors come back
/// as structured JSON with the status mapping of [`SelectionError`].
pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    if *req.method() != http::Method::GET {
        return response::method_not_allowed("GET");
    }

    tracing::info!("get-random-video invocation started");

    // Secrets are read per invocation; nothing is cached across calls.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(%error, "configuration check failed");
            return response::error_response(&SelectionError::Config(error));
        }
    };
    tracing::info!("configuration present");

    let outcome = match YouTubeClient::new(&config) {
        Ok(client) => client.search_recent_uploads().await,
        Err(error) => Err(error),
    }
    .and_then(select_random_video);

    match outcome {
        Ok(video) => {
            tracing::info!(title = %video.title, "random video selected");
            response::video_response(&video)
        }
        Err(error @ SelectionError::NoVideos) => {
            tracing::warn!("no videos found in the configured channel");
            response::error_response(&error)
        }
        Err(error) => {
            tracing::error!(%error, "invocation failed");
            response::error_response(&error)
        }
    }
}
