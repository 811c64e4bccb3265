//! HTTP response shaping shared by the `api/` handlers.

use crate::error::SelectionError;
use crate::models::video::VideoSummary;
use serde_json::json;
use vercel_runtime::{Body, Error, Response, StatusCode};

/// 200 response carrying the selected video.
///
/// The endpoint is consumed directly from a browser frontend, so the
/// success response carries a permissive CORS header.
pub fn video_response(video: &VideoSummary) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(serde_json::to_string(video)?))?)
}

/// JSON error response for a failed invocation.
///
/// Transport failures additionally carry a `details` field with the
/// underlying error's description for diagnostics; every other class is
/// fully described by its own message.
pub fn error_response(error: &SelectionError) -> Result<Response<Body>, Error> {
    let payload = match error {
        SelectionError::Transport(source) => json!({
            "error": "An unexpected error occurred while fetching videos.",
            "details": source.to_string(),
        }),
        other => json!({ "error": other.to_string() }),
    };

    Ok(Response::builder()
        .status(error.status_code())
        .header("Content-Type", "application/json")
        .body(Body::Text(payload.to_string()))?)
}

/// 405 for anything but the expected method on these read-only endpoints.
pub fn method_not_allowed(expected: &str) -> Result<Response<Body>, Error> {
    let payload = json!({
        "error": "Method not allowed",
        "message": format!("Use {expected} for this endpoint"),
    });

    Ok(Response::builder()
        .status(StatusCode::METHOD_NOT_ALLOWED)
        .header("Content-Type", "application/json")
        .body(Body::Text(payload.to_string()))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use serde_json::Value;

    fn body_json(response: &Response<Body>) -> Value {
        match response.body() {
            Body::Text(text) => serde_json::from_str(text).expect("body is JSON"),
            _ => panic!("expected a text body"),
        }
    }

    #[test]
    fn test_success_response_is_200_with_cors_and_exact_payload() {
        let video = VideoSummary {
            video_id: "abc123".to_string(),
            title: "T".to_string(),
            description: "D".to_string(),
        };

        let response = video_response(&video).unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get("Access-Control-Allow-Origin")
                .and_then(|value| value.to_str().ok()),
            Some("*")
        );
        assert_eq!(
            body_json(&response),
            json!({ "videoId": "abc123", "title": "T", "description": "D" })
        );
    }

    #[test]
    fn test_config_error_is_500_and_mentions_configuration() {
        let error = SelectionError::Config(ConfigError::MissingApiKey);

        let response = error_response(&error).unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let message = body_json(&response)["error"]
            .as_str()
            .expect("error field is a string")
            .to_string();
        assert!(message.contains("configuration"), "got: {message}");
    }

    #[test]
    fn test_upstream_error_forwards_code_and_message() {
        let error = SelectionError::Upstream {
            code: Some(403),
            message: "quota exceeded".to_string(),
        };

        let response = error_response(&error).unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let message = body_json(&response)["error"]
            .as_str()
            .expect("error field is a string")
            .to_string();
        assert!(message.contains("quota exceeded"), "got: {message}");
    }

    #[test]
    fn test_no_videos_is_404() {
        let response = error_response(&SelectionError::NoVideos).unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(&response);
        assert!(body["error"]
            .as_str()
            .expect("error field is a string")
            .contains("no videos found"));
    }

    #[test]
    fn test_transport_error_is_500_with_details() {
        // An invalid URL yields a reqwest error without any network I/O.
        let source = reqwest::Client::new().get("http://").build().unwrap_err();
        let error = SelectionError::Transport(source);

        let response = error_response(&error).unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(&response);
        assert!(body["error"]
            .as_str()
            .expect("error field is a string")
            .contains("unexpected error"));
        assert!(
            body["details"].is_string(),
            "details should carry the underlying error text"
        );
    }

    #[test]
    fn test_method_not_allowed_is_405() {
        let response = method_not_allowed("GET").unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        let body = body_json(&response);
        assert_eq!(body["error"], "Method not allowed");
    }
}
