use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::Value;
use std::sync::Arc;

use super::AppState;

#[derive(serde::Serialize)]
struct ErrorResponse {
    error: String,
}

/// Pull `input` out of a JSON object body, whatever its content type.
/// A missing, null or non-string `input` is the empty text. `None` when
/// the body is not a JSON object at all.
fn extract_input(body: &[u8]) -> Option<String> {
    let Value::Object(map) = serde_json::from_slice::<Value>(body).ok()? else {
        return None;
    };
    match map.get("input") {
        Some(Value::String(input)) => Some(input.clone()),
        _ => Some(String::new()),
    }
}

/// POST / - relay `input` to both collaborators. Always 200 for a JSON
/// object body; collaborator failures are reported inside the reply.
pub(super) async fn communicate(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let Some(input) = extract_input(&body) else {
        tracing::warn!(
            bytes = body.len(),
            "rejected relay request: body is not a JSON object"
        );
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "request body must be a JSON object".to_string(),
            }),
        )
            .into_response();
    };

    tracing::info!(%input, "received relay request");
    Json(state.bridge.relay(&input).await).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_input_is_used() {
        assert_eq!(extract_input(br#"{"input": "hi"}"#).as_deref(), Some("hi"));
    }

    #[test]
    fn missing_null_or_non_string_input_is_empty() {
        assert_eq!(extract_input(b"{}").as_deref(), Some(""));
        assert_eq!(extract_input(br#"{"input": null}"#).as_deref(), Some(""));
        assert_eq!(extract_input(br#"{"input": 5}"#).as_deref(), Some(""));
    }

    #[test]
    fn non_objects_are_rejected() {
        assert_eq!(extract_input(b"not json"), None);
        assert_eq!(extract_input(b"[1, 2]"), None);
        assert_eq!(extract_input(br#""input""#), None);
        assert_eq!(extract_input(b""), None);
    }
}
