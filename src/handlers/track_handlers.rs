use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::pipeline::validate;
use crate::utils::request_fields;
use crate::AppState;

const REQUIRED: &[&str] = &["event", "videoId"];

/// Client-side playback events land here. They go to the analytics sink
/// only; no CRM submission happens for tracking.
pub async fn track_event(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let fields = request_fields::parse(&headers, &body).map_err(|e| {
        tracing::error!("track event body unreadable: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "Invalid request body"})),
        )
    })?;

    if validate::check(&fields, REQUIRED).is_err() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": validate::missing_fields_message(REQUIRED)
            })),
        ));
    }

    let event = validate::field_str(&fields, "event");
    let video_id = validate::field_str(&fields, "videoId");
    state.analytics.record(&event, &json!(fields));

    Ok(Json(json!({
        "success": true,
        "event": event,
        "videoId": video_id,
        "timestamp": Utc::now().to_rfc3339(),
    })))
}
