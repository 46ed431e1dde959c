use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{Duration, Utc};
use chrono_tz::Tz;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::api::calendar::{DEFAULT_RANGE_DAYS, DEFAULT_TIMEZONE};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SlotsQuery {
    pub start: Option<String>,
    pub end: Option<String>,
    pub tz: Option<String>,
}

/// Availability lookup for the scheduling widget. Pure pass-through to the
/// external calendar API; omitted parameters fall back to a two-week window
/// in the default zone.
pub async fn get_slots(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SlotsQuery>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let parse_datetime = |datetime_str: &str| {
        chrono::DateTime::parse_from_rfc3339(datetime_str)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|_| "Invalid datetime format")
    };

    let start = match &params.start {
        Some(s) => parse_datetime(s).map_err(|e| {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": format!("Invalid start time: {}", e)})),
            )
        })?,
        None => Utc::now(),
    };

    let end = match &params.end {
        Some(s) => parse_datetime(s).map_err(|e| {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": format!("Invalid end time: {}", e)})),
            )
        })?,
        None => start + Duration::days(DEFAULT_RANGE_DAYS),
    };

    let time_zone: Tz = params
        .tz
        .as_deref()
        .unwrap_or(DEFAULT_TIMEZONE)
        .parse()
        .map_err(|_| {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "Invalid time zone"})),
            )
        })?;

    match state.calendar.get_slots(start, end, time_zone).await {
        Ok(slots) => Ok(Json(json!({"slots": slots}))),
        Err(e) => {
            tracing::error!("Failed to fetch calendar slots: {}", e);
            let mut body = json!({"error": "Failed to fetch available slots"});
            if state.environment == "development" {
                body["details"] = Value::String(e.to_string());
            }
            Err((StatusCode::INTERNAL_SERVER_ERROR, Json(body)))
        }
    }
}
