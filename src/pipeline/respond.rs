use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use serde_json::{json, Value};
use std::collections::HashMap;

use crate::api::crm::CrmError;
use crate::config::flows::{FailPolicy, FlowDescriptor, SuccessShape};
use crate::pipeline::validate;
use crate::AppState;

pub fn validation_failure(flow: &FlowDescriptor) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "error": validate::missing_fields_message(flow.required)
        })),
    )
        .into_response()
}

pub fn malformed() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"error": "Invalid request body"})),
    )
        .into_response()
}

/// Map the CRM outcome to the transport-level response under the flow's
/// fail policy. Soft-fail flows answer success regardless; the lead was
/// promised an artifact and tracking must not block it.
pub fn compose(
    flow: &FlowDescriptor,
    fields: &HashMap<String, Value>,
    crm_result: Result<Value, CrmError>,
    state: &AppState,
) -> Response {
    match crm_result {
        Ok(data) => success(flow, fields, Some(data), state),
        Err(e) => match flow.fail_policy {
            FailPolicy::Soft => {
                tracing::error!(
                    "CRM submission failed for {} flow, delivering anyway: {}",
                    flow.label,
                    e
                );
                success(flow, fields, None, state)
            }
            FailPolicy::Hard => {
                tracing::error!("CRM submission failed for {} flow: {}", flow.label, e);
                upstream_failure(flow, e, state)
            }
        },
    }
}

fn success(
    flow: &FlowDescriptor,
    fields: &HashMap<String, Value>,
    data: Option<Value>,
    state: &AppState,
) -> Response {
    match flow.success {
        SuccessShape::Message { message } => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "message": message,
                "data": data.unwrap_or(Value::Null)
            })),
        )
            .into_response(),
        SuccessShape::Download { url, title, .. } => download_ready(url, title),
        SuccessShape::EchoDownload => {
            let url = validate::field_str(fields, "downloadUrl");
            let title = validate::field_str(fields, "resourceTitle");
            download_ready(&url, &title)
        }
        SuccessShape::Redirect { path } => {
            Redirect::to(&format!("{}{}", state.frontend_url, path)).into_response()
        }
    }
}

fn download_ready(url: &str, title: &str) -> Response {
    (
        StatusCode::OK,
        Json(json!({
            "success": true,
            "downloadUrl": url,
            "message": format!("{} download ready", title)
        })),
    )
        .into_response()
}

fn upstream_failure(flow: &FlowDescriptor, error: CrmError, state: &AppState) -> Response {
    let mut body = json!({
        "error": format!("Failed to submit {} request", flow.label)
    });
    if state.environment == "development" {
        body["details"] = Value::String(error.to_string());
    }
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
