use axum::body::Bytes;
use axum::http::HeaderMap;
use axum::response::Response;
use std::collections::HashMap;
use std::sync::Arc;

use crate::config::flows::{self, FlowKind};
use crate::models::lead_models::SubmissionEnvelope;
use crate::pipeline::{attribution, normalize, respond, validate};
use crate::utils::request_fields;
use crate::AppState;

/// The shared lead pipeline: decode -> validate -> normalize -> attribute ->
/// submit -> compose. Every lead endpoint goes through here; the flow
/// descriptor supplies everything endpoint-specific.
pub async fn handle(
    kind: FlowKind,
    state: Arc<AppState>,
    query: HashMap<String, String>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let flow = flows::descriptor(kind);

    let fields = match request_fields::parse(&headers, &body) {
        Ok(fields) => fields,
        Err(e) => {
            tracing::error!("{} submission body unreadable: {}", flow.label, e);
            return respond::malformed();
        }
    };

    if let Err(missing) = validate::check(&fields, flow.required) {
        tracing::info!(
            "{} submission rejected, missing fields: {}",
            flow.label,
            missing.join(", ")
        );
        return respond::validation_failure(flow);
    }

    let contact = normalize::contact_record(flow, &fields);
    let utm = attribution::capture(&fields, &query);
    let envelope = SubmissionEnvelope {
        form_id: flow.form,
        contact,
        tags: flow.tags.iter().map(|tag| tag.to_string()).collect(),
        utm,
    };

    let crm_result = state.crm.submit(&envelope).await;
    respond::compose(flow, &fields, crm_result, &state)
}
