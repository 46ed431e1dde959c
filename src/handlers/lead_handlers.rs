use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::response::Response;
use std::collections::HashMap;
use std::sync::Arc;

use crate::config::flows::FlowKind;
use crate::pipeline::run;
use crate::AppState;

// One thin handler per lead-capture flow. Everything endpoint-specific
// (required fields, CRM form, tags, fail policy, success shape) lives in the
// flow descriptor table; the pipeline does the rest.

pub async fn contact(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    run::handle(FlowKind::Contact, state, query, headers, body).await
}

pub async fn demo_info(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    run::handle(FlowKind::DemoInfo, state, query, headers, body).await
}

pub async fn demo_request(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    run::handle(FlowKind::DemoRequest, state, query, headers, body).await
}

pub async fn support(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    run::handle(FlowKind::Support, state, query, headers, body).await
}

pub async fn feature_guide(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    run::handle(FlowKind::FeatureGuide, state, query, headers, body).await
}

pub async fn security_whitepaper(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    run::handle(FlowKind::SecurityWhitepaper, state, query, headers, body).await
}

pub async fn public_ai_whitepaper(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    run::handle(FlowKind::PublicAiWhitepaper, state, query, headers, body).await
}

pub async fn siglite(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    run::handle(FlowKind::Siglite, state, query, headers, body).await
}

pub async fn resource_download(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    run::handle(FlowKind::ResourceDownload, state, query, headers, body).await
}
