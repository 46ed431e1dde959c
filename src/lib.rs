use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod handlers {
    pub mod calendar_handlers;
    pub mod lead_handlers;
    pub mod track_handlers;
}
pub mod api {
    pub mod calendar;
    pub mod crm;
}
pub mod pipeline {
    pub mod attribution;
    pub mod normalize;
    pub mod respond;
    pub mod run;
    pub mod validate;
}
pub mod models {
    pub mod lead_models;
}
pub mod config {
    pub mod flows;
}
pub mod utils {
    pub mod analytics;
    pub mod request_fields;
}

use api::calendar::CalendarClient;
use api::crm::CrmClient;
use utils::analytics::AnalyticsSink;

async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    pub crm: CrmClient,
    pub calendar: CalendarClient,
    pub analytics: Arc<dyn AnalyticsSink>,
    pub environment: String,
    pub frontend_url: String,
}

pub fn validate_env() {
    let _ = std::env::var("CRM_API_URL")
        .expect("CRM_API_URL must be set");
    let _ = std::env::var("CRM_API_KEY")
        .expect("CRM_API_KEY must be set");
    let _ = std::env::var("CALENDAR_API_URL")
        .expect("CALENDAR_API_URL must be set");
    let _ = std::env::var("CALENDAR_API_KEY")
        .expect("CALENDAR_API_KEY must be set");
    let _ = std::env::var("ENVIRONMENT") // for dev its 'development' and for prod anything else
        .expect("ENVIRONMENT must be set");
    let _ = std::env::var("FRONTEND_URL") // frontend url, redirect target for the demo modal
        .expect("FRONTEND_URL must be set");
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/contact", post(handlers::lead_handlers::contact))
        .route("/api/demo-info", post(handlers::lead_handlers::demo_info))
        .route("/api/demo-request", post(handlers::lead_handlers::demo_request))
        .route("/api/support", post(handlers::lead_handlers::support))
        .route("/api/feature-guide", post(handlers::lead_handlers::feature_guide))
        .route("/api/security-whitepaper", post(handlers::lead_handlers::security_whitepaper))
        .route("/api/public-ai-whitepaper", post(handlers::lead_handlers::public_ai_whitepaper))
        .route("/api/siglite", post(handlers::lead_handlers::siglite))
        .route("/api/resource-download", post(handlers::lead_handlers::resource_download))
        .route("/api/track", post(handlers::track_handlers::track_event))
        .route("/api/calendar/slots", get(handlers::calendar_handlers::get_slots))
        .nest_service("/docs", ServeDir::new("docs"))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(Any) // Be cautious with `Any` in production; restrict to your frontend origin
                .allow_headers([axum::http::header::CONTENT_TYPE]),
        )
        .with_state(state)
}
