use dotenvy::dotenv;
use std::sync::Arc;
use tracing::Level;

use sapphire_backend::api::calendar::CalendarClient;
use sapphire_backend::api::crm::CrmClient;
use sapphire_backend::utils::analytics::TracingSink;
use sapphire_backend::{create_router, validate_env, AppState};

#[tokio::main]
async fn main() {
    dotenv().ok();
    validate_env();

    let _guard = std::env::var("SENTRY_DSN").ok().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                ..Default::default()
            },
        ))
    });

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let state = Arc::new(AppState {
        crm: CrmClient::from_env(),
        calendar: CalendarClient::from_env(),
        analytics: Arc::new(TracingSink),
        environment: std::env::var("ENVIRONMENT").expect("ENVIRONMENT must be set"),
        frontend_url: std::env::var("FRONTEND_URL").expect("FRONTEND_URL must be set"),
    });

    let app = create_router(state);

    use tokio::net::TcpListener;

    let listener = TcpListener::bind("127.0.0.1:3000").await.unwrap();
    axum::serve(listener, app.into_make_service()).await.unwrap();
}
