use anyhow::Result;
use axum::{http::StatusCode, response::Json, routing::get, Router};
use serde_json::json;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};

use zine_core::generation::GenerationClient;
use zine_server::config::Config;
use zine_server::pages::RemotePageRepository;
use zine_server::routes::session_router;
use zine_server::session::SessionStore;
use zine_server::AppState;

async fn health_check() -> Result<Json<serde_json::Value>, StatusCode> {
    Ok(Json(json!({
        "status": "healthy",
        "service": "unsettling-zine"
    })))
}

async fn help_handler() -> Json<serde_json::Value> {
    let version = zine_server::get_service_version();
    Json(json!({
        "service": "unsettling-zine",
        "version": version,
        "description": "An interactive zine of uncomfortable questions",
        "endpoints": [
            {
                "path": "/health",
                "method": "GET",
                "description": "Health check endpoint"
            },
            {
                "path": "/sessions",
                "method": "POST",
                "description": "Create a new session at the intro stage"
            },
            {
                "path": "/sessions/{id}",
                "method": "GET",
                "description": "Current session view: phase, question, progress, revealed page"
            },
            {
                "path": "/sessions/{id}/start",
                "method": "POST",
                "description": "Begin the question sequence"
            },
            {
                "path": "/sessions/{id}/answer",
                "method": "POST",
                "description": "Submit an answer; runs musing and artwork generation, then persists the page"
            },
            {
                "path": "/sessions/{id}/continue",
                "method": "POST",
                "description": "Move on from the reveal to the next question, or to the gallery"
            },
            {
                "path": "/sessions/{id}/restart",
                "method": "POST",
                "description": "Reset the session back to the intro"
            },
            {
                "path": "/sessions/{id}/gallery",
                "method": "GET",
                "description": "The session's pages in reading order"
            },
            {
                "path": "/pages",
                "method": "GET",
                "description": "All persisted pages, newest first"
            }
        ],
        "configuration": {
            "required_env_vars": ["ZINE_APP_ID", "ZINE_API_KEY"],
            "optional_env_vars": [
                "ZINE_BACKEND_URL (default: hosted backend)",
                "PORT (default: 3000)"
            ]
        }
    }))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    info!("Starting the Unsettling zine service");

    let config =
        Config::from_env().expect("Failed to load configuration from environment variables");

    let generation_client = GenerationClient::new(
        config.backend_url.clone(),
        config.app_id.clone(),
        config.api_key.clone(),
    );

    let page_repository = RemotePageRepository::new(
        config.backend_url.clone(),
        config.app_id.clone(),
        config.api_key.clone(),
    );

    let app_state = Arc::new(AppState {
        sessions: SessionStore::new(),
        generation_client: Arc::new(generation_client),
        pages: Arc::new(page_repository),
    });

    let app = Router::new()
        .route("/health", get(health_check))
        .route("/help", get(help_handler))
        .merge(session_router())
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(app_state);

    let listener = TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    info!("Server listening on port {}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
