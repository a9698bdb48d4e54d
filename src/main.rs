//! HeartGuard Web
//!
//! Server-rendered web client for heart disease risk assessment.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     HEARTGUARD WEB                       │
//! ├──────────────────────────────────────────────────────────┤
//! │  ┌──────────┐  ┌───────────────┐  ┌───────────────────┐  │
//! │  │  Pages   │  │  Predict Flow │  │  Explanation      │  │
//! │  │  (Axum)  │  │  (Session)    │  │  Charts (SVG)     │  │
//! │  └────┬─────┘  └──────┬────────┘  └─────────┬─────────┘  │
//! │       └───────────────┼─────────────────────┘            │
//! │                       ▼                                  │
//! │            ┌────────────────────┐                        │
//! │            │ Prediction Service │  POST /predict         │
//! │            │ (remote, HTTP)     │  POST /explain         │
//! │            └────────────────────┘                        │
//! └──────────────────────────────────────────────────────────┘
//! ```

mod client;
mod config;
mod error;
mod handlers;
mod logic;
mod models;
mod render;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "heartguard_web=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    tracing::info!("HeartGuard Web starting...");
    tracing::info!("Prediction service: {}", config.api_base_url);
    if config.is_production() {
        tracing::info!("Running in production mode");
    }

    let client = client::PredictionClient::new(&config)
        .context("Failed to build prediction service client")?;
    let renderer = render::Renderer::new().context("Failed to load page templates")?;

    // Build application state
    let state = AppState {
        config: config.clone(),
        client,
        renderer: Arc::new(renderer),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind listen address")?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: config::Config,
    pub client: client::PredictionClient,
    pub renderer: Arc<render::Renderer>,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::pages::home))
        .route("/about", get(handlers::pages::about))
        .route(
            "/predict",
            get(handlers::pages::predict_form).post(handlers::predict::submit),
        )
        .route("/health", get(handlers::health::check))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
