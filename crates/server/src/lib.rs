pub mod api;
pub mod banner;
pub mod config;
pub mod error;
pub mod models;
pub mod openapi;
pub mod state;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use utoipa_scalar::{Scalar, Servable};

pub use api::create_router;
pub use banner::print_banner;
pub use config::{Config, ConfigError};
pub use error::{HttpClientError, ProxyError, ProxyResult};
pub use state::AppState;

/// Assemble the API routes, docs, and static assets into one application.
pub fn create_app(state: AppState) -> Router {
    let index = state.config.index_path();
    let static_dir = state.config.static_dir.clone();

    let (router, api) = create_router(state);

    router
        .merge(Scalar::with_url("/docs", api))
        .route_service("/", ServeFile::new(index))
        .fallback_service(ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

pub async fn run_server(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = config.bind_addr();

    if config.default_token.is_some() {
        tracing::info!("Default bot token configured");
    } else {
        tracing::info!("No default bot token, requests must supply one");
    }

    if !config.index_path().exists() {
        tracing::warn!(
            "Static page {} not found, GET / will return 404",
            config.index_path().display()
        );
    }

    let state = AppState::new(config)?;
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| format!("Failed to bind {}: {}", addr, e))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
