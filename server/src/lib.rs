//! Food Kanban Backend
//!
//! Layered architecture:
//! - domain: request shapes, prompts and upstream errors
//! - upstream: chat-completion client abstraction and the OpenAI implementation
//! - routes: axum handlers
//!
//! The same server hosts the compiled board UI as static files.

use std::{path::Path, sync::Arc, time::Duration};

use anyhow::Context;
use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tokio::{net::TcpListener, signal};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

pub mod config;
pub mod domain;
pub mod error;
pub mod routes;
pub mod state;
pub mod upstream;

use config::Config;
use routes::{generate_recipe_handler, health_handler};
use state::AppState;
use upstream::{ChatClient, OpenAiClient};

const DEFAULT_LOG_FILTER: &str = "food_kanban_server=info,tower_http=info";

/// API routes plus the static UI bundle as fallback
pub fn build_router(state: Arc<AppState>, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/api/generate-recipe", post(generate_recipe_handler))
        .route("/api/health", get(health_handler))
        .fallback_service(ServeDir::new(static_dir))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    fmt().with_env_filter(filter).init();
}

pub async fn start_server() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    info!("Loading configuration...");
    let config = Config::load()?;

    let chat = OpenAiClient::from_config(&config.upstream).context("failed to build HTTP client")?;
    info!(
        model = chat.model_name(),
        url = chat.completions_url(),
        timeout = ?config.upstream.timeout,
        "Chat client ready"
    );

    let state = AppState::new(Arc::new(chat));
    let app = build_router(state, &config.static_dir);

    let address = format!("0.0.0.0:{}", config.port);
    info!("Binding to {address}");
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    info!(static_dir = %config.static_dir.display(), "Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                warn!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install terminate handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
