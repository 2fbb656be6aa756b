mod ai;
mod config;
mod errors;
mod import;
mod llm_client;
mod models;
mod render;
mod routes;
mod sessions;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::ai::LlmResumeAi;
use crate::config::Config;
use crate::import::extract::PdfTextExtractor;
use crate::llm_client::LlmClient;
use crate::render::export::ChromePdfRenderer;
use crate::routes::build_router;
use crate::sessions::SessionRegistry;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(
        config.anthropic_api_key.clone(),
        config.anthropic_api_url.clone(),
    )?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    match &config.chrome_path {
        Some(path) => info!("PDF export using Chrome at {}", path.display()),
        None => info!("PDF export using auto-detected Chrome"),
    }
    info!("Upload limit: {}MB", config.max_upload_mb);

    let sessions = SessionRegistry::new();

    // Build app state
    let state = AppState {
        sessions: sessions.clone(),
        ai: Arc::new(LlmResumeAi(llm)),
        extractor: Arc::new(PdfTextExtractor),
        pdf_renderer: Arc::new(ChromePdfRenderer::new(config.chrome_path.clone())),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    let disposed = sessions.dispose_all().await;
    info!("Shut down; disposed {disposed} sessions");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
