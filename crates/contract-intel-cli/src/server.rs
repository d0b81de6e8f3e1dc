use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use contract_intel_core::{CombinedReport, ContractAnalyzer};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::settings::Settings;

pub const WELCOME_MESSAGE: &str = "Multi-AI Agent Contract Intelligence API! 🚀";

/// Request body for `POST /analyze-contract`.
#[derive(Debug, Deserialize)]
pub struct ContractInput {
    pub contract_text: String,
}

#[derive(Clone)]
struct AppState {
    analyzer: Arc<ContractAnalyzer>,
}

pub fn build_router(analyzer: Arc<ContractAnalyzer>, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/analyze-contract", post(analyze_handler))
        .route("/agents", get(agents_handler))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(AppState { analyzer })
}

/// Bind `settings.bind` and serve until SIGINT or SIGTERM.
pub async fn serve(settings: &Settings, analyzer: Arc<ContractAnalyzer>) -> Result<()> {
    let listener = TcpListener::bind(&settings.bind)
        .await
        .with_context(|| format!("failed to bind {}", settings.bind))?;
    info!(addr = %listener.local_addr()?, "contract analysis API listening");
    axum::serve(listener, build_router(analyzer, settings.max_body_bytes))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;
    info!("server stopped");
    Ok(())
}

async fn home_handler() -> Json<Value> {
    Json(json!({ "message": WELCOME_MESSAGE }))
}

async fn agents_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "agents": state.analyzer.agents() }))
}

async fn analyze_handler(
    State(state): State<AppState>,
    Json(input): Json<ContractInput>,
) -> Result<Json<CombinedReport>, StatusCode> {
    info!(
        input_len = input.contract_text.len(),
        route = "/analyze-contract",
        "request start"
    );
    let analyzer = Arc::clone(&state.analyzer);
    tokio::task::spawn_blocking(move || analyzer.analyze(&input.contract_text))
        .await
        .map(Json)
        .map_err(|err| {
            error!(error = %err, "analysis task failed");
            StatusCode::INTERNAL_SERVER_ERROR
        })
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match (signal(SignalKind::terminate()), signal(SignalKind::interrupt())) {
            (Ok(mut sigterm), Ok(mut sigint)) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = sigint.recv() => {}
                }
            }
            _ => {
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
