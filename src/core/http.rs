//! HTTP endpoint server using Axum

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, Level};

use crate::config::Config;
use crate::registry::DirectionRegistry;
use crate::services::{FileSignalStore, SignalReconciler};

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<RwLock<HealthStatus>>,
    pub start_time: Arc<Instant>,
    pub registry: DirectionRegistry,
    pub reconciler: Arc<SignalReconciler>,
    pub store: Arc<FileSignalStore>,
}

impl AppState {
    /// Wire up registry, store, and reconciler from configuration.
    pub fn new(config: &Config) -> Self {
        let registry = DirectionRegistry::new(config.symbols.clone());
        let store = Arc::new(FileSignalStore::new(config.signal_files_dir.clone()));
        let reconciler = Arc::new(SignalReconciler::new(registry.clone(), store.clone()));
        Self {
            health: Arc::new(RwLock::new(HealthStatus::default())),
            start_time: Arc::new(Instant::now()),
            registry,
            reconciler,
            store,
        }
    }
}

#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": health.status,
        "uptime_seconds": uptime_seconds,
        "service": "sigbridge"
    })))
}

/// Webhook entrypoint: body is the raw direction payload for `symbol`.
///
/// Agreement and mismatch both answer 200 with a descriptive body; only a
/// persistence failure is a 500. The terminal-side contract predates this
/// service, so mismatches are not surfaced as error statuses.
async fn submit_signal(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
    body: String,
) -> (StatusCode, String) {
    info!(%symbol, payload = %body.trim(), "Received signal");
    match state.reconciler.submit(&symbol, &body).await {
        Ok(outcome) => (StatusCode::OK, outcome.message()),
        Err(e) => {
            error!(%symbol, error = %e, "Failed to persist signal");
            (StatusCode::INTERNAL_SERVER_ERROR, format!("Error: {}", e))
        }
    }
}

/// Update the longer-timeframe reference direction for `symbol`.
/// Tokens other than buy/sell are silently ignored; either way the response
/// is the current registry snapshot.
async fn change_direction(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
    body: String,
) -> String {
    info!(%symbol, token = %body.trim(), "Direction update");
    state.registry.set(&symbol, &body).await;
    state.registry.describe().await
}

/// Current registry snapshot, seeded symbols in fixed order.
async fn get_directions(State(state): State<AppState>) -> String {
    state.registry.describe().await
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/getDirections", get(get_directions))
        .route("/changeDirection/{symbol}", post(change_direction))
        .route("/{symbol}", post(submit_signal))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState::new(&config);

    state.store.ensure_dir().await?;
    info!(dir = %state.store.dir().display(), "Signal directory ready");

    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    info!(port = config.port, "HTTP server listening on port {}", config.port);
    axum::serve(listener, app).await?;

    Ok(())
}
