//! Campaign vehicle rental quote engine and its HTTP service.

pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod pricing;
pub mod share;
pub mod telemetry;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::cache::{CacheStats, QuoteCache};
use crate::config::AppConfig;
use crate::pricing::{PriceTables, TableError};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub tables: Arc<PriceTables>,
    pub cache: QuoteCache,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig, tables: PriceTables) -> Self {
        Self {
            tables: Arc::new(tables),
            cache: QuoteCache::new(&config.cache),
            config: Arc::new(config),
        }
    }

    /// Load the price tables named by the configuration and build the state.
    pub fn from_config(config: AppConfig) -> Result<Self, TableError> {
        let tables = load_tables(&config)?;
        Ok(Self::new(config, tables))
    }
}

/// The configured price table file, or the tables built into the binary.
pub fn load_tables(config: &AppConfig) -> Result<PriceTables, TableError> {
    match &config.pricing.price_table_path {
        Some(path) => {
            let tables = PriceTables::from_path(path)?;
            info!("Loaded price tables from {}", path.display());
            Ok(tables)
        }
        None => {
            let tables = PriceTables::embedded()?.clone();
            info!("Using embedded price tables");
            Ok(tables)
        }
    }
}

/// Build the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/cache/stats", get(cache_stats))
        .route("/api/cache/invalidate", post(invalidate_cache))
        .nest("/api/pricing", pricing::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn cache_stats(State(state): State<AppState>) -> Json<CacheStats> {
    Json(state.cache.stats())
}

/// Drop every memoized quote, e.g. after replacing the price table file.
async fn invalidate_cache(State(state): State<AppState>) -> Json<CacheStats> {
    state.cache.invalidate_all().await;
    Json(state.cache.stats())
}
