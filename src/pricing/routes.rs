//! HTTP handlers for the quote engine.

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use chrono::Local;
use std::sync::Arc;

use crate::catalog::Region;
use crate::error::Result;
use crate::share::SharePayload;
use crate::AppState;

use super::requests::{CompareQuery, OfferingsQuery, RecommendationsQuery, Selection};
use super::responses::{ClassComparison, DeliveryQuote, Offerings, QuoteResult, Recommendation};
use super::services::QuoteEngine;

/// Routes mounted under `/api/pricing`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/quote", post(quote))
        .route("/delivery/:region", get(delivery))
        .route("/offerings", get(offerings))
        .route("/compare", get(compare))
        .route("/recommendations", get(recommendations))
        .route("/share", post(share))
}

/// Quote handler
pub async fn quote(
    State(state): State<AppState>,
    Json(selection): Json<Selection>,
) -> Result<Json<QuoteResult>> {
    let quote = cached_quote(&state, selection).await?;
    Ok(Json((*quote).clone()))
}

/// Delivery terms for one region code
pub async fn delivery(
    State(state): State<AppState>,
    Path(region): Path<String>,
) -> Json<DeliveryQuote> {
    warn_unknown_region(Some(region.as_str()));
    Json(QuoteEngine::new(&state.tables).delivery_quote(Some(region.as_str())))
}

pub async fn offerings(
    State(state): State<AppState>,
    Query(query): Query<OfferingsQuery>,
) -> Result<Json<Offerings>> {
    let offerings = QuoteEngine::new(&state.tables).offerings(
        query.class,
        query.vehicle_type,
        query.category,
    )?;
    Ok(Json(offerings))
}

pub async fn compare(
    State(state): State<AppState>,
    Query(query): Query<CompareQuery>,
) -> Result<Json<Vec<ClassComparison>>> {
    let rows = QuoteEngine::new(&state.tables).compare_classes(query.category, query.class)?;
    Ok(Json(rows))
}

pub async fn recommendations(
    State(state): State<AppState>,
    Query(query): Query<RecommendationsQuery>,
) -> Json<Vec<Recommendation>> {
    Json(QuoteEngine::new(&state.tables).recommendations(query.category))
}

/// Share link, estimate text and QR code for a selection
pub async fn share(
    State(state): State<AppState>,
    Json(selection): Json<Selection>,
) -> Result<Json<SharePayload>> {
    let quote = cached_quote(&state, selection.clone()).await?;
    let payload = SharePayload::build(
        &state.config.share.base_url,
        &selection,
        &quote,
        Local::now().date_naive(),
    )?;
    Ok(Json(payload))
}

/// Quote through the cache. Results are pure, so a hit equals a recompute.
async fn cached_quote(state: &AppState, selection: Selection) -> Result<Arc<QuoteResult>> {
    warn_unknown_region(selection.delivery_region.as_deref());

    if let Some(cached) = state.cache.quotes.get(&selection).await {
        tracing::debug!("Cache HIT for quote");
        return Ok(cached);
    }

    tracing::debug!("Cache MISS for quote");
    let quote = Arc::new(QuoteEngine::new(&state.tables).compute_quote(&selection)?);
    state.cache.quotes.insert(selection, quote.clone()).await;
    Ok(quote)
}

fn warn_unknown_region(code: Option<&str>) {
    if let Some(code) = code {
        if Region::from_code(code).is_none() {
            tracing::warn!("Unknown region code '{}', quoting delivery as consultation", code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::pricing::PriceTables;
    use std::io::Write;
    use std::sync::Mutex;
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedLogs;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    // ==================== cached_quote ====================

    #[tokio::test]
    async fn test_unknown_region_warns_on_cache_hit_too() {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let state = AppState::new(
            AppConfig::default(),
            PriceTables::embedded().unwrap().clone(),
        );
        let selection = Selection {
            delivery_region: Some("atlantis".to_string()),
            ..Selection::default()
        };

        let first = cached_quote(&state, selection.clone()).await.unwrap();
        let second = cached_quote(&state, selection).await.unwrap();
        assert_eq!(first, second);
        assert!(first.delivery.is_consultation);

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert_eq!(output.matches("Unknown region code 'atlantis'").count(), 2);
    }

    #[tokio::test]
    async fn test_known_region_does_not_warn() {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let state = AppState::new(
            AppConfig::default(),
            PriceTables::embedded().unwrap().clone(),
        );
        let selection = Selection {
            delivery_region: Some("tokyo".to_string()),
            ..Selection::default()
        };
        cached_quote(&state, selection).await.unwrap();

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(!output.contains("Unknown region code"));
    }
}
