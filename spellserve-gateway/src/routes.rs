//! Axum route handlers for the spellserve gateway API.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use spellserve_core::{DictionaryAdapter, EndpointCatalog, SuggestionQuery, SuggestionResult};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::debug;

use crate::error::GatewayError;

// ── Shared state ─────────────────────────────────────────────────────────────

/// Read-only state shared by every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    dictionary: Arc<DictionaryAdapter>,
    catalog: Arc<EndpointCatalog>,
}

impl AppState {
    /// Bundle a dictionary with the standard endpoint catalog.
    #[must_use]
    pub fn new(dictionary: DictionaryAdapter) -> Self {
        Self {
            dictionary: Arc::new(dictionary),
            catalog: Arc::new(EndpointCatalog::standard()),
        }
    }
}

// ── Response types ────────────────────────────────────────────────────────────

/// Body of `GET /`.
#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub endpoints: EndpointCatalog,
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router over the given state.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/suggest", get(suggest))
        .route("/suggest/", get(suggest))
        .route("/health", get(health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /health`: liveness probe.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

/// `GET /`: list the available endpoints.
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    Json(CatalogResponse { endpoints: EndpointCatalog::clone(&state.catalog) })
}

/// `GET /suggest?q=<word>`: spelling verdict and suggestions for one word.
///
/// # Errors
/// Returns [`GatewayError::Core`] wrapping a missing-parameter error if `q`
/// is absent or empty; the dictionary is not consulted in that case.
pub async fn suggest(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<SuggestionResult>, GatewayError> {
    let query = SuggestionQuery::from_params(params)?;
    let result = state.dictionary.lookup(&query);
    debug!(
        word = query.word(),
        misspelt = result.misspelt(),
        suggestions = result.suggestions().len(),
        "suggestion lookup"
    );
    Ok(Json(result))
}
