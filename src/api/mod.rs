//! HTTP API for the TripMate service
//!
//! All handlers read from [`AppState`], which is built once at startup
//! and shared behind an [`Arc`].

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::JsonRejection},
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{debug, info, instrument};

use crate::TripMateError;
use crate::catalog::Catalog;
use crate::chat::{ChatAssistant, ChatReply};
use crate::config::AppConfig;
use crate::gateway::PlaceGateway;
use crate::models::{Destination, PlaceDetail, PlaceSummary};

/// Shared, read-only state injected into every handler
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub gateway: PlaceGateway,
    pub assistant: ChatAssistant,
    pub app: AppConfig,
    pub search_limit: usize,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(catalog: Catalog, gateway: PlaceGateway, app: AppConfig, search_limit: usize) -> Self {
        let catalog = Arc::new(catalog);
        let assistant = ChatAssistant::new(catalog.clone(), gateway.clone());
        Self {
            catalog,
            gateway,
            assistant,
            app,
            search_limit,
            started_at: Utc::now(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct StateQuery {
    pub state: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PlaceQuery {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DestinationsResponse {
    pub state: String,
    pub destinations: Vec<Destination>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DestinationsFullResponse {
    pub state: String,
    pub results: Vec<PlaceSummary>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<String>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/version", get(version))
        .route("/search", get(search))
        .route("/destinations", get(destinations))
        .route("/destinations_full", get(destinations_full))
        .route("/place", get(place))
        .route("/chat", post(chat))
        .with_state(state)
}

/// Trimmed, non-blank query parameter or a 400
fn required(value: Option<String>, param: &str) -> Result<String, TripMateError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| {
            TripMateError::validation(format!("Missing required query param: {param}"))
        })
}

async fn index() -> Json<Value> {
    Json(json!({
        "message": "Welcome to TripMate API",
        "available_endpoints": {
            "/health": "Check API health",
            "/version": "Build information",
            "/search?q=Sedona": "Search destination names",
            "/destinations?state=Arizona": "Top destinations for a state",
            "/destinations_full?state=Arizona": "Destinations + compact details",
            "/place?name=Sedona": "Details for a place",
            "/chat": "POST {message, session_id} to chat"
        }
    }))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn version(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "app": state.app.name,
        "version": crate::VERSION,
        "commit": state.app.commit,
        "started_at": state.started_at,
    }))
}

#[instrument(skip(state))]
async fn search(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Json<SearchResponse> {
    let results = query
        .q
        .map(|q| state.catalog.search(&q, state.search_limit))
        .unwrap_or_default();
    Json(SearchResponse { results })
}

#[instrument(skip(state))]
async fn destinations(
    State(state): State<Arc<AppState>>,
    Query(query): Query<StateQuery>,
) -> Result<Json<DestinationsResponse>, TripMateError> {
    let region = required(query.state, "state")?;
    let destinations = state.catalog.lookup(&region).to_vec();
    info!("{} destinations for {}", destinations.len(), region);
    Ok(Json(DestinationsResponse {
        state: region,
        destinations,
    }))
}

#[instrument(skip(state))]
async fn destinations_full(
    State(state): State<Arc<AppState>>,
    Query(query): Query<StateQuery>,
) -> Result<Json<DestinationsFullResponse>, TripMateError> {
    let region = required(query.state, "state")?;
    let names = state.catalog.lookup(&region).iter().map(|d| d.name.as_str());
    let results = state
        .gateway
        .describe_many(names)
        .await
        .into_iter()
        .map(PlaceSummary::from)
        .collect();
    Ok(Json(DestinationsFullResponse {
        state: region,
        results,
    }))
}

#[instrument(skip(state))]
async fn place(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PlaceQuery>,
) -> Result<Json<PlaceDetail>, TripMateError> {
    let name = required(query.name, "name")?;
    Ok(Json(state.gateway.describe(&name).await))
}

#[instrument(skip(state, request), fields(session_id = tracing::field::Empty))]
async fn chat(
    State(state): State<Arc<AppState>>,
    request: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, TripMateError> {
    // An unreadable body is treated like one without a message
    let request = match request {
        Ok(Json(request)) => request,
        Err(rejection) => {
            debug!("Unreadable chat body: {}", rejection);
            return Err(TripMateError::validation("empty_message"));
        }
    };

    let session_id = request
        .session_id
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or("guest");
    tracing::Span::current().record("session_id", session_id);

    let message = request.message.unwrap_or_default();
    if message.trim().is_empty() {
        return Err(TripMateError::validation("empty_message"));
    }

    Ok(Json(state.assistant.reply(&message).await))
}
