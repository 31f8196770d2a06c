// NovaNest - REST API (Axum)
//
// Every handler is a total function over the in-memory store except the
// by-id lookups, which fail with a 404 carrying `{"error": "..."}`.

use crate::error::{Error, Result};
use crate::models::{Alert, Device, Resident};
use crate::store::FacilityRepository;
use crate::summary::{summarize, Summary};
use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub const SERVICE_NAME: &str = "NovaNest-backend";

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn FacilityRepository>,
    pub rate_per_kwh: f64,
}

impl AppState {
    pub fn new(repo: Arc<dyn FacilityRepository>, rate_per_kwh: f64) -> Self {
        Self { repo, rate_per_kwh }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    /// RFC 3339 UTC timestamp
    pub time: String,
}

// ============================================================================
// Path parsing
// ============================================================================

/// Parse a numeric path segment. Malformed input is reported through
/// `invalid` rather than folded into a lookup miss here; callers decide.
fn parse_id(raw: &str, invalid: fn(String) -> Error) -> Result<u32> {
    raw.parse::<u32>().map_err(|_| invalid(raw.to_string()))
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: SERVICE_NAME,
        time: chrono::Utc::now().to_rfc3339(),
    })
}

/// GET /api/residents - All residents in insertion order
async fn list_residents(State(state): State<AppState>) -> Json<Vec<Resident>> {
    Json(state.repo.residents())
}

/// GET /api/residents/:id - One resident, 404 when absent or malformed
async fn get_resident(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Resident>> {
    let id = parse_id(&raw_id, Error::InvalidResidentId)?;

    state
        .repo
        .resident(id)
        .map(Json)
        .ok_or(Error::ResidentNotFound(id))
}

/// GET /api/devices - All devices
async fn list_devices(State(state): State<AppState>) -> Json<Vec<Device>> {
    Json(state.repo.devices())
}

/// GET /api/devices/:id
async fn get_device(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Device>> {
    match state.repo.device(&id) {
        Some(device) => Ok(Json(device)),
        None => Err(Error::DeviceNotFound(id)),
    }
}

/// GET /api/alerts - All alerts
async fn list_alerts(State(state): State<AppState>) -> Json<Vec<Alert>> {
    Json(state.repo.alerts())
}

/// GET /api/alerts/:id
async fn get_alert(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Alert>> {
    let id = parse_id(&raw_id, Error::InvalidAlertId)?;

    state.repo.alert(id).map(Json).ok_or(Error::AlertNotFound(id))
}

/// GET /api/summary - Facility-wide totals, recomputed per request
async fn get_summary(State(state): State<AppState>) -> Json<Summary> {
    Json(summarize(state.repo.as_ref(), state.rate_per_kwh))
}

// ============================================================================
// Routers
// ============================================================================

/// Routes mounted under `/api`
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/residents", get(list_residents))
        .route("/residents/:id", get(get_resident))
        .route("/devices", get(list_devices))
        .route("/devices/:id", get(get_device))
        .route("/alerts", get(list_alerts))
        .route("/alerts/:id", get(get_alert))
        .route("/summary", get(get_summary))
        .with_state(state)
}

/// Full application: `/api` routes, permissive CORS, request tracing
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes(state))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
