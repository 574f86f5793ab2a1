//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
};
use uuid::Uuid;

use crate::directions;
use crate::geocode::PlaceSearch;
use crate::store::StoreError;
use crate::toll::TollAggregator;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/places/search", get(search_places))
        .route("/api/route/geometry", post(route_geometry))
        .route("/api/tolls/calculate", post(calculate_tolls))
        .route("/api/tolls/saved", get(list_saved).post(save_toll))
        .route("/api/tolls/saved/:id", delete(delete_saved))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Search for candidate locations by free text.
///
/// Provider failure degrades to an empty result list, never an error.
///
/// Each request is a single already-settled query, so no debouncing
/// happens here; keystroke pacing belongs to the interactive caller. An
/// in-process caller driving this per keystroke should go through
/// [`SearchDebouncer`](crate::geocode::SearchDebouncer) instead.
async fn search_places(
    State(state): State<AppState>,
    Query(req): Query<PlaceSearchRequest>,
) -> Json<PlaceSearchResponse> {
    let reference = req.reference();

    let candidates = match state.geocoder.search(&req.q, reference).await {
        Ok(candidates) => candidates,
        Err(e) => {
            tracing::warn!(query = %req.q, error = %e, "place search failed; returning no results");
            Vec::new()
        }
    };

    let results = candidates
        .iter()
        .map(|c| PlaceResult::from_candidate(c, reference.as_ref()))
        .collect();

    Json(PlaceSearchResponse { results })
}

/// Rebuild the drawable route geometry for the submitted stops.
async fn route_geometry(
    State(state): State<AppState>,
    Json(req): Json<TripRequest>,
) -> Json<GeometryResponse> {
    let stops = req.valid_stops();
    let geometry = directions::rebuild(state.directions.as_ref(), &stops).await;

    Json(GeometryResponse {
        polylines: geometry.polylines.into_iter().map(|p| p.points).collect(),
        total_distance_m: geometry.total_distance_m,
        total_duration_secs: geometry.total_duration_secs,
    })
}

/// Price the submitted trip for both vehicle classes.
///
/// Fewer than two valid stops yields the zeroed empty result, matching the
/// aggregation contract; it is not an error.
async fn calculate_tolls(
    State(state): State<AppState>,
    Json(req): Json<TripRequest>,
) -> Json<TollCalcResponse> {
    let stops = req.valid_stops();

    let aggregator = TollAggregator::new(state.tolls.as_ref());
    let (summary, legs) = aggregator.price_trip(&stops).await;

    Json(TollCalcResponse::new(summary, legs, &stops))
}

/// List every saved toll.
async fn list_saved(State(state): State<AppState>) -> Json<SavedTollListResponse> {
    let store = state.store.lock().await;
    let tolls = store.list().iter().map(SavedTollResult::from).collect();
    Json(SavedTollListResponse { tolls })
}

/// Save a calculated toll, or update the one with the same id in place.
async fn save_toll(
    State(state): State<AppState>,
    Json(req): Json<SaveTollRequest>,
) -> Result<Json<SavedTollResult>, AppError> {
    let toll = req.into_saved_toll();
    let id = toll.id;

    let mut store = state.store.lock().await;
    store.save_or_update(toll)?;

    // Read back the stored record so the response reflects what persisted
    let stored = store.get(&id).ok_or(AppError::Internal {
        message: "saved toll vanished after write".into(),
    })?;

    Ok(Json(SavedTollResult::from(stored)))
}

/// Delete a saved toll. Deleting an unknown id reports `deleted: false`
/// rather than failing.
async fn delete_saved(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>, AppError> {
    let mut store = state.store.lock().await;
    let deleted = store.delete(&id)?;
    Ok(Json(DeleteResponse { deleted }))
}

/// Application error for HTTP responses.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message.clone()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        tracing::warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
