//! Handlers for vital readings and the dashboard summary.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::query::LimitParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/readings
pub async fn list_readings(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let readings = state.store.readings().await?;
    Ok(Json(DataResponse { data: readings }))
}

/// GET /api/v1/readings/summary
///
/// Status counts, the unread alert badge, the SOS flag and the most recent
/// alerts, newest first, all from one snapshot.
pub async fn readings_summary(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let dashboard = state.store.dashboard().await?;
    Ok(Json(DataResponse { data: dashboard }))
}

/// GET /api/v1/readings/{id}/history?limit=N
///
/// Recent samples of one reading, oldest first, for trend charts.
pub async fn reading_history(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<LimitParams>,
) -> AppResult<impl IntoResponse> {
    let points = state.store.history(&id, params.limit).await?;
    Ok(Json(DataResponse { data: points }))
}
