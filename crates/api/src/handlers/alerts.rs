use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::query::LimitParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/alerts?limit=N
///
/// All alerts newest first, optionally truncated to `limit`.
pub async fn list_alerts(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<impl IntoResponse> {
    let alerts = state.store.alerts_newest_first(params.limit).await?;
    Ok(Json(DataResponse { data: alerts }))
}
