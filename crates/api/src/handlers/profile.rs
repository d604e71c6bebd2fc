//! Handlers for the medical profile.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use beacon_core::profile::{ProfileList, ProfilePatch};
use serde::Deserialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/profile
pub async fn get_profile(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let profile = state.store.profile().await?;
    Ok(Json(DataResponse { data: profile }))
}

/// PATCH /api/v1/profile
///
/// Shallow merge: fields present in the body replace the stored ones.
pub async fn update_profile(
    State(state): State<AppState>,
    Json(patch): Json<ProfilePatch>,
) -> AppResult<impl IntoResponse> {
    let profile = state.store.update_profile(patch).await?;
    Ok(Json(DataResponse { data: profile }))
}

#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    pub list: ProfileList,
    pub item: String,
}

/// POST /api/v1/profile/items
///
/// Appends to `allergies`, `medications` or `conditions`. Blank items are
/// ignored; the current profile is returned either way.
pub async fn add_item(
    State(state): State<AppState>,
    Json(input): Json<AddItemRequest>,
) -> AppResult<impl IntoResponse> {
    let profile = state.store.add_profile_item(input.list, &input.item).await?;
    Ok(Json(DataResponse { data: profile }))
}

/// DELETE /api/v1/profile/items/{list}/{index}
pub async fn remove_item(
    State(state): State<AppState>,
    Path((list, index)): Path<(ProfileList, usize)>,
) -> AppResult<impl IntoResponse> {
    let profile = state.store.remove_profile_item(list, index).await?;
    Ok(Json(DataResponse { data: profile }))
}
