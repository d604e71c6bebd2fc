//! Handlers for emergency contacts.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use beacon_core::contacts::NewContact;
use beacon_core::error::CoreError;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/contacts
pub async fn list_contacts(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let contacts = state.store.contacts().await?;
    Ok(Json(DataResponse { data: contacts }))
}

/// POST /api/v1/contacts
///
/// Returns 201 with the new contact. Input without a name or phone is
/// ignored and answered with 200 and `data: null`.
pub async fn create_contact(
    State(state): State<AppState>,
    Json(input): Json<NewContact>,
) -> AppResult<impl IntoResponse> {
    let created = state.store.add_contact(input).await?;
    let status = if created.is_some() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(DataResponse { data: created })))
}

/// DELETE /api/v1/contacts/{id}
pub async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    if state.store.remove_contact(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "contact",
            id,
        }))
    }
}
