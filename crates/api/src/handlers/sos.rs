//! Handlers for the SOS button.
//!
//! The button is a two-step interaction: `GET /sos` returns the dialog for
//! the current state, `POST /sos/confirm` commits it. Confirming an action
//! the current state does not offer is a 409.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use beacon_core::alert::Alert;
use beacon_core::notification::Toast;
use beacon_core::sos::{SosAction, SosOutcome};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/sos
///
/// The state and its dialog, read together.
pub async fn get_sos(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let status = state.store.sos_status().await?;
    Ok(Json(DataResponse { data: status }))
}

#[derive(Debug, Deserialize)]
pub struct ConfirmSosRequest {
    pub action: SosAction,
}

/// Result of a committed SOS confirmation.
#[derive(Debug, Serialize)]
pub struct SosConfirmation {
    pub active: bool,
    /// The appended SOS alert, on activation.
    pub alert: Option<Alert>,
    pub toast: Toast,
}

/// POST /api/v1/sos/confirm
pub async fn confirm_sos(
    State(state): State<AppState>,
    Json(input): Json<ConfirmSosRequest>,
) -> AppResult<impl IntoResponse> {
    let confirmation = match state.store.confirm_sos(input.action).await? {
        SosOutcome::Activated { alert, toast } => SosConfirmation {
            active: true,
            alert: Some(alert),
            toast,
        },
        SosOutcome::Cancelled { toast } => SosConfirmation {
            active: false,
            alert: None,
            toast,
        },
    };
    Ok(Json(DataResponse { data: confirmation }))
}
