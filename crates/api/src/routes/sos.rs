use axum::routing::{get, post};
use axum::Router;

use crate::handlers::sos;
use crate::state::AppState;

/// Routes mounted at `/sos`.
///
/// ```text
/// GET    /                  -> get_sos
/// POST   /confirm           -> confirm_sos
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(sos::get_sos))
        .route("/confirm", post(sos::confirm_sos))
}
