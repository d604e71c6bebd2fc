use axum::routing::get;
use axum::Router;

use crate::handlers::readings;
use crate::state::AppState;

/// Routes mounted at `/readings`.
///
/// ```text
/// GET    /                  -> list_readings
/// GET    /summary           -> readings_summary
/// GET    /{id}/history      -> reading_history
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(readings::list_readings))
        .route("/summary", get(readings::readings_summary))
        .route("/{id}/history", get(readings::reading_history))
}
