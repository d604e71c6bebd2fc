use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::contacts;
use crate::state::AppState;

/// Routes mounted at `/contacts`.
///
/// ```text
/// GET    /                  -> list_contacts
/// POST   /                  -> create_contact
/// DELETE /{id}              -> delete_contact
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(contacts::list_contacts).post(contacts::create_contact),
        )
        .route("/{id}", delete(contacts::delete_contact))
}
