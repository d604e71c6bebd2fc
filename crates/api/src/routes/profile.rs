use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::profile;
use crate::state::AppState;

/// Routes mounted at `/profile`.
///
/// ```text
/// GET    /                      -> get_profile
/// PATCH  /                      -> update_profile
/// POST   /items                 -> add_item
/// DELETE /items/{list}/{index}  -> remove_item
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(profile::get_profile).patch(profile::update_profile))
        .route("/items", post(profile::add_item))
        .route("/items/{list}/{index}", delete(profile::remove_item))
}
