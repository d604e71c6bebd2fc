pub mod alerts;
pub mod contacts;
pub mod health;
pub mod profile;
pub mod readings;
pub mod services;
pub mod sos;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;
use crate::ws;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /ws                                   WebSocket live feed
///
/// /readings                             list readings (GET)
/// /readings/summary                     dashboard summary (GET)
///
/// /alerts                               newest first, ?limit= (GET)
///
/// /sos                                  state and prompt (GET)
/// /sos/confirm                          commit a prompt (POST)
///
/// /contacts                             list, create (GET, POST)
/// /contacts/{id}                        remove (DELETE)
///
/// /profile                              get, merge (GET, PATCH)
/// /profile/items                        append list item (POST)
/// /profile/items/{list}/{index}         remove list item (DELETE)
///
/// /emergency-services                   static directory (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/ws", get(ws::ws_handler))
        .nest("/readings", readings::router())
        .nest("/alerts", alerts::router())
        .nest("/sos", sos::router())
        .nest("/contacts", contacts::router())
        .nest("/profile", profile::router())
        .nest("/emergency-services", services::router())
}
