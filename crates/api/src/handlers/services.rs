use axum::response::IntoResponse;
use axum::Json;
use beacon_core::services;

use crate::response::DataResponse;

/// GET /api/v1/emergency-services
pub async fn list_services() -> impl IntoResponse {
    Json(DataResponse {
        data: services::directory(),
    })
}
