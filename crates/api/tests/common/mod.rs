#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use beacon_api::config::ServerConfig;
use beacon_api::router::build_app_router;
use beacon_api::state::AppState;
use beacon_api::ws::WsManager;
use beacon_events::{EventBus, TracingNotifier};
use beacon_monitor::{MonitorConfig, SensorStore, StoreHandle};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 5,
    }
}

/// A running store plus the router built on top of it.
pub struct TestApp {
    pub router: Router,
    pub store: SensorStore,
    pub handle: StoreHandle,
    pub event_bus: Arc<EventBus>,
    pub ws_manager: Arc<WsManager>,
}

impl TestApp {
    /// A fresh clone of the router for one `oneshot` call.
    pub fn app(&self) -> Router {
        self.router.clone()
    }
}

/// Build the full application router with all middleware layers.
///
/// The simulator interval is an hour so ticks never interfere; tests drive
/// readings through [`StoreHandle::record_value`].
pub fn build_test_app() -> TestApp {
    let config = test_config();
    let event_bus = Arc::new(EventBus::default());
    let ws_manager = Arc::new(WsManager::new());

    let monitor_config = MonitorConfig {
        tick_interval: Duration::from_secs(3600),
        seed: Some(42),
        ..Default::default()
    };
    let store = SensorStore::start(
        monitor_config,
        Arc::new(TracingNotifier),
        Arc::clone(&event_bus),
    );
    let handle = store.handle();

    let state = AppState {
        config: Arc::new(config.clone()),
        store: handle.clone(),
        ws_manager: Arc::clone(&ws_manager),
        event_bus: Arc::clone(&event_bus),
    };

    TestApp {
        router: build_app_router(state, &config),
        store,
        handle,
        event_bus,
        ws_manager,
    }
}

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(body)).await
}

/// Send a PATCH request with a JSON body.
pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PATCH, uri, Some(body)).await
}

/// Send a DELETE request.
pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
