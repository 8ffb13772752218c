//! HTTP adapters - REST API implementations.

pub mod access;

use axum::http::{header, HeaderValue, Method};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::ServerConfig;

pub use access::{access_router, AccessAppState};

/// Builds the complete application router with middleware.
pub fn app_router(state: AccessAppState, server: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api", access_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(server.request_timeout()))
                .layer(cors_layer(&server.cors_origins_list())),
        )
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::PUT, Method::DELETE])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::HeaderName::from_static(access::USER_ID_HEADER),
        ]);

    // `AllowOrigin::list` panics on a wildcard
    if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(allowed)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySessionStore;
    use crate::domain::access::AccessPolicy;
    use std::sync::Arc;

    #[test]
    fn app_router_builds_with_default_config() {
        let state =
            AccessAppState::new(Arc::new(InMemorySessionStore::new()), AccessPolicy::default());
        let _router = app_router(state, &ServerConfig::default());
    }

    #[test]
    fn app_router_builds_with_wildcard_origin() {
        let server = ServerConfig {
            cors_origins: Some("*".to_string()),
            ..Default::default()
        };
        assert!(server.validate().is_ok());

        let state =
            AccessAppState::new(Arc::new(InMemorySessionStore::new()), AccessPolicy::default());
        let _router = app_router(state, &server);
    }

    #[test]
    fn cors_layer_treats_wildcard_in_list_as_any() {
        let _layer = cors_layer(&["http://localhost:5173".to_string(), "*".to_string()]);
    }

    #[test]
    fn cors_layer_accepts_configured_origins() {
        let _layer = cors_layer(&["http://localhost:5173".to_string(), "bad\norigin".to_string()]);
    }
}
