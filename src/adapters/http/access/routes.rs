//! Axum router configuration for access endpoints.

use axum::{
    routing::{get, put},
    Router,
};

use super::handlers::{
    end_session, establish_session, gate_module, gate_path, get_access_summary, get_navigation,
    update_modules, AccessAppState,
};

/// Session lifecycle routes.
///
/// # Routes
/// - `PUT /` - Establish session from the auth payload
/// - `DELETE /` - End session
/// - `PUT /modules` - Replace the module map
/// - `GET /access` - Access summary
pub fn session_routes() -> Router<AccessAppState> {
    Router::new()
        .route("/", put(establish_session).delete(end_session))
        .route("/modules", put(update_modules))
        .route("/access", get(get_access_summary))
}

/// Page gate routes.
///
/// # Routes
/// - `GET /gate?path=` - Gate by routed path
/// - `GET /:module/gate` - Gate by module key
pub fn page_routes() -> Router<AccessAppState> {
    Router::new()
        .route("/gate", get(gate_path))
        .route("/:module/gate", get(gate_module))
}

/// Complete access router, suitable for mounting at `/api`.
pub fn access_router() -> Router<AccessAppState> {
    Router::new()
        .nest("/session", session_routes())
        .route("/navigation", get(get_navigation))
        .nest("/pages", page_routes())
}
