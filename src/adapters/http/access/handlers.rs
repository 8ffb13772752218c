//! HTTP handlers for access endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::{FromRequestParts, Json, Path, Query, State};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::Value;
use tracing::error;

use crate::application::handlers::{
    BuildNavigationHandler, BuildNavigationQuery, CheckPageAccessHandler, CheckPageAccessQuery,
    EndSessionCommand, EndSessionHandler, EstablishSessionCommand, EstablishSessionHandler,
    GetAccessSummaryHandler, GetAccessSummaryQuery, PageTarget, UpdateModulesCommand,
    UpdateModulesHandler,
};
use crate::domain::access::{AccessError, AccessPolicy};
use crate::domain::foundation::{ErrorCode, UserId};
use crate::ports::SessionStore;

use super::dto::{
    AccessSummaryResponse, ErrorResponse, NavigationParams, NavigationResponse, PageGateParams,
    PageGateResponse, SessionResponse, UpdateModulesRequest,
};

/// Header carrying the authenticated user id.
pub const USER_ID_HEADER: &str = "x-user-id";

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state: the session store plus the access policy.
#[derive(Clone)]
pub struct AccessAppState {
    pub session_store: Arc<dyn SessionStore>,
    pub policy: Arc<AccessPolicy>,
    /// Expose infrastructure error messages to callers.
    pub verbose_errors: bool,
}

impl AccessAppState {
    pub fn new(session_store: Arc<dyn SessionStore>, policy: AccessPolicy) -> Self {
        Self {
            session_store,
            policy: Arc::new(policy),
            verbose_errors: false,
        }
    }

    pub fn with_verbose_errors(mut self, verbose: bool) -> Self {
        self.verbose_errors = verbose;
        self
    }

    pub fn establish_session_handler(&self) -> EstablishSessionHandler {
        EstablishSessionHandler::new(self.session_store.clone())
    }

    pub fn end_session_handler(&self) -> EndSessionHandler {
        EndSessionHandler::new(self.session_store.clone())
    }

    pub fn update_modules_handler(&self) -> UpdateModulesHandler {
        UpdateModulesHandler::new(self.session_store.clone())
    }

    pub fn navigation_handler(&self) -> BuildNavigationHandler {
        BuildNavigationHandler::new(self.session_store.clone(), self.policy.clone())
    }

    pub fn page_access_handler(&self) -> CheckPageAccessHandler {
        CheckPageAccessHandler::new(self.session_store.clone(), self.policy.clone())
    }

    pub fn access_summary_handler(&self) -> GetAccessSummaryHandler {
        GetAccessSummaryHandler::new(self.session_store.clone(), self.policy.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// User Context
// ════════════════════════════════════════════════════════════════════════════════

/// User identified by the gateway in front of this service.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Rejection type for AuthenticatedUser extraction.
pub struct AuthenticationRequired;

impl IntoResponse for AuthenticationRequired {
    fn into_response(self) -> Response {
        let error = ErrorResponse::new(
            ErrorCode::AuthenticationRequired.to_string(),
            "Authentication is required",
        );
        (StatusCode::UNAUTHORIZED, Json(error)).into_response()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AuthenticationRequired;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| UserId::new(s).ok())
            .ok_or(AuthenticationRequired)?;

        Ok(AuthenticatedUser { user_id })
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Session lifecycle
// ════════════════════════════════════════════════════════════════════════════════

/// PUT /api/session - Establish (or re-establish) the caller's session from the auth payload
pub async fn establish_session(
    State(state): State<AccessAppState>,
    user: AuthenticatedUser,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, AccessApiError> {
    let result = state
        .establish_session_handler()
        .handle(EstablishSessionCommand {
            user_id: user.user_id,
            payload,
        })
        .await
        .map_err(|e| state.api_error(e))?;

    Ok(Json(SessionResponse::from(result.record)))
}

/// DELETE /api/session - Log out
pub async fn end_session(
    State(state): State<AccessAppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, AccessApiError> {
    state
        .end_session_handler()
        .handle(EndSessionCommand {
            user_id: user.user_id,
        })
        .await
        .map_err(|e| state.api_error(e))?;

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/session/modules - Replace the session's module map
pub async fn update_modules(
    State(state): State<AccessAppState>,
    user: AuthenticatedUser,
    Json(request): Json<UpdateModulesRequest>,
) -> Result<impl IntoResponse, AccessApiError> {
    let result = state
        .update_modules_handler()
        .handle(UpdateModulesCommand {
            user_id: user.user_id,
            modules: request.modules,
        })
        .await
        .map_err(|e| state.api_error(e))?;

    Ok(Json(SessionResponse::from(result.record)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Access queries
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/session/access - Access facts of the current session
pub async fn get_access_summary(
    State(state): State<AccessAppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, AccessApiError> {
    let summary = state
        .access_summary_handler()
        .handle(GetAccessSummaryQuery {
            user_id: user.user_id,
        })
        .await
        .map_err(|e| state.api_error(e))?;

    Ok(Json(AccessSummaryResponse::from(summary)))
}

/// GET /api/navigation - Sidebar tree for the current session
pub async fn get_navigation(
    State(state): State<AccessAppState>,
    user: AuthenticatedUser,
    Query(params): Query<NavigationParams>,
) -> Result<impl IntoResponse, AccessApiError> {
    let result = state
        .navigation_handler()
        .handle(BuildNavigationQuery {
            user_id: user.user_id,
            active_path: params.active_path,
        })
        .await
        .map_err(|e| state.api_error(e))?;

    Ok(Json(NavigationResponse {
        entries: result.tree,
        expanded_group: result.expanded_group,
    }))
}

/// GET /api/pages/:module/gate - Page gate by module key
pub async fn gate_module(
    State(state): State<AccessAppState>,
    user: AuthenticatedUser,
    Path(module): Path<String>,
) -> Result<impl IntoResponse, AccessApiError> {
    gate(&state, user, PageTarget::Module(module)).await
}

/// GET /api/pages/gate?path= - Page gate by routed path
pub async fn gate_path(
    State(state): State<AccessAppState>,
    user: AuthenticatedUser,
    Query(params): Query<PageGateParams>,
) -> Result<impl IntoResponse, AccessApiError> {
    gate(&state, user, PageTarget::Path(params.path)).await
}

async fn gate(
    state: &AccessAppState,
    user: AuthenticatedUser,
    target: PageTarget,
) -> Result<Json<PageGateResponse>, AccessApiError> {
    let result = state
        .page_access_handler()
        .handle(CheckPageAccessQuery {
            user_id: user.user_id,
            target,
        })
        .await
        .map_err(|e| state.api_error(e))?;

    Ok(Json(PageGateResponse {
        decision: result.decision,
    }))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts access errors to HTTP responses.
pub struct AccessApiError {
    error: AccessError,
    verbose: bool,
}

impl AccessAppState {
    fn api_error(&self, error: AccessError) -> AccessApiError {
        AccessApiError {
            error,
            verbose: self.verbose_errors,
        }
    }
}

impl From<AccessError> for AccessApiError {
    fn from(error: AccessError) -> Self {
        Self {
            error,
            verbose: false,
        }
    }
}

impl IntoResponse for AccessApiError {
    fn into_response(self) -> Response {
        let status = match &self.error {
            AccessError::SessionNotFound(_) => StatusCode::NOT_FOUND,
            AccessError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
            AccessError::IdentityMismatch { .. } => StatusCode::FORBIDDEN,
            AccessError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = match &self.error {
            AccessError::Infrastructure(msg) => {
                error!(error = %msg, "access request failed");
                if self.verbose {
                    self.error.to_string()
                } else {
                    "Internal server error".to_string()
                }
            }
            other => other.to_string(),
        };

        let body = ErrorResponse::new(self.error.code().to_string(), message);
        (status, Json(body)).into_response()
    }
}
