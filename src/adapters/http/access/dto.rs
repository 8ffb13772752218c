//! HTTP DTOs (Data Transfer Objects) for access endpoints.
//!
//! The sign-in body is taken as raw JSON and parsed leniently by the domain,
//! so it has no request type here.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::handlers::AccessSummary;
use crate::domain::access::{ModuleKey, ModuleMap, NavTree, RenderDecision, Role};
use crate::ports::SessionRecord;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of the module-update action.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateModulesRequest {
    #[serde(default)]
    pub modules: Value,
}

/// Query string of the navigation endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NavigationParams {
    #[serde(default)]
    pub active_path: Option<String>,
}

/// Query string of the path-based page gate.
#[derive(Debug, Clone, Deserialize)]
pub struct PageGateParams {
    pub path: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// An established session as stored.
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub session_id: String,
    pub user_id: Option<String>,
    pub roles: Vec<Role>,
    pub subscribed_plans: Vec<String>,
    pub modules: ModuleMap,
    /// ISO 8601.
    pub established_at: String,
    /// ISO 8601.
    pub updated_at: String,
}

impl From<SessionRecord> for SessionResponse {
    fn from(record: SessionRecord) -> Self {
        Self {
            session_id: record.id.to_string(),
            user_id: record.state.user_id.map(|id| id.to_string()),
            roles: record.state.roles,
            subscribed_plans: record
                .state
                .subscribed_plans
                .into_iter()
                .map(|plan| plan.to_string())
                .collect(),
            modules: record.state.modules,
            established_at: record.established_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
        }
    }
}

/// Navigation tree for the sidebar.
#[derive(Debug, Clone, Serialize)]
pub struct NavigationResponse {
    pub entries: NavTree,
    pub expanded_group: Option<&'static str>,
}

/// Page gate outcome, e.g. `{ "decision": "show_locked", "feature": "Dispatch" }`.
#[derive(Debug, Clone, Serialize)]
pub struct PageGateResponse {
    #[serde(flatten)]
    pub decision: RenderDecision,
}

/// Access facts of the current session.
#[derive(Debug, Clone, Serialize)]
pub struct AccessSummaryResponse {
    pub session_id: String,
    pub established_at: String,
    pub subscribed_plans: Vec<String>,
    pub modules: ModuleMap,
    pub is_trial: bool,
    pub is_super_admin: bool,
    pub visible_modules: Vec<ModuleKey>,
}

impl From<AccessSummary> for AccessSummaryResponse {
    fn from(summary: AccessSummary) -> Self {
        Self {
            session_id: summary.session_id.to_string(),
            established_at: summary.established_at.to_rfc3339(),
            subscribed_plans: summary.plans,
            modules: summary.modules,
            is_trial: summary.is_trial,
            is_super_admin: summary.is_super_admin,
            visible_modules: summary.visible_modules,
        }
    }
}

/// Error body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}
