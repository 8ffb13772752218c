//! Page gate.
//!
//! Evaluated from scratch at the top of every page render; nothing is
//! remembered between evaluations beyond what the session holds.

use serde::Serialize;

use super::catalog::{route_for_path, PageAccess};
use super::{AccessContext, ModuleKey};

/// What a page should render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum RenderDecision {
    /// Render the page body.
    Proceed,
    /// Render the locked-feature upsell for a trial session.
    ShowLocked { feature: String },
    /// Render the generic not-found page.
    ShowNotFound,
}

impl RenderDecision {
    pub fn is_proceed(&self) -> bool {
        matches!(self, RenderDecision::Proceed)
    }

    pub fn locked(module: ModuleKey) -> Self {
        RenderDecision::ShowLocked {
            feature: module.display_name().to_string(),
        }
    }
}

/// Decides how the page owned by `module` renders.
pub fn guard(ctx: &AccessContext<'_>, module: ModuleKey) -> RenderDecision {
    if ctx.module_exists(module) {
        RenderDecision::Proceed
    } else if ctx.is_trial() {
        RenderDecision::locked(module)
    } else {
        RenderDecision::ShowNotFound
    }
}

/// Decides how the page routed at `path` renders.
///
/// Unknown paths render not-found. Super-admin pages have no locked
/// preview: they either render or are not found.
pub fn guard_path(ctx: &AccessContext<'_>, path: &str) -> RenderDecision {
    match route_for_path(path).map(|route| route.access) {
        Some(PageAccess::Module(module)) => guard(ctx, module),
        Some(PageAccess::SuperAdmin) if ctx.is_super_admin() => RenderDecision::Proceed,
        Some(PageAccess::SuperAdmin) | None => RenderDecision::ShowNotFound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::access::{AccessPolicy, SessionState};
    use serde_json::json;

    fn decide(payload: serde_json::Value, module: ModuleKey) -> RenderDecision {
        let session = SessionState::from_payload(&payload).unwrap();
        let policy = AccessPolicy::default();
        guard(&AccessContext::new(&session, &policy), module)
    }

    fn decide_path(payload: serde_json::Value, path: &str) -> RenderDecision {
        let session = SessionState::from_payload(&payload).unwrap();
        let policy = AccessPolicy::default();
        guard_path(&AccessContext::new(&session, &policy), path)
    }

    #[test]
    fn enabled_module_proceeds() {
        let decision = decide(
            json!({ "id": "u", "modules": { "dispatch": "basic" }, "subscribedPlans": [] }),
            ModuleKey::Dispatch,
        );
        assert_eq!(decision, RenderDecision::Proceed);
    }

    #[test]
    fn trial_session_sees_locked_feature() {
        let decision = decide(
            json!({ "id": "u", "modules": {}, "subscribedPlans": ["free-trial"] }),
            ModuleKey::Dispatch,
        );
        assert_eq!(
            decision,
            RenderDecision::ShowLocked {
                feature: "Dispatch".to_string()
            }
        );
    }

    #[test]
    fn other_sessions_see_not_found() {
        let decision = decide(
            json!({ "id": "u", "modules": {}, "subscribedPlans": [] }),
            ModuleKey::Dispatch,
        );
        assert_eq!(decision, RenderDecision::ShowNotFound);
    }

    #[test]
    fn enabled_module_wins_over_trial() {
        let decision = decide(
            json!({ "id": "u", "modules": { "billing_invoices": "" }, "subscribedPlans": ["free-trial"] }),
            ModuleKey::BillingInvoices,
        );
        assert!(decision.is_proceed());
    }

    #[test]
    fn locked_uses_sub_feature_name() {
        let decision = decide(
            json!({ "id": "u", "subscribedPlans": ["free-trial"] }),
            ModuleKey::MaintenanceWorkOrders,
        );
        assert_eq!(decision, RenderDecision::locked(ModuleKey::MaintenanceWorkOrders));
    }

    #[test]
    fn path_gate_resolves_detail_route() {
        let decision = decide_path(
            json!({ "id": "u", "modules": { "fleet_vehicles": "pro" } }),
            "/fleet/vehicles/42",
        );
        assert!(decision.is_proceed());
    }

    #[test]
    fn unknown_path_is_not_found_even_for_trial() {
        let decision = decide_path(json!({ "id": "u", "subscribedPlans": ["free-trial"] }), "/secret");
        assert_eq!(decision, RenderDecision::ShowNotFound);
    }

    #[test]
    fn admin_page_requires_super_admin() {
        let admin = decide_path(json!({ "id": "u", "roles": [{ "slug": "super_admin" }] }), "/admin/plans");
        let trial = decide_path(json!({ "id": "u", "subscribedPlans": ["free-trial"] }), "/admin/plans");

        assert!(admin.is_proceed());
        assert_eq!(trial, RenderDecision::ShowNotFound);
    }

    #[test]
    fn decision_serializes_with_tag() {
        let json = serde_json::to_value(RenderDecision::locked(ModuleKey::Dispatch)).unwrap();
        assert_eq!(json, json!({ "decision": "show_locked", "feature": "Dispatch" }));

        let json = serde_json::to_value(RenderDecision::ShowNotFound).unwrap();
        assert_eq!(json, json!({ "decision": "show_not_found" }));
    }
}
