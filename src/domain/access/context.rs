//! The injectable access context.
//!
//! Navigation and page gating never reach for global state: callers pass an
//! [`AccessContext`] that pairs the current [`SessionState`] with the
//! deployment's [`AccessPolicy`]. Every method is a pure read.

use super::{ModuleKey, PlanKey, SessionState};

/// Deployment-wide access settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessPolicy {
    /// Plan whose holders preview every catalog feature.
    pub trial_plan: PlanKey,
}

impl AccessPolicy {
    pub fn new(trial_plan: PlanKey) -> Self {
        Self { trial_plan }
    }
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self::new(PlanKey::free_trial())
    }
}

/// Session plus policy, borrowed for one evaluation.
#[derive(Debug, Clone, Copy)]
pub struct AccessContext<'a> {
    session: &'a SessionState,
    policy: &'a AccessPolicy,
}

impl<'a> AccessContext<'a> {
    pub fn new(session: &'a SessionState, policy: &'a AccessPolicy) -> Self {
        Self { session, policy }
    }

    pub fn plan_exists(&self, plan: &PlanKey) -> bool {
        self.session.plan_exists(plan)
    }

    pub fn module_exists(&self, module: ModuleKey) -> bool {
        self.session.module_exists(module)
    }

    pub fn is_super_admin(&self) -> bool {
        self.session.is_super_admin()
    }

    /// True when the session holds the policy's trial plan.
    pub fn is_trial(&self) -> bool {
        self.plan_exists(&self.policy.trial_plan)
    }

    /// Navigation inclusion rule: trial sessions see everything, others
    /// see exactly their enabled modules.
    pub fn can_see(&self, module: ModuleKey) -> bool {
        self.is_trial() || self.module_exists(module)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn session(payload: serde_json::Value) -> SessionState {
        SessionState::from_payload(&payload).unwrap()
    }

    #[test]
    fn trial_session_can_see_disabled_modules() {
        let s = session(json!({ "id": "u", "subscribedPlans": ["free-trial"] }));
        let policy = AccessPolicy::default();
        let ctx = AccessContext::new(&s, &policy);

        assert!(ctx.is_trial());
        assert!(!ctx.module_exists(ModuleKey::Billing));
        assert!(ctx.can_see(ModuleKey::Billing));
    }

    #[test]
    fn paid_session_sees_only_enabled_modules() {
        let s = session(json!({
            "id": "u",
            "subscribedPlans": ["fleet-pro"],
            "modules": { "billing": "pro" }
        }));
        let policy = AccessPolicy::default();
        let ctx = AccessContext::new(&s, &policy);

        assert!(!ctx.is_trial());
        assert!(ctx.can_see(ModuleKey::Billing));
        assert!(!ctx.can_see(ModuleKey::Dispatch));
    }

    #[test]
    fn custom_trial_plan_is_honoured() {
        let s = session(json!({ "id": "u", "subscribedPlans": ["preview"] }));
        let default_policy = AccessPolicy::default();
        let custom_policy = AccessPolicy::new(PlanKey::new("preview").unwrap());

        assert!(!AccessContext::new(&s, &default_policy).is_trial());
        assert!(AccessContext::new(&s, &custom_policy).is_trial());
    }

    #[test]
    fn predicates_are_idempotent() {
        let s = session(json!({
            "id": "u",
            "roles": [{ "slug": "super_admin" }],
            "modules": { "dispatch": "basic" }
        }));
        let policy = AccessPolicy::default();
        let ctx = AccessContext::new(&s, &policy);

        assert_eq!(ctx.is_super_admin(), ctx.is_super_admin());
        assert_eq!(
            ctx.module_exists(ModuleKey::Dispatch),
            ctx.module_exists(ModuleKey::Dispatch)
        );
        assert_eq!(ctx.is_trial(), ctx.is_trial());
    }
}
