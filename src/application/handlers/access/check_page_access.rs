//! CheckPageAccessHandler - Query handler for the page gate.

use std::sync::Arc;
use tracing::debug;

use crate::domain::access::{
    guard, guard_path, AccessContext, AccessError, AccessPolicy, ModuleKey, RenderDecision,
};
use crate::domain::foundation::UserId;
use crate::ports::SessionStore;

/// Which page is being rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageTarget {
    /// By raw module key, as sent by the page component.
    Module(String),
    /// By routed path.
    Path(String),
}

#[derive(Debug, Clone)]
pub struct CheckPageAccessQuery {
    pub user_id: UserId,
    pub target: PageTarget,
}

#[derive(Debug, Clone)]
pub struct CheckPageAccessResult {
    pub decision: RenderDecision,
}

/// Evaluates the page gate against the user's current session.
///
/// A module key this build does not know is treated like a disabled module
/// on a non-trial session: the page is not found.
pub struct CheckPageAccessHandler {
    store: Arc<dyn SessionStore>,
    policy: Arc<AccessPolicy>,
}

impl CheckPageAccessHandler {
    pub fn new(store: Arc<dyn SessionStore>, policy: Arc<AccessPolicy>) -> Self {
        Self { store, policy }
    }

    pub async fn handle(
        &self,
        query: CheckPageAccessQuery,
    ) -> Result<CheckPageAccessResult, AccessError> {
        let session = self.store.load_state(&query.user_id).await?;
        let ctx = AccessContext::new(&session, &self.policy);

        let decision = match &query.target {
            PageTarget::Module(key) => match ModuleKey::lookup(key) {
                Some(module) => guard(&ctx, module),
                None => {
                    debug!(module = %key, "unknown module key");
                    RenderDecision::ShowNotFound
                }
            },
            PageTarget::Path(path) => guard_path(&ctx, path),
        };

        debug!(user_id = %query.user_id, target = ?query.target, ?decision, "page gate evaluated");

        Ok(CheckPageAccessResult { decision })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySessionStore;
    use crate::domain::access::SessionState;
    use crate::ports::SessionRecord;
    use serde_json::json;

    async fn decide(payload: serde_json::Value, target: PageTarget) -> RenderDecision {
        let store = Arc::new(InMemorySessionStore::new());
        let state = SessionState::from_payload(&payload).unwrap();
        store.replace(SessionRecord::establish(state)).await.unwrap();

        let handler = CheckPageAccessHandler::new(store, Arc::new(AccessPolicy::default()));
        handler
            .handle(CheckPageAccessQuery {
                user_id: UserId::new("u1").unwrap(),
                target,
            })
            .await
            .unwrap()
            .decision
    }

    fn module(key: &str) -> PageTarget {
        PageTarget::Module(key.to_string())
    }

    #[tokio::test]
    async fn dispatch_scenarios() {
        let proceed = decide(
            json!({ "id": "u1", "modules": { "dispatch": "basic" }, "subscribedPlans": [] }),
            module("dispatch"),
        )
        .await;
        let locked = decide(
            json!({ "id": "u1", "modules": {}, "subscribedPlans": ["free-trial"] }),
            module("dispatch"),
        )
        .await;
        let not_found = decide(
            json!({ "id": "u1", "modules": {}, "subscribedPlans": [] }),
            module("dispatch"),
        )
        .await;

        assert_eq!(proceed, RenderDecision::Proceed);
        assert_eq!(locked, RenderDecision::locked(ModuleKey::Dispatch));
        assert_eq!(not_found, RenderDecision::ShowNotFound);
    }

    #[tokio::test]
    async fn unknown_module_key_is_not_found() {
        let decision = decide(
            json!({ "id": "u1", "subscribedPlans": ["free-trial"], "modules": { "fleet_boats": "" } }),
            module("fleet_boats"),
        )
        .await;
        assert_eq!(decision, RenderDecision::ShowNotFound);
    }

    #[tokio::test]
    async fn path_target_uses_route_table() {
        let decision = decide(
            json!({ "id": "u1", "subscribedPlans": ["free-trial"] }),
            PageTarget::Path("/insurance/claims/9".to_string()),
        )
        .await;
        assert_eq!(decision, RenderDecision::locked(ModuleKey::InsuranceClaims));
    }

    #[tokio::test]
    async fn signed_out_user_sees_not_found() {
        let handler = CheckPageAccessHandler::new(
            Arc::new(InMemorySessionStore::new()),
            Arc::new(AccessPolicy::default()),
        );
        let result = handler
            .handle(CheckPageAccessQuery {
                user_id: UserId::new("ghost").unwrap(),
                target: module("dispatch"),
            })
            .await
            .unwrap();
        assert_eq!(result.decision, RenderDecision::ShowNotFound);
    }
}
