//! GetAccessSummaryHandler - Query handler for the session's access facts.

use std::sync::Arc;

use crate::domain::access::{
    AccessContext, AccessError, AccessPolicy, ModuleKey, ModuleMap, NavigationBuilder,
};
use crate::domain::foundation::{SessionId, Timestamp, UserId};
use crate::ports::SessionStore;

#[derive(Debug, Clone)]
pub struct GetAccessSummaryQuery {
    pub user_id: UserId,
}

/// Everything the dashboard shell needs to know about the session at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessSummary {
    pub session_id: SessionId,
    pub established_at: Timestamp,
    pub plans: Vec<String>,
    pub modules: ModuleMap,
    pub is_trial: bool,
    pub is_super_admin: bool,
    /// Modules whose navigation entries are listed, in display order.
    pub visible_modules: Vec<ModuleKey>,
}

pub struct GetAccessSummaryHandler {
    store: Arc<dyn SessionStore>,
    policy: Arc<AccessPolicy>,
}

impl GetAccessSummaryHandler {
    pub fn new(store: Arc<dyn SessionStore>, policy: Arc<AccessPolicy>) -> Self {
        Self { store, policy }
    }

    pub async fn handle(&self, query: GetAccessSummaryQuery) -> Result<AccessSummary, AccessError> {
        let Some(record) = self.store.find(&query.user_id).await? else {
            return Err(AccessError::session_not_found(query.user_id));
        };

        let ctx = AccessContext::new(&record.state, &self.policy);
        let visible_modules = NavigationBuilder::new().visible_modules(&ctx);

        Ok(AccessSummary {
            session_id: record.id,
            established_at: record.established_at,
            plans: record
                .state
                .subscribed_plans
                .iter()
                .map(|plan| plan.as_str().to_string())
                .collect(),
            is_trial: ctx.is_trial(),
            is_super_admin: ctx.is_super_admin(),
            visible_modules,
            modules: record.state.modules.clone(),
        })
    }
}
