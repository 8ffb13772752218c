//! UpdateModulesHandler - Command handler for the module-update action.

use serde_json::Value;
use std::sync::Arc;
use tracing::info;

use crate::domain::access::{parse_modules, AccessError};
use crate::domain::foundation::UserId;
use crate::ports::{SessionRecord, SessionStore};

#[derive(Debug, Clone)]
pub struct UpdateModulesCommand {
    pub user_id: UserId,
    /// New module map, `{ module_key: tier }`.
    pub modules: Value,
}

#[derive(Debug, Clone)]
pub struct UpdateModulesResult {
    pub record: SessionRecord,
}

/// Replaces the module map of an established session.
///
/// Unlike the sign-in payload, an explicit update must be an object: a
/// malformed update is rejected instead of silently disabling everything.
pub struct UpdateModulesHandler {
    store: Arc<dyn SessionStore>,
}

impl UpdateModulesHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: UpdateModulesCommand,
    ) -> Result<UpdateModulesResult, AccessError> {
        if !cmd.modules.is_object() {
            return Err(AccessError::validation("modules", "expected an object"));
        }
        let modules = parse_modules(Some(&cmd.modules));

        let record = self
            .store
            .update_modules(&cmd.user_id, modules)
            .await?
            .ok_or_else(|| AccessError::session_not_found(cmd.user_id.clone()))?;

        info!(
            user_id = %cmd.user_id,
            modules = record.state.modules.len(),
            "session modules updated"
        );

        Ok(UpdateModulesResult { record })
    }
}
