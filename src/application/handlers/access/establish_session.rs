//! EstablishSessionHandler - Command handler for sign-in.

use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::access::{AccessError, SessionState};
use crate::domain::foundation::UserId;
use crate::ports::{SessionRecord, SessionStore};

/// Command carrying the authentication backend's session payload.
#[derive(Debug, Clone)]
pub struct EstablishSessionCommand {
    /// Caller identified by the gateway.
    pub user_id: UserId,
    pub payload: Value,
}

#[derive(Debug, Clone)]
pub struct EstablishSessionResult {
    pub record: SessionRecord,
}

/// Builds a session from the auth payload and replaces whatever session the
/// user had before.
///
/// The payload must describe the caller: a session can never be written for
/// another user.
pub struct EstablishSessionHandler {
    store: Arc<dyn SessionStore>,
}

impl EstablishSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: EstablishSessionCommand,
    ) -> Result<EstablishSessionResult, AccessError> {
        let state = SessionState::from_payload(&cmd.payload)?;
        if let Some(payload_user) = state.user_id.as_ref().filter(|id| **id != cmd.user_id) {
            warn!(caller = %cmd.user_id, payload = %payload_user, "session payload names another user");
            return Err(AccessError::identity_mismatch(cmd.user_id, payload_user.clone()));
        }
        let record = SessionRecord::establish(state);

        self.store.replace(record.clone()).await?;

        info!(
            user_id = ?record.state.user_id,
            session_id = %record.id,
            plans = record.state.subscribed_plans.len(),
            modules = record.state.modules.len(),
            "session established"
        );

        Ok(EstablishSessionResult { record })
    }
}
