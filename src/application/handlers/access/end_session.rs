//! EndSessionHandler - Command handler for logout.

use std::sync::Arc;
use tracing::info;

use crate::domain::access::AccessError;
use crate::domain::foundation::UserId;
use crate::ports::SessionStore;

#[derive(Debug, Clone)]
pub struct EndSessionCommand {
    pub user_id: UserId,
}

#[derive(Debug, Clone)]
pub struct EndSessionResult {
    /// Whether a session was actually cleared.
    pub ended: bool,
}

/// Clears the user's session back to the signed-out default. Idempotent.
pub struct EndSessionHandler {
    store: Arc<dyn SessionStore>,
}

impl EndSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: EndSessionCommand) -> Result<EndSessionResult, AccessError> {
        let ended = self.store.clear(&cmd.user_id).await?;
        info!(user_id = %cmd.user_id, ended, "session ended");
        Ok(EndSessionResult { ended })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySessionStore;
    use crate::domain::access::SessionState;
    use crate::ports::SessionRecord;
    use serde_json::json;

    #[tokio::test]
    async fn clears_existing_session_then_is_noop() {
        let store = Arc::new(InMemorySessionStore::new());
        let state = SessionState::from_payload(&json!({ "id": "u1" })).unwrap();
        store.replace(SessionRecord::establish(state)).await.unwrap();

        let handler = EndSessionHandler::new(store.clone());
        let user_id = UserId::new("u1").unwrap();

        let first = handler
            .handle(EndSessionCommand {
                user_id: user_id.clone(),
            })
            .await
            .unwrap();
        let second = handler.handle(EndSessionCommand { user_id: user_id.clone() }).await.unwrap();

        assert!(first.ended);
        assert!(!second.ended);
        assert_eq!(store.load_state(&user_id).await.unwrap(), SessionState::signed_out());
    }
}
