//! In-Memory Session Store Adapter
//!
//! Keeps sessions in a process-local map behind a `tokio` read-write lock.
//! Each write swaps a whole record, so readers see either the old or the
//! new session.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::access::ModuleMap;
use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::ports::{SessionRecord, SessionStore};

#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<UserId, SessionRecord>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of established sessions.
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn replace(&self, record: SessionRecord) -> Result<(), DomainError> {
        let user_id = record
            .state
            .user_id
            .clone()
            .ok_or_else(|| DomainError::validation("user_id", "Session has no user id"))?;

        self.sessions.write().await.insert(user_id, record);
        Ok(())
    }

    async fn find(&self, user_id: &UserId) -> Result<Option<SessionRecord>, DomainError> {
        Ok(self.sessions.read().await.get(user_id).cloned())
    }

    async fn clear(&self, user_id: &UserId) -> Result<bool, DomainError> {
        Ok(self.sessions.write().await.remove(user_id).is_some())
    }

    async fn update_modules(
        &self,
        user_id: &UserId,
        modules: ModuleMap,
    ) -> Result<Option<SessionRecord>, DomainError> {
        let mut sessions = self.sessions.write().await;
        let Some(record) = sessions.get_mut(user_id) else {
            return Ok(None);
        };

        record.state.modules = modules;
        record.updated_at = Timestamp::now();
        Ok(Some(record.clone()))
    }
}
