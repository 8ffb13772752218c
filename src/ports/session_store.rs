//! Session store port.
//!
//! Holds the current [`SessionState`] of each signed-in user. The
//! authentication flow and the module-update action are the only writers;
//! every access evaluation is a reader.
//!
//! Implementations must replace records atomically so a reader never sees a
//! half-applied session.

use async_trait::async_trait;

use crate::domain::access::{ModuleMap, SessionState};
use crate::domain::foundation::{DomainError, SessionId, Timestamp, UserId};

/// A stored session with its bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    pub id: SessionId,
    pub state: SessionState,
    pub established_at: Timestamp,
    pub updated_at: Timestamp,
}

impl SessionRecord {
    /// Wraps a freshly authenticated session.
    pub fn establish(state: SessionState) -> Self {
        let now = Timestamp::now();
        Self {
            id: SessionId::new(),
            state,
            established_at: now,
            updated_at: now,
        }
    }
}

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Stores `record`, replacing any session the same user already had.
    ///
    /// Fails if the record carries no user id.
    async fn replace(&self, record: SessionRecord) -> Result<(), DomainError>;

    /// Fetches the user's session, if one is established.
    async fn find(&self, user_id: &UserId) -> Result<Option<SessionRecord>, DomainError>;

    /// Drops the user's session. Returns whether one existed.
    async fn clear(&self, user_id: &UserId) -> Result<bool, DomainError>;

    /// Replaces the module map of an existing session.
    ///
    /// Returns the updated record, or `None` if the user has no session.
    async fn update_modules(
        &self,
        user_id: &UserId,
        modules: ModuleMap,
    ) -> Result<Option<SessionRecord>, DomainError>;

    /// The user's session state, or the signed-out default.
    async fn load_state(&self, user_id: &UserId) -> Result<SessionState, DomainError> {
        Ok(self
            .find(user_id)
            .await?
            .map(|record| record.state)
            .unwrap_or_else(SessionState::signed_out))
    }
}
