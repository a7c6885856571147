//! Session storage implementation
//!
//! A session pairs the current step with the partially filled request. The
//! store only supports whole-entry operations; the conversation engine reads
//! a session, computes the next value and writes it back.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::debug;

use super::steps::Step;
use crate::models::TravelRequest;
use crate::utils::errors::{TravelBotError, Result};

/// One user's questionnaire in progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: i64,
    pub step: Step,
    pub record: TravelRequest,
}

impl Session {
    /// Fresh session positioned at the first question
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            step: Step::FIRST,
            record: TravelRequest::default(),
        }
    }
}

/// Storage seam for conversation sessions
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Current session, if the user has one
    async fn get(&self, user_id: i64) -> Result<Option<Session>>;

    /// Create a fresh session, replacing any existing one
    async fn start(&self, user_id: i64) -> Result<Session>;

    /// Move an existing session to another step
    async fn advance(&self, user_id: i64, step: Step) -> Result<()>;

    /// Replace the stored session with the given value
    async fn save(&self, session: Session) -> Result<()>;

    /// Remove the session; returns whether one existed
    async fn clear(&self, user_id: i64) -> Result<bool>;

    /// Number of sessions currently in progress
    async fn active_sessions(&self) -> Result<usize>;
}

/// Process-local session store. Sessions never expire.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<i64, Session>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, user_id: i64) -> Result<Option<Session>> {
        Ok(self.sessions.read().await.get(&user_id).cloned())
    }

    async fn start(&self, user_id: i64) -> Result<Session> {
        let session = Session::new(user_id);
        let previous = self.sessions.write().await.insert(user_id, session.clone());
        debug!(user_id = user_id, replaced = previous.is_some(), "Session started");
        Ok(session)
    }

    async fn advance(&self, user_id: i64, step: Step) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(&user_id)
            .ok_or(TravelBotError::SessionNotFound { user_id })?;
        debug!(user_id = user_id, from = ?session.step, to = ?step, "Session advanced");
        session.step = step;
        Ok(())
    }

    async fn save(&self, session: Session) -> Result<()> {
        debug!(user_id = session.user_id, step = ?session.step, "Session saved");
        self.sessions.write().await.insert(session.user_id, session);
        Ok(())
    }

    async fn clear(&self, user_id: i64) -> Result<bool> {
        let removed = self.sessions.write().await.remove(&user_id).is_some();
        debug!(user_id = user_id, removed = removed, "Session cleared");
        Ok(removed)
    }

    async fn active_sessions(&self) -> Result<usize> {
        Ok(self.sessions.read().await.len())
    }
}
