//! In-memory session store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::UserId,
    ports::{SessionStore, SessionToken},
};

/// Thread-safe in-memory session store.
///
/// Resolution failures (including a poisoned lock) simply yield no session,
/// which the boundary reports as Unauthorized.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionToken, UserId>>>,
}

impl InMemorySessionStore {
    /// Creates an empty session store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn resolve(&self, token: &SessionToken) -> Option<UserId> {
        self.sessions
            .read()
            .ok()
            .and_then(|sessions| sessions.get(token).copied())
    }

    async fn insert(&self, token: SessionToken, user: UserId) {
        if let Ok(mut sessions) = self.sessions.write() {
            sessions.insert(token, user);
        }
    }

    async fn remove(&self, token: &SessionToken) {
        if let Ok(mut sessions) = self.sessions.write() {
            sessions.remove(token);
        }
    }
}
