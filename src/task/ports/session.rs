//! Session resolution port.
//!
//! Session issuance (login, password verification) is an external
//! collaborator; the gateway only needs to resolve an opaque token to the
//! authenticated user, or to nothing.

use crate::task::domain::UserId;
use async_trait::async_trait;

/// Opaque session token carried by clients.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wraps a raw token string.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the raw token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Active-session lookup contract.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Resolves a token to the authenticated user.
    ///
    /// Returns `None` for unknown or expired tokens.
    async fn resolve(&self, token: &SessionToken) -> Option<UserId>;

    /// Registers an active session.
    async fn insert(&self, token: SessionToken, user: UserId);

    /// Removes a session, if present.
    async fn remove(&self, token: &SessionToken);
}
