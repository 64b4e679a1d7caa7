//! User account and the denormalized assignee surface.

use super::{ParseUserRoleError, TaskDomainError, UserId};
use serde::{Deserialize, Serialize};

/// User role.
///
/// Roles exist in the account model but gate no task operation: task
/// authorization is purely ownership-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// Team manager.
    Manager,
    /// Regular employee.
    Employee,
}

impl UserRole {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Manager => "MANAGER",
            Self::Employee => "EMPLOYEE",
        }
    }
}

impl TryFrom<&str> for UserRole {
    type Error = ParseUserRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "MANAGER" => Ok(Self::Manager),
            "EMPLOYEE" => Ok(Self::Employee),
            _ => Err(ParseUserRoleError(value.to_owned())),
        }
    }
}

/// User account.
///
/// Password hashing and session issuance are external collaborators; the
/// hash is carried as an opaque string and never interpreted here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    password_hash: String,
    role: UserRole,
}

impl User {
    /// Creates a user account.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyUserName`] when the name is blank, or
    /// [`TaskDomainError::InvalidEmail`] when the email lacks a non-empty
    /// local part and domain around a single `@`.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
        role: UserRole,
    ) -> Result<Self, TaskDomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TaskDomainError::EmptyUserName);
        }
        let email = email.into();
        if !is_plausible_email(&email) {
            return Err(TaskDomainError::InvalidEmail(email));
        }
        Ok(Self {
            id: UserId::new(),
            name,
            email,
            password_hash: password_hash.into(),
            role,
        })
    }

    /// Reconstructs a user account from persisted storage.
    ///
    /// Storage is trusted: validation already ran at creation time.
    #[must_use]
    pub const fn from_persisted(
        id: UserId,
        name: String,
        email: String,
        password_hash: String,
        role: UserRole,
    ) -> Self {
        Self {
            id,
            name,
            email,
            password_hash,
            role,
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unique email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the opaque password hash.
    #[must_use]
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    /// Returns the role.
    #[must_use]
    pub const fn role(&self) -> UserRole {
        self.role
    }

    /// Returns the denormalized profile surfaced to clients.
    #[must_use]
    pub fn profile(&self) -> AssigneeProfile {
        AssigneeProfile {
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// Denormalized assignee fields surfaced on every task sent to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssigneeProfile {
    /// Assignee display name.
    pub name: String,
    /// Assignee email address.
    pub email: String,
}

/// Minimal shape check: one `@` with non-empty local part and domain.
fn is_plausible_email(value: &str) -> bool {
    let mut parts = value.split('@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    parts.next().is_none()
        && !local.is_empty()
        && !domain.is_empty()
        && !value.chars().any(char::is_whitespace)
}
