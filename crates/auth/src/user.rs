//! User account records.
//!
//! Accounts are managed by the backend; this crate only models the records the
//! console reads back (no credentials, no sessions).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use invtrack_core::{DomainError, DomainResult, Entity, UserId, ensure_not_blank};

use crate::Role;

// ─────────────────────────────────────────────────────────────────────────────
// User Status
// ─────────────────────────────────────────────────────────────────────────────

/// User account status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserStatus {
    /// User is active. Records without a status are active.
    #[default]
    Active,
    /// User was deactivated by an administrator.
    Inactive,
    /// User is suspended and cannot sign in.
    Suspended,
}

impl UserStatus {
    pub fn label(self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Inactive => "Inactive",
            UserStatus::Suspended => "Suspended",
        }
    }
}

impl core::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// User
// ─────────────────────────────────────────────────────────────────────────────

/// User account as served by the user API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub role: Role,
    /// Absent or `null` on the wire decodes as `Active`.
    #[serde(default, deserialize_with = "status_or_default")]
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
}

fn status_or_default<'de, D>(deserializer: D) -> Result<UserStatus, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<UserStatus>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl User {
    pub fn new(
        id: UserId,
        username: impl Into<String>,
        email: impl Into<String>,
        role: Role,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
            role,
            status: UserStatus::Active,
            created_at,
        }
    }

    pub fn with_status(mut self, status: UserStatus) -> Self {
        self.status = status;
        self
    }

    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn validate(&self) -> DomainResult<()> {
        ensure_not_blank("username", &self.username)?;
        ensure_not_blank("email", &self.email)?;
        if !self.email.contains('@') {
            return Err(DomainError::validation("email must contain '@'"));
        }
        Ok(())
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
