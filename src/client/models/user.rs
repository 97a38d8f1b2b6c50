//! Super-admin user models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Platform user as seen by the super-admin console
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// User ID
    pub id: i64,

    /// Display name
    #[serde(default)]
    pub full_name: String,

    /// Login email
    pub email: String,

    /// Organization the user belongs to, if any
    #[serde(default)]
    pub organization_name: Option<String>,

    /// Whether the account may sign in
    #[serde(default)]
    pub is_active: bool,

    /// Whether the account has staff privileges
    #[serde(default)]
    pub is_staff: bool,

    /// Most recent login, absent for users who never signed in
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,

    /// Account creation time
    pub created_at: DateTime<Utc>,

    /// Credit balance. Only ever replaced by a server-reported balance.
    #[serde(default)]
    pub credit_balance: i64,
}

/// Partial update for `PATCH /users/{id}/`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_staff: Option<bool>,
}

impl UpdateUserRequest {
    /// Patch that only sets the staff flag
    pub fn staff(is_staff: bool) -> Self {
        Self {
            is_staff: Some(is_staff),
        }
    }
}

/// Body for `PATCH /users/{id}/status/`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStatusRequest {
    pub is_active: bool,
}
