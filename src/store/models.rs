//! Demo directory records

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Role of a demo account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DemoRole {
    SuperAdmin,
    Admin,
    Recruiter,
    HiringManager,
}

impl fmt::Display for DemoRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DemoRole::SuperAdmin => "super_admin",
            DemoRole::Admin => "admin",
            DemoRole::Recruiter => "recruiter",
            DemoRole::HiringManager => "hiring_manager",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for DemoRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "super_admin" | "superadmin" => Ok(DemoRole::SuperAdmin),
            "admin" => Ok(DemoRole::Admin),
            "recruiter" => Ok(DemoRole::Recruiter),
            "hiring_manager" => Ok(DemoRole::HiringManager),
            other => Err(format!(
                "Unknown role '{}': use super_admin, admin, recruiter or hiring_manager",
                other
            )),
        }
    }
}

/// Demo login account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoUser {
    pub id: String,
    pub email: String,
    pub full_name: String,
    /// Hex SHA-256 of the password
    pub password_hash: String,
    pub role: DemoRole,
    #[serde(default)]
    pub organization_id: Option<String>,
    #[serde(default)]
    pub workspace_ids: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl DemoUser {
    pub fn check_password(&self, password: &str) -> bool {
        self.password_hash == hash_password(password)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoOrganization {
    pub id: String,
    pub name: String,
    pub domain: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    pub id: String,
    pub name: String,
    pub organization_id: String,
    #[serde(default)]
    pub member_ids: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Input for a new demo account
#[derive(Debug, Clone)]
pub struct NewDemoUser {
    pub email: String,
    pub full_name: String,
    pub password: String,
    pub role: DemoRole,
    pub organization_id: Option<String>,
}

/// Partial update of a demo account. `organization_id: Some(None)` detaches.
#[derive(Debug, Clone, Default)]
pub struct DemoUserUpdate {
    pub full_name: Option<String>,
    pub role: Option<DemoRole>,
    pub organization_id: Option<Option<String>>,
}

/// What an organization delete removed or detached
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CascadeReport {
    pub organization_id: String,
    pub workspaces_removed: Vec<String>,
    pub users_detached: Vec<String>,
}

/// Hex-encoded SHA-256 digest
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Next free `{prefix}-{n}` id
pub fn next_id<'a>(prefix: &str, existing: impl Iterator<Item = &'a str>) -> String {
    let max = existing
        .filter_map(|id| id.strip_prefix(prefix)?.strip_prefix('-')?.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    format!("{}-{}", prefix, max + 1)
}
