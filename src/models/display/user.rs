//! User display models

use chrono::Utc;
use serde::Serialize;
use tabled::Tabled;

use super::common::yes_no;
use crate::client::models::User;
use crate::output::formatters::{format_date, format_relative, or_none};

/// User row for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct UserDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "EMAIL")]
    pub email: String,

    #[tabled(rename = "ORGANIZATION")]
    pub organization: String,

    /// "active" or "inactive"
    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "STAFF")]
    pub staff: String,

    #[tabled(rename = "CREDITS")]
    pub credits: i64,

    #[tabled(rename = "LAST LOGIN")]
    pub last_login: String,

    #[tabled(rename = "JOINED")]
    pub joined: String,
}

impl From<User> for UserDisplay {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: or_none(Some(&user.full_name)),
            email: user.email,
            organization: or_none(user.organization_name.as_deref()),
            status: status_label(user.is_active).to_string(),
            staff: yes_no(user.is_staff),
            credits: user.credit_balance,
            last_login: format_relative(user.last_login, Utc::now()),
            joined: format_date(user.created_at),
        }
    }
}

impl From<&User> for UserDisplay {
    fn from(user: &User) -> Self {
        UserDisplay::from(user.clone())
    }
}

pub fn status_label(is_active: bool) -> &'static str {
    if is_active { "active" } else { "inactive" }
}
