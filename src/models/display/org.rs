//! Organization display models

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::Organization;
use crate::output::formatters::{format_date, or_none};

/// Organization row for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct OrgDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "DOMAIN")]
    pub domain: String,

    #[tabled(rename = "WORKSPACES")]
    pub workspaces: u32,

    #[tabled(rename = "MEMBERS")]
    pub members: u32,

    #[tabled(rename = "CREATED")]
    pub created: String,
}

impl From<Organization> for OrgDisplay {
    fn from(org: Organization) -> Self {
        Self {
            id: org.id,
            name: org.name,
            domain: or_none(Some(&org.domain)),
            workspaces: org.workspace_count,
            members: org.member_count,
            created: format_date(org.created_at),
        }
    }
}

impl From<&Organization> for OrgDisplay {
    fn from(org: &Organization) -> Self {
        OrgDisplay::from(org.clone())
    }
}
