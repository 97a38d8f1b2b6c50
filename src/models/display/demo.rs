//! Demo directory display models

use serde::Serialize;
use tabled::Tabled;

use crate::output::formatters::{NONE, format_date, or_none};
use crate::store::{DemoOrganization, DemoUser, Workspace};

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct DemoUserDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "EMAIL")]
    pub email: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "ROLE")]
    pub role: String,

    #[tabled(rename = "ORGANIZATION")]
    pub organization: String,

    #[tabled(rename = "WORKSPACES")]
    pub workspaces: String,
}

impl From<&DemoUser> for DemoUserDisplay {
    fn from(user: &DemoUser) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            name: or_none(Some(&user.full_name)),
            role: user.role.to_string(),
            organization: or_none(user.organization_id.as_deref()),
            workspaces: or_none(Some(&user.workspace_ids.join(", "))),
        }
    }
}

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct DemoOrgDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "DOMAIN")]
    pub domain: String,

    /// "seed" or "custom"
    #[tabled(rename = "ORIGIN")]
    pub origin: String,

    #[tabled(rename = "CREATED")]
    pub created: String,
}

impl DemoOrgDisplay {
    pub fn new(org: &DemoOrganization, seeded: bool) -> Self {
        Self {
            id: org.id.clone(),
            name: org.name.clone(),
            domain: org.domain.clone(),
            origin: origin(seeded),
            created: format_date(org.created_at),
        }
    }
}

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct WorkspaceDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "ORGANIZATION")]
    pub organization: String,

    #[tabled(rename = "MEMBERS")]
    pub members: String,

    #[tabled(rename = "ORIGIN")]
    pub origin: String,
}

impl WorkspaceDisplay {
    pub fn new(ws: &Workspace, seeded: bool) -> Self {
        Self {
            id: ws.id.clone(),
            name: ws.name.clone(),
            organization: ws.organization_id.clone(),
            members: if ws.member_ids.is_empty() {
                NONE.to_string()
            } else {
                ws.member_ids.join(", ")
            },
            origin: origin(seeded),
        }
    }
}

fn origin(seeded: bool) -> String {
    if seeded { "seed" } else { "custom" }.to_string()
}
