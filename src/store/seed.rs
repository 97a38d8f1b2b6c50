//! Fixed demo records loaded before anything persisted

use chrono::{DateTime, TimeZone, Utc};

use super::models::{DemoOrganization, DemoRole, DemoUser, Workspace, hash_password};

/// Password shared by every seeded account
pub const DEMO_PASSWORD: &str = "demo1234";

fn seeded_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

pub fn organizations() -> Vec<DemoOrganization> {
    vec![
        DemoOrganization {
            id: "org-1".to_string(),
            name: "Acme Talent".to_string(),
            domain: "acme.io".to_string(),
            created_at: seeded_at(),
        },
        DemoOrganization {
            id: "org-2".to_string(),
            name: "Northwind Hiring".to_string(),
            domain: "northwind.dev".to_string(),
            created_at: seeded_at(),
        },
    ]
}

pub fn workspaces() -> Vec<Workspace> {
    let ws = |id: &str, name: &str, org: &str, members: &[&str]| Workspace {
        id: id.to_string(),
        name: name.to_string(),
        organization_id: org.to_string(),
        member_ids: members.iter().map(|m| m.to_string()).collect(),
        created_at: seeded_at(),
    };
    vec![
        ws("ws-1", "Engineering", "org-1", &["usr-1", "usr-2"]),
        ws("ws-2", "Sales", "org-1", &["usr-2"]),
        ws("ws-3", "Operations", "org-2", &["usr-3"]),
    ]
}

pub fn users() -> Vec<DemoUser> {
    let user = |id: &str,
                email: &str,
                name: &str,
                role: DemoRole,
                org: Option<&str>,
                workspaces: &[&str]| DemoUser {
        id: id.to_string(),
        email: email.to_string(),
        full_name: name.to_string(),
        password_hash: hash_password(DEMO_PASSWORD),
        role,
        organization_id: org.map(str::to_string),
        workspace_ids: workspaces.iter().map(|w| w.to_string()).collect(),
        created_at: seeded_at(),
    };
    vec![
        user(
            "usr-1",
            "alex@acme.io",
            "Alex Morgan",
            DemoRole::Admin,
            Some("org-1"),
            &["ws-1"],
        ),
        user(
            "usr-2",
            "rita@acme.io",
            "Rita Okafor",
            DemoRole::Recruiter,
            Some("org-1"),
            &["ws-1", "ws-2"],
        ),
        user(
            "usr-3",
            "hana@northwind.dev",
            "Hana Sato",
            DemoRole::HiringManager,
            Some("org-2"),
            &["ws-3"],
        ),
        user(
            "usr-4",
            "ops@recruitop.dev",
            "Platform Operator",
            DemoRole::SuperAdmin,
            None,
            &[],
        ),
    ]
}
