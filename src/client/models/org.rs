//! Organization models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::job::Job;

/// Organization resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    /// Organization ID
    pub id: i64,

    /// Organization name
    pub name: String,

    /// Primary email domain
    #[serde(default)]
    pub domain: String,

    /// Creation time
    pub created_at: DateTime<Utc>,

    /// Number of workspaces
    #[serde(default)]
    pub workspace_count: u32,

    /// Number of members
    #[serde(default)]
    pub member_count: u32,
}

/// Organization header of a jobs projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationSummary {
    pub id: i64,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    /// Primary admin contact, when the organization has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin: Option<AdminContact>,
}

/// Organization admin contact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminContact {
    #[serde(default)]
    pub full_name: String,

    pub email: String,
}

/// Read-only jobs projection for an organization or a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationJobsResponse {
    pub organization: OrganizationSummary,

    #[serde(default)]
    pub jobs: Vec<Job>,

    #[serde(default)]
    pub total_jobs: usize,
}

impl OrganizationJobsResponse {
    /// Candidates across every job's pipeline
    pub fn total_candidates(&self) -> u64 {
        self.jobs.iter().map(Job::total_candidates).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jobs_response_without_admin() {
        let json = r#"{
            "organization": { "id": 3, "name": "Acme" },
            "jobs": [],
            "total_jobs": 0
        }"#;

        let response: OrganizationJobsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.organization.name, "Acme");
        assert!(response.organization.admin.is_none());
        assert_eq!(response.total_candidates(), 0);
    }

    #[test]
    fn test_jobs_response_sums_candidates_across_jobs() {
        let json = r#"{
            "organization": {
                "id": 3,
                "name": "Acme",
                "domain": "acme.io",
                "admin": { "full_name": "Rita Admin", "email": "rita@acme.io" }
            },
            "jobs": [
                {
                    "id": 1, "title": "Backend Engineer", "status": "open",
                    "visibility": "public", "created_at": "2024-01-01T00:00:00Z",
                    "stages": [
                        { "id": 1, "name": "Screening", "slug": "screening", "sort_order": 1, "candidate_count": 4 },
                        { "id": 2, "name": "Interview", "slug": "interview", "sort_order": 2, "candidate_count": 2 }
                    ]
                },
                {
                    "id": 2, "title": "Designer", "status": "draft",
                    "visibility": "internal", "created_at": "2024-01-02T00:00:00Z"
                }
            ],
            "total_jobs": 2
        }"#;

        let response: OrganizationJobsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.total_jobs, 2);
        assert_eq!(response.total_candidates(), 6);
        assert_eq!(
            response.organization.admin.unwrap().email,
            "rita@acme.io"
        );
    }
}
