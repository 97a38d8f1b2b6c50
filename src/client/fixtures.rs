//! Test fixtures and builders for API model types
//!
//! Provides builder patterns for creating test data with sensible defaults.
//! Import via `use crate::client::fixtures::*` in test modules.

#![allow(dead_code)]

use chrono::{TimeZone, Utc};

use super::models::{
    AdminContact, Job, JobStage, Organization, OrganizationJobsResponse, OrganizationSummary,
    User,
};

// ============================================================================
// UserBuilder
// ============================================================================

/// Builder for creating test User instances.
///
/// # Example
/// ```ignore
/// let user = UserBuilder::new(7)
///     .full_name("Ada Byron")
///     .credit_balance(100)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct UserBuilder {
    user: User,
}

impl UserBuilder {
    /// Create a new active, non-staff user with the given ID.
    pub fn new(id: i64) -> Self {
        Self {
            user: User {
                id,
                full_name: format!("User {}", id),
                email: format!("user{}@example.com", id),
                organization_name: None,
                is_active: true,
                is_staff: false,
                last_login: None,
                created_at: Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap(),
                credit_balance: 0,
            },
        }
    }

    pub fn full_name(mut self, name: impl Into<String>) -> Self {
        self.user.full_name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.user.email = email.into();
        self
    }

    pub fn organization(mut self, name: impl Into<String>) -> Self {
        self.user.organization_name = Some(name.into());
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.user.is_active = active;
        self
    }

    pub fn staff(mut self, staff: bool) -> Self {
        self.user.is_staff = staff;
        self
    }

    pub fn credit_balance(mut self, balance: i64) -> Self {
        self.user.credit_balance = balance;
        self
    }

    pub fn build(self) -> User {
        self.user
    }
}

// ============================================================================
// OrganizationBuilder
// ============================================================================

/// Builder for creating test Organization instances.
#[derive(Debug, Clone)]
pub struct OrganizationBuilder {
    org: Organization,
}

impl OrganizationBuilder {
    /// Create a new builder with the given ID.
    pub fn new(id: i64) -> Self {
        Self {
            org: Organization {
                id,
                name: format!("Organization {}", id),
                domain: format!("org{}.example.com", id),
                created_at: Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap(),
                workspace_count: 0,
                member_count: 0,
            },
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.org.name = name.into();
        self
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.org.domain = domain.into();
        self
    }

    pub fn counts(mut self, workspaces: u32, members: u32) -> Self {
        self.org.workspace_count = workspaces;
        self.org.member_count = members;
        self
    }

    pub fn build(self) -> Organization {
        self.org
    }
}

// ============================================================================
// JobBuilder
// ============================================================================

/// Builder for creating test Job instances.
#[derive(Debug, Clone)]
pub struct JobBuilder {
    job: Job,
}

impl JobBuilder {
    /// Create an open public job with no stages field.
    pub fn new(id: i64) -> Self {
        Self {
            job: Job {
                id,
                title: format!("Job {}", id),
                status: "open".to_string(),
                visibility: "public".to_string(),
                created_at: Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
                updated_at: None,
                posted_by_name: "Rita Recruiter".to_string(),
                workspace_name: "Engineering".to_string(),
                department_name: None,
                location: vec![],
                work_approach: None,
                seniority: None,
                experience_range: None,
                salary_range: None,
                stages: None,
            },
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.job.title = title.into();
        self
    }

    /// Append a stage; the sort order follows insertion order.
    pub fn stage(mut self, name: &str, candidates: u32) -> Self {
        let stages = self.job.stages.get_or_insert_with(Vec::new);
        let order = stages.len() as i32 + 1;
        stages.push(JobStage {
            id: i64::from(order),
            name: name.to_string(),
            slug: name.to_lowercase().replace(' ', "-"),
            sort_order: order,
            candidate_count: candidates,
        });
        self
    }

    pub fn build(self) -> Job {
        self.job
    }
}

/// Jobs projection for an organization
pub fn jobs_response(org_id: i64, jobs: Vec<Job>) -> OrganizationJobsResponse {
    OrganizationJobsResponse {
        organization: OrganizationSummary {
            id: org_id,
            name: format!("Organization {}", org_id),
            domain: None,
            admin: Some(AdminContact {
                full_name: "Org Admin".to_string(),
                email: "admin@example.com".to_string(),
            }),
        },
        total_jobs: jobs.len(),
        jobs,
    }
}
