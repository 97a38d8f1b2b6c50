//! Job and hiring pipeline models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Job posting with its pipeline stages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,

    pub title: String,

    /// Lifecycle status (open, draft, closed, ...)
    #[serde(default)]
    pub status: String,

    /// Visibility (public, internal, ...)
    #[serde(default)]
    pub visibility: String,

    pub created_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub posted_by_name: String,

    #[serde(default)]
    pub workspace_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_name: Option<String>,

    #[serde(default)]
    pub location: Vec<String>,

    /// Remote, hybrid or on-site
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_approach: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seniority: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_range: Option<ExperienceRange>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<SalaryRange>,

    /// Ordered pipeline stages. The server may omit the field entirely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stages: Option<Vec<JobStage>>,
}

impl Job {
    /// Candidates across all stages; a job without stages has none.
    pub fn total_candidates(&self) -> u64 {
        self.stages
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|s| u64::from(s.candidate_count))
            .sum()
    }

    /// Stages in pipeline order
    pub fn ordered_stages(&self) -> Vec<&JobStage> {
        let mut stages: Vec<&JobStage> = self.stages.iter().flatten().collect();
        stages.sort_by_key(|s| s.sort_order);
        stages
    }
}

/// One step of a hiring pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobStage {
    pub id: i64,

    pub name: String,

    #[serde(default)]
    pub slug: String,

    #[serde(default)]
    pub sort_order: i32,

    #[serde(default)]
    pub candidate_count: u32,
}

/// Required experience in years
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceRange {
    #[serde(default)]
    pub min: Option<u32>,

    #[serde(default)]
    pub max: Option<u32>,
}

/// Offered salary band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    #[serde(default)]
    pub min: Option<i64>,

    #[serde(default)]
    pub max: Option<i64>,

    #[serde(default)]
    pub currency: Option<String>,

    /// Hidden from candidates when set
    #[serde(default)]
    pub is_confidential: bool,
}
