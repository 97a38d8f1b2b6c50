//! Job display models

use serde::Serialize;
use tabled::Tabled;

use super::common::truncate_string;
use crate::client::models::Job;
use crate::output::formatters::{format_date, or_none};

/// Job row for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct JobDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    #[tabled(rename = "TITLE")]
    pub title: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "WORKSPACE")]
    pub workspace: String,

    #[tabled(rename = "POSTED BY")]
    pub posted_by: String,

    #[tabled(rename = "CANDIDATES")]
    pub candidates: u64,

    /// Stage names with counts, in pipeline order
    #[tabled(rename = "PIPELINE")]
    pub pipeline: String,

    #[tabled(rename = "CREATED")]
    pub created: String,
}

impl From<&Job> for JobDisplay {
    fn from(job: &Job) -> Self {
        let pipeline = job
            .ordered_stages()
            .iter()
            .map(|s| format!("{} {}", s.name, s.candidate_count))
            .collect::<Vec<_>>()
            .join(" › ");

        Self {
            id: job.id,
            title: truncate_string(&job.title, 40),
            status: or_none(Some(&job.status)),
            workspace: or_none(Some(&job.workspace_name)),
            posted_by: or_none(Some(&job.posted_by_name)),
            candidates: job.total_candidates(),
            pipeline: or_none(Some(&pipeline)),
            created: format_date(job.created_at),
        }
    }
}

impl From<Job> for JobDisplay {
    fn from(job: Job) -> Self {
        JobDisplay::from(&job)
    }
}
