//! Super-admin API data models
//!
//! Shapes are owned by the remote API; these types only round-trip them.

mod credit;
mod job;
mod org;
mod user;

pub use credit::{CreditAdjustRequest, CreditAdjustResponse};
pub use job::Job;
#[cfg(test)]
pub use job::JobStage;
pub use org::{Organization, OrganizationJobsResponse};
#[cfg(test)]
pub use org::{AdminContact, OrganizationSummary};
pub use user::{UpdateUserRequest, User, UserStatusRequest};
