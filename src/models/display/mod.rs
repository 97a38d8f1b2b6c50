//! Display model implementations for table and JSON output
//!
//! Display models transform API and directory types into CLI-friendly
//! formats with appropriate column names and serialization.

mod common;
mod credit;
mod demo;
mod job;
mod org;
mod user;

pub use credit::CreditResultDisplay;
pub use demo::{DemoOrgDisplay, DemoUserDisplay, WorkspaceDisplay};
pub use job::JobDisplay;
pub use org::OrgDisplay;
pub use user::{UserDisplay, status_label};
