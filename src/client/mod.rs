//! Super-admin API client

pub mod api;
#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod pagination;
pub mod superadmin;

pub use api::SuperAdminApi;
pub use pagination::PageParams;
pub use superadmin::SuperAdminClient;
