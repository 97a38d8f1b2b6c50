//! Super-admin console views
//!
//! Each view owns one page of entities and patches it in place after a
//! successful mutation. Nothing here talks to the network directly; the API
//! traits from [`crate::client::api`] are passed in.

pub mod credits;
pub mod list;
pub mod organizations;
pub mod users;

pub use credits::{CreditForm, CreditOperation};
pub use list::{DetailPanel, ListView, Listable};
pub use organizations::OrganizationsView;
pub use users::UsersView;
