//! API trait definitions split by responsibility
//!
//! The super-admin surface is organized into focused sub-traits:
//! - [`UserAdminApi`] - User listing and account toggles
//! - [`OrganizationAdminApi`] - Organization listing and job projections
//! - [`CreditApi`] - Audited credit adjustments
//!
//! [`SuperAdminApi`] combines all three and is implemented for any type that
//! implements the parts.

mod credits;
mod organizations;
mod users;

pub use credits::CreditApi;
pub use organizations::OrganizationAdminApi;
pub use users::UserAdminApi;

/// Complete super-admin API surface
pub trait SuperAdminApi: UserAdminApi + OrganizationAdminApi + CreditApi {}

impl<T> SuperAdminApi for T where T: UserAdminApi + OrganizationAdminApi + CreditApi {}
