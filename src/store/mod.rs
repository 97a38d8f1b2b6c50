//! Demo directory storage
//!
//! Stand-in identity, organization and workspace records used by the demo
//! login flow. The repository ([`DemoDirectory`]) is independent of where
//! records live; [`SqliteStore`] persists them for the CLI and
//! [`MemoryStore`] keeps tests hermetic.

pub mod backend;
pub mod directory;
pub mod models;
pub mod seed;

#[cfg(test)]
pub use backend::MemoryStore;
pub use backend::{KeyValueStore, SqliteStore};
pub use directory::DemoDirectory;
pub use models::{DemoOrganization, DemoRole, DemoUser, DemoUserUpdate, NewDemoUser, Workspace};
