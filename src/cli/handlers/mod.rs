//! Shared command handler utilities

mod list;
mod progress;

pub use list::render_list;
pub use progress::with_spinner;
