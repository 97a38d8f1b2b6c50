//! Page and search argument types for list commands

use clap::Args;

use crate::client::pagination::FIRST_PAGE;

/// Shared list arguments.
///
/// Flatten this into any list command:
/// ```ignore
/// List {
///     #[command(flatten)]
///     page: PageArgs,
/// }
/// ```
#[derive(Args, Debug, Default, Clone)]
pub struct PageArgs {
    /// Page number (1-based)
    #[arg(long, short = 'p')]
    pub page: Option<usize>,

    /// Filter the loaded page by name, email or domain (case-insensitive)
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Maximum rows to print
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

impl PageArgs {
    pub fn page_number(&self) -> usize {
        self.page.unwrap_or(FIRST_PAGE).max(FIRST_PAGE)
    }
}
