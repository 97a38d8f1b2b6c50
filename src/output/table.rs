//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

/// Format data as a table
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return "No results found.".to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

/// Pagination summary printed under a list table.
///
/// `shown` is the number of rows left after the search filter.
pub fn format_page_footer(
    page: usize,
    count: usize,
    shown: usize,
    has_next: bool,
    has_previous: bool,
) -> String {
    let mut parts = vec![format!("Page {}", page), format!("{} total", count)];
    if shown == 0 || shown < count {
        parts.push(format!("{} shown", shown));
    }
    if has_previous {
        parts.push(format!("--page {} for previous", page.saturating_sub(1).max(1)));
    }
    if has_next {
        parts.push(format!("--page {} for more", page + 1));
    }
    parts.join(" · ")
}
