//! Generic list rendering
//!
//! List commands share one flow:
//! 1. Load a page into a [`ListView`]
//! 2. Apply the search filter and row limit
//! 3. Convert to the display type
//! 4. Print rows, then the pagination footer on stderr

use serde::Serialize;
use tabled::Tabled;

use crate::admin::{ListView, Listable};
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::output::Formattable;
use crate::output::json::format_json_record;
use crate::output::table::format_page_footer;

/// JSON shape of one list page
#[derive(Debug, Serialize)]
pub struct ListPayload<D> {
    pub items: Vec<D>,
    pub page: usize,
    pub count: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

/// Print the visible rows of a loaded view.
///
/// # Type Parameters
///
/// * `T` - The API model held by the view (e.g., `User`)
/// * `D` - The display row built from `&T`
pub fn render_list<T, D>(
    view: &ListView<T>,
    limit: Option<usize>,
    format: OutputFormat,
) -> Result<()>
where
    T: Listable,
    D: for<'a> From<&'a T> + Tabled + Serialize,
{
    let rows: Vec<D> = view
        .visible()
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .map(D::from)
        .collect();

    match format {
        OutputFormat::Json => {
            let payload = ListPayload {
                items: rows,
                page: view.page,
                count: view.count,
                has_next: view.has_next,
                has_previous: view.has_previous,
            };
            println!("{}", format_json_record(&payload)?);
        }
        OutputFormat::Pretty | OutputFormat::Table => {
            let shown = rows.len();
            rows.print(format)?;
            eprintln!(
                "{}",
                format_page_footer(view.page, view.count, shown, view.has_next, view.has_previous)
            );
        }
    }

    Ok(())
}
