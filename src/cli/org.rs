//! Organization commands

use log::debug;

use crate::admin::OrganizationsView;
use crate::cli::CommandContext;
use crate::cli::args::{GlobalOptions, PageArgs};
use crate::cli::detail::print_jobs;
use crate::cli::handlers::{render_list, with_spinner};
use crate::client::models::Organization;
use crate::error::Result;
use crate::models::OrgDisplay;

/// Run the org list command
pub async fn list(opts: &GlobalOptions, args: &PageArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let mut view = OrganizationsView::new();
    if let Some(ref term) = args.search {
        view.list.set_search(term.as_str());
    }

    debug!("Fetching organizations page {}", args.page_number());
    with_spinner(
        "Loading organizations...",
        ctx.format,
        view.go_to_page(&ctx.client, args.page_number()),
    )
    .await?;

    render_list::<Organization, OrgDisplay>(&view.list, args.limit, ctx.format)
}

/// Show the jobs of one organization with per-stage candidate counts
pub async fn jobs(opts: &GlobalOptions, org_id: i64, page: Option<usize>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let mut view = OrganizationsView::new();
    if let Some(page) = page {
        view.go_to_page(&ctx.client, page).await?;
    }

    let response = with_spinner(
        "Loading jobs...",
        ctx.format,
        view.view_jobs(&ctx.client, org_id),
    )
    .await?;

    print_jobs(response, ctx.format)
}
