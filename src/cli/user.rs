//! User management commands

use colored::Colorize;
use log::debug;

use crate::admin::UsersView;
use crate::cli::args::{GlobalOptions, PageArgs};
use crate::cli::detail::print_user_panel;
use crate::cli::handlers::{render_list, with_spinner};
use crate::cli::{CommandContext, OutputFormat};
use crate::client::models::User;
use crate::error::Result;
use crate::models::UserDisplay;
use crate::output::json::format_json_record;

/// Run the user list command
pub async fn list(opts: &GlobalOptions, args: &PageArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let mut view = UsersView::new();
    if let Some(ref term) = args.search {
        view.list.set_search(term.as_str());
    }

    debug!("Fetching users page {}", args.page_number());
    with_spinner(
        "Loading users...",
        ctx.format,
        view.go_to_page(&ctx.client, args.page_number()),
    )
    .await?;

    render_list::<User, UserDisplay>(&view.list, args.limit, ctx.format)
}

/// Show one user with the jobs visible to them
pub async fn show(opts: &GlobalOptions, user_id: i64, page: Option<usize>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let mut view = view_at(&ctx, page).await?;

    let result = with_spinner(
        "Loading user...",
        ctx.format,
        view.open(&ctx.client, user_id),
    )
    .await;
    let Some(ref panel) = view.list.selected else {
        // Never located
        return result;
    };

    if let Err(ref e) = result {
        eprintln!("{} Could not load jobs: {}", "⚠".yellow(), e.user_message());
    }
    print_user_panel(panel, ctx.format)
}

/// Activate or deactivate a user explicitly
pub async fn set_status(opts: &GlobalOptions, user_id: i64, is_active: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let mut view = UsersView::new();

    let user = view.set_status(&ctx.client, user_id, is_active).await?;
    report(&view, &user, ctx.format)
}

/// Flip a user's active flag
pub async fn toggle_status(
    opts: &GlobalOptions,
    user_id: i64,
    page: Option<usize>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let mut view = view_at(&ctx, page).await?;

    view.locate(&ctx.client, user_id).await?;
    let user = view.toggle_status(&ctx.client, user_id).await?;
    report(&view, &user, ctx.format)
}

/// Flip a user's staff flag
pub async fn toggle_staff(
    opts: &GlobalOptions,
    user_id: i64,
    page: Option<usize>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let mut view = view_at(&ctx, page).await?;

    view.locate(&ctx.client, user_id).await?;
    let user = view.toggle_staff(&ctx.client, user_id).await?;
    report(&view, &user, ctx.format)
}

/// A view positioned on `page` so lookups start there.
async fn view_at(ctx: &CommandContext, page: Option<usize>) -> Result<UsersView> {
    let mut view = UsersView::new();
    if let Some(page) = page {
        view.go_to_page(&ctx.client, page).await?;
    }
    Ok(view)
}

fn report(view: &UsersView, user: &User, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", format_json_record(user)?),
        OutputFormat::Pretty | OutputFormat::Table => {
            if let Some(ref message) = view.list.success {
                eprintln!("{} {}", "✓".green(), message);
            }
        }
    }
    Ok(())
}
