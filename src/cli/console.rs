//! Interactive super-admin console
//!
//! A tab loop over the users list, the organizations list and the credit
//! form. One users view backs both the Users and Credits tabs, so a credit
//! adjustment shows up in the users table without a reload.

use colored::Colorize;
use dialoguer::{Input, Select, theme::ColorfulTheme};
use log::debug;
use serde::Serialize;
use tabled::Tabled;

use crate::admin::{CreditForm, CreditOperation, ListView, Listable, OrganizationsView, UsersView};
use crate::cli::args::GlobalOptions;
use crate::cli::detail::{print_jobs, print_user_panel};
use crate::cli::handlers::with_spinner;
use crate::cli::{CommandContext, OutputFormat};
use crate::client::SuperAdminApi;
use crate::client::models::{Organization, User};
use crate::error::{Result, ValidationError};
use crate::models::{OrgDisplay, UserDisplay};
use crate::output::table::{format_page_footer, format_table};

const TABS: [&str; 4] = ["Users", "Organizations", "Credits", "Quit"];

/// Run the console until the operator quits
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let theme = ColorfulTheme::default();
    let mut users = UsersView::new();
    let mut orgs = OrganizationsView::new();

    println!("{}", "recruitop console".bold());
    println!("Connected to {}\n", ctx.client.base_url().cyan());

    loop {
        let tab = Select::with_theme(&theme)
            .with_prompt("Section")
            .items(&TABS)
            .default(0)
            .interact_opt()?;

        match tab {
            Some(0) => users_tab(&ctx.client, &theme, &mut users).await?,
            Some(1) => orgs_tab(&ctx.client, &theme, &mut orgs).await?,
            Some(2) => credits_tab(&ctx.client, &theme, &mut users).await?,
            _ => break,
        }
    }

    Ok(())
}

async fn users_tab<A: SuperAdminApi + ?Sized>(
    client: &A,
    theme: &ColorfulTheme,
    view: &mut UsersView,
) -> Result<()> {
    if view.list.items.is_empty() {
        let _ = with_spinner("Loading users...", OutputFormat::Pretty, view.load(client)).await;
    }

    let actions = [
        "Next page",
        "Previous page",
        "Search",
        "Open user",
        "Toggle status",
        "Toggle staff",
        "Refresh",
        "Back",
    ];

    loop {
        show_list::<User, UserDisplay>(&view.list);

        let choice = Select::with_theme(theme)
            .with_prompt("Users")
            .items(&actions)
            .default(0)
            .interact_opt()?;
        debug!("Users action: {:?}", choice);

        match choice {
            Some(0) => {
                let _ = view.next_page(client).await;
            }
            Some(1) => {
                let _ = view.previous_page(client).await;
            }
            Some(2) => view.list.set_search(prompt_search(theme, &view.list.search)?),
            Some(3) => {
                if let Some(id) = prompt_id(theme, "User ID", &mut view.list)? {
                    let opening = view.open(client, id);
                    let _ = with_spinner("Loading user...", OutputFormat::Pretty, opening).await;
                    if let Some(ref panel) = view.list.selected {
                        println!();
                        print_user_panel(panel, OutputFormat::Pretty)?;
                        println!();
                    }
                }
            }
            Some(4) => {
                if let Some(id) = prompt_id(theme, "User ID", &mut view.list)? {
                    let _ = view.toggle_status(client, id).await;
                }
            }
            Some(5) => {
                if let Some(id) = prompt_id(theme, "User ID", &mut view.list)? {
                    let _ = view.toggle_staff(client, id).await;
                }
            }
            Some(6) => {
                let _ = view.load(client).await;
            }
            _ => {
                view.list.close();
                return Ok(());
            }
        }
    }
}

async fn orgs_tab<A: SuperAdminApi + ?Sized>(
    client: &A,
    theme: &ColorfulTheme,
    view: &mut OrganizationsView,
) -> Result<()> {
    if view.list.items.is_empty() {
        let _ = with_spinner(
            "Loading organizations...",
            OutputFormat::Pretty,
            view.load(client),
        )
        .await;
    }

    let actions = ["Next page", "Previous page", "Search", "View jobs", "Refresh", "Back"];

    loop {
        show_list::<Organization, OrgDisplay>(&view.list);

        let choice = Select::with_theme(theme)
            .with_prompt("Organizations")
            .items(&actions)
            .default(0)
            .interact_opt()?;

        match choice {
            Some(0) => {
                let _ = view.next_page(client).await;
            }
            Some(1) => {
                let _ = view.previous_page(client).await;
            }
            Some(2) => view.list.set_search(prompt_search(theme, &view.list.search)?),
            Some(3) => {
                if let Some(id) = prompt_id(theme, "Organization ID", &mut view.list)? {
                    let jobs = with_spinner(
                        "Loading jobs...",
                        OutputFormat::Pretty,
                        view.view_jobs(client, id),
                    )
                    .await;
                    if let Ok(jobs) = jobs {
                        println!();
                        print_jobs(jobs, OutputFormat::Pretty)?;
                        println!();
                    }
                }
            }
            Some(4) => {
                let _ = view.load(client).await;
            }
            _ => {
                view.list.close();
                return Ok(());
            }
        }
    }
}

async fn credits_tab<A: SuperAdminApi + ?Sized>(
    client: &A,
    theme: &ColorfulTheme,
    view: &mut UsersView,
) -> Result<()> {
    println!("{}", "Adjust recruiter credits".bold());

    let recruiter_id: String = Input::with_theme(theme)
        .with_prompt("Recruiter ID")
        .allow_empty(true)
        .interact_text()?;

    let operations = [CreditOperation::Add, CreditOperation::Subtract];
    let index = Select::with_theme(theme)
        .with_prompt("Operation")
        .items(&["Add", "Subtract"])
        .default(0)
        .interact()?;

    let amount: String = Input::with_theme(theme)
        .with_prompt("Amount")
        .allow_empty(true)
        .interact_text()?;
    let notes: String = Input::with_theme(theme)
        .with_prompt("Notes")
        .allow_empty(true)
        .interact_text()?;

    let form = CreditForm::new(recruiter_id, amount, operations[index], notes);
    let _ = with_spinner(
        "Adjusting credits...",
        OutputFormat::Pretty,
        view.adjust_credits(client, &form),
    )
    .await;

    print_banners(&view.list);
    view.list.error = None;
    view.list.success = None;
    Ok(())
}

/// Table, footer and any pending banner for a list view.
fn show_list<T, D>(list: &ListView<T>)
where
    T: Listable,
    D: for<'a> From<&'a T> + Tabled + Serialize,
{
    let rows: Vec<D> = list.visible().into_iter().map(D::from).collect();
    println!();
    println!("{}", format_table(&rows));
    let mut footer = format_page_footer(
        list.page,
        list.count,
        rows.len(),
        list.has_next,
        list.has_previous,
    );
    if !list.search.is_empty() {
        footer.push_str(&format!(" · search \"{}\"", list.search));
    }
    println!("{}", footer.dimmed());
    print_banners(list);
}

fn print_banners<T>(list: &ListView<T>) {
    if let Some(ref error) = list.error {
        println!("{} {}", "✗".red(), error.red());
    }
    if let Some(ref success) = list.success {
        println!("{} {}", "✓".green(), success.green());
    }
}

fn prompt_search(theme: &ColorfulTheme, current: &str) -> Result<String> {
    let term: String = Input::with_theme(theme)
        .with_prompt("Search (empty clears)")
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;
    Ok(term)
}

/// Ask for a numeric ID; a non-numeric answer becomes the view's error.
fn prompt_id<T: Listable>(
    theme: &ColorfulTheme,
    label: &'static str,
    list: &mut ListView<T>,
) -> Result<Option<i64>> {
    let raw: String = Input::with_theme(theme)
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()?;
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse() {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            list.record_error(ValidationError::InvalidId(label).to_string());
            Ok(None)
        }
    }
}
