//! Demo directory commands
//!
//! Stand-in accounts, organizations and workspaces kept in a local SQLite
//! file. Nothing here talks to the super-admin API.

use colored::Colorize;
use dialoguer::{Confirm, Password, theme::ColorfulTheme};
use log::debug;
use serde_json::json;

use crate::cli::args::GlobalOptions;
use crate::cli::context::load_config;
use crate::cli::{DemoCommands, OutputFormat};
use crate::error::Result;
use crate::models::{DemoOrgDisplay, DemoUserDisplay, WorkspaceDisplay};
use crate::output::Formattable;
use crate::output::json::format_json_record;
use crate::store::{DemoDirectory, DemoUserUpdate, KeyValueStore, NewDemoUser, SqliteStore};

/// Run a demo subcommand against the configured store
pub fn run(opts: &GlobalOptions, command: DemoCommands) -> Result<()> {
    let config = load_config(opts)?;
    let format = opts.resolve_format(&config);
    let store = SqliteStore::open(&config.demo_store_path()?)?;
    debug!("Opening demo store at {}", store.path().display());

    let mut directory = DemoDirectory::open(store)?;

    match command {
        DemoCommands::Users => print_users(&directory, format),
        DemoCommands::Orgs => {
            let rows: Vec<DemoOrgDisplay> = directory
                .organizations()
                .iter()
                .map(|o| DemoOrgDisplay::new(o, directory.is_seed_organization(&o.id)))
                .collect();
            rows.print(format)
        }
        DemoCommands::Workspaces => {
            let rows: Vec<WorkspaceDisplay> = directory
                .workspaces()
                .iter()
                .map(|w| WorkspaceDisplay::new(w, directory.is_seed_workspace(&w.id)))
                .collect();
            rows.print(format)
        }
        DemoCommands::CreateUser {
            email,
            name,
            role,
            org,
            password,
        } => {
            let password = match password {
                Some(p) => p,
                None => Password::with_theme(&ColorfulTheme::default())
                    .with_prompt("Password")
                    .with_confirmation("Confirm password", "Passwords do not match")
                    .interact()?,
            };
            let user = directory.create_user(NewDemoUser {
                email,
                full_name: name,
                password,
                role,
                organization_id: org,
            })?;
            done(format, &DemoUserDisplay::from(&user), || {
                format!("Created user {} ({})", user.email.bold(), user.id)
            })
        }
        DemoCommands::UpdateUser {
            user_id,
            name,
            role,
            org,
            no_org,
        } => {
            let organization_id = if no_org { Some(None) } else { org.map(Some) };
            let user = directory.update_user(
                &user_id,
                DemoUserUpdate {
                    full_name: name,
                    role,
                    organization_id,
                },
            )?;
            done(format, &DemoUserDisplay::from(&user), || {
                format!("Updated user {}", user.id)
            })
        }
        DemoCommands::DeleteUser { user_id, yes } => {
            let email = directory.user(&user_id)?.email.clone();
            if !confirm(yes, &format!("Delete user {} ({})?", email, user_id))? {
                return Ok(());
            }
            let user = directory.delete_user(&user_id)?;
            done(format, &DemoUserDisplay::from(&user), || {
                format!("Deleted user {}", user.email)
            })
        }
        DemoCommands::CreateOrg { name, domain } => {
            let org = directory.create_organization(&name, &domain)?;
            done(format, &DemoOrgDisplay::new(&org, false), || {
                format!("Created organization {} ({})", org.name.bold(), org.id)
            })
        }
        DemoCommands::UpdateOrg {
            org_id,
            name,
            domain,
        } => {
            let org = directory.update_organization(&org_id, name.as_deref(), domain.as_deref())?;
            let seeded = directory.is_seed_organization(&org.id);
            done(format, &DemoOrgDisplay::new(&org, seeded), || {
                format!("Updated organization {}", org.id)
            })
        }
        DemoCommands::DeleteOrg { org_id, yes } => {
            let org = directory.organization(&org_id)?;
            let workspaces = directory
                .workspaces()
                .iter()
                .filter(|w| w.organization_id == org_id)
                .count();
            let prompt = format!(
                "Delete organization {} and its {} workspace(s)?",
                org.name, workspaces
            );
            if !confirm(yes, &prompt)? {
                return Ok(());
            }

            let report = directory.delete_organization(&org_id)?;
            if format == OutputFormat::Json {
                println!("{}", format_json_record(&report)?);
                return Ok(());
            }
            eprintln!("{} Deleted organization {}", "✓".green(), report.organization_id);
            if !report.workspaces_removed.is_empty() {
                eprintln!(
                    "  Workspaces removed: {}",
                    report.workspaces_removed.join(", ")
                );
            }
            if !report.users_detached.is_empty() {
                eprintln!("  Users detached: {}", report.users_detached.join(", "));
            }
            Ok(())
        }
        DemoCommands::CreateWorkspace { name, org } => {
            let ws = directory.create_workspace(&name, &org)?;
            done(format, &WorkspaceDisplay::new(&ws, false), || {
                format!("Created workspace {} ({})", ws.name.bold(), ws.id)
            })
        }
        DemoCommands::DeleteWorkspace { workspace_id, yes } => {
            let name = directory.workspace(&workspace_id)?.name.clone();
            if !confirm(yes, &format!("Delete workspace {} ({})?", name, workspace_id))? {
                return Ok(());
            }
            let ws = directory.delete_workspace(&workspace_id)?;
            done(format, &WorkspaceDisplay::new(&ws, false), || {
                format!("Deleted workspace {}", ws.name)
            })
        }
        DemoCommands::AddMember {
            workspace_id,
            user_id,
        } => {
            let ws = directory.add_member(&workspace_id, &user_id)?;
            let seeded = directory.is_seed_workspace(&ws.id);
            done(format, &WorkspaceDisplay::new(&ws, seeded), || {
                format!("Added {} to {}", user_id, ws.name)
            })
        }
        DemoCommands::RemoveMember {
            workspace_id,
            user_id,
        } => {
            let ws = directory.remove_member(&workspace_id, &user_id)?;
            let seeded = directory.is_seed_workspace(&ws.id);
            done(format, &WorkspaceDisplay::new(&ws, seeded), || {
                format!("Removed {} from {}", user_id, ws.name)
            })
        }
        DemoCommands::Login { email, password } => {
            let password = match password {
                Some(p) => p,
                None => Password::with_theme(&ColorfulTheme::default())
                    .with_prompt("Password")
                    .interact()?,
            };
            let user = directory.authenticate(&email, &password)?;
            done(format, &DemoUserDisplay::from(user), || {
                format!("Signed in as {} ({})", user.full_name.bold(), user.role)
            })
        }
        DemoCommands::Reset { yes } => {
            if !confirm(yes, "Discard all demo changes and restore the seed data?")? {
                return Ok(());
            }
            directory.reset()?;
            if format == OutputFormat::Json {
                println!("{}", format_json_record(&json!({ "reset": true }))?);
            } else {
                eprintln!("{} Demo directory reset", "✓".green());
            }
            Ok(())
        }
    }
}

fn print_users<S: KeyValueStore>(
    directory: &DemoDirectory<S>,
    format: OutputFormat,
) -> Result<()> {
    let rows: Vec<DemoUserDisplay> = directory.users().iter().map(DemoUserDisplay::from).collect();
    rows.print(format)
}

/// Ask before a destructive change unless `--yes` was given.
fn confirm(yes: bool, prompt: &str) -> Result<bool> {
    if yes {
        return Ok(true);
    }
    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()?;
    if !confirmed {
        println!("Cancelled.");
    }
    Ok(confirmed)
}

/// Print a mutation result: the record as JSON, otherwise a check line.
fn done<T: serde::Serialize>(
    format: OutputFormat,
    record: &T,
    message: impl FnOnce() -> String,
) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", format_json_record(record)?);
    } else {
        eprintln!("{} {}", "✓".green(), message());
    }
    Ok(())
}
