//! Init command implementation

use colored::Colorize;
use dialoguer::{Confirm, Input, Password, theme::ColorfulTheme};

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::cli::handlers::with_spinner;
use crate::client::api::UserAdminApi;
use crate::client::{PageParams, SuperAdminClient};
use crate::config::Config;
use crate::error::Result;

/// Run the init command
///
/// Prompts for the API URL and bearer token, checks them with one users
/// request, and writes the config file. Existing preferences are kept.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let theme = ColorfulTheme::default();
    let mut config = Config::load_or_default(opts.config_ref())?;

    println!("{}", "Welcome to recruitop!".bold().green());
    println!("Let's connect to your super-admin API.\n");

    let default_url = opts
        .api_url
        .clone()
        .or_else(|| config.api_url.clone())
        .unwrap_or_default();
    let mut url_prompt = Input::<String>::with_theme(&theme).with_prompt("API base URL");
    if !default_url.is_empty() {
        url_prompt = url_prompt.default(default_url);
    }
    let api_url = url_prompt.interact_text()?.trim().to_string();

    let token: String = Password::with_theme(&theme)
        .with_prompt("Bearer token (leave empty for none)")
        .allow_empty_password(true)
        .interact()?;

    config.api_url = Some(api_url);
    config.auth_token = Some(token).filter(|t| !t.trim().is_empty());

    let client = SuperAdminClient::from_config(&config)?;
    let check = with_spinner(
        "Checking access...",
        OutputFormat::Pretty,
        client.list_users(&PageParams::new()),
    )
    .await;

    match check {
        Ok(page) => println!(
            "{} Connected ({} users visible)",
            "✓".green(),
            page.count
        ),
        Err(e) => {
            println!("{} Could not verify access: {}", "✗".red(), e.user_message());
            let save = Confirm::with_theme(&theme)
                .with_prompt("Save configuration anyway?")
                .default(false)
                .interact()?;
            if !save {
                println!("Cancelled.");
                return Ok(());
            }
        }
    }

    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Show configuration status", "recruitop status".cyan());
    println!("  {} - List platform users", "recruitop user list".cyan());
    println!("  {} - Open the interactive console", "recruitop console".cyan());

    Ok(())
}
