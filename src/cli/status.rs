//! Status command implementation

use chrono::Utc;
use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::context::load_config;
use crate::config::Config;
use crate::error::Result;

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "recruitop Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    if config_path.exists() {
        println!("Config file: {}", config_path.display().to_string().cyan());
    } else {
        println!(
            "Config file: {} {}",
            config_path.display().to_string().cyan(),
            "(not created)".dimmed()
        );
    }
    println!();

    let config = load_config(opts)?;

    match config.require_api_url() {
        Ok(url) => println!("{} API URL: {}", "✓".green(), url),
        Err(_) => {
            println!("{} API URL not configured", "✗".red());
            println!("  → Run 'recruitop init' or set RECRUITOP_API_URL");
        }
    }

    match config.auth_token {
        None => println!("{} No bearer token (requests are sent unauthenticated)", "○".dimmed()),
        Some(_) => match config.token_expires_at() {
            Some(expires) if expires <= Utc::now() => {
                println!("{} Bearer token expired", "⚠".yellow());
                println!("  → Run 'recruitop init' to store a new one");
            }
            Some(expires) => {
                let remaining = expires.signed_duration_since(Utc::now());
                println!(
                    "{} Bearer token valid (expires in {}h {}m)",
                    "✓".green(),
                    remaining.num_hours(),
                    remaining.num_minutes() % 60
                );
            }
            None => println!("{} Bearer token configured", "✓".green()),
        },
    }

    if config.preferences.strict_envelope {
        println!("{} Strict pagination envelopes", "○".dimmed());
    }

    match config.demo_store_path() {
        Ok(path) => println!("{} Demo store: {}", "○".dimmed(), path.display()),
        Err(e) => println!("{} Demo store unavailable: {}", "✗".red(), e),
    }

    println!();
    Ok(())
}
