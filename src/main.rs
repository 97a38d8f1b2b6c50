//! recruitop - Super-admin companion for the recruiting platform

use clap::{CommandFactory, Parser};
use env_logger::Env;
use log::LevelFilter;

mod admin;
mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod store;

use cli::args::GlobalOptions;
use cli::{Cli, Commands, CreditCommands, OrgCommands, UserCommands};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if cli.debug {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.format_timestamp(None).init();

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("recruitop version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Console => cli::console::run(&opts).await,
        Commands::User(cmd) => match cmd {
            UserCommands::List { page } => cli::user::list(&opts, &page).await,
            UserCommands::Show { user_id, page } => cli::user::show(&opts, user_id, page).await,
            UserCommands::Activate { user_id } => {
                cli::user::set_status(&opts, user_id, true).await
            }
            UserCommands::Deactivate { user_id } => {
                cli::user::set_status(&opts, user_id, false).await
            }
            UserCommands::ToggleStatus { user_id, page } => {
                cli::user::toggle_status(&opts, user_id, page).await
            }
            UserCommands::ToggleStaff { user_id, page } => {
                cli::user::toggle_staff(&opts, user_id, page).await
            }
        },
        Commands::Credit(CreditCommands::Adjust {
            recruiter_id,
            amount,
            operation,
            notes,
            yes,
        }) => {
            let args = cli::credit::AdjustArgs {
                recruiter_id,
                amount,
                operation,
                notes,
                yes,
            };
            cli::credit::adjust(&opts, args).await
        }
        Commands::Org(cmd) => match cmd {
            OrgCommands::List { page } => cli::org::list(&opts, &page).await,
            OrgCommands::Jobs { org_id, page } => cli::org::jobs(&opts, org_id, page).await,
        },
        Commands::Demo(cmd) => cli::demo::run(&opts, cmd),
        Commands::Completion { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "recruitop",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}
