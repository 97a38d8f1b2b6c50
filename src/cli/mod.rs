//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod console;
pub mod context;
pub mod credit;
pub mod demo;
pub mod detail;
pub mod handlers;
pub mod init;
pub mod org;
pub mod status;
pub mod user;

pub use args::{OutputFormat, PageArgs};
pub use context::CommandContext;

use crate::admin::CreditOperation;
use crate::store::DemoRole;

/// recruitop - Super-admin companion for the recruiting platform
#[derive(Parser, Debug)]
#[command(name = "recruitop")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "RECRUITOP_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "RECRUITOP_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the API base URL
    #[arg(long, global = true, env = "RECRUITOP_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Override the bearer token
    #[arg(
        long,
        global = true,
        env = "RECRUITOP_AUTH_TOKEN",
        hide_env = true,
        hide_env_values = true
    )]
    pub token: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "RECRUITOP_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize recruitop configuration
    Init,

    /// Show configuration status
    Status,

    /// Display version information
    Version,

    /// Interactive console with users, organizations and credits tabs
    Console,

    /// Manage platform users
    #[command(subcommand)]
    User(UserCommands),

    /// Adjust recruiter credits
    #[command(subcommand)]
    Credit(CreditCommands),

    /// Browse organizations and their jobs
    #[command(subcommand)]
    Org(OrgCommands),

    /// Manage the local demo directory
    #[command(subcommand)]
    Demo(DemoCommands),

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   recruitop completion bash > /etc/bash_completion.d/recruitop
  zsh:    recruitop completion zsh > \"${fpath[1]}/_recruitop\"
  fish:   recruitop completion fish > ~/.config/fish/completions/recruitop.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// User management subcommands
#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// List users one page at a time
    #[command(
        visible_alias = "ls",
        after_help = "EXAMPLES:\n  \
            recruitop user list                     # First page\n  \
            recruitop user list --page 3            # Third page\n  \
            recruitop user list -s acme             # Filter loaded page by name/email\n  \
            recruitop user list --format json | jq '.data.items'"
    )]
    List {
        #[command(flatten)]
        page: PageArgs,
    },

    /// Show a user with the jobs visible to them
    #[command(visible_alias = "g")]
    Show {
        /// User ID
        user_id: i64,

        /// Page to start searching from
        #[arg(long, short = 'p')]
        page: Option<usize>,
    },

    /// Activate a user account
    Activate {
        /// User ID
        user_id: i64,
    },

    /// Deactivate a user account
    Deactivate {
        /// User ID
        user_id: i64,
    },

    /// Flip a user's active flag
    ToggleStatus {
        /// User ID
        user_id: i64,

        /// Page to start searching from
        #[arg(long, short = 'p')]
        page: Option<usize>,
    },

    /// Flip a user's staff flag
    ToggleStaff {
        /// User ID
        user_id: i64,

        /// Page to start searching from
        #[arg(long, short = 'p')]
        page: Option<usize>,
    },
}

/// Credit subcommands
#[derive(Subcommand, Debug)]
pub enum CreditCommands {
    /// Add or subtract credits with an audit note
    #[command(after_help = "EXAMPLES:\n  \
            recruitop credit adjust 42 --amount 100 --notes \"Q3 top-up\"\n  \
            recruitop credit adjust 42 --amount 50 --op subtract --notes \"Refund\" --yes")]
    Adjust {
        /// Recruiter (user) ID
        recruiter_id: String,

        /// Positive number of credits (prompted when omitted)
        #[arg(long, short = 'a', allow_hyphen_values = true)]
        amount: Option<String>,

        /// add or subtract
        #[arg(long = "op", short = 'o', default_value = "add")]
        operation: CreditOperation,

        /// Audit note, up to 500 characters (prompted when omitted)
        #[arg(long, short = 'n')]
        notes: Option<String>,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Organization subcommands
#[derive(Subcommand, Debug)]
pub enum OrgCommands {
    /// List organizations one page at a time
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        page: PageArgs,
    },

    /// Show an organization's jobs with per-stage candidate counts
    Jobs {
        /// Organization ID
        org_id: i64,

        /// Page to start searching from
        #[arg(long, short = 'p')]
        page: Option<usize>,
    },
}

/// Demo directory subcommands
#[derive(Subcommand, Debug)]
pub enum DemoCommands {
    /// List demo accounts
    Users,

    /// List demo organizations
    Orgs,

    /// List demo workspaces
    Workspaces,

    /// Create a demo account
    CreateUser {
        #[arg(long)]
        email: String,

        /// Full name
        #[arg(long)]
        name: String,

        /// super_admin, admin, recruiter or hiring_manager
        #[arg(long, default_value = "recruiter")]
        role: DemoRole,

        /// Organization ID
        #[arg(long)]
        org: Option<String>,

        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Update a demo account
    UpdateUser {
        user_id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        role: Option<DemoRole>,

        /// Move to another organization
        #[arg(long, conflicts_with = "no_org")]
        org: Option<String>,

        /// Detach from any organization
        #[arg(long)]
        no_org: bool,
    },

    /// Delete a demo account
    DeleteUser {
        user_id: String,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Create a demo organization
    CreateOrg {
        #[arg(long)]
        name: String,

        #[arg(long)]
        domain: String,
    },

    /// Rename a demo organization or change its domain
    UpdateOrg {
        org_id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        domain: Option<String>,
    },

    /// Delete an organization, its workspaces, and detach its users
    DeleteOrg {
        org_id: String,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Create a workspace in an organization
    CreateWorkspace {
        #[arg(long)]
        name: String,

        /// Organization ID
        #[arg(long)]
        org: String,
    },

    /// Delete a workspace
    DeleteWorkspace {
        workspace_id: String,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Add a user to a workspace
    AddMember { workspace_id: String, user_id: String },

    /// Remove a user from a workspace
    RemoveMember { workspace_id: String, user_id: String },

    /// Check a demo login
    Login {
        email: String,

        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Discard demo changes and restore the seed records
    Reset {
        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_credit_adjust() {
        let cli = Cli::parse_from([
            "recruitop", "credit", "adjust", "7", "--amount", "50", "--op", "subtract", "--notes",
            "Refund", "--yes",
        ]);
        let Commands::Credit(CreditCommands::Adjust {
            recruiter_id,
            amount,
            operation,
            yes,
            ..
        }) = cli.command
        else {
            panic!("expected credit adjust");
        };
        assert_eq!(recruiter_id, "7");
        assert_eq!(amount.as_deref(), Some("50"));
        assert_eq!(operation, CreditOperation::Subtract);
        assert!(yes);
    }

    #[test]
    fn test_parse_demo_update_user_detach() {
        let cli = Cli::parse_from(["recruitop", "demo", "update-user", "usr-2", "--no-org"]);
        assert!(matches!(
            cli.command,
            Commands::Demo(DemoCommands::UpdateUser { no_org: true, org: None, .. })
        ));
    }

    #[test]
    fn test_format_flag_is_optional() {
        let cli = Cli::parse_from(["recruitop", "--format", "json", "status"]);
        assert_eq!(cli.format, Some(OutputFormat::Json));
    }
}
