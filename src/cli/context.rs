//! Command execution context
//!
//! Provides a unified context for command execution, eliminating boilerplate
//! for config loading, override handling, and client initialization.

use log::debug;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::SuperAdminClient;
use crate::config::Config;
use crate::error::Result;

/// Context for API-backed commands.
///
/// Holds the client built from configuration with flag and environment
/// overrides applied, plus the resolved output format.
pub struct CommandContext {
    /// Super-admin API client
    pub client: SuperAdminClient,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// A missing config file is not an error as long as an API URL arrives
    /// from `--api-url` or `RECRUITOP_API_URL`.
    ///
    /// # Errors
    /// Returns error if the config file is unreadable or no API URL is known.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = load_config(opts)?;
        let client = SuperAdminClient::from_config(&config)?;
        let format = opts.resolve_format(&config);

        debug!("Using API at {}", client.base_url());

        Ok(Self { client, format })
    }
}

/// Load the config file (or defaults) and apply flag overrides.
///
/// Used directly by commands that never touch the API, such as `demo`.
pub fn load_config(opts: &GlobalOptions) -> Result<Config> {
    let mut config = Config::load_or_default(opts.config_ref())?;
    config.apply_overrides(opts.api_url.as_deref(), opts.token.as_deref());
    Ok(config)
}
