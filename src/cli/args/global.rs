//! Global CLI options shared across all commands
//!
//! This module provides a centralized struct for global CLI options, so
//! handlers take one argument instead of every flag.

use crate::cli::{Cli, OutputFormat};
use crate::config::Config;

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// CLI flag > environment variable > config file > default. This struct
/// captures the CLI/env layer; config file defaults are resolved in
/// [`GlobalOptions::resolve_format`] and `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format when given on the command line
    pub format: Option<OutputFormat>,

    /// Custom config file path (defaults to ~/.recruitop/config.yaml)
    pub config: Option<String>,

    /// API base URL override
    pub api_url: Option<String>,

    /// Bearer token override
    pub token: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            api_url: cli.api_url.clone(),
            token: cli.token.clone(),
        }
    }

    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Flag, then the config preference, then pretty.
    pub fn resolve_format(&self, config: &Config) -> OutputFormat {
        self.format
            .or_else(|| {
                config
                    .preferences
                    .format
                    .as_deref()
                    .and_then(OutputFormat::from_name)
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_flag_beats_config() {
        let mut config = Config::default();
        config.preferences.format = Some("table".to_string());

        let opts = GlobalOptions {
            format: Some(OutputFormat::Json),
            ..GlobalOptions::default()
        };
        assert_eq!(opts.resolve_format(&config), OutputFormat::Json);

        let opts = GlobalOptions::default();
        assert_eq!(opts.resolve_format(&config), OutputFormat::Table);
        assert_eq!(opts.resolve_format(&Config::default()), OutputFormat::Pretty);
    }

    #[test]
    fn test_config_ref() {
        let opts = GlobalOptions {
            config: Some("/custom/path".to_string()),
            ..GlobalOptions::default()
        };
        assert_eq!(opts.config_ref(), Some("/custom/path"));
    }
}
