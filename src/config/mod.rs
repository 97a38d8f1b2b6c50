//! Configuration management for recruitop

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the super-admin API (e.g. `https://hire.example.com`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Bearer token sent with every request. Absent means no header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Client-side request pacing
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,

    /// HTTP timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Reject list responses that are not a paginated envelope
    #[serde(default)]
    pub strict_envelope: bool,

    /// Location of the demo directory database (defaults to the data dir)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_store: Option<PathBuf>,
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            format: None,
            requests_per_second: default_requests_per_second(),
            timeout_secs: default_timeout_secs(),
            strict_envelope: false,
            demo_store: None,
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".recruitop").join("config.yaml"))
    }

    /// Resolve an explicit path override or fall back to the default location
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from an optional path override
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        Self::load_from(Self::resolve_path(path)?)
    }

    /// Load configuration, or start from defaults when no file exists yet.
    ///
    /// Used by commands that can run purely from flags and environment.
    pub fn load_or_default(path: Option<&str>) -> Result<Self> {
        match Self::load_at(path) {
            Ok(config) => Ok(config),
            Err(crate::error::Error::Config(ConfigError::NotFound)) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration to an optional path override
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(Self::resolve_path(path)?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // Token lives in this file
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Apply runtime overrides from flags or their environment variables.
    pub fn apply_overrides(&mut self, api_url: Option<&str>, token: Option<&str>) {
        if let Some(url) = api_url {
            self.api_url = Some(url.to_string());
        }
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            self.auth_token = Some(token.to_string());
        }
    }

    /// The configured API URL without a trailing slash
    pub fn require_api_url(&self) -> Result<String> {
        self.api_url
            .as_deref()
            .map(|u| u.trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
            .ok_or_else(|| ConfigError::MissingApiUrl.into())
    }

    /// Expiry of the bearer token when it is a JWT carrying an `exp` claim
    pub fn token_expires_at(&self) -> Option<DateTime<Utc>> {
        self.auth_token.as_deref().and_then(decode_jwt_expiry)
    }

    /// Resolve the demo directory database path
    pub fn demo_store_path(&self) -> Result<PathBuf> {
        if let Some(ref path) = self.preferences.demo_store {
            return Ok(path.clone());
        }
        let data = dirs::data_dir().ok_or(ConfigError::Invalid(
            "Could not determine data directory".to_string(),
        ))?;
        Ok(data.join("recruitop").join("demo.db"))
    }
}

/// Read the `exp` claim from a JWT without verifying it.
///
/// Opaque tokens return `None`; the server remains the authority on validity.
pub fn decode_jwt_expiry(token: &str) -> Option<DateTime<Utc>> {
    use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};

    #[derive(Deserialize)]
    struct Claims {
        exp: i64,
    }

    let mut parts = token.split('.');
    let (_header, payload, _sig) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let claims: Claims = serde_json::from_slice(&bytes).ok()?;
    DateTime::from_timestamp(claims.exp, 0)
}
