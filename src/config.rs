//! Configuration management for the `TripMate` service
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::TripMateError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "TRIPMATE_CONFIG";

/// Root configuration structure for the `TripMate` service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TripMateConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Encyclopedia summary lookup settings
    #[serde(default)]
    pub summary: SummaryConfig,
    /// Static catalog settings
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Build and deployment metadata
    #[serde(default)]
    pub app: AppConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind to
    #[serde(default = "default_host")]
    pub host: String,
    /// TCP port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
    /// Origins allowed by CORS; `*` allows any origin
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
    /// Upper bound for handling a single request
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u32,
}

/// Encyclopedia summary API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// Base URL of the REST summary API
    #[serde(default = "default_summary_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_summary_timeout")]
    pub timeout_seconds: u32,
    /// User agent sent with every lookup
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Static catalog settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON seed file replacing the built-in seed set
    #[serde(default)]
    pub seed_path: Option<String>,
    /// Maximum number of results returned by `/search`
    #[serde(default = "default_search_limit")]
    pub search_limit: usize,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Build and deployment metadata reported by `/version`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_commit")]
    pub commit: String,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_allowed_origins() -> Vec<String> {
    vec!["https://apex.oracle.com".to_string()]
}

fn default_request_timeout() -> u32 {
    30
}

fn default_summary_base_url() -> String {
    "https://en.wikipedia.org/api/rest_v1".to_string()
}

fn default_summary_timeout() -> u32 {
    8
}

fn default_user_agent() -> String {
    "TripMate/1.1 (support@example.com)".to_string()
}

fn default_search_limit() -> usize {
    8
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_app_name() -> String {
    "tripmate".to_string()
}

fn default_commit() -> String {
    "dev".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origins: default_allowed_origins(),
            request_timeout_seconds: default_request_timeout(),
        }
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            base_url: default_summary_base_url(),
            timeout_seconds: default_summary_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed_path: None,
            search_limit: default_search_limit(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            commit: default_commit(),
        }
    }
}

impl TripMateConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from))
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| PathBuf::from("tripmate.toml"));

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // TRIPMATE_SERVER__PORT=8080, TRIPMATE_SERVER__ALLOWED_ORIGINS=a,b
        builder = builder.add_source(
            Environment::with_prefix("TRIPMATE")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("server.allowed_origins")
                .try_parsing(true),
        );

        // Hosting platforms hand these out without our prefix
        builder = builder
            .set_override_option("server.port", env::var("PORT").ok())
            .with_context(|| "Failed to apply PORT override")?
            .set_override_option("app.commit", env::var("RENDER_GIT_COMMIT").ok())
            .with_context(|| "Failed to apply commit override")?;

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: TripMateConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Apply default values to empty configuration fields
    pub fn apply_defaults(&mut self) {
        if self.server.host.is_empty() {
            self.server.host = default_host();
        }
        if self.summary.base_url.is_empty() {
            self.summary.base_url = default_summary_base_url();
        }
        if self.summary.user_agent.is_empty() {
            self.summary.user_agent = default_user_agent();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.app.commit.is_empty() {
            self.app.commit = default_commit();
        }
        self.summary.base_url = self.summary.base_url.trim_end_matches('/').to_string();
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(TripMateError::config("Server port must be non-zero").into());
        }

        if self.server.request_timeout_seconds > 300 {
            return Err(
                TripMateError::config("Request timeout cannot exceed 300 seconds").into(),
            );
        }

        if self.summary.timeout_seconds == 0 {
            return Err(TripMateError::config("Summary API timeout must be non-zero").into());
        }

        if self.summary.timeout_seconds > 60 {
            return Err(
                TripMateError::config("Summary API timeout cannot exceed 60 seconds").into(),
            );
        }

        if self.catalog.search_limit == 0 {
            return Err(TripMateError::config("Search limit must be at least 1").into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TripMateError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TripMateError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if !self.summary.base_url.starts_with("http://")
            && !self.summary.base_url.starts_with("https://")
        {
            return Err(TripMateError::config(
                "Summary API base URL must be a valid HTTP or HTTPS URL",
            )
            .into());
        }

        Ok(())
    }
}
