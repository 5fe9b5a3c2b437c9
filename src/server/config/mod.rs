//! Load and validate server configuration.
use std::{env, path::PathBuf};

use serde::Deserialize;
use tracing::{error, info};

use crate::lib::errors::ConfigError;

pub mod cors;
pub mod server;
pub mod telemetry;
pub mod widgets;

pub use cors::{parse_cors_section, CorsSection, RawCorsSection, WILDCARD_ORIGIN};
pub use server::{parse_server_section, RawServerSection, ServerSection, DEFAULT_HOST, DEFAULT_PORT};
pub use widgets::{
    parse_widgets_section, RawWidgetsSection, WidgetsSection, DEFAULT_ASSETS_DIR, DEFAULT_BASE_URL,
};

const CONFIG_ENV_KEY: &str = "MCP_CONFIG_PATH";
const DEFAULT_CONFIG_PATH: &str = "config.toml";
const ENV_PREFIX: &str = "PIZZAZ";
const ENV_SEPARATOR: &str = "__";

/// Top-level configuration container.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub server: ServerSection,
    pub widgets: WidgetsSection,
    pub cors: CorsSection,
    pub source_path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct RawServerConfig {
    server: Option<RawServerSection>,
    widgets: Option<RawWidgetsSection>,
    cors: Option<RawCorsSection>,
}

impl ServerConfig {
    /// Prefer `MCP_CONFIG_PATH` if set; otherwise read `config.toml` when present.
    ///
    /// Every setting has a default, so the server starts with no file at all;
    /// an explicitly named file must exist.
    pub fn load_from_env_or_default() -> Result<Self, ConfigError> {
        let (path, explicit) = match env::var(CONFIG_ENV_KEY) {
            Ok(value) if !value.trim().is_empty() => (PathBuf::from(value), true),
            _ => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
        };

        telemetry::log_config_source(&path, explicit);
        Self::load_from_path(path, explicit)
    }

    /// Load configuration from a specific path, layering `PIZZAZ_*` environment
    /// overrides (e.g. `PIZZAZ_SERVER__PORT`) on top of the file.
    pub fn load_from_path(path: PathBuf, required: bool) -> Result<Self, ConfigError> {
        info!(
            target: "pizzaz_mcp::config",
            path = %path.display(),
            required,
            "Starting configuration load"
        );

        let builder = config::Config::builder()
            .add_source(config::File::from(path.clone()).required(required))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            );
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "pizzaz_mcp::config",
                path = %path.display(),
                reason = %error,
                "Failed to read configuration file"
            );
            error
        })?;

        let raw: RawServerConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "pizzaz_mcp::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        let config = Self::from_raw(raw, path.clone()).map_err(|err| {
            error!(
                target: "pizzaz_mcp::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate configuration file"
            );
            err
        })?;

        telemetry::log_loaded(&config);
        Ok(config)
    }

    fn from_raw(raw: RawServerConfig, path: PathBuf) -> Result<Self, ConfigError> {
        let server = parse_server_section(raw.server, &path)?;
        let widgets = parse_widgets_section(raw.widgets, &path)?;
        let cors = parse_cors_section(raw.cors, &path)?;

        Ok(Self {
            server,
            widgets,
            cors,
            source_path: path,
        })
    }
}
