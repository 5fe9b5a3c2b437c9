use tracing::{debug, info};

use super::{ServerConfig, CONFIG_ENV_KEY, DEFAULT_CONFIG_PATH};

pub fn log_config_source(path: &std::path::Path, explicit: bool) {
    if explicit {
        info!(
            target: "pizzaz_mcp::config",
            path = %path.display(),
            "Loading configuration from an explicitly named file"
        );
    } else {
        debug!(
            target: "pizzaz_mcp::config",
            path = %path.display(),
            env = CONFIG_ENV_KEY,
            default = DEFAULT_CONFIG_PATH,
            "MCP_CONFIG_PATH not set; using default config.toml when present"
        );
    }
}

pub fn log_loaded(config: &ServerConfig) {
    info!(
        target: "pizzaz_mcp::config",
        path = %config.source_path.display(),
        host = %config.server.host,
        port = config.server.port,
        widget_base_url = %config.widgets.base_url,
        assets_dir = %config.widgets.assets_dir.display(),
        cors_origins = config.cors.allowed_origins.len(),
        "Configuration loaded successfully"
    );
}
