use crate::{cli::LaunchProfile, server::config::ServerConfig};

/// Build the `ServerInfo.instructions` string shown to MCP clients.
pub fn build_instructions(profile: &LaunchProfile, config: &ServerConfig) -> String {
    format!(
        "Pizzaz demo widgets loaded from {path}; serving in {transport} mode (host={host}, port={port}). Call a pizza tool with a topping to render its widget; widget templates are served as resources under {base_url}.",
        path = config.source_path.display(),
        transport = profile.transport.as_str(),
        host = config.server.host,
        port = config.server.port,
        base_url = config.widgets.base_url
    )
}
