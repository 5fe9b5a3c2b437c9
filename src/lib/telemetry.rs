//! Telemetry initialization and runtime-mode reporting.

use anyhow::Result;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize `tracing` and format developer logs.
///
/// Logs go to stderr so the stdio transport keeps stdout clean for the protocol.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Payload for logging MCP runtime state as structured telemetry.
#[derive(Debug, Serialize)]
pub struct RuntimeModeTelemetry<'a> {
    pub transport: &'a str,
    pub host: &'a str,
    pub port: u16,
    pub config_path: &'a str,
    pub widget_count: usize,
    pub widget_base_url: &'a str,
    pub launch_args: &'a [String],
}

/// Emit runtime mode to `tracing`.
pub fn emit_runtime_mode(telemetry: &RuntimeModeTelemetry<'_>) {
    info!(
        target: "pizzaz_mcp::runtime",
        transport = telemetry.transport,
        host = telemetry.host,
        port = telemetry.port,
        config_path = telemetry.config_path,
        widget_count = telemetry.widget_count,
        widget_base_url = telemetry.widget_base_url,
        launch_args = ?telemetry.launch_args,
        "Started MCP server"
    );
}
