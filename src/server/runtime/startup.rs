use std::{process::ExitCode, sync::Arc};

use anyhow::Error;
use rmcp::ServiceExt;

use crate::{
    cli::{LaunchProfile, TransportMode},
    lib::telemetry::{self, RuntimeModeTelemetry},
    server::{
        config::ServerConfig,
        http,
        runtime::{build_instructions, WidgetServer},
    },
    widgets::builtin_catalog,
};

/// Bundles a runtime error message with an exit code.
#[derive(Debug)]
pub struct RuntimeExit {
    message: String,
    exit_code: ExitCode,
}

impl RuntimeExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:?}"),
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        self.exit_code
    }

    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

/// Start the MCP server and select HTTP/stdio based on the launch profile.
pub async fn run_server(profile: LaunchProfile, config: ServerConfig) -> Result<(), RuntimeExit> {
    let catalog = builtin_catalog(&config.widgets).map_err(RuntimeExit::from_error)?;
    let catalog = Arc::new(catalog);

    let instructions = build_instructions(&profile, &config);
    let server = WidgetServer::new(config.clone(), Arc::clone(&catalog), instructions);

    telemetry::emit_runtime_mode(&RuntimeModeTelemetry {
        transport: profile.transport.as_str(),
        host: config.server.host.as_str(),
        port: config.server.port,
        config_path: config.source_path.to_string_lossy().as_ref(),
        widget_count: catalog.len(),
        widget_base_url: config.widgets.base_url.as_str(),
        launch_args: &profile.launch_args,
    });

    match profile.transport {
        TransportMode::Http => http::run_http(server, &config).await,
        TransportMode::Stdio => run_stdio(server).await,
    }
}

async fn run_stdio(server: WidgetServer) -> Result<(), RuntimeExit> {
    let running = server
        .serve(rmcp::transport::stdio())
        .await
        .map_err(RuntimeExit::from_error)?;
    running.waiting().await.map_err(RuntimeExit::from_error)?;
    Ok(())
}
