//! Entry point for Pizzaz MCP.
use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use pizzaz_mcp::{
    cli::{execute_cli_command, CliCommand, LaunchProfileArgs, ParsedCommand},
    lib::telemetry,
    server::{
        config::ServerConfig,
        runtime::{self, RuntimeExit},
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    match bootstrap().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

async fn bootstrap() -> Result<(), RuntimeExit> {
    telemetry::init_tracing().map_err(RuntimeExit::from_error)?;
    let args = LaunchProfileArgs::parse();
    let command = args.into_command().map_err(RuntimeExit::from_error)?;

    match command {
        ParsedCommand::RunServer(profile) => run_server(profile).await,
        ParsedCommand::Cli(command, config_override) => {
            handle_cli_command(command, config_override)
        }
    }
}

async fn run_server(profile: pizzaz_mcp::cli::LaunchProfile) -> Result<(), RuntimeExit> {
    let config =
        ServerConfig::load_from_path(profile.config_path.clone(), profile.config_required)
            .map_err(RuntimeExit::from_error)?;
    runtime::run_server(profile, config).await
}

fn handle_cli_command(
    command: CliCommand,
    config_override: Option<PathBuf>,
) -> Result<(), RuntimeExit> {
    let message =
        execute_cli_command(command, config_override).map_err(RuntimeExit::from_error)?;
    println!("{message}");
    Ok(())
}
