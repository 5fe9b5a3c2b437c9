//! CLI entrypoint module structure.
use std::path::PathBuf;

use anyhow::Result;
use serde_json::json;

use crate::{server::config::ServerConfig, widgets::builtin_catalog};

pub mod args;
pub mod profile;

pub use args::{CliCommand, LaunchProfileArgs, ParsedCommand};
pub use profile::{build_launch_args, resolve_config_path, LaunchProfile, TransportMode};

/// Execute CLI command mode and return a user-facing result payload.
pub fn execute_cli_command(
    command: CliCommand,
    config_override: Option<PathBuf>,
) -> Result<String> {
    match command {
        CliCommand::Widgets => {
            let (path, required) = resolve_config_path(config_override)?;
            let config = ServerConfig::load_from_path(path, required)?;
            let catalog = builtin_catalog(&config.widgets)?;

            let widgets: Vec<_> = catalog
                .list_all()
                .iter()
                .map(|widget| {
                    json!({
                        "id": widget.id,
                        "title": widget.title,
                        "template_uri": widget.template_uri,
                    })
                })
                .collect();
            let payload = json!({
                "widget_base_url": config.widgets.base_url,
                "widgets": widgets,
            });

            Ok(serde_json::to_string_pretty(&payload)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }

    #[test]
    fn widgets_command_prints_the_catalog() {
        let payload =
            execute_cli_command(CliCommand::Widgets, Some(fixture_path("config_valid.toml")))
                .expect("widgets command should succeed");

        assert!(
            payload.contains("\"id\": \"pizza-map\""),
            "payload: {payload}"
        );
        assert!(
            payload.contains("https://cdn.example.com/widgets/pizzaz.html"),
            "payload: {payload}"
        );
    }

    #[test]
    fn widgets_command_fails_for_missing_explicit_config() {
        let result = execute_cli_command(
            CliCommand::Widgets,
            Some(fixture_path("config_does_not_exist.toml")),
        );

        assert!(result.is_err());
    }
}
