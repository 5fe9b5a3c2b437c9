use std::path::PathBuf;

use config::ConfigError as ConfigLoaderError;
use rmcp::model::ErrorData;
use serde_json::json;
use thiserror::Error;

/// Errors that can occur while loading or validating configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to build (read) the configuration file.
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Required field is missing.
    #[error("Configuration file {path} is missing `{field}`")]
    MissingField { path: PathBuf, field: &'static str },
    /// Field failed validation.
    #[error("Configuration file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// Failures raised by the widget catalog.
///
/// `EmptyId` and `DuplicateId` can only occur at construction and are fatal to
/// startup. The lookup variants are reported per request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("widget id must not be empty")]
    EmptyId,
    #[error("duplicate widget id `{id}` in catalog")]
    DuplicateId { id: String },
    #[error("no widget registered with id `{id}`")]
    NotFound { id: String },
    #[error("no widget registered for template URI `{uri}`")]
    TemplateNotFound { uri: String },
}

/// Input validation errors for widget tool invocations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WidgetInputError {
    #[error("tool call carried no arguments object")]
    MissingArguments,
    #[error("required field `{field}` is missing")]
    MissingField { field: &'static str },
    #[error("field `{field}` must be a {expected}")]
    InvalidKind {
        field: &'static str,
        expected: &'static str,
    },
    #[error("topping must not be empty")]
    EmptyTopping,
    #[error("topping is too long ({length} characters)")]
    ToppingTooLong { length: usize },
}

/// Map a widget input error to protocol-level `ErrorData`.
pub fn input_error_to_error_data(error: &WidgetInputError) -> ErrorData {
    ErrorData::invalid_params(
        error.to_string(),
        Some(json!({ "code": "WIDGET_INPUT_INVALID" })),
    )
}

/// Map an unknown-tool lookup to protocol-level `ErrorData`.
pub fn unknown_tool_to_error_data(tool_name: &str) -> ErrorData {
    ErrorData::invalid_params(
        format!("unknown tool `{tool_name}`"),
        Some(json!({ "code": "WIDGET_TOOL_UNKNOWN", "tool": tool_name })),
    )
}

/// Map an unknown-resource lookup to protocol-level `ErrorData`.
pub fn unknown_resource_to_error_data(uri: &str) -> ErrorData {
    ErrorData::resource_not_found(
        format!("no widget template registered for `{uri}`"),
        Some(json!({ "uri": uri })),
    )
}
