use std::path::Path;

use serde::Deserialize;

use crate::lib::errors::ConfigError;

pub const WILDCARD_ORIGIN: &str = "*";

/// Cross-origin settings for the HTTP transport.
#[derive(Debug, Clone)]
pub struct CorsSection {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct RawCorsSection {
    pub allowed_origins: Option<Vec<String>>,
}

impl CorsSection {
    /// True when any origin is allowed (the demo-server default).
    pub fn allow_any(&self) -> bool {
        self.allowed_origins
            .iter()
            .any(|origin| origin == WILDCARD_ORIGIN)
    }
}

pub fn parse_cors_section(
    raw: Option<RawCorsSection>,
    path: &Path,
) -> Result<CorsSection, ConfigError> {
    let cors_raw = raw.unwrap_or_default();
    let allowed_origins = cors_raw
        .allowed_origins
        .unwrap_or_else(|| vec![WILDCARD_ORIGIN.to_string()]);

    for origin in &allowed_origins {
        let trimmed = origin.trim();
        if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidField {
                path: path.to_path_buf(),
                field: "cors.allowed_origins",
                message: format!("Origin `{origin}` is not a valid origin value"),
            });
        }
    }

    Ok(CorsSection { allowed_origins })
}
