use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::lib::errors::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:4444";
pub const DEFAULT_ASSETS_DIR: &str = "assets";

/// Widget template settings.
#[derive(Debug, Clone)]
pub struct WidgetsSection {
    /// Base URL each widget's template URI is composed from.
    pub base_url: String,
    /// Directory the widget HTML documents are read from at startup.
    pub assets_dir: PathBuf,
}

#[derive(Debug, Deserialize, Default)]
pub struct RawWidgetsSection {
    pub base_url: Option<String>,
    pub assets_dir: Option<PathBuf>,
}

pub fn parse_widgets_section(
    raw: Option<RawWidgetsSection>,
    path: &Path,
) -> Result<WidgetsSection, ConfigError> {
    let widgets_raw = raw.unwrap_or_default();

    let base_url = widgets_raw
        .base_url
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let base_url = base_url.trim().trim_end_matches('/').to_string();
    if base_url.is_empty() {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "widgets.base_url",
            message: "Provide a non-empty base URL for widget templates".into(),
        });
    }

    let assets_dir = widgets_raw
        .assets_dir
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR));
    if assets_dir.as_os_str().is_empty() {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "widgets.assets_dir",
            message: "Provide a non-empty assets directory".into(),
        });
    }

    Ok(WidgetsSection {
        base_url,
        assets_dir,
    })
}
