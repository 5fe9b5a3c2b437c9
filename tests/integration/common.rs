use std::path::PathBuf;

use pizzaz_mcp::widgets::{WidgetCatalog, WidgetHints, WidgetRecord};

pub fn fixture(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}

/// The single-widget catalog used by the end-to-end lookup/build scenarios.
pub fn pizza_map_catalog() -> WidgetCatalog {
    WidgetCatalog::new(vec![pizza_map_record()]).expect("single-record catalog should build")
}

pub fn pizza_map_record() -> WidgetRecord {
    WidgetRecord {
        id: "pizza-map".to_string(),
        title: "Pizza Map".to_string(),
        description: "Show a map of nearby pizzerias".to_string(),
        template_uri: "http://x/pizzaz.html".to_string(),
        html: "<div>Pizza Map Widget HTML would be loaded here</div>".to_string(),
        response_text: "Found nearby pizzerias on the map".to_string(),
        hints: WidgetHints::default(),
    }
}
