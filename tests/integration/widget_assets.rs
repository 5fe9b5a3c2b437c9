use std::fs;

use pizzaz_mcp::{
    server::config::WidgetsSection,
    widgets::{builtin_catalog, load_widget_html, placeholder_document},
};
use tempfile::tempdir;

use crate::common;

#[test]
fn missing_asset_file_loads_a_placeholder_naming_the_file() {
    let temp = tempdir().expect("can create temp directory");

    let html = load_widget_html(temp.path(), "pizzaz-albums.html");

    assert!(html.contains("pizzaz-albums.html"), "html: {html}");
    assert_eq!(html, placeholder_document("pizzaz-albums.html"));
}

#[test]
fn bundled_assets_are_loaded_for_the_builtin_catalog() {
    let widgets = WidgetsSection {
        base_url: "http://localhost:4444".to_string(),
        assets_dir: common::fixture("assets"),
    };

    let catalog = builtin_catalog(&widgets).expect("built-in catalog should build");
    let map = catalog
        .lookup_by_id("pizza-map")
        .expect("pizza-map should be registered");

    assert!(map.html.contains("Pizza Map"), "html: {}", map.html);
}

#[test]
fn partially_populated_assets_mix_real_files_and_placeholders() {
    let temp = tempdir().expect("can create temp directory");
    fs::write(temp.path().join("pizzaz-list.html"), "<ol><li>margherita</li></ol>")
        .expect("can write asset");

    let widgets = WidgetsSection {
        base_url: "http://localhost:4444".to_string(),
        assets_dir: temp.path().to_path_buf(),
    };
    let catalog = builtin_catalog(&widgets).expect("built-in catalog should build");

    let list = catalog
        .lookup_by_id("pizza-list")
        .expect("pizza-list should be registered");
    assert_eq!(list.html, "<ol><li>margherita</li></ol>");

    let map = catalog
        .lookup_by_id("pizza-map")
        .expect("pizza-map should be registered");
    assert_eq!(map.html, placeholder_document("pizzaz.html"));
}
