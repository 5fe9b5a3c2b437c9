use std::path::PathBuf;

use pizzaz_mcp::{
    lib::errors::CatalogError,
    server::config::WidgetsSection,
    widgets::{builtin_catalog, WidgetCatalog},
};

use crate::common;

fn builtin() -> WidgetCatalog {
    let widgets = WidgetsSection {
        base_url: "http://localhost:4444".to_string(),
        assets_dir: PathBuf::from("assets"),
    };
    builtin_catalog(&widgets).expect("built-in catalog should build")
}

#[test]
fn every_registered_id_resolves_to_its_own_record() {
    let catalog = builtin();

    for record in catalog.list_all() {
        let found = catalog
            .lookup_by_id(&record.id)
            .expect("registered id should resolve");
        assert_eq!(found.id, record.id);
    }
}

#[test]
fn absent_id_fails_with_not_found() {
    let catalog = builtin();

    let error = catalog
        .lookup_by_id("pizza-submarine")
        .expect_err("absent id should not resolve");

    assert_eq!(
        error,
        CatalogError::NotFound {
            id: "pizza-submarine".to_string()
        }
    );
}

#[test]
fn builtin_catalog_keeps_registration_order() {
    let catalog = builtin();

    let ids: Vec<&str> = catalog.list_all().iter().map(|r| r.id.as_str()).collect();

    assert_eq!(
        ids,
        vec![
            "pizza-map",
            "pizza-carousel",
            "pizza-albums",
            "pizza-list",
            "pizza-shop"
        ]
    );
}

#[test]
fn duplicate_ids_fail_catalog_construction() {
    let error = WidgetCatalog::new(vec![
        common::pizza_map_record(),
        common::pizza_map_record(),
    ])
    .expect_err("duplicate ids must be rejected");

    assert_eq!(
        error,
        CatalogError::DuplicateId {
            id: "pizza-map".to_string()
        }
    );
}

#[test]
fn template_uri_lookup_returns_the_id_lookup_record() {
    let catalog = common::pizza_map_catalog();

    let by_uri = catalog
        .lookup_by_template_uri("http://x/pizzaz.html")
        .expect("registered template URI should resolve");
    let by_id = catalog
        .lookup_by_id("pizza-map")
        .expect("registered id should resolve");

    assert_eq!(by_uri, by_id);
}

#[test]
fn catalog_reads_are_safe_across_threads() {
    let catalog = std::sync::Arc::new(builtin());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let catalog = std::sync::Arc::clone(&catalog);
            std::thread::spawn(move || {
                for record in catalog.list_all() {
                    let found = catalog
                        .lookup_by_id(&record.id)
                        .expect("registered id should resolve");
                    assert_eq!(found.id, record.id);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("reader thread should not panic");
    }
}
