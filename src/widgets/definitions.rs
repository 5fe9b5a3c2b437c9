//! Built-in pizzaz widget definitions.

use crate::lib::errors::CatalogError;
use crate::server::config::WidgetsSection;
use crate::widgets::assets::load_widget_html;
use crate::widgets::catalog::{WidgetCatalog, WidgetHints, WidgetRecord};

struct WidgetSeed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    template_file: &'static str,
    invoking: &'static str,
    invoked: &'static str,
    response_text: &'static str,
}

const WIDGET_SEEDS: &[WidgetSeed] = &[
    WidgetSeed {
        id: "pizza-map",
        title: "Pizza Map",
        description: "Show a map of nearby pizzerias with your selected topping",
        template_file: "pizzaz.html",
        invoking: "Finding pizzerias near you...",
        invoked: "Here are pizzerias in your area",
        response_text: "Found nearby pizzerias on the map",
    },
    WidgetSeed {
        id: "pizza-carousel",
        title: "Pizza Carousel",
        description: "Browse pizzas in a carousel view with your selected topping",
        template_file: "pizzaz-carousel.html",
        invoking: "Loading pizza carousel...",
        invoked: "Here's your pizza carousel",
        response_text: "Pizza carousel is ready to browse",
    },
    WidgetSeed {
        id: "pizza-albums",
        title: "Pizza Albums",
        description: "View organized pizza albums with your selected topping",
        template_file: "pizzaz-albums.html",
        invoking: "Organizing pizza albums...",
        invoked: "Here are your pizza albums",
        response_text: "Pizza albums organized and displayed",
    },
    WidgetSeed {
        id: "pizza-list",
        title: "Pizza List",
        description: "Get a list of pizzas with your selected topping",
        template_file: "pizzaz-list.html",
        invoking: "Creating pizza list...",
        invoked: "Here's your pizza list",
        response_text: "Pizza list created successfully",
    },
    WidgetSeed {
        id: "pizza-shop",
        title: "Pizza Shop",
        description: "Visit the pizza shop to order pizza with your selected topping",
        template_file: "pizzaz-shop.html",
        invoking: "Opening pizza shop...",
        invoked: "Welcome to the pizza shop",
        response_text: "Pizza shop is now open for orders",
    },
];

/// Build the built-in catalog from the widgets configuration.
///
/// Template URIs are composed from the configured base URL; HTML documents are
/// read from the configured assets directory once, here, falling back to the
/// placeholder document per file.
pub fn builtin_catalog(widgets: &WidgetsSection) -> Result<WidgetCatalog, CatalogError> {
    let records = WIDGET_SEEDS
        .iter()
        .map(|seed| WidgetRecord {
            id: seed.id.to_string(),
            title: seed.title.to_string(),
            description: seed.description.to_string(),
            template_uri: format!("{}/{}", widgets.base_url, seed.template_file),
            html: load_widget_html(&widgets.assets_dir, seed.template_file),
            response_text: seed.response_text.to_string(),
            hints: WidgetHints {
                invoking: Some(seed.invoking.to_string()),
                invoked: Some(seed.invoked.to_string()),
                ..WidgetHints::default()
            },
        })
        .collect();

    WidgetCatalog::new(records)
}
