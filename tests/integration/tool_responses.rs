use std::path::PathBuf;

use pizzaz_mcp::{
    lib::errors::WidgetInputError,
    server::config::WidgetsSection,
    widgets::{build_tool_response, builtin_catalog, WidgetToolInput},
};
use serde_json::{json, Value};

use crate::common;

fn arguments(value: Value) -> serde_json::Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("arguments fixture must be an object, got {other}"),
    }
}

#[test]
fn end_to_end_pizza_map_invocation() {
    let catalog = common::pizza_map_catalog();
    let widget = catalog
        .lookup_by_id("pizza-map")
        .expect("pizza-map should be registered");
    let args = arguments(json!({ "topping": "pepperoni" }));
    let input = WidgetToolInput::from_arguments(Some(&args)).expect("input should validate");

    let wire = serde_json::to_value(build_tool_response(widget, &input))
        .expect("tool result should serialize");

    assert_eq!(
        wire["content"][0]["text"].as_str(),
        Some("Found nearby pizzerias on the map")
    );
    assert_eq!(
        wire["_meta"]["openai/outputTemplate"].as_str(),
        Some("http://x/pizzaz.html")
    );
}

#[test]
fn every_builtin_widget_response_points_at_its_own_template() {
    let widgets = WidgetsSection {
        base_url: "http://localhost:4444".to_string(),
        assets_dir: PathBuf::from("assets"),
    };
    let catalog = builtin_catalog(&widgets).expect("built-in catalog should build");
    let input = WidgetToolInput {
        topping: "mushroom".to_string(),
    };

    for widget in catalog.list_all() {
        let wire = serde_json::to_value(build_tool_response(widget, &input))
            .expect("tool result should serialize");

        assert_eq!(
            wire["_meta"]["openai/outputTemplate"].as_str(),
            Some(widget.template_uri.as_str()),
            "widget {}",
            widget.id
        );
        assert_eq!(
            wire["_meta"]["openai/resultCanProduceWidget"].as_bool(),
            Some(true),
            "widget {}",
            widget.id
        );
    }
}

#[test]
fn builtin_widgets_carry_invocation_hints() {
    let widgets = WidgetsSection {
        base_url: "http://localhost:4444".to_string(),
        assets_dir: PathBuf::from("assets"),
    };
    let catalog = builtin_catalog(&widgets).expect("built-in catalog should build");
    let input = WidgetToolInput {
        topping: "olive".to_string(),
    };
    let widget = catalog
        .lookup_by_id("pizza-carousel")
        .expect("pizza-carousel should be registered");

    let wire = serde_json::to_value(build_tool_response(widget, &input))
        .expect("tool result should serialize");

    assert_eq!(
        wire["_meta"]["openai/invocationStates"]["invoking"].as_str(),
        Some("Loading pizza carousel...")
    );
    assert_eq!(
        wire["_meta"]["openai/invocationStates"]["invoked"].as_str(),
        Some("Here's your pizza carousel")
    );
}

#[test]
fn missing_required_field_yields_no_response() {
    let args = arguments(json!({ "size": "large" }));

    let error = WidgetToolInput::from_arguments(Some(&args))
        .expect_err("missing topping must fail validation");

    assert_eq!(error, WidgetInputError::MissingField { field: "topping" });
}

#[test]
fn wrong_kind_field_yields_no_response() {
    let args = arguments(json!({ "topping": ["pepperoni"] }));

    let error = WidgetToolInput::from_arguments(Some(&args))
        .expect_err("array topping must fail validation");

    assert_eq!(
        error,
        WidgetInputError::InvalidKind {
            field: "topping",
            expected: "string"
        }
    );
}

#[test]
fn structured_echo_matches_the_second_content_block() {
    let catalog = common::pizza_map_catalog();
    let widget = catalog
        .lookup_by_id("pizza-map")
        .expect("pizza-map should be registered");
    let input = WidgetToolInput {
        topping: "anchovy".to_string(),
    };

    let wire = serde_json::to_value(build_tool_response(widget, &input))
        .expect("tool result should serialize");

    let echo_block: Value = serde_json::from_str(
        wire["content"][1]["text"]
            .as_str()
            .expect("second content block should be text"),
    )
    .expect("echo block should be JSON");

    assert_eq!(wire["structuredContent"], echo_block);
    assert_eq!(
        echo_block,
        json!({ "topping": "anchovy", "widget": "pizza-map" })
    );
}
