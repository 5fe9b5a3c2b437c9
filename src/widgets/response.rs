//! Widget tool input contract and the tool-response builder.

use std::sync::Arc;

use rmcp::model::{CallToolResult, Content, JsonObject, Meta};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::lib::errors::WidgetInputError;
use crate::widgets::catalog::WidgetRecord;

pub const MAX_TOPPING_LEN: usize = 128;

const TOPPING_FIELD: &str = "topping";

/// Input accepted by every widget tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WidgetToolInput {
    /// The pizza topping you want.
    pub topping: String,
}

impl WidgetToolInput {
    /// Extract and validate the input from raw tool-call arguments.
    ///
    /// The shape check is deliberately explicit rather than delegated to the
    /// transport layer, so the contract stays testable without a running
    /// server: the field must be present, be a string, be non-empty, and fit
    /// the length cap.
    pub fn from_arguments(arguments: Option<&JsonObject>) -> Result<Self, WidgetInputError> {
        let arguments = arguments.ok_or(WidgetInputError::MissingArguments)?;
        let value = arguments
            .get(TOPPING_FIELD)
            .ok_or(WidgetInputError::MissingField {
                field: TOPPING_FIELD,
            })?;
        let topping = value.as_str().ok_or(WidgetInputError::InvalidKind {
            field: TOPPING_FIELD,
            expected: "string",
        })?;

        let input = Self {
            topping: topping.to_string(),
        };
        input.validate()?;
        Ok(input)
    }

    pub fn validate(&self) -> Result<(), WidgetInputError> {
        if self.topping.trim().is_empty() {
            return Err(WidgetInputError::EmptyTopping);
        }
        let length = self.topping.chars().count();
        if length > MAX_TOPPING_LEN {
            return Err(WidgetInputError::ToppingTooLong { length });
        }
        Ok(())
    }
}

/// JSON schema advertised for widget tools in `tools/list`.
pub fn widget_input_schema() -> Arc<JsonObject> {
    let schema = schemars::schema_for!(WidgetToolInput);
    match serde_json::to_value(schema) {
        Ok(Value::Object(map)) => Arc::new(map),
        // schema_for! always serializes to an object; keep an empty object
        // schema as the unreachable fallback rather than panicking.
        _ => Arc::new(JsonObject::new()),
    }
}

/// Build the fixed-shape response for one widget invocation.
///
/// Pure function of `(widget, input)`: no I/O, no shared state. The first
/// content block is the widget's canned response text, the second echoes the
/// validated input for the rendered widget to consume, and the metadata block
/// points the client at the widget's template.
pub fn build_tool_response(widget: &WidgetRecord, input: &WidgetToolInput) -> CallToolResult {
    let echo = json!({
        "topping": input.topping,
        "widget": widget.id,
    });

    let mut meta = Meta::default();
    meta.insert(
        "openai/outputTemplate".to_string(),
        Value::String(widget.template_uri.clone()),
    );
    meta.insert(
        "openai/resultCanProduceWidget".to_string(),
        Value::Bool(true),
    );
    if let Some(states) = widget.hints.invocation_states() {
        meta.insert("openai/invocationStates".to_string(), states);
    }

    let mut result = CallToolResult::success(vec![
        Content::text(widget.response_text.clone()),
        Content::text(echo.to_string()),
    ]);
    result.structured_content = Some(echo);
    result.meta = Some(meta);
    result
}
