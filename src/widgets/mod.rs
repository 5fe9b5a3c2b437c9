//! Widget catalog and the tool-response builder registered on the server.

pub mod assets;
pub mod catalog;
pub mod definitions;
pub mod response;

pub use assets::{load_widget_html, placeholder_document};
pub use catalog::{WidgetCatalog, WidgetHints, WidgetRecord};
pub use definitions::builtin_catalog;
pub use response::{build_tool_response, widget_input_schema, WidgetToolInput, MAX_TOPPING_LEN};
