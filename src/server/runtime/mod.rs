//! MCP server startup and the catalog-backed request handler.
mod server_info;
mod startup;
mod widget_server;

pub use server_info::build_instructions;
pub use startup::{run_server, RuntimeExit};
pub use widget_server::{WidgetServer, WIDGET_MIME_TYPE};
