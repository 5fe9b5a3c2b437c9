use std::sync::Arc;

use rmcp::{
    model::{
        AnnotateAble, CallToolRequestParam, CallToolResult, ErrorData, JsonObject,
        ListResourcesResult, ListToolsResult, PaginatedRequestParam, RawResource,
        ReadResourceRequestParam, ReadResourceResult, ResourceContents, ServerCapabilities,
        ServerInfo, Tool,
    },
    service::RequestContext,
    RoleServer, ServerHandler,
};

use crate::{
    lib::errors::{input_error_to_error_data, unknown_resource_to_error_data, unknown_tool_to_error_data},
    server::config::ServerConfig,
    widgets::{build_tool_response, widget_input_schema, WidgetCatalog, WidgetToolInput},
};

/// Mime type advertised for widget HTML templates.
pub const WIDGET_MIME_TYPE: &str = "text/html+skybridge";

/// MCP server handler backed by the widget catalog.
///
/// Dispatch is data-driven: one generic `tools/call` path resolves the widget
/// by tool name at call time, rather than a generated handler per widget.
#[derive(Clone)]
pub struct WidgetServer {
    config: Arc<ServerConfig>,
    catalog: Arc<WidgetCatalog>,
    instructions: Arc<String>,
    input_schema: Arc<JsonObject>,
}

impl WidgetServer {
    pub fn new(config: ServerConfig, catalog: Arc<WidgetCatalog>, instructions: String) -> Self {
        Self {
            config: Arc::new(config),
            catalog,
            instructions: Arc::new(instructions),
            input_schema: widget_input_schema(),
        }
    }

    pub fn catalog(&self) -> &Arc<WidgetCatalog> {
        &self.catalog
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

impl ServerHandler for WidgetServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            instructions: Some((*self.instructions).clone()),
            ..ServerInfo::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        let tools: Vec<Tool> = self
            .catalog
            .list_all()
            .iter()
            .map(|widget| {
                Tool::new(
                    widget.id.clone(),
                    widget.description.clone(),
                    self.input_schema.clone(),
                )
            })
            .collect();
        Ok(ListToolsResult::with_all_items(tools))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        let widget = self
            .catalog
            .lookup_by_id(&request.name)
            .map_err(|_| unknown_tool_to_error_data(&request.name))?;
        let input = WidgetToolInput::from_arguments(request.arguments.as_ref())
            .map_err(|err| input_error_to_error_data(&err))?;

        tracing::debug!(
            target: "pizzaz_mcp::widgets",
            tool = %widget.id,
            topping = %input.topping,
            "Dispatching widget tool call"
        );

        Ok(build_tool_response(widget, &input))
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, ErrorData> {
        let resources = self
            .catalog
            .list_all()
            .iter()
            .map(|widget| {
                let mut raw = RawResource::new(widget.template_uri.clone(), widget.title.clone());
                raw.description = Some(widget.description.clone());
                raw.mime_type = Some(WIDGET_MIME_TYPE.to_string());
                raw.no_annotation()
            })
            .collect();

        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
        })
    }

    async fn read_resource(
        &self,
        ReadResourceRequestParam { uri }: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, ErrorData> {
        let widget = self
            .catalog
            .lookup_by_template_uri(&uri)
            .map_err(|_| unknown_resource_to_error_data(&uri))?;

        let mut contents = ResourceContents::text(widget.html.clone(), uri);
        if let ResourceContents::TextResourceContents { mime_type, .. } = &mut contents {
            *mime_type = Some(WIDGET_MIME_TYPE.to_string());
        }

        Ok(ReadResourceResult {
            contents: vec![contents],
        })
    }
}
