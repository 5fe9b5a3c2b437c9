//! HTTP transport: CORS, info/health routes, and the streamable MCP endpoint.

use std::{sync::Arc, time::Duration};

use anyhow::Context;
use axum::{extract::State, http::HeaderValue, response::Json, routing::get, Router};
use rmcp::transport::streamable_http_server::{
    session::local::LocalSessionManager, StreamableHttpServerConfig, StreamableHttpService,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{info, warn};

use crate::{
    server::{
        config::{CorsSection, ServerConfig},
        runtime::{RuntimeExit, WidgetServer},
    },
    widgets::WidgetCatalog,
};

pub const MCP_ENDPOINT: &str = "/mcp";
pub const HEALTH_ENDPOINT: &str = "/health";

const SSE_KEEP_ALIVE_SECS: u64 = 15;

#[derive(Clone)]
struct RouteState {
    catalog: Arc<WidgetCatalog>,
    widget_base_url: String,
}

/// Bind the HTTP listener and serve until ctrl-c.
pub async fn run_http(server: WidgetServer, config: &ServerConfig) -> Result<(), RuntimeExit> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let router = build_router(server, config);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind HTTP port {addr}"))
        .map_err(RuntimeExit::from_error)?;
    info!(
        target: "pizzaz_mcp::runtime",
        transport = "http",
        bind_addr = %addr,
        mcp_endpoint = MCP_ENDPOINT,
        "Started listening in HTTP mode"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(RuntimeExit::from_error)
}

/// Assemble the axum router: info/health routes, the MCP service, and CORS.
fn build_router(server: WidgetServer, config: &ServerConfig) -> Router {
    let state = RouteState {
        catalog: Arc::clone(server.catalog()),
        widget_base_url: config.widgets.base_url.clone(),
    };

    let session_manager = Arc::new(LocalSessionManager::default());
    let mcp_service = StreamableHttpService::new(
        move || Ok::<_, std::io::Error>(server.clone()),
        session_manager,
        StreamableHttpServerConfig {
            stateful_mode: true,
            sse_keep_alive: Some(Duration::from_secs(SSE_KEEP_ALIVE_SECS)),
        },
    );

    Router::new()
        .route("/", get(root_info))
        .route(HEALTH_ENDPOINT, get(health))
        .with_state(state)
        .nest_service(MCP_ENDPOINT, mcp_service)
        .layer(build_cors_layer(&config.cors))
}

async fn root_info(State(state): State<RouteState>) -> Json<Value> {
    let widgets: Vec<&str> = state
        .catalog
        .list_all()
        .iter()
        .map(|widget| widget.id.as_str())
        .collect();
    Json(json!({
        "name": "Pizzaz MCP Server",
        "version": env!("CARGO_PKG_VERSION"),
        "mcp_endpoint": MCP_ENDPOINT,
        "health_endpoint": HEALTH_ENDPOINT,
        "widgets": widgets,
        "widget_base_url": state.widget_base_url,
    }))
}

async fn health(State(state): State<RouteState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "widgets": state.catalog.len(),
    }))
}

fn build_cors_layer(cors: &CorsSection) -> CorsLayer {
    if cors.allow_any() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = cors
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(
                    target: "pizzaz_mcp::runtime",
                    origin = %origin,
                    reason = %err,
                    "Skipping origin that does not form a valid header value"
                );
                None
            }
        })
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(
            target: "pizzaz_mcp::runtime",
            reason = %err,
            "Failed to install ctrl-c handler; running until killed"
        );
    }
}
