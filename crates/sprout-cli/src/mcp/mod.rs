//! MCP server implementation for Sprout
//!
//! This module implements the Model Context Protocol server for Sprout,
//! providing a standardized interface for AI models to build planting
//! plans and query the plant catalog. The plot layout is fixed at server
//! startup; every planning request runs against it from an empty season.

use std::sync::Arc;

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    tool, tool_handler, tool_router, ErrorData, ServerHandler,
};
use sprout_core::params::{PlanRequest, PlantQuery};
use sprout_core::{FarmGrid, Planner, PlotTopology};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;

use errors::to_mcp_error;

pub type McpResult = Result<CallToolResult, ErrorData>;

/// MCP server for Sprout
///
/// The planner and topology are read-only, so tool calls share them
/// without locking.
#[derive(Clone)]
pub struct SproutMcpServer {
    planner: Arc<Planner>,
    grid: Arc<FarmGrid>,
    topology: Arc<PlotTopology>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl SproutMcpServer {
    /// Create a new Sprout MCP server over a planner and plot layout
    pub fn new(planner: Planner, grid: FarmGrid) -> Self {
        let topology = PlotTopology::from_grid(&grid);
        Self {
            planner: Arc::new(planner),
            grid: Arc::new(grid),
            topology: Arc::new(topology),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        name = "plan_year",
        description = "Build a planting plan for one calendar year. Provide 'plants' as a list of catalog plant names in priority order (most important first), 'year', and optionally 'start_month' (1-12, default 1) to defer the season. Returns a markdown report with per-plot timelines, companion/antagonist interactions between adjacent plots, the full compatibility matrix, and the total adjacency score. Plants that cannot be scheduled are listed, not errors."
    )]
    async fn plan_year(&self, Parameters(params): Parameters<PlanRequest>) -> McpResult {
        debug!("plan_year: {params:?}");
        let plan = self
            .planner
            .plan(&self.topology, &params)
            .map_err(|e| to_mcp_error("Failed to build plan", e))?;
        Ok(CallToolResult::success(vec![Content::text(
            plan.to_string(),
        )]))
    }

    #[tool(
        name = "list_plants",
        description = "List all plant names available in the catalog. Use these exact names (singular or plural both work) when calling plan_year or show_plant."
    )]
    async fn list_plants(&self) -> McpResult {
        let catalog = self.planner.catalog();
        let mut out = format!("# Plant Catalog ({} plants)\n\n", catalog.len());
        for name in catalog.names() {
            out.push_str("- ");
            out.push_str(name);
            out.push('\n');
        }
        Ok(CallToolResult::success(vec![Content::text(out)]))
    }

    #[tool(
        name = "show_plant",
        description = "Show one plant's profile: days to maturity, whether it supports succession sowing, companion and antagonist plants, and its outdoor planting windows for the current year."
    )]
    async fn show_plant(&self, Parameters(params): Parameters<PlantQuery>) -> McpResult {
        debug!("show_plant: {params:?}");
        let year = jiff::Zoned::now().date().year();
        crate::cli::plant_markdown(self.planner.catalog(), &params.name, year)
            .map(|out| CallToolResult::success(vec![Content::text(out)]))
            .ok_or_else(|| {
                to_mcp_error(
                    "Failed to show plant",
                    sprout_core::PlanError::unknown_plant(&params.name),
                )
            })
    }

    #[tool(
        name = "show_grid",
        description = "Show the plot layout the server is planning against: the cell grid plus each plot's size and adjacent plots. Adjacent plots are where companion and antagonist effects apply."
    )]
    async fn show_grid(&self) -> McpResult {
        Ok(CallToolResult::success(vec![Content::text(
            crate::cli::grid_markdown(&self.grid),
        )]))
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for SproutMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "sprout".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                r"Sprout builds season planting plans for a garden of plots.

## Core Concepts
- **Plants**: Catalog entries with planting windows, days to maturity, and companion/antagonist relationships
- **Plots**: Cells of the layout grouped by id; plants in adjacent plots interact
- **Plans**: One year's schedule; plants are placed in priority order, companions near each other

## Workflow
1. Use `list_plants` to see what the catalog offers
2. Inspect candidates with `show_plant` to understand windows and companions
3. Check the layout with `show_grid`
4. Call `plan_year` with the plants in priority order

Plans are deterministic: the same request always yields the same plan. Earlier plants in the list get first claim on plot space, so put must-have crops first."
                    .to_string(),
            ),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: SproutMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Sprout MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
