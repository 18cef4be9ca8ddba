//! Sprout CLI Application
//!
//! Command-line interface for the Sprout garden planning tool.

mod args;
mod cli;
mod grid_io;
mod history;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, SproutMcpServer};
use renderer::TerminalRenderer;
use sprout_core::{PlannerBuilder, PlotTopology};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        catalog_file,
        grid_file,
        database_file,
        no_color,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_catalog_file(catalog_file)
        .build()
        .context("Failed to initialize planner")?;
    let grid = grid_io::load_grid(grid_file.as_deref())?;
    let renderer = TerminalRenderer::new(!no_color);

    info!("Sprout started");

    match command {
        Plan(plan_args) => {
            let store = if plan_args.no_save {
                None
            } else {
                Some(history::HistoryStore::open(database_file)?)
            };
            let topology = PlotTopology::from_grid(&grid);
            Cli::new(planner, renderer).handle_plan(&plan_args, &topology, store.as_ref())
        }
        Plants(plants_args) => {
            let year = jiff::Zoned::now().date().year();
            Cli::new(planner, renderer).handle_plants(plants_args, year)
        }
        Grid => Cli::new(planner, renderer).handle_grid(&grid),
        History(history_args) => {
            let store = history::HistoryStore::open(database_file)?;
            Cli::new(planner, renderer).handle_history(&history_args, &store)
        }
        Serve => {
            info!("Starting Sprout MCP server");
            run_stdio_server(SproutMcpServer::new(planner, grid))
                .await
                .context("MCP server failed")
        }
    }
}
