//! CLI command handlers.
//!
//! Each handler converts its arguments into core parameter types, calls
//! the planner, and renders the markdown result through the terminal
//! renderer. Framework concerns stay here; the core crate never sees
//! clap.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use log::info;
use sprout_core::params::{PlanRequest, PlantQuery};
use sprout_core::{FarmGrid, Planner, PlotTopology};

use crate::args::{HistoryArgs, PlanArgs, PlantsArgs};
use crate::history::HistoryStore;
use crate::renderer::TerminalRenderer;

/// Command handler context: the planner plus output rendering.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    /// `sprout plan`: build, render, and (unless `--no-save`) record a
    /// plan. A `None` store skips recording entirely.
    pub fn handle_plan(
        &self,
        args: &PlanArgs,
        topology: &PlotTopology,
        store: Option<&HistoryStore>,
    ) -> Result<()> {
        let request = PlanRequest::from(args);
        let plan = self
            .planner
            .plan(topology, &request)
            .context("Failed to build plan")?;

        if args.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&plan).context("Failed to serialize plan")?
            );
        } else {
            self.renderer.render(&plan.to_string())?;
        }

        if let Some(store) = store {
            store.save(&plan).context("Failed to save plan history")?;
            info!("saved plan for {}", plan.year);
        }
        Ok(())
    }

    /// `sprout plants`: list the catalog, or show one profile.
    pub fn handle_plants(&self, args: PlantsArgs, year: i16) -> Result<()> {
        match args.into_query() {
            Some(query) => self.show_plant(&query, year),
            None => self.list_plants(),
        }
    }

    fn list_plants(&self) -> Result<()> {
        let catalog = self.planner.catalog();
        let mut out = format!("# Plant Catalog ({} plants)\n\n", catalog.len());
        for name in catalog.names() {
            writeln!(out, "- {name}")?;
        }
        self.renderer.render(&out)
    }

    fn show_plant(&self, query: &PlantQuery, year: i16) -> Result<()> {
        let out = plant_markdown(self.planner.catalog(), &query.name, year)
            .with_context(|| format!("Plant '{}' not found in the catalog", query.name))?;
        self.renderer.render(&out)
    }

    /// `sprout grid`: show the plot layout and adjacency.
    pub fn handle_grid(&self, grid: &FarmGrid) -> Result<()> {
        self.renderer.render(&grid_markdown(grid))
    }

    /// `sprout history`: list saved plans, or show one year.
    ///
    /// With `--year` the full saved plan is rendered; otherwise a summary
    /// table of all retained seasons.
    pub fn handle_history(&self, args: &HistoryArgs, store: &HistoryStore) -> Result<()> {
        if let Some(year) = args.year {
            let plan = store
                .get(year)
                .context("Failed to load plan history")?
                .with_context(|| format!("No saved plan for {year}"))?;
            return self.renderer.render(&plan.to_string());
        }

        let entries = store.list().context("Failed to list plan history")?;
        if entries.is_empty() {
            return self.renderer.render("No saved plans yet.\n");
        }
        let mut out = String::from("# Saved Plans\n\n");
        out.push_str("| Year | Saved | Plants | Score |\n");
        out.push_str("|---|---|---|---|\n");
        for entry in entries {
            writeln!(
                out,
                "| {} | {} | {} | {} |",
                entry.year, entry.saved_at, entry.plants, entry.score
            )?;
        }
        self.renderer.render(&out)
    }
}

/// Markdown profile for one catalog plant, or `None` if it is unknown.
///
/// Shared between the `plants` command and the MCP `show_plant` tool.
pub fn plant_markdown(
    catalog: &sprout_core::PlantCatalog,
    name: &str,
    year: i16,
) -> Option<String> {
    let profile = catalog.get(name)?;

    let mut out = format!("# {}\n\n", profile.name);
    let _ = writeln!(out, "- Days to maturity: {}", profile.duration_days);
    let _ = writeln!(
        out,
        "- Succession sowing: {}",
        if profile.succession { "yes" } else { "no" }
    );
    if !profile.companions.is_empty() {
        let _ = writeln!(out, "- Companions: {}", profile.companions.join(", "));
    }
    if !profile.antagonists.is_empty() {
        let _ = writeln!(out, "- Antagonists: {}", profile.antagonists.join(", "));
    }

    let windows = catalog.growing_windows(&profile.name, year);
    if windows.is_empty() {
        out.push_str("\nNo outdoor planting windows.\n");
    } else {
        let _ = writeln!(out, "\n## Planting Windows {year}\n");
        for window in windows {
            let _ = writeln!(
                out,
                "- {} to {} ({})",
                window.start, window.end, window.method
            );
        }
    }
    Some(out)
}

/// Markdown description of the plot layout and its adjacency.
pub fn grid_markdown(grid: &FarmGrid) -> String {
    let topology = PlotTopology::from_grid(grid);
    let mut out = String::from("# Plot Layout\n\n");
    let _ = writeln!(out, "```\n{grid}\n```\n");
    for id in topology.plot_ids() {
        let neighbors: Vec<String> = topology.adjacent(id).map(|n| n.to_string()).collect();
        let neighbors = if neighbors.is_empty() {
            "none".to_string()
        } else {
            neighbors.join(", ")
        };
        let _ = writeln!(
            out,
            "- Plot {id}: {} cell(s), adjacent to {neighbors}",
            topology.footprint(id)
        );
    }
    out
}
