use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use sprout_core::params::{PlanRequest, PlantQuery};

/// Main command-line interface for the Sprout garden planner
///
/// Sprout schedules a season of plantings over a plot layout. Given a
/// ranked list of plants it packs planting dates from each plant's
/// growing windows, places plants next to their companions where
/// possible, and reports the resulting timelines, adjacency interactions,
/// and compatibility scores. It can also run as an MCP (Model Context
/// Protocol) server for integration with AI assistants.
#[derive(Parser)]
#[command(version, about, name = "sprout")]
pub struct Args {
    /// Path to a JSON plant catalog. Defaults to the built-in catalog
    #[arg(long, global = true)]
    pub catalog_file: Option<PathBuf>,

    /// Path to a CSV plot layout. Defaults to a built-in 2x3 layout
    #[arg(long, global = true)]
    pub grid_file: Option<PathBuf>,

    /// Path to the plan history database. Defaults to
    /// $XDG_DATA_HOME/sprout/history.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Sprout CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Build a planting plan for a year
    #[command(alias = "p")]
    Plan(PlanArgs),
    /// List catalog plants, or show one plant's profile
    Plants(PlantsArgs),
    /// Show the plot layout
    Grid,
    /// Show previously saved plans
    History(HistoryArgs),
    /// Start the MCP server
    Serve,
}

// CLI argument wrappers convert into the core parameter types, keeping
// clap attributes out of the core crate.

/// Build a planting plan
#[derive(ClapArgs)]
pub struct PlanArgs {
    /// Plants in priority order, most important first
    #[arg(required = true)]
    pub plants: Vec<String>,

    /// Calendar year to plan
    #[arg(short, long, default_value_t = default_year())]
    pub year: i16,

    /// First month to consider for planting (1-12)
    #[arg(short, long, default_value_t = 1)]
    pub start_month: i8,

    /// Print the plan as JSON instead of a report
    #[arg(long)]
    pub json: bool,

    /// Do not record the plan in the history database
    #[arg(long)]
    pub no_save: bool,
}

impl From<&PlanArgs> for PlanRequest {
    fn from(args: &PlanArgs) -> Self {
        Self {
            plants: args.plants.clone(),
            year: args.year,
            start_month: args.start_month,
        }
    }
}

/// List or show catalog plants
#[derive(ClapArgs)]
pub struct PlantsArgs {
    /// Show the full profile for this plant
    pub name: Option<String>,
}

impl PlantsArgs {
    pub fn into_query(self) -> Option<PlantQuery> {
        self.name.map(|name| PlantQuery { name })
    }
}

/// Show saved plans
#[derive(ClapArgs)]
pub struct HistoryArgs {
    /// Show the saved plan for this year instead of the summary list
    #[arg(short, long)]
    pub year: Option<i16>,
}

fn default_year() -> i16 {
    jiff::Zoned::now().date().year()
}
