//! Core library for the Sprout garden planning application.
//!
//! This crate turns a ranked list of plants, a plant catalog, and a plot
//! layout into a season schedule: for each plant it packs candidate planting
//! intervals from the catalog's growing windows, assigns the plant to the
//! plot where its companions score best, and assembles the result into a
//! [`models::Plan`] with per-plot timelines, adjacency interactions, and a
//! full compatibility matrix.
//!
//! # Display Architecture
//!
//! Domain models implement [`std::fmt::Display`] and render as markdown
//! ([`display`]), so the same plan text works for plain terminals, rich
//! terminal rendering, and machine consumers alike.
//!
//! # Quick Start
//!
//! ```rust
//! use sprout_core::{FarmGrid, PlannerBuilder, PlotTopology, params::PlanRequest};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Two side-by-side plots.
//! let grid = FarmGrid::from_rows(vec![vec![1, 2]])?;
//! let topology = PlotTopology::from_grid(&grid);
//!
//! let planner = PlannerBuilder::new().build()?;
//! let request = PlanRequest {
//!     plants: vec!["Tomatoes".to_string(), "Basil".to_string()],
//!     year: 2026,
//!     start_month: 1,
//! };
//!
//! let plan = planner.plan(&topology, &request)?;
//! println!("{plan}");
//! # Ok(())
//! # }
//! ```

pub mod calendar;
pub mod catalog;
pub mod display;
pub mod error;
pub mod grid;
pub mod models;
pub mod packer;
pub mod params;
pub mod planner;
pub mod timeline;
pub mod topology;

// Re-export commonly used types
pub use catalog::PlantCatalog;
pub use error::{PlanError, Result};
pub use grid::FarmGrid;
pub use models::{
    AdjacencyEvent, Assignment, CompatibilityMatrix, GrowingWindow, Method, Plan, PlantProfile,
    TimelineEntry,
};
pub use params::{PlanRequest, PlantQuery};
pub use planner::{Planner, PlannerBuilder};
pub use timeline::{FarmTimeline, PlotTimeline, CROP_BUFFER_DAYS};
pub use topology::{Plot, PlotTopology};
