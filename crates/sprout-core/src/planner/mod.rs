//! High-level planning API.
//!
//! This module provides the main [`Planner`] interface. The planner owns
//! the read-only plant catalog and coordinates the planning pipeline:
//!
//! ```text
//! ┌──────────────┐    ┌───────────────┐    ┌───────────────┐
//! │  Assignment  │───▶│   Adjacency   │───▶│     Plan      │
//! │    engine    │    │    scorer     │    │   assembler   │
//! └──────────────┘    └───────────────┘    └───────────────┘
//!   packs slots and      events, matrix,     response-shaped
//!   picks plots          total score         aggregate
//! ```
//!
//! Every call to [`Planner::plan`] is independent: the topology is a
//! caller-supplied value, occupancy starts empty, and the result is a
//! fresh immutable [`Plan`]. Validation failures surface before any
//! computation; infeasible plants are reported inside the plan, never as
//! errors.

pub mod assembler;
pub mod builder;
pub mod engine;
pub mod scorer;

#[cfg(test)]
mod tests;

use log::debug;

pub use builder::PlannerBuilder;

use crate::catalog::PlantCatalog;
use crate::error::{PlanError, Result};
use crate::models::Plan;
use crate::params::PlanRequest;
use crate::topology::PlotTopology;

/// Years outside this range are rejected as request-validation failures.
const YEAR_RANGE: std::ops::RangeInclusive<i16> = 1900..=2999;

/// Main planning interface.
#[derive(Debug)]
pub struct Planner {
    catalog: PlantCatalog,
}

impl Planner {
    /// Creates a planner over the given catalog.
    pub(crate) fn new(catalog: PlantCatalog) -> Self {
        Self { catalog }
    }

    /// The catalog this planner answers from.
    pub fn catalog(&self) -> &PlantCatalog {
        &self.catalog
    }

    /// Builds a full-year planting plan for the request against the
    /// supplied topology.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::InvalidInput`] for blank plant names, an
    /// out-of-range year, or a start month outside 1-12, and
    /// [`PlanError::UnknownPlant`] for names absent from the catalog.
    /// Infeasibility (including an empty topology) is not an error.
    pub fn plan(&self, topology: &PlotTopology, request: &PlanRequest) -> Result<Plan> {
        let selected = self.validate(request)?;
        debug!(
            "planning year {} for {} plants over {} plots",
            request.year,
            selected.len(),
            topology.len()
        );

        let outcome = engine::assign(
            &self.catalog,
            topology,
            &selected,
            request.year,
            request.start_month,
        );
        let scored = scorer::score(&self.catalog, topology, &outcome.timeline);
        let matrix = scorer::compatibility_matrix(&self.catalog, &selected);

        Ok(assembler::assemble(
            request.year,
            selected,
            outcome,
            scored,
            matrix,
        ))
    }

    /// Validates the request and returns the deduplicated ranked list.
    ///
    /// Duplicates are detected through name normalization, so "Tomato"
    /// and "Tomatoes" collapse to the first-ranked spelling.
    fn validate(&self, request: &PlanRequest) -> Result<Vec<String>> {
        if !(1..=12).contains(&request.start_month) {
            return Err(PlanError::invalid_input("start_month")
                .with_reason(format!("must be 1-12, got {}", request.start_month)));
        }
        if !YEAR_RANGE.contains(&request.year) {
            return Err(PlanError::invalid_input("year").with_reason(format!(
                "must be {}-{}, got {}",
                YEAR_RANGE.start(),
                YEAR_RANGE.end(),
                request.year
            )));
        }

        let mut selected = Vec::new();
        let mut seen = std::collections::HashSet::new();
        for name in &request.plants {
            if name.trim().is_empty() {
                return Err(PlanError::invalid_input("plants")
                    .with_reason("plant names must be non-empty"));
            }
            if !self.catalog.contains(name) {
                return Err(PlanError::unknown_plant(name.trim()));
            }
            if seen.insert(crate::catalog::normalize_name(name)) {
                selected.push(name.trim().to_string());
            }
        }
        Ok(selected)
    }
}
