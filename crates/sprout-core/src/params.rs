//! Parameter structures for planning operations.
//!
//! Shared parameter types usable across interfaces (CLI, MCP) without
//! framework-specific derives. Interface layers wrap these with their own
//! derives and convert via `.into()`; JSON schema generation is available
//! behind the `schema` feature for the MCP surface.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A request for a full-year planting plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PlanRequest {
    /// Ranked plant wish-list; earlier entries get first claim on
    /// capacity. Duplicate names collapse to a single logical plant.
    pub plants: Vec<String>,

    /// Calendar year to plan for
    pub year: i16,

    /// Earliest month (1-12) planting may begin
    #[serde(default = "default_start_month")]
    pub start_month: i8,
}

fn default_start_month() -> i8 {
    1
}

/// Parameters for operations addressing a single plant by name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PlantQuery {
    /// Plant name; singular/plural variants resolve through the catalog
    pub name: String,
}
