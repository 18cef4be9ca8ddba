//! Plan assembler: packages pipeline outputs into the response shape.
//!
//! Pure aggregation; no further computation happens here. The invariants
//! of the contract (disjoint per-plot entries, undirected events, full
//! matrix) are established by the engine and scorer.

use super::engine::AssignmentOutcome;
use super::scorer::ScoreOutcome;
use crate::models::{CompatibilityMatrix, Plan};

/// Copies engine and scorer outputs into a [`Plan`].
pub fn assemble(
    year: i16,
    selected_plants: Vec<String>,
    outcome: AssignmentOutcome,
    scored: ScoreOutcome,
    compatibility_matrix: CompatibilityMatrix,
) -> Plan {
    Plan {
        year,
        selected_plants,
        assigned: outcome.assigned,
        unassigned_plants: outcome.unassigned,
        timeline: outcome.timeline.into_map(),
        adjacency_events: scored.events,
        compatibility_matrix,
        score: scored.total,
    }
}
