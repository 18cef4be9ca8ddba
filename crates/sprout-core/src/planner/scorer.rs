//! Adjacency scorer: interaction events, compatibility matrix, total.
//!
//! Runs after assignment over the finished timeline. Every unordered
//! pair of spatially-adjacent plots is visited once (`plot_a < plot_b`),
//! and every pair of temporally overlapping entries across the pair
//! emits one event carrying the catalog score and the interval
//! intersection.

use crate::catalog::PlantCatalog;
use crate::models::{AdjacencyEvent, CompatibilityMatrix};
use crate::timeline::FarmTimeline;
use crate::topology::PlotTopology;

/// Events and their aggregate score.
pub struct ScoreOutcome {
    /// All interactions, ordered by (plot_a, plot_b, entry starts)
    pub events: Vec<AdjacencyEvent>,

    /// Sum of all event compatibility values
    pub total: i64,
}

/// Walks adjacent plot pairs and overlapping entries.
pub fn score(
    catalog: &PlantCatalog,
    topology: &PlotTopology,
    timeline: &FarmTimeline,
) -> ScoreOutcome {
    let mut events = Vec::new();

    for (plot_a, timeline_a) in timeline.iter() {
        // Visiting only higher-numbered neighbors reports each unordered
        // pair exactly once.
        for plot_b in topology.adjacent(plot_a).filter(|&b| b > plot_a) {
            let Some(timeline_b) = timeline.get(plot_b) else {
                continue;
            };
            for entry_a in timeline_a.entries() {
                for entry_b in timeline_b.overlapping_entries(entry_a.start, entry_a.end) {
                    events.push(AdjacencyEvent {
                        plot_a,
                        plot_b,
                        plant_a: entry_a.plant.clone(),
                        plant_b: entry_b.plant.clone(),
                        compatibility: catalog.compatibility(&entry_a.plant, &entry_b.plant),
                        overlap_start: entry_a.start.max(entry_b.start),
                        overlap_end: entry_a.end.min(entry_b.end),
                    });
                }
            }
        }
    }

    let total = events.iter().map(|event| event.compatibility).sum();
    ScoreOutcome { events, total }
}

/// Pairwise scores over the selected plants, independent of placement.
pub fn compatibility_matrix(catalog: &PlantCatalog, plants: &[String]) -> CompatibilityMatrix {
    CompatibilityMatrix::build(plants, |a, b| catalog.compatibility(a, b))
}
