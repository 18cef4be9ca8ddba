//! Plot assignment engine: greedy, rank-order, single pass.
//!
//! Each plant in the ranked list is considered exactly once; earlier
//! ranks always get first claim on capacity and nothing is retried or
//! reshuffled afterwards. The per-plant plot evaluation only reads the
//! timeline, so the loop stays bounded by plants x plots x slots.

use std::collections::BTreeSet;

use log::debug;

use crate::catalog::PlantCatalog;
use crate::models::{Assignment, TimelineEntry};
use crate::packer::{pack, CandidateSlot};
use crate::timeline::FarmTimeline;
use crate::topology::PlotTopology;

/// Result of the assignment pass.
pub struct AssignmentOutcome {
    /// Per-plot occupancy after all commits
    pub timeline: FarmTimeline,

    /// One record per plant that received at least one entry
    pub assigned: Vec<Assignment>,

    /// Plants with no feasible plot/slot, in rank order
    pub unassigned: Vec<String>,
}

/// Assigns each ranked plant to the best available plot.
///
/// A plot is feasible when at least one packed slot fits its current
/// occupancy (crop buffer included); every fitting slot is then committed
/// to the single chosen plot. Plot choice maximizes the compatibility
/// gain against plants already growing in adjacent plots during the
/// overlap, with the lowest plot id breaking ties.
pub fn assign(
    catalog: &PlantCatalog,
    topology: &PlotTopology,
    plants: &[String],
    year: i16,
    start_month: i8,
) -> AssignmentOutcome {
    let mut timeline = FarmTimeline::new(topology);
    let mut assigned = Vec::new();
    let mut unassigned = Vec::new();

    for plant in plants {
        let Some(profile) = catalog.get(plant) else {
            // Validation happens upstream; an unresolvable name here is
            // simply unplaceable.
            unassigned.push(plant.clone());
            continue;
        };
        let windows = catalog.growing_windows(plant, year);
        let slots = pack(profile, &windows, year, start_month);
        if slots.is_empty() {
            debug!("{plant}: no candidate slots in {year}");
            unassigned.push(plant.clone());
            continue;
        }

        match choose_plot(catalog, topology, &timeline, plant, &slots) {
            Some((plot_id, fitting)) => {
                debug!("{plant}: plot {plot_id}, {} slot(s)", fitting.len());
                let first = fitting[0];
                assigned.push(Assignment {
                    plant: plant.clone(),
                    plot_id,
                    start: first.start,
                    end: first.end,
                    method: first.method,
                    slots: fitting.len(),
                });
                for slot in fitting {
                    timeline.add(
                        plot_id,
                        TimelineEntry {
                            plant: plant.clone(),
                            start: slot.start,
                            end: slot.end,
                            method: slot.method,
                        },
                    );
                }
            }
            None => {
                debug!("{plant}: no feasible plot");
                unassigned.push(plant.clone());
            }
        }
    }

    AssignmentOutcome {
        timeline,
        assigned,
        unassigned,
    }
}

/// Picks the plot with the highest incremental compatibility gain.
///
/// Iterating plot ids in ascending order with a strict `>` comparison
/// makes the lowest id win ties, keeping the pass deterministic.
fn choose_plot<'a>(
    catalog: &PlantCatalog,
    topology: &PlotTopology,
    timeline: &FarmTimeline,
    plant: &str,
    slots: &'a [CandidateSlot],
) -> Option<(u8, Vec<&'a CandidateSlot>)> {
    let mut best: Option<(i64, u8, Vec<&CandidateSlot>)> = None;

    for plot_id in topology.plot_ids() {
        let Some(plot_timeline) = timeline.get(plot_id) else {
            continue;
        };
        let fitting: Vec<&CandidateSlot> = slots
            .iter()
            .filter(|slot| plot_timeline.fits(slot.start, slot.end))
            .collect();
        if fitting.is_empty() {
            continue;
        }

        let gain = placement_gain(catalog, topology, timeline, plant, plot_id, &fitting);
        if best.as_ref().map_or(true, |(g, _, _)| gain > *g) {
            best = Some((gain, plot_id, fitting));
        }
    }

    best.map(|(_, plot_id, fitting)| (plot_id, fitting))
}

/// Compatibility contribution of committing `fitting` to `plot_id`,
/// counting each simultaneously-adjacent plant once per slot.
fn placement_gain(
    catalog: &PlantCatalog,
    topology: &PlotTopology,
    timeline: &FarmTimeline,
    plant: &str,
    plot_id: u8,
    fitting: &[&CandidateSlot],
) -> i64 {
    let mut gain = 0;
    for slot in fitting {
        let mut seen = BTreeSet::new();
        for adjacent in timeline.adjacent_plants_during(topology, plot_id, slot.start, slot.end) {
            if seen.insert(adjacent.clone()) {
                gain += catalog.compatibility(plant, &adjacent);
            }
        }
    }
    gain
}
