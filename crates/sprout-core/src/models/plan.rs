//! Plan model definition and related record types.

use std::collections::BTreeMap;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{CompatibilityMatrix, Method};

/// One planting recorded in a plot's timeline.
///
/// The occupation interval `[start, end)` is half-open; entries for the
/// same plot are kept sorted by start date and never overlap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimelineEntry {
    /// Plant occupying the plot
    pub plant: String,

    /// First day in the ground
    pub start: Date,

    /// Day the plot is cleared (exclusive)
    pub end: Date,

    /// How this slot was produced
    pub method: Method,
}

impl TimelineEntry {
    /// True if this entry's interval intersects `[start, end)`.
    pub fn overlaps(&self, start: Date, end: Date) -> bool {
        self.start < end && self.end > start
    }
}

/// Summary record for a plant that received at least one timeline entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Assignment {
    /// Plant name as requested
    pub plant: String,

    /// Plot every slot of the plant was committed to
    pub plot_id: u8,

    /// Start of the first committed slot
    pub start: Date,

    /// End of the first committed slot
    pub end: Date,

    /// Method of the first committed slot
    pub method: Method,

    /// Number of timeline entries committed (1 unless succession applies)
    pub slots: usize,
}

/// A recorded interaction between two adjacent plots growing temporally
/// overlapping crops.
///
/// Events are undirected: `plot_a < plot_b` always holds and each
/// overlapping entry pair is reported exactly once.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdjacencyEvent {
    /// Lower-numbered plot of the pair
    pub plot_a: u8,

    /// Higher-numbered plot of the pair
    pub plot_b: u8,

    /// Plant growing in `plot_a`
    pub plant_a: String,

    /// Plant growing in `plot_b`
    pub plant_b: String,

    /// Catalog compatibility score for the pair
    pub compatibility: i64,

    /// Start of the interval both crops are in the ground
    pub overlap_start: Date,

    /// End of the shared interval (exclusive)
    pub overlap_end: Date,
}

/// A complete planting plan for one calendar year.
///
/// Computed fresh for every request and immutable once returned; the
/// engine never merges plans across requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Calendar year the plan covers
    pub year: i16,

    /// The ranked request, deduplicated but order-preserving
    pub selected_plants: Vec<String>,

    /// Plants that received at least one timeline entry
    pub assigned: Vec<Assignment>,

    /// Plants for which no feasible plot/time slot existed
    pub unassigned_plants: Vec<String>,

    /// Per-plot ordered planting entries, keyed by plot id
    pub timeline: BTreeMap<u8, Vec<TimelineEntry>>,

    /// All adjacent-plot interactions with overlapping crops
    pub adjacency_events: Vec<AdjacencyEvent>,

    /// Pairwise scores over the selected plants, placement-independent
    pub compatibility_matrix: CompatibilityMatrix,

    /// Sum of all adjacency event compatibility values
    pub score: i64,
}
