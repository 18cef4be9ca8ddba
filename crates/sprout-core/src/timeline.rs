//! Time-aware plot occupancy tracking.
//!
//! Each plot has a timeline of non-overlapping planting entries. The farm
//! timeline aggregates all plots and supports snapshot queries ("what is
//! growing everywhere on date X?") which power the scrub-through-the-year
//! view of the external UI.

use std::collections::BTreeMap;

use jiff::civil::Date;
use jiff::ToSpan;

use crate::models::TimelineEntry;
use crate::topology::PlotTopology;

/// Minimum gap between successive crops in the same plot (days).
/// Covers clearing debris, light soil prep, etc.
pub const CROP_BUFFER_DAYS: i64 = 7;

/// Tracks what occupies a single plot across the year.
///
/// Entries are kept sorted by start date and must never overlap.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotTimeline {
    plot_id: u8,
    entries: Vec<TimelineEntry>,
}

impl PlotTimeline {
    /// An empty timeline for one plot.
    pub fn new(plot_id: u8) -> Self {
        Self {
            plot_id,
            entries: Vec::new(),
        }
    }

    /// The plot this timeline belongs to.
    pub fn plot_id(&self) -> u8 {
        self.plot_id
    }

    /// Entries sorted by start date.
    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    /// Record a planting, keeping entries sorted by start date.
    pub fn add(&mut self, entry: TimelineEntry) {
        let position = self
            .entries
            .partition_point(|existing| existing.start <= entry.start);
        self.entries.insert(position, entry);
    }

    /// First date >= `target` when the plot is unoccupied, accounting for
    /// the between-crop buffer.
    pub fn earliest_free_after(&self, target: Date) -> Date {
        let mut result = target;
        for entry in &self.entries {
            let buffer_end = entry.end.saturating_add(CROP_BUFFER_DAYS.days());
            if entry.start <= result && result < buffer_end {
                result = buffer_end;
            }
        }
        result
    }

    /// True if no existing entry overlaps `[start, end)`.
    pub fn is_free_during(&self, start: Date, end: Date) -> bool {
        !self.entries.iter().any(|entry| entry.overlaps(start, end))
    }

    /// True if `[start, end)` can be committed with the crop buffer
    /// honored on both sides of every existing entry.
    pub fn fits(&self, start: Date, end: Date) -> bool {
        !self.entries.iter().any(|entry| {
            entry.start < end.saturating_add(CROP_BUFFER_DAYS.days())
                && entry.end.saturating_add(CROP_BUFFER_DAYS.days()) > start
        })
    }

    /// Plant occupying this plot on `date`, if any.
    pub fn plant_at(&self, date: Date) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.start <= date && date < entry.end)
            .map(|entry| entry.plant.as_str())
    }

    /// All entries whose occupation overlaps `[start, end)`.
    pub fn overlapping_entries(&self, start: Date, end: Date) -> Vec<&TimelineEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.overlaps(start, end))
            .collect()
    }
}

/// Aggregates per-plot timelines for the entire farm.
#[derive(Debug, Clone, PartialEq)]
pub struct FarmTimeline {
    timelines: BTreeMap<u8, PlotTimeline>,
}

impl FarmTimeline {
    /// One empty timeline per plot in the topology.
    pub fn new(topology: &PlotTopology) -> Self {
        Self {
            timelines: topology
                .plot_ids()
                .map(|id| (id, PlotTimeline::new(id)))
                .collect(),
        }
    }

    /// Record a planting in a plot. Entries for unknown plots are dropped.
    pub fn add(&mut self, plot_id: u8, entry: TimelineEntry) {
        if let Some(timeline) = self.timelines.get_mut(&plot_id) {
            timeline.add(entry);
        }
    }

    /// Timeline for one plot.
    pub fn get(&self, plot_id: u8) -> Option<&PlotTimeline> {
        self.timelines.get(&plot_id)
    }

    /// Iterate timelines in plot-id order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &PlotTimeline)> {
        self.timelines.iter().map(|(&id, timeline)| (id, timeline))
    }

    /// Map of plot id -> plant name (or None) for a single date.
    pub fn snapshot(&self, date: Date) -> BTreeMap<u8, Option<String>> {
        self.timelines
            .iter()
            .map(|(&id, timeline)| (id, timeline.plant_at(date).map(String::from)))
            .collect()
    }

    /// Plants in plots adjacent to `plot_id` whose occupation overlaps
    /// `[start, end)`. Names may repeat across entries; callers dedupe.
    pub fn adjacent_plants_during(
        &self,
        topology: &PlotTopology,
        plot_id: u8,
        start: Date,
        end: Date,
    ) -> Vec<String> {
        topology
            .adjacent(plot_id)
            .filter_map(|adj_id| self.timelines.get(&adj_id))
            .flat_map(|timeline| timeline.overlapping_entries(start, end))
            .map(|entry| entry.plant.clone())
            .collect()
    }

    /// Consume into the per-plot entry map used by the plan contract.
    pub fn into_map(self) -> BTreeMap<u8, Vec<TimelineEntry>> {
        self.timelines
            .into_iter()
            .map(|(id, timeline)| (id, timeline.entries))
            .collect()
    }
}
