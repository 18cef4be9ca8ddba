//! Plot topology: the caller-supplied spatial structure of the farm.
//!
//! The engine never reads the grid directly during planning; it receives
//! an explicit [`PlotTopology`] value carrying plot ids, footprints, and
//! the adjacency relation. Each planning request computes against its own
//! topology value and starts with empty occupancy, so concurrent requests
//! share nothing mutable.

use std::collections::{BTreeMap, BTreeSet};

use crate::grid::FarmGrid;

/// A named, contiguous region of the farm grid eligible to hold one
/// planting schedule over time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plot {
    /// Plot id in 1..=254
    pub id: u8,

    /// Grid cells making up the plot (opaque to the engine beyond size)
    pub cells: Vec<(usize, usize)>,

    /// Ids of plots sharing at least one grid edge
    pub adjacent: BTreeSet<u8>,
}

/// The set of plots and their adjacency relation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlotTopology {
    plots: BTreeMap<u8, Plot>,
}

impl PlotTopology {
    /// Derives the topology from a painted grid: every distinct cell value
    /// in 1..=254 becomes a plot; adjacency is shared-edge 4-connectivity
    /// with the sentinel values excluded.
    pub fn from_grid(grid: &FarmGrid) -> Self {
        let plots = grid
            .plot_ids()
            .into_iter()
            .map(|id| {
                (
                    id,
                    Plot {
                        id,
                        cells: grid.plot_cells(id),
                        adjacent: grid.adjacent_plots(id),
                    },
                )
            })
            .collect();
        Self { plots }
    }

    /// Builds a topology directly from plot records, symmetrizing the
    /// adjacency relation so `(a, b)` implies `(b, a)`.
    pub fn from_plots(plots: Vec<Plot>) -> Self {
        let mut map: BTreeMap<u8, Plot> =
            plots.into_iter().map(|plot| (plot.id, plot)).collect();

        let pairs: Vec<(u8, u8)> = map
            .values()
            .flat_map(|plot| plot.adjacent.iter().map(move |&other| (plot.id, other)))
            .collect();
        for (a, b) in pairs {
            if let Some(other) = map.get_mut(&b) {
                other.adjacent.insert(a);
            }
        }
        Self { plots: map }
    }

    /// Number of plots.
    pub fn len(&self) -> usize {
        self.plots.len()
    }

    /// True if no plots are defined. Planning against an empty topology
    /// is valid and leaves every plant unassigned.
    pub fn is_empty(&self) -> bool {
        self.plots.is_empty()
    }

    /// Plot ids in ascending order.
    pub fn plot_ids(&self) -> impl Iterator<Item = u8> + '_ {
        self.plots.keys().copied()
    }

    /// Looks up a plot by id.
    pub fn get(&self, id: u8) -> Option<&Plot> {
        self.plots.get(&id)
    }

    /// Ids adjacent to `id`, ascending; empty for unknown plots.
    pub fn adjacent(&self, id: u8) -> impl Iterator<Item = u8> + '_ {
        self.plots
            .get(&id)
            .into_iter()
            .flat_map(|plot| plot.adjacent.iter().copied())
    }

    /// Footprint size of a plot in cells.
    pub fn footprint(&self, id: u8) -> usize {
        self.plots.get(&id).map_or(0, |plot| plot.cells.len())
    }
}
