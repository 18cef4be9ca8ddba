//! Farm grid representation.
//!
//! The farm is a 2D grid of cells. Each cell holds an integer value:
//!
//! - 255: outside the farm boundary (not plantable space)
//! - 0: valid farm space not yet assigned to a plot
//! - 1-254: plot id, a contiguous region the user has defined
//!
//! Irregular farm shapes fall out naturally: only painted cells become
//! part of the working area, everything else stays 255. The grid itself
//! is owned by the external editing subsystem; the engine only derives a
//! [`crate::topology::PlotTopology`] from it.

use std::collections::BTreeSet;
use std::fmt;

use crate::error::{PlanError, Result};

/// 2D grid of cells representing a farm layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FarmGrid {
    width: usize,
    height: usize,
    cells: Vec<Vec<u8>>,
}

impl FarmGrid {
    /// Cell value for space outside the farm boundary.
    pub const INVALID: u8 = 255;

    /// Cell value for farm space not yet assigned to a plot.
    pub const UNASSIGNED: u8 = 0;

    /// Create a grid filled entirely with [`Self::INVALID`] cells.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![Self::INVALID; width]; height],
        }
    }

    /// Create a grid from an existing cell matrix (one inner vec per row).
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::InvalidGrid`] if the rows have differing
    /// lengths.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            return Err(PlanError::invalid_grid("rows have differing lengths"));
        }
        Ok(Self {
            width,
            height,
            cells: rows,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major cell matrix.
    pub fn cells(&self) -> &[Vec<u8>] {
        &self.cells
    }

    /// Value of a single cell.
    pub fn get_cell(&self, row: usize, col: usize) -> Result<u8> {
        self.check_bounds(row, col)?;
        Ok(self.cells[row][col])
    }

    /// Set a single cell's value.
    pub fn set_cell(&mut self, row: usize, col: usize, value: u8) -> Result<()> {
        self.check_bounds(row, col)?;
        self.cells[row][col] = value;
        Ok(())
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.height || col >= self.width {
            return Err(PlanError::invalid_grid(format!(
                "cell ({row}, {col}) out of bounds for {}x{} grid",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// All `(row, col)` cells belonging to `plot_id`.
    pub fn plot_cells(&self, plot_id: u8) -> Vec<(usize, usize)> {
        (0..self.height)
            .flat_map(|r| (0..self.width).map(move |c| (r, c)))
            .filter(|&(r, c)| self.cells[r][c] == plot_id)
            .collect()
    }

    /// Sorted unique plot ids (sentinels excluded).
    pub fn plot_ids(&self) -> Vec<u8> {
        let ids: BTreeSet<u8> = self
            .cells
            .iter()
            .flatten()
            .copied()
            .filter(|&v| v != Self::INVALID && v != Self::UNASSIGNED)
            .collect();
        ids.into_iter().collect()
    }

    /// Plot ids sharing an edge with `plot_id` (4-connectivity).
    pub fn adjacent_plots(&self, plot_id: u8) -> BTreeSet<u8> {
        let mut adjacent = BTreeSet::new();
        for (r, c) in self.plot_cells(plot_id) {
            for (dr, dc) in [(-1i64, 0i64), (1, 0), (0, -1), (0, 1)] {
                let (nr, nc) = (r as i64 + dr, c as i64 + dc);
                if nr < 0 || nc < 0 || nr >= self.height as i64 || nc >= self.width as i64 {
                    continue;
                }
                let neighbor = self.cells[nr as usize][nc as usize];
                if neighbor != Self::INVALID && neighbor != Self::UNASSIGNED && neighbor != plot_id
                {
                    adjacent.insert(neighbor);
                }
            }
        }
        adjacent
    }

    /// True if any cell is still [`Self::UNASSIGNED`].
    pub fn has_unassigned(&self) -> bool {
        self.cells.iter().flatten().any(|&v| v == Self::UNASSIGNED)
    }
}

impl fmt::Display for FarmGrid {
    /// Human-readable grid; invalid cells are shown as '.' for clarity.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let max_val = self
            .cells
            .iter()
            .flatten()
            .copied()
            .filter(|&v| v != Self::INVALID)
            .max()
            .unwrap_or(0);
        let w = max_val.to_string().len().max(3);

        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let parts: Vec<String> = row
                .iter()
                .map(|&v| {
                    if v == Self::INVALID {
                        format!("{:>w$}", ".")
                    } else {
                        format!("{v:>w$}")
                    }
                })
                .collect();
            write!(f, "{}", parts.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_plot_grid() -> FarmGrid {
        FarmGrid::from_rows(vec![
            vec![1, 1, 2, 2],
            vec![1, 1, 2, 2],
            vec![255, 0, 255, 255],
        ])
        .expect("rectangular grid")
    }

    #[test]
    fn plot_ids_exclude_sentinels() {
        assert_eq!(two_plot_grid().plot_ids(), vec![1, 2]);
    }

    #[test]
    fn adjacency_is_mutual_and_skips_sentinels() {
        let grid = two_plot_grid();
        assert_eq!(grid.adjacent_plots(1), BTreeSet::from([2]));
        assert_eq!(grid.adjacent_plots(2), BTreeSet::from([1]));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let result = FarmGrid::from_rows(vec![vec![1, 1], vec![1]]);
        assert!(matches!(result, Err(PlanError::InvalidGrid { .. })));
    }

    #[test]
    fn out_of_bounds_access_errors() {
        let grid = two_plot_grid();
        assert!(grid.get_cell(10, 0).is_err());
    }

    #[test]
    fn display_masks_invalid_cells() {
        let rendered = two_plot_grid().to_string();
        assert!(rendered.contains('.'));
        assert!(rendered.contains('1'));
    }

    #[test]
    fn unassigned_detection() {
        assert!(two_plot_grid().has_unassigned());
        assert!(!FarmGrid::new(2, 2).has_unassigned());
    }
}
