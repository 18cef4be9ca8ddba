//! Plot layout loading.
//!
//! Layouts are CSV files of cell values, one row per line: a plot id
//! (1-254), `0` for unassigned ground, or `x` for cells outside the
//! garden. Without a layout file a small built-in grid of six plots in
//! two rows is used.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use sprout_core::FarmGrid;

/// The built-in fallback layout: six plots in two rows of three.
pub fn default_grid() -> Result<FarmGrid> {
    FarmGrid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).context("built-in layout")
}

/// Loads the layout from `path`, or the built-in one if none is given.
pub fn load_grid(path: Option<&Path>) -> Result<FarmGrid> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read grid file {}", path.display()))?;
            parse_csv(&text).with_context(|| format!("Invalid grid file {}", path.display()))
        }
        None => default_grid(),
    }
}

/// Parses CSV text into a grid. Blank lines are skipped.
pub fn parse_csv(text: &str) -> Result<FarmGrid> {
    let mut rows = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let mut row = Vec::new();
        for cell in line.split(',') {
            let cell = cell.trim();
            let value = if cell.eq_ignore_ascii_case("x") {
                FarmGrid::INVALID
            } else {
                cell.parse::<u8>()
                    .with_context(|| format!("line {}: bad cell '{cell}'", line_no + 1))?
            };
            row.push(value);
        }
        rows.push(row);
    }
    if rows.is_empty() {
        bail!("grid file contains no rows");
    }
    Ok(FarmGrid::from_rows(rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plot_ids_and_invalid_cells() {
        let grid = parse_csv("1,1,x\n2,0,3\n").unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.get_cell(0, 2).unwrap(), FarmGrid::INVALID);
        assert_eq!(grid.get_cell(1, 1).unwrap(), FarmGrid::UNASSIGNED);
        assert_eq!(grid.plot_ids(), vec![1, 2, 3]);
    }

    #[test]
    fn skips_blank_lines() {
        let grid = parse_csv("1,2\n\n3,4\n").unwrap();
        assert_eq!(grid.height(), 2);
    }

    #[test]
    fn rejects_garbage_cells() {
        assert!(parse_csv("1,banana\n").is_err());
    }

    #[test]
    fn rejects_ragged_rows() {
        assert!(parse_csv("1,2\n3\n").is_err());
    }

    #[test]
    fn rejects_empty_input() {
        assert!(parse_csv("\n\n").is_err());
    }

    #[test]
    fn default_grid_has_six_plots() {
        let grid = default_grid().unwrap();
        assert_eq!(grid.plot_ids(), vec![1, 2, 3, 4, 5, 6]);
    }
}
