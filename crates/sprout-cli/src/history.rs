//! Plan history storage.
//!
//! Saved plans live in a small SQLite database, one row per year. Only
//! the most recent four seasons are kept; saving a new plan prunes
//! anything older.

use std::path::PathBuf;

use anyhow::{Context, Result};
use jiff::Timestamp;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};
use sprout_core::Plan;

/// Number of seasons retained, counting back from the newest saved year.
const RETENTION_YEARS: i16 = 4;

/// One row of the history listing.
pub struct HistoryEntry {
    pub year: i16,
    pub saved_at: String,
    pub plants: usize,
    pub score: i64,
}

/// SQLite-backed store of saved plans, keyed by year.
pub struct HistoryStore {
    connection: Connection,
}

impl HistoryStore {
    /// Opens (and if needed creates) the store at `path`, or at the XDG
    /// default location.
    pub fn open(path: Option<PathBuf>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None => Self::default_path()?,
        };
        debug!("history database: {}", path.display());
        let connection = Connection::open(&path)
            .with_context(|| format!("Failed to open history database {}", path.display()))?;
        connection
            .execute(
                "CREATE TABLE IF NOT EXISTS plans (
                    year INTEGER PRIMARY KEY,
                    saved_at TEXT NOT NULL,
                    plan TEXT NOT NULL
                )",
                [],
            )
            .context("Failed to initialize history schema")?;
        Ok(Self { connection })
    }

    /// Returns the default database path following the XDG Base
    /// Directory specification.
    fn default_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("sprout")
            .place_data_file("history.db")
            .context("Failed to locate XDG data directory")
    }

    /// Saves a plan under its year, replacing any previous plan for that
    /// year, then drops seasons older than the retention window.
    pub fn save(&self, plan: &Plan) -> Result<()> {
        let json = serde_json::to_string(plan).context("Failed to serialize plan")?;
        self.connection
            .execute(
                "INSERT OR REPLACE INTO plans (year, saved_at, plan) VALUES (?1, ?2, ?3)",
                params![plan.year, Timestamp::now().to_string(), json],
            )
            .context("Failed to save plan")?;

        let newest: i16 = self
            .connection
            .query_row("SELECT MAX(year) FROM plans", [], |row| row.get(0))
            .context("Failed to query newest plan year")?;
        let pruned = self
            .connection
            .execute(
                "DELETE FROM plans WHERE year <= ?1",
                params![newest - RETENTION_YEARS],
            )
            .context("Failed to prune old plans")?;
        if pruned > 0 {
            debug!("pruned {pruned} old plan(s)");
        }
        Ok(())
    }

    /// The saved plan for a year, if any.
    pub fn get(&self, year: i16) -> Result<Option<Plan>> {
        let json: Option<String> = self
            .connection
            .query_row(
                "SELECT plan FROM plans WHERE year = ?1",
                params![year],
                |row| row.get(0),
            )
            .optional()
            .context("Failed to load plan")?;
        match json {
            Some(json) => Ok(Some(
                serde_json::from_str(&json).context("Stored plan is not valid JSON")?,
            )),
            None => Ok(None),
        }
    }

    /// Summaries of all saved plans, newest year first.
    pub fn list(&self) -> Result<Vec<HistoryEntry>> {
        let mut statement = self
            .connection
            .prepare("SELECT year, saved_at, plan FROM plans ORDER BY year DESC")
            .context("Failed to query history")?;
        let rows = statement
            .query_map([], |row| {
                Ok((
                    row.get::<_, i16>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                ))
            })
            .context("Failed to read history rows")?;

        let mut entries = Vec::new();
        for row in rows {
            let (year, saved_at, json) = row.context("Failed to read history row")?;
            let plan: Plan = serde_json::from_str(&json).context("Stored plan is not valid JSON")?;
            entries.push(HistoryEntry {
                year,
                saved_at,
                plants: plan.selected_plants.len(),
                score: plan.score,
            });
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use sprout_core::{FarmGrid, PlannerBuilder, PlotTopology};
    use sprout_core::params::PlanRequest;

    use super::*;

    fn make_plan(year: i16) -> Plan {
        let grid = FarmGrid::from_rows(vec![vec![1, 2]]).unwrap();
        let planner = PlannerBuilder::new().build().unwrap();
        planner
            .plan(
                &PlotTopology::from_grid(&grid),
                &PlanRequest {
                    plants: vec!["Tomatoes".to_string(), "Basil".to_string()],
                    year,
                    start_month: 1,
                },
            )
            .unwrap()
    }

    fn open_store(dir: &tempfile::TempDir) -> HistoryStore {
        HistoryStore::open(Some(dir.path().join("history.db"))).unwrap()
    }

    #[test]
    fn saves_and_reloads_plans() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);
        let plan = make_plan(2026);
        store.save(&plan).unwrap();

        let loaded = store.get(2026).unwrap().unwrap();
        assert_eq!(loaded, plan);
        assert!(store.get(2025).unwrap().is_none());
    }

    #[test]
    fn resaving_a_year_replaces_the_plan() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);
        store.save(&make_plan(2026)).unwrap();
        store.save(&make_plan(2026)).unwrap();
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn prunes_seasons_outside_the_retention_window() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);
        for year in 2020..=2026 {
            store.save(&make_plan(year)).unwrap();
        }

        let years: Vec<i16> = store.list().unwrap().iter().map(|e| e.year).collect();
        assert_eq!(years, vec![2026, 2025, 2024, 2023]);
    }

    #[test]
    fn listing_reports_summary_fields() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);
        store.save(&make_plan(2026)).unwrap();

        let entries = store.list().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].year, 2026);
        assert_eq!(entries[0].plants, 2);
    }
}
