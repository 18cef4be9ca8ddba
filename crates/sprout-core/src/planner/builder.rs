//! Builder for creating and configuring Planner instances.

use std::path::{Path, PathBuf};

use super::Planner;
use crate::catalog::PlantCatalog;
use crate::error::Result;

/// Builder for creating and configuring Planner instances.
#[derive(Debug, Clone, Default)]
pub struct PlannerBuilder {
    catalog_path: Option<PathBuf>,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self { catalog_path: None }
    }

    /// Sets a JSON file to load the plant catalog from.
    ///
    /// If not specified, the built-in catalog is used.
    pub fn with_catalog_file<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.catalog_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured planner instance.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PlanError::FileSystem`] if the catalog file cannot
    /// be read, or [`crate::PlanError::Serialization`] if it is not a
    /// valid profile list.
    pub fn build(self) -> Result<Planner> {
        let catalog = match self.catalog_path {
            Some(path) => PlantCatalog::from_file(path)?,
            None => PlantCatalog::builtin(),
        };
        Ok(Planner::new(catalog))
    }
}
