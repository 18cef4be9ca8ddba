//! Symmetric compatibility matrix over the requested plants.

use serde::{Deserialize, Serialize};

/// Square matrix of pairwise compatibility scores.
///
/// Rows and columns follow the order of the deduplicated request list,
/// including plants that ended up unassigned — the matrix is informational
/// and independent of placement. The diagonal (self-compatibility) is not
/// a meaningful quantity and is fixed at zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompatibilityMatrix {
    /// Plant names in request order
    pub plants: Vec<String>,

    /// Row-major scores; `scores[i][j]` pairs `plants[i]` with `plants[j]`
    pub scores: Vec<Vec<i64>>,
}

impl CompatibilityMatrix {
    /// Builds a matrix by evaluating `score` for every ordered pair of
    /// distinct plants. The scoring function is expected to be symmetric;
    /// both triangles are still populated independently so the invariant
    /// is observable in the output.
    pub fn build<F>(plants: &[String], mut score: F) -> Self
    where
        F: FnMut(&str, &str) -> i64,
    {
        let scores = plants
            .iter()
            .map(|a| {
                plants
                    .iter()
                    .map(|b| if a == b { 0 } else { score(a, b) })
                    .collect()
            })
            .collect();

        Self {
            plants: plants.to_vec(),
            scores,
        }
    }

    /// Number of plants covered by the matrix.
    pub fn len(&self) -> usize {
        self.plants.len()
    }

    /// True if the matrix covers no plants.
    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    /// Score for a pair of plants by name, if both are present.
    pub fn get(&self, a: &str, b: &str) -> Option<i64> {
        let i = self.plants.iter().position(|p| p == a)?;
        let j = self.plants.iter().position(|p| p == b)?;
        Some(self.scores[i][j])
    }
}
