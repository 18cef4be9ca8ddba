//! Data models for the planting plan contract.
//!
//! This module contains the core domain models exchanged with callers of
//! the planning engine: catalog plant profiles, growing windows, timeline
//! entries, adjacency events, and the aggregate [`Plan`]. Display
//! implementations live in [`crate::display`] to keep data structures and
//! presentation logic separate.
//!
//! All contract types carry serde derives; dates serialize as `YYYY-MM-DD`
//! via jiff's civil date support. Timeline maps are keyed by plot id, which
//! serde_json renders as decimal string keys.

pub mod matrix;
pub mod plan;
pub mod plant;

#[cfg(test)]
mod tests;

pub use matrix::CompatibilityMatrix;
pub use plan::{AdjacencyEvent, Assignment, Plan, TimelineEntry};
pub use plant::{GrowingWindow, Method, PlantProfile};
