//! Plant catalog records and growing windows.

use std::str::FromStr;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// How a timeline slot was produced.
///
/// Initial plantings carry the method of the growing window they were
/// packed from; follow-up plantings in a succession chain are tagged
/// [`Method::Succession`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Started indoors and moved outside on the planting date
    Transplant,

    /// Seeded directly into the plot
    DirectSow,

    /// Second or later planting of a succession chain
    Succession,
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "transplant" => Ok(Method::Transplant),
            "direct_sow" | "directsow" => Ok(Method::DirectSow),
            "succession" => Ok(Method::Succession),
            _ => Err(format!("Invalid planting method: {s}")),
        }
    }
}

impl Method {
    /// Wire representation (lowercase, underscore-separated).
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Transplant => "transplant",
            Method::DirectSow => "direct_sow",
            Method::Succession => "succession",
        }
    }
}

/// A date range during which a plant may go into the ground.
///
/// The range bounds the planting date, not the occupation: a crop planted
/// on the last day of its window still occupies the plot for its full
/// maturity duration afterwards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GrowingWindow {
    /// Planting method this window applies to
    pub method: Method,

    /// First valid planting date
    pub start: Date,

    /// Last valid planting date
    pub end: Date,
}

/// Catalog record describing one plant's growing parameters.
///
/// Window lists use the catalog's month-float encoding as flat pairs:
/// `[5.5, 6.5]` is one window from May 15 to June 15, and
/// `[2.0, 4.5, 9.0, 11.0]` encodes separate spring and fall windows.
/// See [`crate::calendar::month_float_to_date`] for the conversion rules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlantProfile {
    /// Canonical plant name as listed in the catalog
    pub name: String,

    /// Indoor seed-starting windows (do not occupy plot space)
    #[serde(default)]
    pub start: Vec<f64>,

    /// Transplant-outdoors windows
    #[serde(default)]
    pub transplant: Vec<f64>,

    /// Direct-sow windows
    #[serde(default)]
    pub direct_sow: Vec<f64>,

    /// Days from planting-in-ground until the plot can be cleared
    pub duration_days: u16,

    /// Whether sequential plantings of this plant may share one plot in
    /// one season
    #[serde(default)]
    pub succession: bool,

    /// Companion plants (each direction scores +1 when adjacent and
    /// simultaneously in the ground)
    #[serde(default)]
    pub companions: Vec<String>,

    /// Antagonist plants (each direction scores -3)
    #[serde(default)]
    pub antagonists: Vec<String>,
}
