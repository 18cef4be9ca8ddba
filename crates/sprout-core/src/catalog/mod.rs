//! Plant catalog: growing parameters and companion/antagonist lookup.
//!
//! The catalog is read-only during a planning run. It ships with a
//! built-in dataset (see [`data`]) and can be replaced wholesale by a
//! JSON file carrying a list of [`PlantProfile`] records.
//!
//! Lookups are normalization-aware so that minor spelling differences
//! between data sources ("Tomato" vs "Tomatoes") resolve transparently.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use crate::calendar::parse_windows;
use crate::error::{PlanError, Result};
use crate::models::{GrowingWindow, Method, PlantProfile};

mod data;

/// Reduce a plant name to a canonical lowercase form.
///
/// Handles the most common English plural patterns so that `"Tomatoes"`
/// and `"Tomato"` both normalize to `"tomato"`.
pub fn normalize_name(name: &str) -> String {
    let name = name.trim().to_lowercase();
    if name.ends_with("ies") && name.len() > 4 {
        // strawberries -> strawberry
        return format!("{}y", &name[..name.len() - 3]);
    }
    if name.ends_with("oes") && name.len() > 4 {
        // tomatoes -> tomato
        return name[..name.len() - 2].to_string();
    }
    if name.ends_with('s') && !name.ends_with("ss") && !name.ends_with("us") && name.len() > 3 {
        // carrots -> carrot
        return name[..name.len() - 1].to_string();
    }
    name
}

/// Normalization-aware membership test for companion/antagonist lists.
fn list_contains(list: &[String], plant: &str) -> bool {
    let norm = normalize_name(plant);
    list.iter().any(|p| normalize_name(p) == norm)
}

/// The set of known plants and their growing parameters.
#[derive(Debug)]
pub struct PlantCatalog {
    profiles: BTreeMap<String, PlantProfile>,
    // normalized name -> canonical catalog name
    name_map: HashMap<String, String>,
}

impl PlantCatalog {
    /// Builds a catalog from a list of profiles. Later duplicates (by
    /// canonical name) replace earlier ones.
    pub fn new(profiles: Vec<PlantProfile>) -> Self {
        let mut map = BTreeMap::new();
        for profile in profiles {
            map.insert(profile.name.clone(), profile);
        }
        let name_map = map
            .keys()
            .map(|name| (normalize_name(name), name.clone()))
            .collect();
        Self {
            profiles: map,
            name_map,
        }
    }

    /// The built-in catalog distilled from the standard almanac data.
    pub fn builtin() -> Self {
        Self::new(data::builtin_profiles())
    }

    /// Parses a catalog from a JSON array of plant profiles.
    pub fn from_json(json: &str) -> Result<Self> {
        let profiles: Vec<PlantProfile> = serde_json::from_str(json)?;
        Ok(Self::new(profiles))
    }

    /// Loads a catalog from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(&path).map_err(|e| PlanError::FileSystem {
            path: path.as_ref().to_path_buf(),
            source: e,
        })?;
        Self::from_json(&json)
    }

    /// Number of plants in the catalog.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// True if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Sorted list of canonical plant names.
    pub fn names(&self) -> Vec<&str> {
        self.profiles.keys().map(String::as_str).collect()
    }

    /// Looks up a profile by exact or normalized name.
    pub fn get(&self, name: &str) -> Option<&PlantProfile> {
        if let Some(profile) = self.profiles.get(name) {
            return Some(profile);
        }
        self.name_map
            .get(&normalize_name(name))
            .and_then(|canonical| self.profiles.get(canonical))
    }

    /// True if the plant resolves to a catalog entry.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Outdoor growing windows (transplant + direct sow) for a plant in
    /// the given year, sorted by start date. Indoor seed-starting windows
    /// are excluded since they do not occupy plot space.
    pub fn growing_windows(&self, name: &str, year: i16) -> Vec<GrowingWindow> {
        let Some(profile) = self.get(name) else {
            return Vec::new();
        };
        let mut windows = parse_windows(&profile.transplant, Method::Transplant, year);
        windows.extend(parse_windows(&profile.direct_sow, Method::DirectSow, year));
        windows.sort_by_key(|w| w.start);
        windows
    }

    /// Score how well two plants get along when planted adjacently.
    ///
    /// +2 mutual companions, +1 one-directional, 0 neutral,
    /// -3 one-directional antagonist, -6 mutual antagonists.
    pub fn compatibility(&self, plant_a: &str, plant_b: &str) -> i64 {
        let mut score = 0;
        if let Some(a) = self.get(plant_a) {
            if list_contains(&a.companions, plant_b) {
                score += 1;
            }
            if list_contains(&a.antagonists, plant_b) {
                score -= 3;
            }
        }
        if let Some(b) = self.get(plant_b) {
            if list_contains(&b.companions, plant_a) {
                score += 1;
            }
            if list_contains(&b.antagonists, plant_a) {
                score -= 3;
            }
        }
        score
    }
}

impl Default for PlantCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_common_plurals() {
        assert_eq!(normalize_name("Tomatoes"), "tomato");
        assert_eq!(normalize_name("Strawberries"), "strawberry");
        assert_eq!(normalize_name("Carrots"), "carrot");
        assert_eq!(normalize_name("  Basil "), "basil");
        // -ss and -us endings are not plurals
        assert_eq!(normalize_name("Watercress"), "watercress");
        assert_eq!(normalize_name("Asparagus"), "asparagus");
    }

    #[test]
    fn builtin_catalog_resolves_variant_spellings() {
        let catalog = PlantCatalog::builtin();
        assert!(catalog.contains("Tomatoes"));
        assert!(catalog.contains("tomato"));
        assert!(catalog.contains("Carrot"));
        assert!(!catalog.contains("Dragonfruit"));
    }

    #[test]
    fn compatibility_is_symmetric() {
        let catalog = PlantCatalog::builtin();
        for a in ["Tomatoes", "Basil", "Beans", "Onions", "Cabbage"] {
            for b in ["Carrots", "Dill", "Peas", "Corn"] {
                assert_eq!(
                    catalog.compatibility(a, b),
                    catalog.compatibility(b, a),
                    "asymmetric score for {a}/{b}"
                );
            }
        }
    }

    #[test]
    fn mutual_companions_score_plus_two() {
        let catalog = PlantCatalog::builtin();
        assert_eq!(catalog.compatibility("Tomatoes", "Basil"), 2);
    }

    #[test]
    fn antagonists_score_negative() {
        let catalog = PlantCatalog::builtin();
        assert!(catalog.compatibility("Beans", "Onions") < 0);
    }

    #[test]
    fn unknown_plants_are_neutral() {
        let catalog = PlantCatalog::builtin();
        assert_eq!(catalog.compatibility("Dragonfruit", "Moonflower"), 0);
    }

    #[test]
    fn growing_windows_are_sorted_and_outdoor_only() {
        let catalog = PlantCatalog::builtin();
        let windows = catalog.growing_windows("Tomatoes", 2026);
        assert!(!windows.is_empty());
        for pair in windows.windows(2) {
            assert!(pair[0].start <= pair[1].start);
        }
        assert!(windows
            .iter()
            .all(|w| w.method != crate::models::Method::Succession));
    }

    #[test]
    fn from_json_round_trips_profiles() {
        let catalog = PlantCatalog::from_json(
            r#"[{"name": "Testplant", "direct_sow": [4.0, 6.0], "duration_days": 50}]"#,
        )
        .expect("valid catalog json");
        assert_eq!(catalog.len(), 1);
        let profile = catalog.get("testplants").expect("normalized lookup");
        assert_eq!(profile.duration_days, 50);
        assert!(!profile.succession);
    }
}
