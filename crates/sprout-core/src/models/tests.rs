#[cfg(test)]
mod model_tests {
    use std::collections::BTreeMap;

    use jiff::civil::date;

    use crate::models::{
        AdjacencyEvent, Assignment, CompatibilityMatrix, Method, Plan, PlantProfile, TimelineEntry,
    };

    fn create_test_entry(start: jiff::civil::Date, end: jiff::civil::Date) -> TimelineEntry {
        TimelineEntry {
            plant: "Tomatoes".to_string(),
            start,
            end,
            method: Method::Transplant,
        }
    }

    #[test]
    fn method_round_trips_through_str() {
        for method in [Method::Transplant, Method::DirectSow, Method::Succession] {
            let parsed: Method = method.as_str().parse().unwrap();
            assert_eq!(parsed, method);
        }
        assert!("hydroponic".parse::<Method>().is_err());
    }

    #[test]
    fn method_serializes_snake_case() {
        let json = serde_json::to_string(&Method::DirectSow).unwrap();
        assert_eq!(json, "\"direct_sow\"");
    }

    #[test]
    fn timeline_entries_overlap_on_shared_days() {
        let entry = create_test_entry(date(2026, 4, 1), date(2026, 6, 1));
        assert!(entry.overlaps(date(2026, 5, 15), date(2026, 8, 1)));
        assert!(entry.overlaps(date(2026, 3, 1), date(2026, 4, 2)));
    }

    #[test]
    fn touching_half_open_intervals_do_not_overlap() {
        let entry = create_test_entry(date(2026, 4, 1), date(2026, 6, 1));
        assert!(!entry.overlaps(date(2026, 6, 1), date(2026, 8, 1)));
        assert!(!entry.overlaps(date(2026, 3, 1), date(2026, 4, 1)));
    }

    #[test]
    fn disjoint_intervals_do_not_overlap() {
        let entry = create_test_entry(date(2026, 4, 1), date(2026, 6, 1));
        assert!(!entry.overlaps(date(2026, 6, 2), date(2026, 8, 1)));
    }

    #[test]
    fn matrix_build_zeroes_the_diagonal() {
        let plants = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        let matrix = CompatibilityMatrix::build(&plants, |_, _| 7);
        assert_eq!(matrix.len(), 3);
        for a in &plants {
            for b in &plants {
                let expected = if a == b { 0 } else { 7 };
                assert_eq!(matrix.get(a, b), Some(expected));
            }
        }
        assert_eq!(matrix.get("A", "Zucchini"), None);
    }

    #[test]
    fn empty_matrix_reports_empty() {
        let matrix = CompatibilityMatrix::build(&[], |_, _| 0);
        assert!(matrix.is_empty());
        assert_eq!(matrix.len(), 0);
    }

    #[test]
    fn plant_profile_deserializes_with_defaults() {
        let json = r#"{"name": "Radishes", "direct_sow": [3.0, 5.0], "duration_days": 30}"#;
        let profile: PlantProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.name, "Radishes");
        assert!(profile.start.is_empty());
        assert!(profile.transplant.is_empty());
        assert!(!profile.succession);
        assert!(profile.companions.is_empty());
        assert!(profile.antagonists.is_empty());
    }

    #[test]
    fn plan_serialization_uses_civil_dates() {
        let plants = vec!["Tomatoes".to_string()];
        let mut timeline = BTreeMap::new();
        timeline.insert(
            1_u8,
            vec![create_test_entry(date(2026, 5, 15), date(2026, 8, 23))],
        );
        let plan = Plan {
            year: 2026,
            selected_plants: plants.clone(),
            assigned: vec![Assignment {
                plant: "Tomatoes".to_string(),
                plot_id: 1,
                start: date(2026, 5, 15),
                end: date(2026, 8, 23),
                method: Method::Transplant,
                slots: 1,
            }],
            unassigned_plants: Vec::new(),
            timeline,
            adjacency_events: Vec::new(),
            compatibility_matrix: CompatibilityMatrix::build(&plants, |_, _| 0),
            score: 0,
        };

        let json = serde_json::to_string(&plan).unwrap();
        assert!(json.contains("\"2026-05-15\""));
        assert!(json.contains("\"2026-08-23\""));

        let back: Plan = serde_json::from_str(&json).unwrap();
        assert_eq!(back.year, 2026);
        assert_eq!(back.timeline[&1][0].start, date(2026, 5, 15));
    }

    #[test]
    fn adjacency_event_serializes_both_plots() {
        let event = AdjacencyEvent {
            plot_a: 1,
            plot_b: 2,
            plant_a: "Tomatoes".to_string(),
            plant_b: "Basil".to_string(),
            compatibility: 2,
            overlap_start: date(2026, 6, 1),
            overlap_end: date(2026, 7, 1),
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: AdjacencyEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back.plot_a, 1);
        assert_eq!(back.plot_b, 2);
        assert_eq!(back.compatibility, 2);
    }
}
