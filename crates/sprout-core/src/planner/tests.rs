use std::io::Write;

use jiff::civil::date;

use crate::catalog::PlantCatalog;
use crate::error::PlanError;
use crate::grid::FarmGrid;
use crate::models::{Method, PlantProfile};
use crate::params::PlanRequest;
use crate::planner::{Planner, PlannerBuilder};
use crate::topology::PlotTopology;

fn profile(
    name: &str,
    direct_sow: &[f64],
    duration_days: u16,
    companions: &[&str],
    antagonists: &[&str],
) -> PlantProfile {
    PlantProfile {
        name: name.to_string(),
        start: Vec::new(),
        transplant: Vec::new(),
        direct_sow: direct_sow.to_vec(),
        duration_days,
        succession: false,
        companions: companions.iter().map(|s| (*s).to_string()).collect(),
        antagonists: antagonists.iter().map(|s| (*s).to_string()).collect(),
    }
}

fn test_planner() -> Planner {
    let catalog = PlantCatalog::new(vec![
        profile("Tomatoes", &[5.0, 6.0], 100, &["Basil"], &[]),
        profile("Basil", &[5.0, 7.0], 60, &["Tomatoes"], &[]),
        profile("Beans", &[5.0, 6.5], 55, &[], &["Onions"]),
        profile("Onions", &[4.0, 5.5], 90, &[], &["Beans"]),
        // Sowing window opens too late for the maturity run to finish
        // before the season closes.
        profile("Glacier Corn", &[11.0, 11.5], 120, &[], &[]),
    ]);
    Planner::new(catalog)
}

fn pair_topology() -> PlotTopology {
    let grid = FarmGrid::from_rows(vec![vec![1, 2]]).unwrap();
    PlotTopology::from_grid(&grid)
}

fn single_topology() -> PlotTopology {
    let grid = FarmGrid::from_rows(vec![vec![1]]).unwrap();
    PlotTopology::from_grid(&grid)
}

fn request(plants: &[&str]) -> PlanRequest {
    PlanRequest {
        plants: plants.iter().map(|s| (*s).to_string()).collect(),
        year: 2026,
        start_month: 1,
    }
}

#[test]
fn rejects_out_of_range_start_month() {
    let planner = test_planner();
    let mut req = request(&["Tomatoes"]);
    req.start_month = 13;
    let err = planner.plan(&pair_topology(), &req).unwrap_err();
    assert!(matches!(err, PlanError::InvalidInput { ref field, .. } if field == "start_month"));
}

#[test]
fn rejects_out_of_range_year() {
    let planner = test_planner();
    let mut req = request(&["Tomatoes"]);
    req.year = 1850;
    let err = planner.plan(&pair_topology(), &req).unwrap_err();
    assert!(matches!(err, PlanError::InvalidInput { ref field, .. } if field == "year"));
}

#[test]
fn rejects_blank_plant_names() {
    let planner = test_planner();
    let err = planner
        .plan(&pair_topology(), &request(&["Tomatoes", "  "]))
        .unwrap_err();
    assert!(matches!(err, PlanError::InvalidInput { ref field, .. } if field == "plants"));
}

#[test]
fn rejects_unknown_plants() {
    let planner = test_planner();
    let err = planner
        .plan(&pair_topology(), &request(&["Dragonfruit"]))
        .unwrap_err();
    assert!(matches!(err, PlanError::UnknownPlant { ref name } if name == "Dragonfruit"));
}

#[test]
fn collapses_duplicate_names_keeping_first_spelling() {
    let planner = test_planner();
    let plan = planner
        .plan(&pair_topology(), &request(&["Tomato", "Basil", "Tomatoes"]))
        .unwrap();
    assert_eq!(plan.selected_plants, vec!["Tomato", "Basil"]);
}

#[test]
fn companions_land_in_adjacent_plots_for_positive_score() {
    let planner = test_planner();
    let plan = planner
        .plan(&pair_topology(), &request(&["Tomatoes", "Basil"]))
        .unwrap();

    assert_eq!(plan.assigned.len(), 2);
    assert!(plan.unassigned_plants.is_empty());
    assert_eq!(plan.adjacency_events.len(), 1);

    let event = &plan.adjacency_events[0];
    assert_eq!((event.plot_a, event.plot_b), (1, 2));
    assert_eq!(event.compatibility, 2);
    assert!(event.overlap_start < event.overlap_end);
    assert_eq!(plan.score, 2);
}

#[test]
fn antagonists_share_a_pair_only_when_forced() {
    let planner = test_planner();
    let plan = planner
        .plan(&pair_topology(), &request(&["Beans", "Onions"]))
        .unwrap();

    // Both fit, and with only two adjacent plots the -6 interaction is
    // unavoidable; the plan records it rather than dropping a plant.
    assert_eq!(plan.assigned.len(), 2);
    assert_eq!(plan.score, -6);
}

#[test]
fn earlier_ranks_claim_capacity_first() {
    let planner = test_planner();
    // Tomatoes and Onions both want the single plot for overlapping
    // spans; rank order decides.
    let plan = planner
        .plan(&single_topology(), &request(&["Onions", "Tomatoes"]))
        .unwrap();
    assert_eq!(plan.assigned.len(), 1);
    assert_eq!(plan.assigned[0].plant, "Onions");
    assert_eq!(plan.unassigned_plants, vec!["Tomatoes"]);

    let reranked = planner
        .plan(&single_topology(), &request(&["Tomatoes", "Onions"]))
        .unwrap();
    assert_eq!(reranked.assigned[0].plant, "Tomatoes");
    assert_eq!(reranked.unassigned_plants, vec!["Onions"]);
}

#[test]
fn committed_entries_keep_the_crop_buffer_within_a_plot() {
    // Two windows meeting end-to-start must not produce gapless
    // back-to-back entries in the same plot.
    let mut chard = profile("Rainbow Chard", &[5.0, 5.0], 30, &[], &[]);
    chard.transplant = vec![4.0, 4.0];
    let planner = Planner::new(PlantCatalog::new(vec![chard]));

    let plan = planner
        .plan(&single_topology(), &request(&["Rainbow Chard"]))
        .unwrap();
    let entries = &plan.timeline[&1];
    // The May slot starts the day the April crop clears, so only the
    // April planting survives packing.
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].start, jiff::civil::date(2026, 4, 1));
    for pair in entries.windows(2) {
        let gap = pair[0].end.until(pair[1].start).unwrap().get_days();
        assert!(gap >= 7, "entries only {gap} days apart");
    }
}

#[test]
fn timeline_entries_never_overlap_within_a_plot() {
    let planner = test_planner();
    let plan = planner
        .plan(
            &pair_topology(),
            &request(&["Tomatoes", "Basil", "Beans", "Onions"]),
        )
        .unwrap();

    for entries in plan.timeline.values() {
        for pair in entries.windows(2) {
            assert!(pair[0].end <= pair[1].start, "entries overlap: {pair:?}");
        }
    }
}

#[test]
fn infeasible_plants_are_reported_not_errors() {
    let planner = test_planner();
    let plan = planner
        .plan(&pair_topology(), &request(&["Glacier Corn", "Basil"]))
        .unwrap();

    assert_eq!(plan.unassigned_plants, vec!["Glacier Corn"]);
    assert_eq!(plan.assigned.len(), 1);
    // Unassigned plants still appear in the matrix.
    assert_eq!(plan.compatibility_matrix.len(), 2);
    assert_eq!(
        plan.compatibility_matrix.get("Glacier Corn", "Basil"),
        Some(0)
    );
}

#[test]
fn empty_topology_yields_a_fully_unassigned_plan() {
    let planner = test_planner();
    let topology = PlotTopology::from_plots(Vec::new());
    let plan = planner.plan(&topology, &request(&["Tomatoes"])).unwrap();
    assert!(plan.assigned.is_empty());
    assert_eq!(plan.unassigned_plants, vec!["Tomatoes"]);
    assert!(plan.timeline.is_empty());
}

#[test]
fn empty_plant_list_yields_an_empty_plan() {
    let planner = test_planner();
    let plan = planner.plan(&pair_topology(), &request(&[])).unwrap();
    assert!(plan.selected_plants.is_empty());
    assert!(plan.assigned.is_empty());
    assert!(plan.compatibility_matrix.is_empty());
    assert_eq!(plan.score, 0);
}

#[test]
fn start_month_pushes_planting_dates_forward() {
    let planner = test_planner();
    let mut req = request(&["Basil"]);
    req.start_month = 6;
    let plan = planner.plan(&single_topology(), &req).unwrap();
    assert_eq!(plan.assigned.len(), 1);
    assert!(plan.assigned[0].start >= date(2026, 6, 1));
    assert_eq!(plan.assigned[0].method, Method::DirectSow);
}

#[test]
fn identical_requests_produce_identical_plans() {
    let planner = test_planner();
    let req = request(&["Tomatoes", "Basil", "Beans", "Onions"]);
    let first = planner.plan(&pair_topology(), &req).unwrap();
    let second = planner.plan(&pair_topology(), &req).unwrap();
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn score_equals_sum_of_adjacency_events() {
    let planner = test_planner();
    let plan = planner
        .plan(
            &pair_topology(),
            &request(&["Tomatoes", "Basil", "Beans", "Onions"]),
        )
        .unwrap();
    let total: i64 = plan
        .adjacency_events
        .iter()
        .map(|event| event.compatibility)
        .sum();
    assert_eq!(plan.score, total);
    for event in &plan.adjacency_events {
        assert!(event.plot_a < event.plot_b);
    }
}

#[test]
fn builder_defaults_to_the_builtin_catalog() {
    let planner = PlannerBuilder::new().build().unwrap();
    assert!(planner.catalog().contains("Tomatoes"));
}

#[test]
fn builder_loads_a_catalog_file() {
    let catalog = vec![profile("Moon Melon", &[5.0, 6.0], 80, &[], &[])];
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(serde_json::to_string(&catalog).unwrap().as_bytes())
        .unwrap();

    let planner = PlannerBuilder::new()
        .with_catalog_file(Some(file.path()))
        .build()
        .unwrap();
    assert_eq!(planner.catalog().len(), 1);
    assert!(planner.catalog().contains("Moon Melon"));
}

#[test]
fn builder_reports_missing_catalog_files() {
    let err = PlannerBuilder::new()
        .with_catalog_file(Some("/nonexistent/catalog.json"))
        .build()
        .unwrap_err();
    assert!(matches!(err, PlanError::FileSystem { .. }));
}
