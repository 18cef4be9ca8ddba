//! Built-in plant dataset.
//!
//! Growing windows use the month-float encoding described in
//! [`crate::calendar`]; durations are approximate days from
//! planting-in-ground until the plot can be cleared. Perennials carry 365
//! (full-season occupation) since they do not free their plot within a
//! single year. Companion/antagonist lists hold plant names resolved
//! through the catalog's normalization, so singular/plural variants match.

use crate::models::PlantProfile;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

struct Entry<'a> {
    name: &'a str,
    start: &'a [f64],
    transplant: &'a [f64],
    direct_sow: &'a [f64],
    duration_days: u16,
    succession: bool,
    companions: &'a [&'a str],
    antagonists: &'a [&'a str],
}

impl Entry<'_> {
    fn build(&self) -> PlantProfile {
        PlantProfile {
            name: self.name.to_string(),
            start: self.start.to_vec(),
            transplant: self.transplant.to_vec(),
            direct_sow: self.direct_sow.to_vec(),
            duration_days: self.duration_days,
            succession: self.succession,
            companions: names(self.companions),
            antagonists: names(self.antagonists),
        }
    }
}

/// All plants shipped with the default catalog.
#[allow(clippy::too_many_lines)]
pub(super) fn builtin_profiles() -> Vec<PlantProfile> {
    let entries = [
        Entry {
            name: "Basil",
            start: &[4.0, 5.5],
            transplant: &[5.5, 6.5],
            direct_sow: &[5.5, 6.5],
            duration_days: 70,
            succession: true,
            companions: &["Tomatoes", "Pepper", "Oregano"],
            antagonists: &[],
        },
        Entry {
            name: "Beans",
            start: &[],
            transplant: &[],
            direct_sow: &[5.5, 7.5],
            duration_days: 65,
            succession: true,
            companions: &["Corn", "Squash", "Carrots", "Cucumber", "Radish"],
            antagonists: &["Onions", "Garlic", "Chives", "Leeks"],
        },
        Entry {
            name: "Beet",
            start: &[],
            transplant: &[],
            direct_sow: &[4.0, 8.5],
            duration_days: 60,
            succession: true,
            companions: &["Onions", "Lettuce", "Cabbage"],
            antagonists: &["Beans"],
        },
        Entry {
            name: "Borage",
            start: &[],
            transplant: &[],
            direct_sow: &[4.0, 8.0],
            duration_days: 55,
            succession: false,
            companions: &["Tomatoes", "Squash", "Strawberries"],
            antagonists: &[],
        },
        Entry {
            name: "Broccoli",
            start: &[3.0, 4.5],
            transplant: &[4.5, 6.0],
            direct_sow: &[],
            duration_days: 80,
            succession: false,
            companions: &["Onions", "Celery", "Chamomile", "Beet"],
            antagonists: &["Tomatoes", "Strawberries"],
        },
        Entry {
            name: "Brussels Sprouts",
            start: &[5.5, 6.5],
            transplant: &[6.5, 7.5],
            direct_sow: &[],
            duration_days: 100,
            succession: false,
            companions: &["Dill", "Sage"],
            antagonists: &["Strawberries", "Tomatoes"],
        },
        Entry {
            name: "Cabbage",
            start: &[3.0, 4.5],
            transplant: &[4.5, 6.0],
            direct_sow: &[],
            duration_days: 85,
            succession: false,
            companions: &["Dill", "Onions", "Celery", "Chamomile"],
            antagonists: &["Tomatoes", "Strawberries"],
        },
        Entry {
            name: "Carrots",
            start: &[],
            transplant: &[],
            direct_sow: &[4.0, 7.5],
            duration_days: 75,
            succession: true,
            companions: &["Tomatoes", "Onions", "Leeks", "Peas", "Lettuce", "Chives"],
            antagonists: &["Dill"],
        },
        Entry {
            name: "Cauliflower",
            start: &[3.0, 4.5],
            transplant: &[4.5, 6.5],
            direct_sow: &[],
            duration_days: 75,
            succession: false,
            companions: &["Celery", "Beans"],
            antagonists: &["Strawberries", "Tomatoes"],
        },
        Entry {
            name: "Celery",
            start: &[3.0, 4.5],
            transplant: &[5.5, 6.5],
            direct_sow: &[],
            duration_days: 100,
            succession: false,
            companions: &["Cabbage", "Leeks", "Tomatoes"],
            antagonists: &["Corn"],
        },
        Entry {
            name: "Chamomile",
            start: &[],
            transplant: &[],
            direct_sow: &[4.0, 6.0, 9.0, 11.0],
            duration_days: 60,
            succession: false,
            companions: &["Cabbage", "Onions"],
            antagonists: &[],
        },
        Entry {
            name: "Chives",
            start: &[2.0, 4.5],
            transplant: &[4.5, 5.5],
            direct_sow: &[4.5, 6.5, 8.5, 9.5],
            duration_days: 365,
            succession: false,
            companions: &["Carrots", "Tomatoes", "Lettuce"],
            antagonists: &["Beans", "Peas"],
        },
        Entry {
            name: "Cilantro",
            start: &[],
            transplant: &[],
            direct_sow: &[3.0, 9.5],
            duration_days: 45,
            succession: true,
            companions: &["Spinach", "Lettuce"],
            antagonists: &["Fennel"],
        },
        Entry {
            name: "Corn",
            start: &[],
            transplant: &[],
            direct_sow: &[5.5, 6.5],
            duration_days: 85,
            succession: false,
            companions: &["Beans", "Squash", "Cucumber", "Peas"],
            antagonists: &["Tomatoes", "Celery"],
        },
        Entry {
            name: "Cucumber",
            start: &[4.5, 5.5],
            transplant: &[5.5, 6.5],
            direct_sow: &[5.5, 6.5],
            duration_days: 65,
            succession: false,
            companions: &["Beans", "Corn", "Radish", "Dill"],
            antagonists: &["Sage"],
        },
        Entry {
            name: "Dill",
            start: &[],
            transplant: &[],
            direct_sow: &[4.5, 8.5],
            duration_days: 55,
            succession: true,
            companions: &["Cabbage", "Cucumber", "Lettuce", "Onions"],
            antagonists: &["Carrots", "Tomatoes"],
        },
        Entry {
            name: "Eggplant",
            start: &[3.5, 4.5],
            transplant: &[5.5, 6.5],
            direct_sow: &[],
            duration_days: 80,
            succession: false,
            companions: &["Beans", "Pepper"],
            antagonists: &[],
        },
        Entry {
            name: "Garlic",
            start: &[],
            transplant: &[],
            direct_sow: &[2.0, 2.25, 9.0, 13.0],
            duration_days: 240,
            succession: false,
            companions: &["Tomatoes", "Cabbage"],
            antagonists: &["Beans", "Peas"],
        },
        Entry {
            name: "Kale",
            start: &[],
            transplant: &[],
            direct_sow: &[2.0, 8.5],
            duration_days: 65,
            succession: true,
            companions: &["Onions", "Beet", "Chamomile"],
            antagonists: &["Strawberries"],
        },
        Entry {
            name: "Kohlrabi",
            start: &[],
            transplant: &[],
            direct_sow: &[3.5, 5.5, 7.5, 8.25],
            duration_days: 55,
            succession: true,
            companions: &["Beet", "Onions"],
            antagonists: &["Tomatoes", "Beans"],
        },
        Entry {
            name: "Leeks",
            start: &[1.5, 4.0, 6.0, 6.5],
            transplant: &[4.0, 5.5, 7.0, 7.5],
            direct_sow: &[],
            duration_days: 120,
            succession: false,
            companions: &["Carrots", "Celery", "Onions"],
            antagonists: &["Beans", "Peas"],
        },
        Entry {
            name: "Lettuce",
            start: &[2.0, 4.0],
            transplant: &[3.5, 4.5],
            direct_sow: &[4.5, 9.5],
            duration_days: 50,
            succession: true,
            companions: &["Carrots", "Radish", "Strawberries", "Chives"],
            antagonists: &[],
        },
        Entry {
            name: "Melons",
            start: &[4.5, 5.5],
            transplant: &[5.5, 6.5],
            direct_sow: &[],
            duration_days: 85,
            succession: false,
            companions: &["Corn", "Radish"],
            antagonists: &["Potatoes"],
        },
        Entry {
            name: "Mint",
            start: &[2.0, 4.5],
            transplant: &[4.5, 6.5],
            direct_sow: &[5.5, 6.5],
            duration_days: 365,
            succession: false,
            companions: &["Cabbage", "Tomatoes"],
            antagonists: &["Parsley"],
        },
        Entry {
            name: "Mustard",
            start: &[],
            transplant: &[],
            direct_sow: &[2.0, 6.0, 9.0, 10.5],
            duration_days: 40,
            succession: true,
            companions: &["Cabbage", "Radish"],
            antagonists: &[],
        },
        Entry {
            name: "Onions",
            start: &[1.0, 4.5],
            transplant: &[],
            direct_sow: &[3.5, 5.5],
            duration_days: 100,
            succession: false,
            companions: &["Carrots", "Beet", "Cabbage", "Lettuce", "Tomatoes"],
            antagonists: &["Beans", "Peas"],
        },
        Entry {
            name: "Oregano",
            start: &[2.5, 5.5],
            transplant: &[4.5, 6.5],
            direct_sow: &[5.5, 6.5],
            duration_days: 365,
            succession: false,
            companions: &["Basil", "Pepper"],
            antagonists: &[],
        },
        Entry {
            name: "Parsley",
            start: &[],
            transplant: &[],
            direct_sow: &[3.5, 8.0],
            duration_days: 75,
            succession: true,
            companions: &["Tomatoes", "Corn"],
            antagonists: &["Mint"],
        },
        Entry {
            name: "Peas",
            start: &[],
            transplant: &[],
            direct_sow: &[2.0, 5.5, 6.5, 8.5],
            duration_days: 65,
            succession: true,
            companions: &["Carrots", "Corn", "Cucumber", "Radish", "Turnip"],
            antagonists: &["Onions", "Garlic", "Chives", "Leeks"],
        },
        Entry {
            name: "Pepper",
            start: &[3.0, 4.5],
            transplant: &[5.5, 6.5],
            direct_sow: &[],
            duration_days: 80,
            succession: false,
            companions: &["Basil", "Onions", "Carrots"],
            antagonists: &["Fennel", "Kohlrabi"],
        },
        Entry {
            name: "Radish",
            start: &[],
            transplant: &[],
            direct_sow: &[2.0, 5.5, 9.0, 10.0],
            duration_days: 30,
            succession: true,
            companions: &["Peas", "Lettuce", "Cucumber", "Spinach"],
            antagonists: &[],
        },
        Entry {
            name: "Rosemary",
            start: &[2.0, 5.5],
            transplant: &[4.5, 6.5],
            direct_sow: &[5.5, 6.5],
            duration_days: 365,
            succession: false,
            companions: &["Cabbage", "Beans", "Carrots", "Sage"],
            antagonists: &[],
        },
        Entry {
            name: "Sage",
            start: &[2.0, 5.5],
            transplant: &[4.5, 6.5],
            direct_sow: &[5.5, 6.5],
            duration_days: 365,
            succession: false,
            companions: &["Rosemary", "Cabbage", "Carrots"],
            antagonists: &["Cucumber"],
        },
        Entry {
            name: "Spinach",
            start: &[],
            transplant: &[],
            direct_sow: &[2.0, 5.5, 9.0, 10.0],
            duration_days: 45,
            succession: true,
            companions: &["Strawberries", "Peas", "Beans"],
            antagonists: &[],
        },
        Entry {
            name: "Squash",
            start: &[4.5, 5.5],
            transplant: &[5.5, 6.5],
            direct_sow: &[5.5, 6.5],
            duration_days: 90,
            succession: false,
            companions: &["Corn", "Beans", "Borage", "Radish"],
            antagonists: &["Potatoes"],
        },
        Entry {
            name: "Strawberries",
            start: &[1.0, 3.5],
            transplant: &[4.5, 5.5],
            direct_sow: &[],
            duration_days: 365,
            succession: false,
            companions: &["Borage", "Lettuce", "Spinach", "Beans"],
            antagonists: &["Cabbage", "Broccoli"],
        },
        Entry {
            name: "Swiss Chard",
            start: &[],
            transplant: &[],
            direct_sow: &[4.5, 7.5],
            duration_days: 55,
            succession: true,
            companions: &["Beans", "Cabbage", "Onions"],
            antagonists: &[],
        },
        Entry {
            name: "Thyme",
            start: &[2.0, 5.5],
            transplant: &[4.5, 6.5],
            direct_sow: &[5.5, 6.5],
            duration_days: 365,
            succession: false,
            companions: &["Cabbage", "Strawberries"],
            antagonists: &[],
        },
        Entry {
            name: "Tomatoes",
            start: &[3.0, 4.5],
            transplant: &[4.5, 6.5],
            direct_sow: &[],
            duration_days: 100,
            succession: false,
            companions: &["Basil", "Carrots", "Onions", "Borage", "Parsley", "Chives"],
            antagonists: &["Cabbage", "Corn", "Kohlrabi", "Fennel", "Potatoes"],
        },
        Entry {
            name: "Turnip",
            start: &[],
            transplant: &[],
            direct_sow: &[3.5, 5.5, 8.5, 10.0],
            duration_days: 55,
            succession: true,
            companions: &["Peas"],
            antagonists: &[],
        },
    ];

    entries.iter().map(Entry::build).collect()
}
