//! Display formatting for plans and their parts.
//!
//! Domain models format as markdown so the same text renders in rich
//! terminals and flows through the MCP surface untouched. Dates use their
//! civil `YYYY-MM-DD` form throughout.

use std::fmt;

use crate::models::{AdjacencyEvent, CompatibilityMatrix, Method, Plan, TimelineEntry};

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Human tag for a compatibility score's sign.
fn compatibility_tag(score: i64) -> &'static str {
    match score {
        s if s > 0 => "COMPATIBLE",
        s if s < 0 => "INCOMPATIBLE",
        _ => "NEUTRAL",
    }
}

impl fmt::Display for TimelineEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {} | {} ({})",
            self.start, self.end, self.plant, self.method
        )
    }
}

impl fmt::Display for AdjacencyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Plots {}/{}: {} + {} = {:+} ({}) during {} to {}",
            self.plot_a,
            self.plot_b,
            self.plant_a,
            self.plant_b,
            self.compatibility,
            compatibility_tag(self.compatibility),
            self.overlap_start,
            self.overlap_end
        )
    }
}

impl fmt::Display for CompatibilityMatrix {
    /// Markdown table; the diagonal is rendered as `-` since self-scores
    /// are not applicable.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "(no plants selected)");
        }

        write!(f, "| |")?;
        for plant in &self.plants {
            write!(f, " {plant} |")?;
        }
        writeln!(f)?;
        write!(f, "|---|")?;
        for _ in &self.plants {
            write!(f, "---|")?;
        }
        writeln!(f)?;
        for (i, plant) in self.plants.iter().enumerate() {
            write!(f, "| {plant} |")?;
            for (j, score) in self.scores[i].iter().enumerate() {
                if i == j {
                    write!(f, " - |")?;
                } else {
                    write!(f, " {score:+} |")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Planting Plan {}", self.year)?;
        writeln!(f)?;
        writeln!(f, "- Selected (ranked): {}", self.selected_plants.join(", "))?;
        writeln!(f, "- Compatibility score: {}", self.score)?;
        if !self.unassigned_plants.is_empty() {
            writeln!(f, "- Could not fit: {}", self.unassigned_plants.join(", "))?;
        }

        writeln!(f, "\n## Plot Timelines")?;
        for (plot_id, entries) in &self.timeline {
            writeln!(f)?;
            if entries.is_empty() {
                writeln!(f, "Plot {plot_id}: (empty)")?;
                continue;
            }
            writeln!(f, "Plot {plot_id}:")?;
            for entry in entries {
                writeln!(f, "- {entry}")?;
            }
        }

        if !self.adjacency_events.is_empty() {
            writeln!(f, "\n## Adjacency Interactions")?;
            writeln!(f)?;
            for event in &self.adjacency_events {
                writeln!(f, "- {event}")?;
            }
        }

        writeln!(f, "\n## Compatibility Matrix")?;
        writeln!(f)?;
        write!(f, "{}", self.compatibility_matrix)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use jiff::civil::date;

    use super::*;

    #[test]
    fn tags_follow_score_sign() {
        assert_eq!(compatibility_tag(2), "COMPATIBLE");
        assert_eq!(compatibility_tag(-3), "INCOMPATIBLE");
        assert_eq!(compatibility_tag(0), "NEUTRAL");
    }

    #[test]
    fn plan_report_mentions_the_essentials() {
        let plants = vec!["Tomatoes".to_string(), "Basil".to_string()];
        let matrix = CompatibilityMatrix::build(&plants, |_, _| 2);
        let mut timeline = BTreeMap::new();
        timeline.insert(
            1,
            vec![TimelineEntry {
                plant: "Tomatoes".to_string(),
                start: date(2026, 4, 15),
                end: date(2026, 7, 24),
                method: Method::Transplant,
            }],
        );
        let plan = Plan {
            year: 2026,
            selected_plants: plants,
            assigned: Vec::new(),
            unassigned_plants: vec!["Basil".to_string()],
            timeline,
            adjacency_events: Vec::new(),
            compatibility_matrix: matrix,
            score: 0,
        };

        let rendered = plan.to_string();
        assert!(rendered.contains("# Planting Plan 2026"));
        assert!(rendered.contains("Could not fit: Basil"));
        assert!(rendered.contains("Plot 1:"));
        assert!(rendered.contains("2026-04-15 to 2026-07-24"));
        assert!(rendered.contains("transplant"));
    }
}
