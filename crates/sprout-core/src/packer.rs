//! Interval packer: candidate occupation slots for one plant in one year.
//!
//! Packing is plot-independent: it answers "when could this plant go into
//! the ground, and for how long", leaving occupancy conflicts to the
//! assignment engine. A slot's `[start, end)` interval covers planting
//! through plot clearance; the planting date itself must fall within a
//! growing window, the occupation may extend past the window's end but
//! never past the season end (mid-December).

use jiff::civil::{date, Date};
use jiff::ToSpan;

use crate::calendar::season_end;
use crate::models::{GrowingWindow, Method, PlantProfile};
use crate::timeline::CROP_BUFFER_DAYS;

/// One candidate occupation interval produced by packing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateSlot {
    /// Planting date
    pub start: Date,

    /// Clearance date (exclusive)
    pub end: Date,

    /// Window method for initial slots, `succession` afterwards
    pub method: Method,

    /// Position within the succession chain of its window (0 = initial)
    pub succession_index: u32,
}

impl CandidateSlot {
    /// True if `[start, end)` overlaps this slot or falls inside its
    /// crop buffer on either side.
    fn conflicts_with(&self, start: Date, end: Date) -> bool {
        self.start < end.saturating_add(CROP_BUFFER_DAYS.days())
            && self.end.saturating_add(CROP_BUFFER_DAYS.days()) > start
    }
}

/// Computes the ordered candidate slots for `profile` within `year`,
/// anchored no earlier than the first day of `start_month`.
///
/// Succession-eligible plants yield follow-up slots separated by the
/// crop buffer for as long as the planting date stays inside the window
/// and the slot still ends by the season end. A slot coming within the
/// crop buffer of one produced from an earlier window is dropped, so
/// any subset of the result can be committed to a single plot with the
/// buffer intact. An empty result means the plant cannot be placed in
/// the requested year regardless of plot.
pub fn pack(
    profile: &PlantProfile,
    windows: &[GrowingWindow],
    year: i16,
    start_month: i8,
) -> Vec<CandidateSlot> {
    let season_start = date(year, start_month.clamp(1, 12), 1);
    let last_end = season_end(year);
    let duration = i64::from(profile.duration_days);

    let mut slots: Vec<CandidateSlot> = Vec::new();
    for window in windows {
        let mut anchor = window.start.max(season_start);
        let mut index: u32 = 0;
        while anchor <= window.end {
            let end = anchor.saturating_add(duration.days());
            if end > last_end {
                break;
            }
            if !slots.iter().any(|slot| slot.conflicts_with(anchor, end)) {
                let method = if index == 0 {
                    window.method
                } else {
                    Method::Succession
                };
                slots.push(CandidateSlot {
                    start: anchor,
                    end,
                    method,
                    succession_index: index,
                });
                index += 1;
            }
            if !profile.succession {
                break;
            }
            anchor = end.saturating_add(CROP_BUFFER_DAYS.days());
        }
    }

    slots.sort_by_key(|slot| (slot.start, slot.end));
    slots
}
