//! Conversion between the catalog's month-float notation and civil dates.
//!
//! Catalog planting windows encode months as floats:
//!
//! ```text
//! 1.0  -> January 1
//! 1.5  -> January 15   (mid-month)
//! 5.5  -> May 15
//! 13.0 -> December 31  (overflow used by overwintering crops)
//! ```
//!
//! Windows arrive as flat lists of pairs: `[start, end]` for one window,
//! `[s1, e1, s2, e2]` for two (e.g. spring + fall).

use jiff::civil::{date, Date};

use crate::models::{GrowingWindow, Method};

/// Last date a packed slot may run to within a planning year. Crops still
/// in the ground past mid-December do not free their plot that season.
pub fn season_end(year: i16) -> Date {
    date(year, 12, 15)
}

/// Convert a month float to a civil date within `year`.
///
/// Fractions snap to the familiar almanac anchors: `.0` is the 1st,
/// up to `.25` the 8th, up to `.5` the 15th, and anything beyond scales
/// across the month, clamped to its length.
pub fn month_float_to_date(month_float: f64, year: i16) -> Date {
    if month_float >= 13.0 {
        return date(year, 12, 31);
    }

    let whole = month_float.trunc();
    let month = (whole as i8).clamp(1, 12);
    let fraction = month_float - whole;
    let days_in_month = date(year, month, 1).days_in_month();

    let day = if fraction == 0.0 {
        1
    } else if fraction <= 0.25 {
        8
    } else if fraction <= 0.5 {
        15
    } else {
        ((1.0 + fraction * f64::from(days_in_month)) as i8).min(days_in_month)
    };

    date(year, month, day)
}

/// Turn a flat list of month-float pairs into structured growing windows.
///
/// A trailing unpaired value is ignored, matching the encoding's
/// pair-per-window contract.
pub fn parse_windows(date_list: &[f64], method: Method, year: i16) -> Vec<GrowingWindow> {
    date_list
        .chunks_exact(2)
        .map(|pair| GrowingWindow {
            method,
            start: month_float_to_date(pair[0], year),
            end: month_float_to_date(pair[1], year),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_month_is_first_day() {
        assert_eq!(month_float_to_date(1.0, 2026), date(2026, 1, 1));
        assert_eq!(month_float_to_date(9.0, 2026), date(2026, 9, 1));
    }

    #[test]
    fn half_month_is_fifteenth() {
        assert_eq!(month_float_to_date(5.5, 2026), date(2026, 5, 15));
    }

    #[test]
    fn quarter_month_is_eighth() {
        assert_eq!(month_float_to_date(2.25, 2026), date(2026, 2, 8));
    }

    #[test]
    fn overflow_month_is_year_end() {
        assert_eq!(month_float_to_date(13.0, 2026), date(2026, 12, 31));
        assert_eq!(month_float_to_date(14.5, 2026), date(2026, 12, 31));
    }

    #[test]
    fn late_fraction_clamps_to_month_length() {
        // 0.99 of February scales past the 28th and clamps
        let d = month_float_to_date(2.99, 2026);
        assert_eq!(d.month(), 2);
        assert_eq!(d.day(), 28);
    }

    #[test]
    fn out_of_range_month_clamps() {
        assert_eq!(month_float_to_date(0.0, 2026), date(2026, 1, 1));
    }

    #[test]
    fn parses_multiple_windows() {
        let windows = parse_windows(&[2.0, 4.5, 9.0, 11.0], Method::DirectSow, 2026);
        assert_eq!(windows.len(), 2);
        assert_eq!(windows[0].start, date(2026, 2, 1));
        assert_eq!(windows[0].end, date(2026, 4, 15));
        assert_eq!(windows[1].start, date(2026, 9, 1));
        assert_eq!(windows[1].end, date(2026, 11, 1));
    }

    #[test]
    fn empty_list_yields_no_windows() {
        assert!(parse_windows(&[], Method::Transplant, 2026).is_empty());
    }
}
