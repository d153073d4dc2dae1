//! Split sequence construction.
//!
//! Splits are the row boundaries of the day grid: the fixed subdivision lines
//! plus every event edge, so each event starts and ends exactly on a line.

use chrono::Duration;
use chrono_tz::Tz;

use super::RelativePosition;
use crate::error::Result;
use crate::models::window::Window;
use crate::utils::date::{map_to_fraction, resolve_local};

const DAY_NANOS: i128 = 86_400_000_000_000;

/// `count + 1` equally spaced fractions from `0.0` to `1.0` inclusive.
pub fn fixed_splits(count: u32) -> Vec<f64> {
    (0..=count)
        .map(|k| f64::from(k) / f64::from(count))
        .collect()
}

/// Fixed subdivision lines of `window` as fractions.
///
/// Normally `count + 1` equal parts. A calendar day that gains or loses an
/// hour to a DST change instead gets its lines at the wall-clock times of a
/// regular day (`local start + k * 24h / count`), so hour lines stay on the
/// hour: the repeated hour merges into one taller row and the skipped hour
/// drops out.
pub fn fixed_lines(window: &Window, count: u32) -> Result<Vec<f64>> {
    match window.time_zone() {
        Some(tz) if window.duration() != Duration::days(1) => clock_lines(window, tz, count),
        _ => Ok(fixed_splits(count)),
    }
}

fn clock_lines(window: &Window, tz: Tz, count: u32) -> Result<Vec<f64>> {
    let local_start = window.start().with_timezone(&tz).naive_local();
    let mut lines = vec![0.0, 1.0];

    for k in 1..count {
        let offset = DAY_NANOS * i128::from(k) / i128::from(count);
        let instant = resolve_local(local_start + Duration::nanoseconds(offset as i64), tz);
        lines.push(map_to_fraction(instant, window.start(), window.end())?);
    }

    lines.sort_by(f64::total_cmp);
    lines.dedup();
    Ok(lines)
}

/// Sorted, deduplicated union of the fixed lines and every event edge.
pub fn build_splits(positions: &[RelativePosition<'_>], fixed_lines: &[f64]) -> Vec<f64> {
    let mut splits = fixed_lines.to_vec();
    splits.extend(
        positions
            .iter()
            .flat_map(|position| [position.start_fraction, position.end_fraction]),
    );
    splits.sort_by(f64::total_cmp);
    splits.dedup();
    splits
}

/// 1-based slot index of `fraction` in `splits`.
///
/// Fractions taken from the positions the splits were built from always match
/// exactly. Anything else maps to the slot of the next line above it.
pub fn slot_of(splits: &[f64], fraction: f64) -> usize {
    match splits.binary_search_by(|split| split.total_cmp(&fraction)) {
        Ok(index) | Err(index) => index + 1,
    }
}

/// Slot index of each fixed line.
pub fn fixed_line_slots(splits: &[f64], fixed_lines: &[f64]) -> Vec<usize> {
    fixed_lines
        .iter()
        .map(|&line| slot_of(splits, line))
        .collect()
}
