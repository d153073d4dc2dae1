//! Event layout engine.
//!
//! Turns the timed events of one window into grid rows and columns:
//! overlapping events sit side by side, events that don't overlap share
//! columns, and the column count equals the peak number of concurrent events.
//! Nothing here knows about pixels or percentages; see
//! [`render`](crate::services::render) for that.

mod splits;
mod sweep;

pub use splits::{build_splits, fixed_line_slots, fixed_lines, fixed_splits, slot_of};

use std::ops::Range;

use serde::Serialize;

use crate::error::{LayoutError, Result};
use crate::models::event::{DataQualityWarning, Event};
use crate::models::window::Window;
use crate::utils::date::{map_to_fraction, overlaps};

/// An event projected onto the window as clamped fractions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RelativePosition<'a> {
    pub event: &'a Event,
    pub start_fraction: f64,
    pub end_fraction: f64,
}

/// Grid placement of one timed event.
///
/// Slots are 1-based indices into [`LayoutResult::splits`]; the event covers
/// the rows from `start_slot` up to (not including) `end_slot`. Columns are
/// 1-based lanes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SlotAssignment<'a> {
    pub event: &'a Event,
    pub start_fraction: f64,
    pub end_fraction: f64,
    pub start_slot: usize,
    pub end_slot: usize,
    pub column: usize,
}

impl SlotAssignment<'_> {
    pub fn slot_range(&self) -> Range<usize> {
        self.start_slot..self.end_slot
    }

    /// True when the two assignments cover at least one common row.
    pub fn shares_rows_with(&self, other: &SlotAssignment<'_>) -> bool {
        let (mine, theirs) = (self.slot_range(), other.slot_range());
        mine.start < theirs.end && theirs.start < mine.end
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutResult<'a> {
    pub window: Window,
    pub fixed_split_count: u32,
    /// Strictly increasing, starts at `0.0` and ends at `1.0`.
    pub splits: Vec<f64>,
    /// Fixed subdivision lines as fractions; see [`fixed_lines`].
    pub fixed_lines: Vec<f64>,
    /// Slot of each fixed line.
    pub fixed_line_slots: Vec<usize>,
    /// Timed events ordered by start then end fraction.
    pub assignments: Vec<SlotAssignment<'a>>,
    /// Lanes needed to show every timed event without collisions.
    pub column_count: usize,
    /// All-day events touching the window, in input order.
    pub all_day: Vec<&'a Event>,
    pub warnings: Vec<DataQualityWarning>,
}

impl LayoutResult<'_> {
    /// Number of grid rows (one fewer than the number of splits).
    pub fn row_count(&self) -> usize {
        self.splits.len().saturating_sub(1)
    }
}

/// Lay out the events visible in `window`.
///
/// Accepts anything yielding `&Event`, so a slice of events and a day-index
/// bucket both work. Inverted events are laid out with start and end swapped
/// and reported in [`LayoutResult::warnings`].
pub fn layout<'a, I>(events: I, window: &Window, fixed_split_count: u32) -> Result<LayoutResult<'a>>
where
    I: IntoIterator<Item = &'a Event>,
{
    if fixed_split_count == 0 {
        return Err(LayoutError::InvalidSplitCount(fixed_split_count));
    }

    let visible = window.visibility_span();
    let mut positions = Vec::new();
    let mut all_day = Vec::new();
    let mut warnings = Vec::new();

    for event in events {
        let span = event.normalized_span();
        if !overlaps(visible, span) {
            continue;
        }

        if event.all_day {
            all_day.push(event);
            continue;
        }

        if event.is_inverted() {
            log::warn!(
                "Event '{}' ({}) ends before it starts; laying out with times swapped",
                event.title,
                event.id
            );
            warnings.push(DataQualityWarning::inverted(event));
        }

        positions.push(RelativePosition {
            event,
            start_fraction: map_to_fraction(span.0, window.start(), window.end())?,
            end_fraction: map_to_fraction(span.1, window.start(), window.end())?,
        });
    }

    positions.sort_by(|a, b| {
        a.start_fraction
            .total_cmp(&b.start_fraction)
            .then(a.end_fraction.total_cmp(&b.end_fraction))
    });

    let lines = fixed_lines(window, fixed_split_count)?;
    let splits = build_splits(&positions, &lines);
    let (placements, column_count) = sweep::assign_lanes(&positions, &splits);

    let assignments: Vec<SlotAssignment<'a>> = positions
        .iter()
        .zip(placements)
        .map(|(position, placement)| SlotAssignment {
            event: position.event,
            start_fraction: position.start_fraction,
            end_fraction: position.end_fraction,
            start_slot: placement.start_slot,
            end_slot: placement.end_slot,
            column: placement.column,
        })
        .collect();

    log::debug!(
        "Laid out {} timed and {} all-day events in {} columns over {} splits",
        assignments.len(),
        all_day.len(),
        column_count,
        splits.len()
    );

    Ok(LayoutResult {
        window: *window,
        fixed_split_count,
        fixed_line_slots: fixed_line_slots(&splits, &lines),
        fixed_lines: lines,
        splits,
        assignments,
        column_count,
        all_day,
        warnings,
    })
}
