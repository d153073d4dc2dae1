//! Lane assignment sweep.
//!
//! Greedy interval partitioning over the split sequence. Lanes are a growable
//! array of `Option<usize>` (index of the occupying position); a finished
//! event leaves a `None` hole so the lanes to its right keep their numbers.

use super::splits::slot_of;
use super::RelativePosition;

/// Slot range and lane of one positioned event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(super) struct Placement {
    pub start_slot: usize,
    pub end_slot: usize,
    pub column: usize,
}

/// Assign every position a slot range and a 1-based column.
///
/// `positions` must be sorted by start then end fraction, and every fraction
/// must appear in `splits`. Returns the placements in the same order plus the
/// number of lanes allocated.
pub(super) fn assign_lanes(
    positions: &[RelativePosition<'_>],
    splits: &[f64],
) -> (Vec<Placement>, usize) {
    let slot_count = splits.len();
    let spans: Vec<(usize, usize)> = positions
        .iter()
        .map(|position| {
            let start = slot_of(splits, position.start_fraction);
            let mut end = slot_of(splits, position.end_fraction);
            // Zero-length events hold their lane until the next line.
            if end <= start {
                end = (start + 1).min(slot_count);
            }
            (start, end)
        })
        .collect();

    let mut placements = vec![Placement::default(); positions.len()];
    let mut lanes: Vec<Option<usize>> = Vec::new();
    let mut next = 0;

    for slot in 1..=slot_count {
        for lane in lanes.iter_mut() {
            if matches!(*lane, Some(index) if spans[index].1 == slot) {
                *lane = None;
            }
        }

        while next < spans.len() && spans[next].0 == slot {
            let column = match lanes.iter().position(Option::is_none) {
                Some(free) => {
                    lanes[free] = Some(next);
                    free
                }
                None => {
                    lanes.push(Some(next));
                    lanes.len() - 1
                }
            };

            placements[next] = Placement {
                start_slot: spans[next].0,
                end_slot: spans[next].1,
                column: column + 1,
            };
            next += 1;
        }
    }

    (placements, lanes.len())
}
