// Property-based tests for the overlap test, day index and layout engine
// Random event sets checked against brute-force reference computations

#[path = "../fixtures/mod.rs"]
mod fixtures;

use calendar_layout::models::event::Event;
use calendar_layout::services::day_index::build_day_index;
use calendar_layout::services::layout::{fixed_splits, layout};
use calendar_layout::utils::date::{dates_between, local_date, overlaps};
use chrono::Duration;
use chrono_tz::Tz;
use fixtures::dates::{at, day_window};
use proptest::prelude::*;

/// Events given as (start offset, duration) in minutes from the window start.
fn events_from(spans: &[(i64, i64)]) -> Vec<Event> {
    spans
        .iter()
        .enumerate()
        .map(|(i, &(offset, minutes))| {
            let start = at(0, 0) + Duration::minutes(offset);
            Event::new(format!("e{i}"), format!("Event {i}"), start, start + Duration::minutes(minutes))
        })
        .collect()
}

const DAY_MINUTES: i64 = 24 * 60;

/// Peak number of events active together, computed straight from the event
/// times. A zero-length event is active from its start to the next grid line.
fn brute_force_columns(spans: &[(i64, i64)], fixed: u32) -> usize {
    let fraction = |minutes: i64| (minutes as f64 / DAY_MINUTES as f64).clamp(0.0, 1.0);
    let visible: Vec<(f64, f64)> = spans
        .iter()
        .filter(|&&(offset, minutes)| offset < DAY_MINUTES && offset + minutes >= 0)
        .map(|&(offset, minutes)| (fraction(offset), fraction(offset + minutes)))
        .collect();

    let mut lines: Vec<f64> = (0..=fixed).map(|k| f64::from(k) / f64::from(fixed)).collect();
    lines.extend(visible.iter().flat_map(|&(start, end)| [start, end]));
    lines.sort_by(f64::total_cmp);
    lines.dedup();

    let active: Vec<(f64, f64)> = visible
        .iter()
        .map(|&(start, end)| {
            if end > start {
                (start, end)
            } else {
                let next = lines.iter().copied().find(|&line| line > start).unwrap_or(1.0);
                (start, next)
            }
        })
        .collect();

    lines
        .iter()
        .map(|&point| {
            active
                .iter()
                .filter(|&&(start, end)| start <= point && point < end)
                .count()
        })
        .max()
        .unwrap_or(0)
}

fn spans_in_day() -> impl Strategy<Value = Vec<(i64, i64)>> {
    prop::collection::vec((-180i64..1500, 0i64..360), 0..40)
}

proptest! {
    /// Property: overlap does not depend on argument order
    #[test]
    fn prop_overlap_symmetric(a in any::<(i32, i32)>(), b in any::<(i32, i32)>()) {
        prop_assert_eq!(overlaps(a, b), overlaps(b, a));
    }

    /// Property: a well-formed interval always overlaps itself
    #[test]
    fn prop_self_overlap(start in any::<i32>(), len in 0i32..1000) {
        let interval = (start, start.saturating_add(len));
        prop_assert!(overlaps(interval, interval));
    }

    /// Property: intervals sharing only an endpoint overlap
    #[test]
    fn prop_touching_endpoints_overlap(a in -1000i32..1000, ab in 0i32..1000, bc in 0i32..1000) {
        let b = a + ab;
        let c = b + bc;
        prop_assert!(overlaps((a, b), (b, c)));
    }

    /// Property: intervals separated by a gap never overlap
    #[test]
    fn prop_disjoint_intervals(a in -1000i32..1000, ab in 0i32..100, gap in 1i32..100, cd in 0i32..100) {
        let b = a + ab;
        let c = b + gap;
        let d = c + cd;
        prop_assert!(!overlaps((a, b), (c, d)));
    }

    /// Property: events covering a common row never share a column
    #[test]
    fn prop_column_safety(spans in spans_in_day()) {
        let events = events_from(&spans);
        let result = layout(&events, &day_window(), 24).unwrap();

        for (i, a) in result.assignments.iter().enumerate() {
            prop_assert!(a.column >= 1 && a.column <= result.column_count);
            for b in &result.assignments[i + 1..] {
                if a.shares_rows_with(b) {
                    prop_assert_ne!(a.column, b.column);
                }
            }
        }
    }

    /// Property: the column count equals the peak number of concurrent
    /// events, including zero-length events and events clipped by the window
    #[test]
    fn prop_minimum_columns(spans in spans_in_day(), fixed in 1u32..=48) {
        let events = events_from(&spans);
        let result = layout(&events, &day_window(), fixed).unwrap();

        prop_assert_eq!(result.column_count, brute_force_columns(&spans, fixed));
    }

    /// Property: busy days with many zero-length events
    #[test]
    fn prop_minimum_columns_with_instants(
        spans in prop::collection::vec((-60i64..1500, prop_oneof![Just(0i64), 0i64..120]), 0..40)
    ) {
        let events = events_from(&spans);
        let result = layout(&events, &day_window(), 24).unwrap();

        prop_assert_eq!(result.column_count, brute_force_columns(&spans, 24));
    }

    /// Property: splits are a strictly increasing superset of the fixed lines
    /// and every event edge
    #[test]
    fn prop_split_sequence_valid(spans in spans_in_day(), fixed in 1u32..=96) {
        let events = events_from(&spans);
        let result = layout(&events, &day_window(), fixed).unwrap();
        let splits = &result.splits;

        prop_assert_eq!(splits.first().copied(), Some(0.0));
        prop_assert_eq!(splits.last().copied(), Some(1.0));
        prop_assert!(splits.windows(2).all(|pair| pair[0] < pair[1]));
        for line in fixed_splits(fixed) {
            prop_assert!(splits.contains(&line));
        }
        for a in &result.assignments {
            prop_assert!(splits.contains(&a.start_fraction));
            prop_assert!(splits.contains(&a.end_fraction));
            prop_assert_eq!(splits[a.start_slot - 1], a.start_fraction);
        }
        prop_assert_eq!(&result.fixed_lines, &fixed_splits(fixed));
        prop_assert_eq!(result.fixed_line_slots.len(), fixed as usize + 1);
    }

    /// Property: every event appears exactly once in each day it touches
    #[test]
    fn prop_day_bucket_coverage(
        spans in prop::collection::vec((0i64..14_400, 0i64..4_320), 0..30)
    ) {
        let events = events_from(&spans);
        let index = build_day_index(&events, Tz::UTC);

        for event in &events {
            let days = dates_between(local_date(event.start, Tz::UTC), local_date(event.end, Tz::UTC));
            prop_assert!(!days.is_empty());
            for day in days {
                let hits = index
                    .for_date(day)
                    .iter()
                    .filter(|candidate| candidate.id == event.id)
                    .count();
                prop_assert_eq!(hits, 1);
            }
        }
    }

    /// Property: buckets list all-day events first, then timed events by start
    #[test]
    fn prop_bucket_order(
        spans in prop::collection::vec((0i64..4_320, 0i64..600), 0..30),
        all_day_mask in any::<u32>()
    ) {
        let mut events = events_from(&spans);
        for (i, event) in events.iter_mut().enumerate() {
            event.all_day = all_day_mask & (1 << i) != 0;
        }
        let index = build_day_index(&events, Tz::UTC);

        for (_, bucket) in index.iter() {
            for pair in bucket.windows(2) {
                prop_assert!(pair[0].all_day || !pair[1].all_day);
                if !pair[0].all_day && !pair[1].all_day {
                    prop_assert!(pair[0].start <= pair[1].start);
                }
            }
        }
    }
}

#[cfg(test)]
mod additional_tests {
    use super::*;

    #[test]
    fn test_brute_force_agrees_on_known_case() {
        let spans = [(540, 60), (570, 60), (600, 60)];
        let events = events_from(&spans);
        let result = layout(&events, &day_window(), 24).unwrap();

        assert_eq!(brute_force_columns(&spans, 24), 2);
        assert_eq!(result.column_count, 2);
    }

    #[test]
    fn test_brute_force_counts_zero_length_events() {
        // a point at 09:00 collides with an event starting at 09:00, but
        // not with one clipped at midnight that ends at 09:00
        let spans = [(540, 0), (540, 30), (-120, 660)];
        let events = events_from(&spans);
        let result = layout(&events, &day_window(), 24).unwrap();

        assert_eq!(brute_force_columns(&spans, 24), 2);
        assert_eq!(result.column_count, 2);
    }

    #[test]
    fn test_brute_force_counts_event_ending_at_window_start() {
        let spans = [(-60, 60), (0, 30)];
        let events = events_from(&spans);
        let result = layout(&events, &day_window(), 24).unwrap();

        assert_eq!(brute_force_columns(&spans, 24), 2);
        assert_eq!(result.column_count, 2);
    }
}
