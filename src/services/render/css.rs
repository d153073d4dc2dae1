//! CSS grid adapter.
//!
//! Column 1 holds the hour labels; lane `n` of the layout becomes grid
//! column `n + 1`. Grid rows are the split gaps, sized with `fr` units.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{format_clock, row_weights, time_stamps, EventLabel, GridAdapter, RenderOptions};
use crate::services::layout::LayoutResult;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CssGridItem {
    pub label: EventLabel,
    pub row_start: usize,
    pub row_end: usize,
    pub column_start: usize,
}

/// Hour label plus its clickable background line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeMarker {
    pub text: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub row_start: usize,
    pub row_end: usize,
    /// The line spans every column, labels included.
    pub column_end: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CssGrid {
    /// `grid-template-rows`, e.g. `"4fr 4fr 2fr 2fr"`.
    pub row_template: String,
    /// `grid-auto-columns`: a label column then one `1fr` per lane.
    pub column_template: String,
    pub lane_count: usize,
    pub items: Vec<CssGridItem>,
    pub markers: Vec<TimeMarker>,
    pub all_day: Vec<EventLabel>,
    pub scroll_marker: Option<usize>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CssGridAdapter {
    pub options: RenderOptions,
}

impl CssGridAdapter {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }
}

impl GridAdapter for CssGridAdapter {
    type Output = CssGrid;

    fn render(&self, layout: &LayoutResult<'_>) -> CssGrid {
        let lane_count = layout.column_count.max(1);
        let view_date = self.options.view_date(&layout.window);

        let row_template = row_weights(&layout.splits)
            .iter()
            .map(|weight| format!("{weight}fr"))
            .collect::<Vec<_>>()
            .join(" ");
        let column_template = std::iter::once("max-content")
            .chain(std::iter::repeat("1fr").take(lane_count))
            .collect::<Vec<_>>()
            .join(" ");

        let items = layout
            .assignments
            .iter()
            .map(|assignment| CssGridItem {
                label: self.options.label_for(assignment.event, view_date),
                row_start: assignment.start_slot,
                row_end: assignment.end_slot,
                column_start: assignment.column + 1,
            })
            .collect();

        let stamps = time_stamps(&layout.window, &layout.fixed_lines);
        let markers: Vec<TimeMarker> = stamps
            .windows(2)
            .zip(layout.fixed_line_slots.windows(2))
            .map(|(times, rows)| TimeMarker {
                text: format_clock(times[0], self.options.time_zone, self.options.time_format),
                start: times[0],
                end: times[1],
                row_start: rows[0],
                row_end: rows[1],
                column_end: lane_count + 2,
            })
            .collect();
        let scroll_marker = self.options.scroll_marker(&stamps[..markers.len()]);

        let all_day = layout
            .all_day
            .iter()
            .map(|event| self.options.label_for(event, view_date))
            .collect();

        CssGrid {
            row_template,
            column_template,
            lane_count,
            items,
            markers,
            all_day,
            scroll_marker,
        }
    }
}
