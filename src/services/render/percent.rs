//! Absolute-position adapter for immediate-mode renderers.
//!
//! Every box is expressed in percent of the day column: `top`/`height` along
//! the time axis, `left`/`width` across the lanes.

use serde::Serialize;

use super::{EventLabel, GridAdapter, RenderOptions};
use crate::services::layout::LayoutResult;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PercentBox {
    pub label: EventLabel,
    pub top: f64,
    pub height: f64,
    pub left: f64,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PercentLayout {
    pub boxes: Vec<PercentBox>,
    /// Vertical position of each fixed line, `0.0` through `100.0`.
    pub lines: Vec<f64>,
    pub all_day: Vec<EventLabel>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PercentAdapter {
    pub options: RenderOptions,
}

impl PercentAdapter {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }
}

impl GridAdapter for PercentAdapter {
    type Output = PercentLayout;

    fn render(&self, layout: &LayoutResult<'_>) -> PercentLayout {
        let lanes = layout.column_count.max(1) as f64;
        let view_date = self.options.view_date(&layout.window);
        let split_at = |slot: usize| layout.splits.get(slot.saturating_sub(1)).copied().unwrap_or(1.0);

        let boxes = layout
            .assignments
            .iter()
            .map(|assignment| {
                let top = split_at(assignment.start_slot);
                let bottom = split_at(assignment.end_slot);
                PercentBox {
                    label: self.options.label_for(assignment.event, view_date),
                    top: top * 100.0,
                    height: (bottom - top) * 100.0,
                    left: (assignment.column - 1) as f64 / lanes * 100.0,
                    width: 100.0 / lanes,
                }
            })
            .collect();

        let lines = layout
            .fixed_line_slots
            .iter()
            .map(|&slot| split_at(slot) * 100.0)
            .collect();

        let all_day = layout
            .all_day
            .iter()
            .map(|event| self.options.label_for(event, view_date))
            .collect();

        PercentLayout {
            boxes,
            lines,
            all_day,
        }
    }
}
