//! Error types for the layout core.
//!
//! Only caller mistakes are errors here. Bad upstream data (inverted events)
//! is reported as a [`DataQualityWarning`](crate::models::event::DataQualityWarning)
//! and never aborts a computation.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Precondition violations raised by the layout core.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("window must have positive duration (start {start}, end {end})")]
    EmptyWindow {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("fixed split count must be positive, got {0}")]
    InvalidSplitCount(u32),

    #[error("day start hour must be between 0 and 23, got {0}")]
    InvalidDayStartHour(u32),

    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
