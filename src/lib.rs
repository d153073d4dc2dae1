// Calendar Layout Library
// Exports all modules for testing and reuse

pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::LayoutError;
pub use models::event::{DataQualityWarning, Event, EventBuilder, WarningKind};
pub use models::settings::{LayoutSettings, TimeFormat};
pub use models::window::Window;
pub use services::day_index::{build_day_index, DayIndex};
pub use services::layout::{layout, LayoutResult, SlotAssignment};
pub use utils::date::overlaps;
