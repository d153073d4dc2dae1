// Service module exports

pub mod day_index;
pub mod layout;
pub mod render;
pub mod settings;
pub mod week;
