//! Subcommand implementations

pub mod assets;
pub mod describe;
pub mod model;
pub mod sheets;
pub mod uploads;
