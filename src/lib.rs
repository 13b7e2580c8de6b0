//! epg-rs: schedule grid builder for Electronic Program Guides.
//!
//! Given channels with sparse programme slots, the crate resolves a shared
//! time window, generates the time-axis markers, and normalizes every
//! channel into a gap-free row. Drawing the result is left to a
//! [`render::GridRenderer`] implementation.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{EpgEngine, ScheduleGrid, ScheduleGridConfig, build_schedule_grid};
pub use error::{EpgError, EpgResult};
