mod engine;
mod grid;
mod grid_builder;
mod grid_config;
mod json_contract;

pub use engine::EpgEngine;
pub use grid::ScheduleGrid;
pub use grid_builder::build_schedule_grid;
pub use grid_config::ScheduleGridConfig;
pub use json_contract::{SCHEDULE_GRID_JSON_SCHEMA_V1, ScheduleGridJsonContractV1, ScheduleInput};
