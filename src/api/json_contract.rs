use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::Channel;
use crate::error::{EpgError, EpgResult};

use super::ScheduleGrid;

pub const SCHEDULE_GRID_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleGridJsonContractV1 {
    pub schema_version: u32,
    pub grid: ScheduleGrid,
}

/// Declarative guide description: optional window plus channels.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScheduleInput {
    #[serde(default)]
    pub start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub channels: Vec<Channel>,
}

impl ScheduleInput {
    pub fn from_json_str(input: &str) -> EpgResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| EpgError::InvalidData(format!("failed to parse schedule json: {e}")))
    }

    pub fn to_json_pretty(&self) -> EpgResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| EpgError::InvalidData(format!("failed to serialize schedule: {e}")))
    }
}

impl ScheduleGrid {
    pub fn to_json_contract_v1_pretty(&self) -> EpgResult<String> {
        let payload = ScheduleGridJsonContractV1 {
            schema_version: SCHEDULE_GRID_JSON_SCHEMA_V1,
            grid: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            EpgError::InvalidData(format!("failed to serialize grid contract v1: {e}"))
        })
    }

    /// Accepts either a bare grid or a versioned contract payload. The grid
    /// must satisfy [`ScheduleGrid::validate`].
    pub fn from_json_compat_str(input: &str) -> EpgResult<Self> {
        if let Ok(grid) = serde_json::from_str::<ScheduleGrid>(input) {
            grid.validate()?;
            return Ok(grid);
        }
        let payload: ScheduleGridJsonContractV1 = serde_json::from_str(input)
            .map_err(|e| EpgError::InvalidData(format!("failed to parse grid json payload: {e}")))?;
        if payload.schema_version != SCHEDULE_GRID_JSON_SCHEMA_V1 {
            return Err(EpgError::InvalidData(format!(
                "unsupported grid schema version: {}",
                payload.schema_version
            )));
        }
        payload.grid.validate()?;
        Ok(payload.grid)
    }
}
