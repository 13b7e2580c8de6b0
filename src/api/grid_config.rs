use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::core::time_axis::tick_interval_millis;
use crate::core::{
    DEFAULT_MAX_MARKERS, DEFAULT_TICK_INTERVAL_MS, NormalizeOptions, OverlapPolicy,
    TickBoundaryPolicy,
};
use crate::error::{EpgError, EpgResult};

/// Grid build configuration.
///
/// Serializable so hosts can persist guide setup next to their channel data.
/// Every field except the explicit bounds has a serde default, so `{}` is a
/// valid config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleGridConfig {
    #[serde(default)]
    pub start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: i64,
    #[serde(default)]
    pub tick_boundary_policy: TickBoundaryPolicy,
    #[serde(default)]
    pub fill_trailing_gap: bool,
    #[serde(default)]
    pub overlap_policy: OverlapPolicy,
    #[serde(default = "default_max_markers")]
    pub max_markers: usize,
}

impl Default for ScheduleGridConfig {
    fn default() -> Self {
        Self {
            start: None,
            end: None,
            tick_interval_ms: default_tick_interval_ms(),
            tick_boundary_policy: TickBoundaryPolicy::default(),
            fill_trailing_gap: false,
            overlap_policy: OverlapPolicy::default(),
            max_markers: default_max_markers(),
        }
    }
}

impl ScheduleGridConfig {
    /// Config with an explicit window.
    #[must_use]
    pub fn with_window(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    #[must_use]
    pub fn with_start(mut self, start: DateTime<Utc>) -> Self {
        self.start = Some(start);
        self
    }

    #[must_use]
    pub fn with_end(mut self, end: DateTime<Utc>) -> Self {
        self.end = Some(end);
        self
    }

    /// Sets the axis tick interval. It must be positive and a whole number
    /// of milliseconds.
    pub fn with_tick_interval(mut self, tick: TimeDelta) -> EpgResult<Self> {
        self.tick_interval_ms = tick_interval_millis(tick)?;
        Ok(self)
    }

    #[must_use]
    pub fn with_tick_boundary_policy(mut self, policy: TickBoundaryPolicy) -> Self {
        self.tick_boundary_policy = policy;
        self
    }

    #[must_use]
    pub fn with_fill_trailing_gap(mut self, fill_trailing_gap: bool) -> Self {
        self.fill_trailing_gap = fill_trailing_gap;
        self
    }

    #[must_use]
    pub fn with_overlap_policy(mut self, policy: OverlapPolicy) -> Self {
        self.overlap_policy = policy;
        self
    }

    #[must_use]
    pub fn with_max_markers(mut self, max_markers: usize) -> Self {
        self.max_markers = max_markers;
        self
    }

    #[must_use]
    pub fn tick_interval(self) -> TimeDelta {
        TimeDelta::milliseconds(self.tick_interval_ms)
    }

    #[must_use]
    pub fn normalize_options(self) -> NormalizeOptions {
        NormalizeOptions::default()
            .with_fill_trailing_gap(self.fill_trailing_gap)
            .with_overlap_policy(self.overlap_policy)
    }

    pub fn validate(self) -> EpgResult<Self> {
        tick_interval_millis(self.tick_interval())?;

        if self.max_markers < 2 {
            return Err(EpgError::InvalidData(
                "config `max_markers` must be >= 2".to_owned(),
            ));
        }

        if let (Some(start), Some(end)) = (self.start, self.end) {
            if end <= start {
                return Err(EpgError::InvalidWindow(format!(
                    "configured window end {end} must be after start {start}"
                )));
            }
        }

        Ok(self)
    }

    pub fn to_json_pretty(&self) -> EpgResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| EpgError::InvalidData(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> EpgResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| EpgError::InvalidData(format!("failed to parse config: {e}")))?;
        config.validate()
    }
}

fn default_tick_interval_ms() -> i64 {
    DEFAULT_TICK_INTERVAL_MS
}

fn default_max_markers() -> usize {
    DEFAULT_MAX_MARKERS
}
