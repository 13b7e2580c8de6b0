use chrono::{DateTime, TimeDelta, Utc};
use tracing::debug;

use crate::core::Channel;
use crate::error::EpgResult;
use crate::render::GridRenderer;

use super::{ScheduleGrid, ScheduleGridConfig, ScheduleInput, build_schedule_grid};

/// Holds the declarative guide input and a renderer.
///
/// No grid state survives between passes: every `build_grid`/`render` call
/// recomputes window, markers and timelines from the stored channels.
pub struct EpgEngine<R: GridRenderer> {
    renderer: R,
    config: ScheduleGridConfig,
    channels: Vec<Channel>,
}

impl<R: GridRenderer> EpgEngine<R> {
    pub fn new(renderer: R, config: ScheduleGridConfig) -> EpgResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            renderer,
            config,
            channels: Vec::new(),
        })
    }

    /// Builds an engine from a `ScheduleInput` JSON document. Bounds present
    /// in the document override the ones in `config`.
    pub fn from_schedule_json(
        renderer: R,
        mut config: ScheduleGridConfig,
        input: &str,
    ) -> EpgResult<Self> {
        let input = ScheduleInput::from_json_str(input)?;
        if input.start.is_some() {
            config.start = input.start;
        }
        if input.end.is_some() {
            config.end = input.end;
        }

        let mut engine = Self::new(renderer, config)?;
        engine.set_channels(input.channels);
        Ok(engine)
    }

    pub fn set_channels(&mut self, channels: Vec<Channel>) {
        debug!(count = channels.len(), "set channels");
        self.channels = channels;
    }

    pub fn add_channel(&mut self, channel: Channel) {
        self.channels.push(channel);
    }

    pub fn clear_channels(&mut self) {
        self.channels.clear();
    }

    #[must_use]
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    #[must_use]
    pub fn config(&self) -> ScheduleGridConfig {
        self.config
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn set_config(&mut self, config: ScheduleGridConfig) -> EpgResult<()> {
        self.config = config.validate()?;
        Ok(())
    }

    pub fn set_window(&mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> EpgResult<()> {
        self.set_config(self.config.with_window(start, end))
    }

    /// Switches back to deriving the window from slot data.
    pub fn clear_window(&mut self) {
        self.config.start = None;
        self.config.end = None;
    }

    pub fn set_tick_interval(&mut self, tick: TimeDelta) -> EpgResult<()> {
        self.set_config(self.config.with_tick_interval(tick)?)
    }

    pub fn set_fill_trailing_gap(&mut self, fill_trailing_gap: bool) {
        self.config.fill_trailing_gap = fill_trailing_gap;
    }

    pub fn build_grid(&self) -> EpgResult<ScheduleGrid> {
        build_schedule_grid(&self.channels, self.config)
    }

    /// Builds a fresh grid and hands it to the renderer.
    pub fn render(&mut self) -> EpgResult<()> {
        let grid = self.build_grid()?;
        self.renderer.render(&grid)
    }

    pub fn snapshot_json_contract_v1_pretty(&self) -> EpgResult<String> {
        self.build_grid()?.to_json_contract_v1_pretty()
    }
}
