use tracing::debug;

use crate::core::{Channel, generate_markers, normalize_channels, resolve_window};
use crate::error::EpgResult;

use super::{ScheduleGrid, ScheduleGridConfig};

/// Runs one full pass: window resolution, axis generation, then per-channel
/// normalization. Nothing is returned unless every step succeeds.
pub fn build_schedule_grid(
    channels: &[Channel],
    config: ScheduleGridConfig,
) -> EpgResult<ScheduleGrid> {
    let config = config.validate()?;

    let window = resolve_window(config.start, config.end, channels)?;
    let markers = generate_markers(
        window,
        config.tick_interval(),
        config.tick_boundary_policy,
        config.max_markers,
    )?;
    let timelines = normalize_channels(window, channels, config.normalize_options())?;

    debug!(
        markers = markers.len(),
        timelines = timelines.len(),
        "built schedule grid"
    );
    Ok(ScheduleGrid {
        window,
        markers,
        timelines,
    })
}
