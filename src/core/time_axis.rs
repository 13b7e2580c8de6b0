use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{TimeMarker, TimeWindow};
use crate::error::{EpgError, EpgResult};

pub const DEFAULT_TICK_INTERVAL_MS: i64 = 60_000;
pub const DEFAULT_MAX_MARKERS: usize = 100_000;

/// Placement of the last marker when the window is not a whole number of ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickBoundaryPolicy {
    /// Append a final partial-interval marker at exactly `window.end`.
    #[default]
    IncludeEnd,
    /// Stop at the last whole tick not exceeding `window.end`.
    RoundDown,
}

#[must_use]
pub fn default_tick_interval() -> TimeDelta {
    TimeDelta::milliseconds(DEFAULT_TICK_INTERVAL_MS)
}

pub(crate) fn tick_interval_millis(tick: TimeDelta) -> EpgResult<i64> {
    let millis = tick.num_milliseconds();
    if millis <= 0 {
        return Err(EpgError::InvalidWindow(format!(
            "tick interval must be > 0, got {millis}ms"
        )));
    }
    if TimeDelta::milliseconds(millis) != tick {
        return Err(EpgError::InvalidWindow(
            "tick interval must be a whole number of milliseconds".to_owned(),
        ));
    }
    Ok(millis)
}

/// Produces `window.start, window.start + tick, ...` up to `window.end`.
///
/// Exact multiples yield `duration / tick + 1` markers under either policy.
pub fn generate_markers(
    window: TimeWindow,
    tick: TimeDelta,
    policy: TickBoundaryPolicy,
    max_markers: usize,
) -> EpgResult<Vec<TimeMarker>> {
    let tick_ms = tick_interval_millis(tick)?;
    let span = window.duration();
    let span_ms = span.num_milliseconds();
    let whole_ticks = span_ms / tick_ms;
    let exact = TimeDelta::milliseconds(whole_ticks * tick_ms) == span;
    let count = usize::try_from(whole_ticks)
        .ok()
        .and_then(|ticks| ticks.checked_add(1))
        .map(|count| match (exact, policy) {
            (false, TickBoundaryPolicy::IncludeEnd) => count + 1,
            _ => count,
        })
        .ok_or_else(|| EpgError::InvalidWindow("marker count overflows".to_owned()))?;

    if count > max_markers {
        return Err(EpgError::InvalidWindow(format!(
            "window spans {count} markers, limit is {max_markers}"
        )));
    }

    // Offsets never pass `window.end`, so the additions below cannot overflow.
    let mut markers = Vec::with_capacity(count);
    markers.extend((0..=whole_ticks).map(|i| {
        TimeMarker::new(window.start() + TimeDelta::milliseconds(i * tick_ms))
    }));
    if !exact && policy == TickBoundaryPolicy::IncludeEnd {
        markers.push(TimeMarker::new(window.end()));
    }

    trace!(
        count = markers.len(),
        tick_ms,
        exact,
        ?policy,
        "generated time markers"
    );
    Ok(markers)
}

/// One marker per minute, final marker at `window.end`.
pub fn generate_minute_markers(window: TimeWindow) -> EpgResult<Vec<TimeMarker>> {
    generate_markers(
        window,
        default_tick_interval(),
        TickBoundaryPolicy::IncludeEnd,
        DEFAULT_MAX_MARKERS,
    )
}
