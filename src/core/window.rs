use chrono::{DateTime, Utc};
use tracing::debug;

use crate::core::{Channel, TimeWindow};
use crate::error::{EpgError, EpgResult};

/// Returns `(min slot start, max slot end)` across every channel, or `None`
/// when no channel has any slot.
#[must_use]
pub fn schedule_bounds(channels: &[Channel]) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let mut slots = channels.iter().flat_map(|channel| channel.slots.iter());
    let first = slots.next()?;

    Some(slots.fold((first.start(), first.end()), |(min, max), slot| {
        (min.min(slot.start()), max.max(slot.end()))
    }))
}

/// Resolves the grid window from explicit bounds, deriving any missing bound
/// from the channels' slots.
///
/// Explicit bounds are never compared with channel content.
pub fn resolve_window(
    explicit_start: Option<DateTime<Utc>>,
    explicit_end: Option<DateTime<Utc>>,
    channels: &[Channel],
) -> EpgResult<TimeWindow> {
    let (start, end) = match (explicit_start, explicit_end) {
        (Some(start), Some(end)) => (start, end),
        (start, end) => {
            let (derived_start, derived_end) =
                schedule_bounds(channels).ok_or(EpgError::EmptySchedule)?;
            (start.unwrap_or(derived_start), end.unwrap_or(derived_end))
        }
    };

    let window = TimeWindow::new(start, end)?;
    debug!(
        start = %window.start(),
        end = %window.end(),
        explicit_start = explicit_start.is_some(),
        explicit_end = explicit_end.is_some(),
        "resolved schedule window"
    );
    Ok(window)
}
