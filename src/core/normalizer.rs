use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{Channel, NormalizedTimeline, Slot, TimeWindow};
use crate::error::{EpgError, EpgResult};

/// Handling of a slot that starts before the end of earlier content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapPolicy {
    /// Move the slot start up to the cursor and keep the remainder.
    #[default]
    Clip,
    /// Fail with `ChannelOutOfWindow`.
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NormalizeOptions {
    /// Cover `[last slot end, window.end)` with a filler slot.
    #[serde(default)]
    pub fill_trailing_gap: bool,
    #[serde(default)]
    pub overlap_policy: OverlapPolicy,
}

impl NormalizeOptions {
    #[must_use]
    pub fn with_fill_trailing_gap(mut self, fill_trailing_gap: bool) -> Self {
        self.fill_trailing_gap = fill_trailing_gap;
        self
    }

    #[must_use]
    pub fn with_overlap_policy(mut self, overlap_policy: OverlapPolicy) -> Self {
        self.overlap_policy = overlap_policy;
        self
    }
}

/// Turns a channel's sparse slots into a contiguous sequence starting at
/// `window.start`.
///
/// Leading and internal gaps become filler slots. The trailing gap is only
/// filled when `options.fill_trailing_gap` is set. Slots outside the window
/// are skipped and slots crossing a window edge are clipped to it. The
/// channel itself is never modified.
pub fn normalize_channel(
    window: TimeWindow,
    channel: &Channel,
    options: NormalizeOptions,
) -> EpgResult<NormalizedTimeline> {
    let mut sorted: Vec<&Slot> = channel.slots.iter().collect();
    sorted.sort_by_key(|slot| slot.start());

    let mut cursor = window.start();
    let mut slots = Vec::with_capacity(sorted.len() * 2 + 1);

    for slot in sorted {
        if slot.end() <= window.start() || slot.start() >= window.end() {
            trace!(
                channel = %channel.name,
                start = %slot.start(),
                end = %slot.end(),
                "slot outside window skipped"
            );
            continue;
        }

        let mut start = slot.start().max(window.start());
        let end = slot.end().min(window.end());

        if start < cursor {
            if options.overlap_policy == OverlapPolicy::Reject || end <= cursor {
                return Err(out_of_window(channel, slot, cursor));
            }
            warn!(
                channel = %channel.name,
                start = %slot.start(),
                cursor = %cursor,
                "overlapping slot clipped to cursor"
            );
            start = cursor;
        }

        if start > cursor {
            trace!(channel = %channel.name, start = %cursor, end = %start, "filler inserted");
            slots.push(Slot::filler(cursor, start)?);
        }

        if start == slot.start() && end == slot.end() {
            slots.push(slot.clone());
        } else {
            slots.push(slot.clipped(start, end)?);
        }
        cursor = end;
    }

    if options.fill_trailing_gap && cursor < window.end() {
        slots.push(Slot::filler(cursor, window.end())?);
    }

    Ok(NormalizedTimeline {
        name: channel.name.clone(),
        slots,
    })
}

/// Normalizes every channel against the same window, preserving input order.
pub fn normalize_channels(
    window: TimeWindow,
    channels: &[Channel],
    options: NormalizeOptions,
) -> EpgResult<Vec<NormalizedTimeline>> {
    #[cfg(feature = "parallel-normalization")]
    let timelines: EpgResult<Vec<NormalizedTimeline>> = {
        use rayon::prelude::*;
        channels
            .par_iter()
            .map(|channel| normalize_channel(window, channel, options))
            .collect()
    };

    #[cfg(not(feature = "parallel-normalization"))]
    let timelines: EpgResult<Vec<NormalizedTimeline>> = channels
        .iter()
        .map(|channel| normalize_channel(window, channel, options))
        .collect();

    let timelines = timelines?;
    debug!(
        channels = timelines.len(),
        fillers = timelines
            .iter()
            .map(NormalizedTimeline::filler_count)
            .sum::<usize>(),
        "normalized channels"
    );
    Ok(timelines)
}

fn out_of_window(channel: &Channel, slot: &Slot, cursor: DateTime<Utc>) -> EpgError {
    EpgError::ChannelOutOfWindow {
        channel: channel.name.clone(),
        slot_start: slot.start(),
        slot_end: slot.end(),
        cursor,
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::core::Show;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(1999, 1, 1, hour, minute, 0)
            .single()
            .expect("valid time")
    }

    fn show(start: DateTime<Utc>, end: DateTime<Utc>, title: &str) -> Slot {
        Slot::programme(start, end, Show::new(title)).expect("valid slot")
    }

    #[test]
    fn unsorted_input_is_sorted_without_touching_caller_data() {
        let window = TimeWindow::new(at(13, 0), at(15, 0)).expect("window");
        let channel = Channel::new("Dave").with_slots([
            show(at(14, 0), at(15, 0), "Later"),
            show(at(13, 0), at(14, 0), "Earlier"),
        ]);
        let before = channel.clone();

        let timeline =
            normalize_channel(window, &channel, NormalizeOptions::default()).expect("normalize");

        assert_eq!(channel, before);
        let titles: Vec<&str> = timeline
            .slots
            .iter()
            .filter_map(Slot::show)
            .map(|show| show.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Earlier", "Later"]);
    }

    #[test]
    fn fully_swallowed_slot_cannot_be_reconciled() {
        let window = TimeWindow::new(at(13, 0), at(15, 0)).expect("window");
        let channel = Channel::new("Dave").with_slots([
            show(at(13, 0), at(14, 30), "Long"),
            show(at(13, 30), at(14, 0), "Inside"),
        ]);

        let err = normalize_channel(window, &channel, NormalizeOptions::default())
            .expect_err("swallowed slot");
        match err {
            EpgError::ChannelOutOfWindow {
                channel,
                slot_start,
                cursor,
                ..
            } => {
                assert_eq!(channel, "Dave");
                assert_eq!(slot_start, at(13, 30));
                assert_eq!(cursor, at(14, 30));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
