use serde::{Deserialize, Serialize};

use crate::core::{NormalizedTimeline, TimeMarker, TimeWindow};
use crate::error::{EpgError, EpgResult};

/// Renderer-ready output of one build pass.
///
/// Markers become header cells, timelines become rows. Timelines keep the
/// order in which channels were supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleGrid {
    pub window: TimeWindow,
    pub markers: Vec<TimeMarker>,
    pub timelines: Vec<NormalizedTimeline>,
}

impl ScheduleGrid {
    /// First timeline with the given channel name.
    #[must_use]
    pub fn timeline(&self, name: &str) -> Option<&NormalizedTimeline> {
        self.timelines.iter().find(|timeline| timeline.name == name)
    }

    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.timelines.iter().map(|timeline| timeline.slots.len()).sum()
    }

    #[must_use]
    pub fn filler_count(&self) -> usize {
        self.timelines
            .iter()
            .map(NormalizedTimeline::filler_count)
            .sum()
    }

    /// Checks every structural invariant a renderer relies on.
    pub fn validate(&self) -> EpgResult<()> {
        let (Some(first), Some(last)) = (self.markers.first(), self.markers.last()) else {
            return Err(EpgError::InvalidData("grid has no time markers".to_owned()));
        };
        if first.time != self.window.start() {
            return Err(EpgError::InvalidData(
                "first marker must equal window start".to_owned(),
            ));
        }
        if last.time > self.window.end() {
            return Err(EpgError::InvalidData(
                "last marker must not exceed window end".to_owned(),
            ));
        }
        if self.markers.windows(2).any(|pair| pair[0].time >= pair[1].time) {
            return Err(EpgError::InvalidData(
                "time markers must be strictly increasing".to_owned(),
            ));
        }

        for timeline in &self.timelines {
            if !timeline.is_contiguous() {
                return Err(EpgError::InvalidData(format!(
                    "timeline `{}` is not contiguous",
                    timeline.name
                )));
            }
            if let Some(slot) = timeline.slots.first() {
                if slot.start() != self.window.start() {
                    return Err(EpgError::InvalidData(format!(
                        "timeline `{}` does not start at window start",
                        timeline.name
                    )));
                }
            }
            if let Some(slot) = timeline.slots.last() {
                if slot.end() > self.window.end() {
                    return Err(EpgError::InvalidData(format!(
                        "timeline `{}` extends past window end",
                        timeline.name
                    )));
                }
            }
        }

        Ok(())
    }
}
