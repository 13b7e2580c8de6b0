use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EpgError, EpgResult};

/// Half-open interval `[start, end)` displayed by one grid pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TimeWindowRepr")]
pub struct TimeWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

#[derive(Deserialize)]
struct TimeWindowRepr {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TryFrom<TimeWindowRepr> for TimeWindow {
    type Error = EpgError;

    fn try_from(repr: TimeWindowRepr) -> EpgResult<Self> {
        Self::new(repr.start, repr.end)
    }
}

impl TimeWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> EpgResult<Self> {
        if end <= start {
            return Err(EpgError::InvalidWindow(format!(
                "window end {end} must be after start {start}"
            )));
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub fn start(self) -> DateTime<Utc> {
        self.start
    }

    #[must_use]
    pub fn end(self) -> DateTime<Utc> {
        self.end
    }

    #[must_use]
    pub fn duration(self) -> TimeDelta {
        self.end - self.start
    }

    #[must_use]
    pub fn contains(self, time: DateTime<Utc>) -> bool {
        time >= self.start && time < self.end
    }
}

/// One column boundary on the time axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimeMarker {
    pub time: DateTime<Utc>,
}

impl TimeMarker {
    #[must_use]
    pub fn new(time: DateTime<Utc>) -> Self {
        Self { time }
    }
}

/// Programme payload. The builder never looks inside it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Show {
    pub title: String,
}

impl Show {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SlotContent {
    Programme { show: Show },
    Filler,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SlotRepr")]
pub struct Slot {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    content: SlotContent,
}

#[derive(Deserialize)]
struct SlotRepr {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    content: SlotContent,
}

impl TryFrom<SlotRepr> for Slot {
    type Error = EpgError;

    fn try_from(repr: SlotRepr) -> EpgResult<Self> {
        Self::with_content(repr.start, repr.end, repr.content)
    }
}

impl Slot {
    /// Creates a caller-supplied slot carrying a show.
    pub fn programme(start: DateTime<Utc>, end: DateTime<Utc>, show: Show) -> EpgResult<Self> {
        Self::with_content(start, end, SlotContent::Programme { show })
    }

    /// Creates a placeholder for an unscheduled gap.
    pub fn filler(start: DateTime<Utc>, end: DateTime<Utc>) -> EpgResult<Self> {
        Self::with_content(start, end, SlotContent::Filler)
    }

    pub fn with_content(
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        content: SlotContent,
    ) -> EpgResult<Self> {
        if end <= start {
            return Err(EpgError::InvalidData(format!(
                "slot end {end} must be after start {start}"
            )));
        }
        Ok(Self {
            start,
            end,
            content,
        })
    }

    #[must_use]
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    #[must_use]
    pub fn content(&self) -> &SlotContent {
        &self.content
    }

    #[must_use]
    pub fn show(&self) -> Option<&Show> {
        match &self.content {
            SlotContent::Programme { show } => Some(show),
            SlotContent::Filler => None,
        }
    }

    #[must_use]
    pub fn is_filler(&self) -> bool {
        matches!(self.content, SlotContent::Filler)
    }

    #[must_use]
    pub fn contains(&self, time: DateTime<Utc>) -> bool {
        time >= self.start && time < self.end
    }

    /// Copy of this slot with new bounds and the same content.
    pub(crate) fn clipped(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> EpgResult<Self> {
        Self::with_content(start, end, self.content.clone())
    }
}

/// Caller-owned channel description. Slots may be unsorted and sparse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub name: String,
    #[serde(default)]
    pub slots: Vec<Slot>,
}

impl Channel {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slots: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_slot(mut self, slot: Slot) -> Self {
        self.slots.push(slot);
        self
    }

    #[must_use]
    pub fn with_slots(mut self, slots: impl IntoIterator<Item = Slot>) -> Self {
        self.slots.extend(slots);
        self
    }
}

/// Gap-free slot sequence produced for one channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedTimeline {
    pub name: String,
    pub slots: Vec<Slot>,
}

impl NormalizedTimeline {
    #[must_use]
    pub fn is_contiguous(&self) -> bool {
        self.slots
            .windows(2)
            .all(|pair| pair[0].end() == pair[1].start())
    }

    /// Iterates over caller-supplied programme slots, skipping fillers.
    pub fn programmes(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter().filter(|slot| !slot.is_filler())
    }

    #[must_use]
    pub fn filler_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_filler()).count()
    }

    /// Returns the slot airing at `time`, if any.
    #[must_use]
    pub fn slot_at(&self, time: DateTime<Utc>) -> Option<&Slot> {
        let index = self.slots.partition_point(|slot| slot.end() <= time);
        self.slots.get(index).filter(|slot| slot.contains(time))
    }
}

impl From<NormalizedTimeline> for Channel {
    fn from(timeline: NormalizedTimeline) -> Self {
        Self {
            name: timeline.name,
            slots: timeline.slots,
        }
    }
}
