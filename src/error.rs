use chrono::{DateTime, Utc};
use thiserror::Error;

pub type EpgResult<T> = Result<T, EpgError>;

#[derive(Debug, Error)]
pub enum EpgError {
    #[error("cannot derive a time window: no explicit bounds and no slots in any channel")]
    EmptySchedule,

    #[error("invalid time window: {0}")]
    InvalidWindow(String),

    #[error(
        "channel `{channel}` slot {slot_start}..{slot_end} cannot be placed after cursor {cursor}"
    )]
    ChannelOutOfWindow {
        channel: String,
        slot_start: DateTime<Utc>,
        slot_end: DateTime<Utc>,
        cursor: DateTime<Utc>,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
