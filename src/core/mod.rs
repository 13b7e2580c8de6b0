pub mod normalizer;
pub mod time_axis;
pub mod types;
pub mod window;

pub use normalizer::{NormalizeOptions, OverlapPolicy, normalize_channel, normalize_channels};
pub use time_axis::{
    DEFAULT_MAX_MARKERS, DEFAULT_TICK_INTERVAL_MS, TickBoundaryPolicy, default_tick_interval,
    generate_markers, generate_minute_markers,
};
pub use types::{Channel, NormalizedTimeline, Show, Slot, SlotContent, TimeMarker, TimeWindow};
pub use window::{resolve_window, schedule_bounds};
