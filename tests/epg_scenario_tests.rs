use chrono::{DateTime, TimeZone, Utc};

use epg_rs::api::{EpgEngine, ScheduleGrid, ScheduleGridConfig, build_schedule_grid};
use epg_rs::core::{Channel, Show, Slot};
use epg_rs::render::NullRenderer;

fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(1999, 1, 1, hour, minute, 0)
        .single()
        .expect("valid time")
}

fn show(start: DateTime<Utc>, end: DateTime<Utc>, title: &str) -> Slot {
    Slot::programme(start, end, Show::new(title)).expect("valid slot")
}

fn assert_minute_axis(grid: &ScheduleGrid) {
    assert_eq!(grid.markers.len(), 76);
    assert_eq!(grid.markers[0].time, at(13, 30));
    assert_eq!(grid.markers[75].time, at(14, 45));
    assert_eq!(grid.markers[30].time, at(14, 0));
}

#[test]
fn explicit_window_yields_one_marker_per_minute() {
    let config = ScheduleGridConfig::default().with_window(at(13, 30), at(14, 45));
    let grid = build_schedule_grid(&[], config).expect("grid");

    assert_minute_axis(&grid);
    assert!(grid.timelines.is_empty());
}

#[test]
fn single_slot_spans_the_whole_window() {
    let channels =
        vec![Channel::new("Dave").with_slot(show(at(13, 30), at(14, 45), "Top Gear"))];
    let grid = build_schedule_grid(&channels, ScheduleGridConfig::default()).expect("grid");

    assert_minute_axis(&grid);
    let dave = grid.timeline("Dave").expect("Dave timeline");
    assert_eq!(dave.slots.len(), 1);
    assert!(!dave.slots[0].is_filler());
    assert_eq!(dave.slots[0].start(), at(13, 30));
    assert_eq!(dave.slots[0].end(), at(14, 45));
    assert_eq!(
        dave.slots[0].show().map(|s| s.title.as_str()),
        Some("Top Gear")
    );
}

#[test]
fn adjacent_slots_need_no_filler() {
    let channels = vec![Channel::new("Dave").with_slots([
        show(at(13, 30), at(14, 30), "Top Gear"),
        show(at(14, 30), at(14, 45), "Mad Show"),
    ])];
    let grid = build_schedule_grid(&channels, ScheduleGridConfig::default()).expect("grid");

    assert_minute_axis(&grid);
    let dave = grid.timeline("Dave").expect("Dave timeline");
    assert_eq!(dave.slots.len(), 2);
    assert_eq!(dave.filler_count(), 0);
    assert!(dave.is_contiguous());
}

#[test]
fn two_channels_fill_leading_gap_but_not_trailing_gap() {
    let channels = vec![
        Channel::new("Dave").with_slot(show(at(13, 30), at(14, 0), "Top Gear")),
        Channel::new("UKTV").with_slot(show(at(13, 45), at(14, 45), "Graeme")),
    ];
    let grid = build_schedule_grid(&channels, ScheduleGridConfig::default()).expect("grid");

    assert_minute_axis(&grid);
    assert_eq!(grid.timelines[0].name, "Dave");
    assert_eq!(grid.timelines[1].name, "UKTV");

    let dave = &grid.timelines[0];
    assert_eq!(dave.slots.len(), 1);

    let uktv = &grid.timelines[1];
    assert_eq!(uktv.slots.len(), 2);
    assert!(uktv.slots[0].is_filler());
    assert_eq!(uktv.slots[0].start(), at(13, 30));
    assert_eq!(uktv.slots[0].end(), at(13, 45));
    assert!(!uktv.slots[1].is_filler());
    assert_eq!(uktv.slots[1].start(), at(13, 45));
    assert_eq!(uktv.slots[1].end(), at(14, 45));
    assert_eq!(
        uktv.slots[1].show().map(|s| s.title.as_str()),
        Some("Graeme")
    );
}

#[test]
fn trailing_gap_is_filled_when_enabled() {
    let channels = vec![
        Channel::new("Dave").with_slot(show(at(13, 30), at(14, 0), "Top Gear")),
        Channel::new("UKTV").with_slot(show(at(13, 45), at(14, 45), "Graeme")),
    ];
    let config = ScheduleGridConfig::default().with_fill_trailing_gap(true);
    let grid = build_schedule_grid(&channels, config).expect("grid");

    let dave = grid.timeline("Dave").expect("Dave timeline");
    assert_eq!(dave.slots.len(), 2);
    assert!(dave.slots[1].is_filler());
    assert_eq!(dave.slots[1].start(), at(14, 0));
    assert_eq!(dave.slots[1].end(), at(14, 45));

    let uktv = grid.timeline("UKTV").expect("UKTV timeline");
    assert_eq!(uktv.slots.len(), 2);
}

#[test]
fn engine_renders_scenario_through_renderer() {
    let mut engine =
        EpgEngine::new(NullRenderer::default(), ScheduleGridConfig::default()).expect("engine");
    engine.add_channel(Channel::new("Dave").with_slot(show(at(13, 30), at(14, 0), "Top Gear")));
    engine.add_channel(Channel::new("UKTV").with_slot(show(at(13, 45), at(14, 45), "Graeme")));

    engine.render().expect("render");

    let renderer = engine.renderer();
    assert_eq!(renderer.render_count, 1);
    assert_eq!(renderer.last_marker_count, 76);
    assert_eq!(renderer.last_row_count, 2);
    assert_eq!(renderer.last_filler_count, 1);
}
