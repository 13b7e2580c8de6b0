use chrono::{DateTime, TimeZone, Utc};

use epg_rs::EpgError;
use epg_rs::core::{Channel, Show, Slot, resolve_window, schedule_bounds};

fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(1999, 1, 1, hour, minute, 0)
        .single()
        .expect("valid time")
}

fn show(start: DateTime<Utc>, end: DateTime<Utc>, title: &str) -> Slot {
    Slot::programme(start, end, Show::new(title)).expect("valid slot")
}

fn lineup() -> Vec<Channel> {
    vec![
        Channel::new("Dave").with_slot(show(at(13, 30), at(14, 0), "Top Gear")),
        Channel::new("UKTV").with_slots([
            show(at(14, 0), at(14, 45), "Graeme"),
            show(at(13, 45), at(14, 0), "News"),
        ]),
    ]
}

#[test]
fn derived_window_spans_min_start_to_max_end() {
    let window = resolve_window(None, None, &lineup()).expect("window");
    assert_eq!(window.start(), at(13, 30));
    assert_eq!(window.end(), at(14, 45));
    assert_eq!(schedule_bounds(&lineup()), Some((at(13, 30), at(14, 45))));
}

#[test]
fn explicit_window_ignores_channel_content() {
    let window = resolve_window(Some(at(12, 0)), Some(at(13, 0)), &lineup()).expect("window");
    assert_eq!(window.start(), at(12, 0));
    assert_eq!(window.end(), at(13, 0));

    let window = resolve_window(Some(at(12, 0)), Some(at(13, 0)), &[]).expect("window");
    assert_eq!(window.start(), at(12, 0));
}

#[test]
fn partial_override_mixes_explicit_and_derived_bounds() {
    let window = resolve_window(Some(at(13, 0)), None, &lineup()).expect("window");
    assert_eq!(window.start(), at(13, 0));
    assert_eq!(window.end(), at(14, 45));

    let window = resolve_window(None, Some(at(15, 0)), &lineup()).expect("window");
    assert_eq!(window.start(), at(13, 30));
    assert_eq!(window.end(), at(15, 0));
}

#[test]
fn empty_schedule_without_bounds_fails() {
    let err = resolve_window(None, None, &[]).expect_err("no data");
    assert!(matches!(err, EpgError::EmptySchedule));

    let empty_channels = vec![Channel::new("Dave"), Channel::new("UKTV")];
    let err = resolve_window(Some(at(13, 0)), None, &empty_channels).expect_err("no end");
    assert!(matches!(err, EpgError::EmptySchedule));
    assert_eq!(schedule_bounds(&empty_channels), None);
}

#[test]
fn inverted_windows_fail() {
    let err = resolve_window(Some(at(14, 0)), Some(at(13, 0)), &[]).expect_err("inverted");
    assert!(matches!(err, EpgError::InvalidWindow(_)));

    let err = resolve_window(Some(at(15, 0)), None, &lineup()).expect_err("start after data");
    assert!(matches!(err, EpgError::InvalidWindow(_)));
}
