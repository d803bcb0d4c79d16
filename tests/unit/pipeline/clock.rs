use super::*;
use crate::{config::model::LayerConfig, foundation::core::Origin};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn at(h: u32, m: u32, s: u32, ms: u32) -> TimeParts {
    TimeParts { h, m, s, ms }
}

fn hand(role: ClockRole) -> ClockConfig {
    ClockConfig {
        enabled: true,
        role,
        ..ClockConfig::default()
    }
}

/// 2024-01-01T00:00:00Z.
const MIDNIGHT_MS: f64 = 1_704_067_200_000.0;
const HOUR_MS: f64 = 3_600_000.0;

#[test]
fn hour_hand_at_three() {
    assert!(approx(clock_angle_from_parts(at(3, 0, 0, 0), &hand(ClockRole::Hour)), 90.0));
    assert!(approx(clock_angle_from_parts(at(15, 0, 0, 0), &hand(ClockRole::Hour)), 90.0));
}

#[test]
fn twenty_four_hour_dial() {
    let cfg = ClockConfig {
        hour_style: 24,
        ..hand(ClockRole::Hour)
    };
    assert!(approx(clock_angle_from_parts(at(18, 30, 0, 0), &cfg), 277.5));
}

#[test]
fn minute_hand_includes_seconds() {
    assert!(approx(clock_angle_from_parts(at(10, 15, 30, 0), &hand(ClockRole::Minute)), 93.0));
}

#[test]
fn second_hand_smooth_and_tick() {
    let smooth = hand(ClockRole::Second);
    let tick = ClockConfig {
        second_mode: SecondMode::Tick,
        ..hand(ClockRole::Second)
    };
    let t = at(0, 0, 10, 500);
    assert!(approx(clock_angle_from_parts(t, &smooth), 63.0));
    assert!(approx(clock_angle_from_parts(t, &tick), 60.0));
}

#[test]
fn offset_is_clamped_and_wrapped() {
    let cfg = ClockConfig {
        offset_deg: 500.0,
        ..hand(ClockRole::Minute)
    };
    assert!(approx(clock_angle_from_parts(at(0, 0, 0, 0), &cfg), 180.0));

    let cfg = ClockConfig {
        offset_deg: -45.0,
        ..hand(ClockRole::Minute)
    };
    assert!(approx(clock_angle_from_parts(at(0, 0, 0, 0), &cfg), 315.0));
}

#[test]
fn utc_parts_apply_offset_minutes() {
    assert_eq!(utc_parts(MIDNIGHT_MS + 3.0 * HOUR_MS, 0.0), at(3, 0, 0, 0));
    assert_eq!(utc_parts(MIDNIGHT_MS, 90.0), at(1, 30, 0, 0));
    assert_eq!(utc_parts(MIDNIGHT_MS + 1_250.0, f64::NAN), at(0, 0, 1, 250));
}

#[test]
fn utc_sync_drives_the_stage() {
    let mut layer = LayerConfig::new("h", "hour.png");
    layer.clock = Some(ClockConfig {
        sync: ClockSync::Utc,
        utc_offset_minutes: Some(120.0),
        ..hand(ClockRole::Hour)
    });
    // 01:00Z shifted by two hours reads 03:00.
    let ctx = FrameCtx::new(MIDNIGHT_MS + HOUR_MS, Origin::from_size(10.0, 10.0), None);
    let bus = crate::pipeline::produce::produce(Bus::default(), &layer, 0);
    assert!(approx(clock(bus, &ctx).clock.unwrap().deg, 90.0));
}

#[test]
fn device_sync_stays_in_range() {
    let deg = clock_angle_deg(MIDNIGHT_MS, &hand(ClockRole::Second));
    assert!((0.0..360.0).contains(&deg));
}

#[test]
fn disabled_block_contributes_nothing() {
    let mut layer = LayerConfig::new("h", "hour.png");
    layer.clock = Some(ClockConfig {
        offset_deg: 30.0,
        ..ClockConfig::default()
    });
    let ctx = FrameCtx::new(MIDNIGHT_MS, Origin::from_size(10.0, 10.0), None);
    let bus = crate::pipeline::produce::produce(Bus::default(), &layer, 0);
    assert_eq!(clock(bus, &ctx).clock.unwrap().deg, 0.0);
}
