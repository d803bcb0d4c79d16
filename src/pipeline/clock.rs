//! Stage 8: clock hands.

use chrono::{DateTime, Local, TimeZone, Timelike};

use crate::{
    config::model::{ClockConfig, ClockRole, ClockSync, SecondMode},
    foundation::math::{clamp, finite_or, norm360},
    pipeline::bus::{Bus, ClockAngle, FrameCtx},
};

/// Wall-clock components of one instant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimeParts {
    /// Hour, 0..24.
    pub h: u32,
    /// Minute, 0..60.
    pub m: u32,
    /// Second, 0..60.
    pub s: u32,
    /// Millisecond, 0..1000.
    pub ms: u32,
}

impl TimeParts {
    fn of<Tz: TimeZone>(t: &DateTime<Tz>) -> Self {
        Self {
            h: t.hour(),
            m: t.minute(),
            s: t.second(),
            // Leap seconds report nanoseconds past 1e9.
            ms: (t.nanosecond() / 1_000_000).min(999),
        }
    }
}

fn epoch_ms(now_ms: f64) -> i64 {
    if now_ms.is_finite() { now_ms.floor() as i64 } else { 0 }
}

/// Time parts in the host's local time zone.
pub fn device_parts(now_ms: f64) -> TimeParts {
    let ms = epoch_ms(now_ms);
    match Local.timestamp_millis_opt(ms).earliest() {
        Some(t) => TimeParts::of(&t),
        None => utc_parts(now_ms, 0.0),
    }
}

/// Time parts in UTC shifted by `offset_minutes`.
pub fn utc_parts(now_ms: f64, offset_minutes: f64) -> TimeParts {
    let offset_ms = (finite_or(offset_minutes, 0.0) * 60_000.0) as i64;
    let shifted = epoch_ms(now_ms).saturating_add(offset_ms);
    DateTime::from_timestamp_millis(shifted)
        .map(|t| TimeParts::of(&t))
        .unwrap_or_default()
}

fn parts_for(now_ms: f64, cfg: &ClockConfig) -> TimeParts {
    match cfg.sync {
        ClockSync::Device => device_parts(now_ms),
        ClockSync::Utc => utc_parts(now_ms, cfg.utc_offset_minutes.unwrap_or(0.0)),
    }
}

/// Hand angle for already-resolved time parts, offset included.
pub fn clock_angle_from_parts(parts: TimeParts, cfg: &ClockConfig) -> f64 {
    let (h, m, s, ms) = (
        f64::from(parts.h),
        f64::from(parts.m),
        f64::from(parts.s),
        f64::from(parts.ms),
    );

    let deg = match cfg.role {
        ClockRole::Second => match cfg.second_mode {
            SecondMode::Smooth => 6.0 * (s + ms / 1000.0),
            SecondMode::Tick => 6.0 * s,
        },
        ClockRole::Minute => 6.0 * (m + s / 60.0),
        ClockRole::Hour if cfg.hour_style == 24 => 15.0 * (h % 24.0 + m / 60.0),
        ClockRole::Hour => 30.0 * (h % 12.0 + m / 60.0),
    };

    let offset = clamp(finite_or(cfg.offset_deg, 0.0), -180.0, 180.0);
    norm360(norm360(deg) + offset)
}

/// Hand angle at `now_ms` for an enabled block.
pub fn clock_angle_deg(now_ms: f64, cfg: &ClockConfig) -> f64 {
    clock_angle_from_parts(parts_for(now_ms, cfg), cfg)
}

/// Stage 8: clock-hand rotation. Zero when the block is absent or disabled.
pub fn clock<'a>(bus: Bus<'a>, ctx: &FrameCtx) -> Bus<'a> {
    let deg = bus
        .cfg()
        .and_then(|c| c.clock.as_ref())
        .filter(|c| c.enabled)
        .map_or(0.0, |c| clock_angle_deg(ctx.now_ms, c));

    Bus {
        clock: Some(ClockAngle { deg }),
        ..bus
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/clock.rs"]
mod tests;
