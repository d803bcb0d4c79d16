//! Stage 5: anchored angle.
//!
//! Rotates the image so the configured base→tip vector points straight up. Angles in this stage
//! follow the y-up convention (0° = right, 90° = up) even though screen y grows downward.

use crate::{
    config::model::{AngleConfig, Pivot},
    foundation::{
        core::{Point, PointPct, Size, Vec2},
        math::norm360,
    },
    pipeline::bus::{AnchoredAngle, Bus},
    units::convert::Units,
};

/// Target direction of the base→tip vector: up.
const TARGET_DEG: f64 = 90.0;

/// Stage 5: base rotation, transform origin and the rotated base/tip positions.
pub fn anchored_angle(bus: Bus<'_>) -> Bus<'_> {
    let block = bus.cfg().and_then(|c| c.angle.as_ref()).filter(|a| a.enabled);
    let center = bus.pos.map(|p| p.center_px);
    let scale_px = bus.pos.map(|p| p.scale_px).unwrap_or(0.0);
    let natural = bus.image.map(|i| i.natural);

    let angle = match (block, center, natural) {
        (Some(cfg), Some(center), Some(natural)) => solve(cfg, center, scale_px, natural),
        _ => neutral(center.unwrap_or(Point::ORIGIN)),
    };

    Bus {
        angle: Some(angle),
        ..bus
    }
}

fn neutral(center: Point) -> AnchoredAngle {
    AnchoredAngle {
        rotation_deg: 0.0,
        origin_pct: PointPct::CENTER,
        base_px: center,
        tip_px: center,
    }
}

fn solve(cfg: &AngleConfig, center: Point, scale_px: f64, natural: Size) -> AnchoredAngle {
    let base = display_offset(cfg.base, natural, scale_px);
    let tip = display_offset(cfg.tip, natural, scale_px);

    // `Align::Axis` has no external axis source and resolves to the vertical target.
    let rotation_deg = norm360(TARGET_DEG - vector_angle_deg(tip - base));

    let (origin_pct, pivot) = match cfg.pivot {
        Pivot::Center => (PointPct::CENTER, Vec2::ZERO),
        Pivot::Base => (
            PointPct::new(50.0 + cfg.base.x * 0.5, 50.0 + cfg.base.y * 0.5),
            base,
        ),
    };

    let base_r = rotate_about(base, pivot, rotation_deg);
    let tip_r = rotate_about(tip, pivot, rotation_deg);

    AnchoredAngle {
        rotation_deg,
        origin_pct,
        base_px: center + base_r,
        tip_px: center + tip_r,
    }
}

/// Image-local percent to a display-pixel offset from the image center.
///
/// The rendered height is `scale_px`, so the natural-to-display factor is `scale_px / natural.h`.
fn display_offset(p: PointPct, natural: Size, scale_px: f64) -> Vec2 {
    let local = Units.img_local_pct_to_px(finite_pct(p), natural);
    let s = if natural.h > 0.0 { scale_px / natural.h } else { 1.0 };
    local * s
}

fn finite_pct(p: PointPct) -> PointPct {
    PointPct::new(
        if p.x.is_finite() { p.x } else { 0.0 },
        if p.y.is_finite() { p.y } else { 0.0 },
    )
}

/// Angle of a display-space vector, 0° = right, 90° = up.
fn vector_angle_deg(v: Vec2) -> f64 {
    if v.x == 0.0 && v.y == 0.0 {
        return 0.0;
    }
    norm360((-v.y).atan2(v.x).to_degrees())
}

/// Rotate `p` around `pivot` by `deg` in the y-up convention of [`vector_angle_deg`].
fn rotate_about(p: Vec2, pivot: Vec2, deg: f64) -> Vec2 {
    let (sin, cos) = deg.to_radians().sin_cos();
    let d = p - pivot;
    pivot + Vec2::new(d.x * cos + d.y * sin, -d.x * sin + d.y * cos)
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/angle.rs"]
mod tests;
