//! Stage 7: orbit.
//!
//! The layer revolves around reference A (the anchor). When reference B resolves to a visible point
//! far enough from A, the radius and starting phase come from the A→B vector; otherwise the
//! configured fallback radius and start phase are used. Radius and phase are frozen in an
//! [`OrbitToken`] owned by the hub, so this stage only evaluates the current offset.
//!
//! Angles here are in screen convention: 0° = right, 90° = down.

use crate::{
    config::model::{OrbitAnchor, OrbitConfig, OrbitReference, StartPhase},
    foundation::{
        core::{ORBIT_EPS, Point, PointPct},
        math::{cartesian_to_polar, clamp, finite_or, norm360, polar_to_cartesian},
    },
    hub::tokens::OrbitToken,
    pipeline::{
        bus::{Bus, FrameCtx, OrbitOffset},
        spin::degrees_per_ms,
    },
};

/// Radius, starting phase and whether they came from reference geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitParams {
    /// Radius in pixels.
    pub radius_px: f64,
    /// Starting phase in degrees.
    pub theta0_deg: f64,
    /// True when derived from A and B.
    pub valid_reference: bool,
}

fn clamped_pct_to_px(p: PointPct, ctx: &FrameCtx) -> Point {
    let p = PointPct::new(
        clamp(finite_or(p.x, 50.0), 0.0, 100.0),
        clamp(finite_or(p.y, 50.0), 0.0, 100.0),
    );
    ctx.units.screen_pct100_to_px(p, ctx.origin)
}

/// Reference A in screen pixels.
pub fn resolve_anchor_px(cfg: &OrbitConfig, ctx: &FrameCtx) -> Point {
    match cfg.anchor {
        OrbitAnchor::Dotmark => ctx.origin.dotmark(),
        OrbitAnchor::Point(p) => clamped_pct_to_px(p, ctx),
    }
}

/// Reference B in screen pixels, if the configured source has produced one.
pub fn resolve_reference_px(cfg: &OrbitConfig, ctx: &FrameCtx, bus: &Bus<'_>) -> Option<Point> {
    match cfg.reference {
        OrbitReference::None => None,
        OrbitReference::Center => bus.pos.map(|p| p.center_px),
        OrbitReference::Base => bus.angle.map(|a| a.base_px),
        OrbitReference::Tip => bus.angle.map(|a| a.tip_px),
        OrbitReference::Point(p) => Some(clamped_pct_to_px(p, ctx)),
    }
}

/// Radius and starting phase for a fresh token.
pub fn derive_orbit_params(ctx: &FrameCtx, bus: &Bus<'_>, cfg: &OrbitConfig) -> OrbitParams {
    let a = resolve_anchor_px(cfg, ctx);

    if let Some(b) = resolve_reference_px(cfg, ctx, bus).filter(|b| ctx.origin.contains(*b)) {
        let (r, theta) = cartesian_to_polar(b - a);
        if r > ORBIT_EPS {
            return OrbitParams {
                radius_px: r,
                theta0_deg: theta,
                valid_reference: true,
            };
        }
    }

    let radius_pct = finite_or(cfg.radius_pct, 0.0).max(0.0);
    let theta0_deg = match cfg.start_phase {
        StartPhase::Auto => 0.0,
        StartPhase::Deg(d) => norm360(d),
    };
    OrbitParams {
        radius_px: ctx.units.vmin_pct_to_px(radius_pct, ctx.origin).max(0.0),
        theta0_deg,
        valid_reference: false,
    }
}

/// Orbit phase at `now_ms`. Zero when disabled, without a token, or not turning.
pub fn orbit_angle_deg(now_ms: f64, cfg: Option<&OrbitConfig>, token: Option<&OrbitToken>) -> f64 {
    let (Some(cfg), Some(token)) = (cfg.filter(|c| c.enabled), token) else {
        return 0.0;
    };
    let rpm = finite_or(cfg.rpm, 0.0);
    if rpm <= 0.0 {
        return 0.0;
    }
    let dt = (now_ms - token.t0_ms).max(0.0);
    norm360(token.theta0_deg + degrees_per_ms(rpm, cfg.direction) * dt)
}

/// Stage 7: translation of the layer along its orbit.
pub fn orbit<'a>(bus: Bus<'a>, ctx: &FrameCtx, token: Option<&OrbitToken>) -> Bus<'a> {
    let cfg = bus.cfg().and_then(|c| c.orbit.as_ref()).filter(|c| c.enabled);

    let offset = match (cfg, token) {
        (Some(cfg), Some(token)) if token.radius_px > 0.0 => {
            let theta = orbit_angle_deg(ctx.now_ms, Some(cfg), Some(token));
            let v = polar_to_cartesian(token.radius_px, theta);
            OrbitOffset { dx: v.x, dy: v.y }
        }
        _ => OrbitOffset::ZERO,
    };

    Bus {
        orbit: Some(offset),
        ..bus
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/orbit.rs"]
mod tests;
