//! Continuity tokens for spin and orbit.
//!
//! A token anchors a linear phase-vs-time function. Tokens are rebased, never simply reset: the
//! orchestrator captures the outgoing phase before replacing a spin token, and re-derives orbit
//! radius/phase from geometry whenever orbit inputs change.

use crate::{
    config::model::{OrbitConfig, SpinConfig},
    foundation::{core::Point, math::norm360},
    pipeline::bus::Bus,
};

/// Spin phase anchor.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SpinToken {
    /// Anchor time.
    pub t0_ms: f64,
    /// Phase at `t0_ms`, degrees in `[0, 360)`.
    pub phase0_deg: f64,
    /// False for a token that must not be evaluated.
    pub initialized: bool,
}

/// Create a spin token anchored at `now_ms` with the given phase.
pub fn make_spin_token(now_ms: f64, phase0_deg: f64) -> SpinToken {
    SpinToken {
        t0_ms: now_ms,
        phase0_deg: norm360(phase0_deg),
        initialized: true,
    }
}

/// Orbit radius and phase anchor.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct OrbitToken {
    /// Radius in pixels, never negative.
    pub radius_px: f64,
    /// Phase at `t0_ms`, screen convention (0° = right, 90° = down).
    pub theta0_deg: f64,
    /// Anchor time.
    pub t0_ms: f64,
    /// Whether radius/phase came from reference geometry rather than fallbacks.
    pub valid_reference: bool,
}

/// Create an orbit token anchored at `now_ms`.
pub fn make_orbit_token(
    now_ms: f64,
    radius_px: f64,
    theta0_deg: f64,
    valid_reference: bool,
) -> OrbitToken {
    OrbitToken {
        radius_px: if radius_px.is_finite() { radius_px.max(0.0) } else { 0.0 },
        theta0_deg: norm360(theta0_deg),
        t0_ms: now_ms,
        valid_reference,
    }
}

fn finite_or_zero(v: Option<f64>) -> f64 {
    v.filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// Whether a spin configuration change requires a new token.
pub fn should_rebase_spin(prev: Option<&SpinConfig>, next: Option<&SpinConfig>) -> bool {
    let enabled = |c: Option<&SpinConfig>| c.is_some_and(|c| c.enabled);
    enabled(prev) != enabled(next)
        || finite_or_zero(prev.map(|c| c.rpm)) != finite_or_zero(next.map(|c| c.rpm))
        || prev.map(|c| c.direction).unwrap_or_default()
            != next.map(|c| c.direction).unwrap_or_default()
}

/// Whether an orbit configuration change requires a new token.
///
/// Geometry changes are tracked separately through [`GeometryFingerprint`].
pub fn should_rebase_orbit(prev: Option<&OrbitConfig>, next: Option<&OrbitConfig>) -> bool {
    let enabled = |c: Option<&OrbitConfig>| c.is_some_and(|c| c.enabled);
    let radius = |c: Option<&OrbitConfig>| finite_or_zero(c.map(|c| c.radius_pct));
    enabled(prev) != enabled(next)
        || finite_or_zero(prev.map(|c| c.rpm)) != finite_or_zero(next.map(|c| c.rpm))
        || prev.map(|c| c.direction).unwrap_or_default()
            != next.map(|c| c.direction).unwrap_or_default()
        || radius(prev) != radius(next)
        || prev.map(|c| c.anchor).unwrap_or_default() != next.map(|c| c.anchor).unwrap_or_default()
        || prev.map(|c| c.reference).unwrap_or_default()
            != next.map(|c| c.reference).unwrap_or_default()
        || prev.map(|c| c.start_phase).unwrap_or_default()
            != next.map(|c| c.start_phase).unwrap_or_default()
}

/// Quantized snapshot of the resolved center/base/tip positions of one layer.
///
/// Positions are kept to 1/100 px so float noise below that never triggers an orbit rebase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GeometryFingerprint {
    center: Option<(i64, i64)>,
    base: Option<(i64, i64)>,
    tip: Option<(i64, i64)>,
}

impl GeometryFingerprint {
    /// Fingerprint the geometry written by stages 4 and 5.
    pub fn of(bus: &Bus<'_>) -> Self {
        Self {
            center: bus.pos.map(|p| quantize(p.center_px)),
            base: bus.angle.map(|a| quantize(a.base_px)),
            tip: bus.angle.map(|a| quantize(a.tip_px)),
        }
    }
}

fn quantize(p: Point) -> (i64, i64) {
    ((p.x * 100.0).round() as i64, (p.y * 100.0).round() as i64)
}

#[cfg(test)]
#[path = "../../tests/unit/hub/tokens.rs"]
mod tests;
