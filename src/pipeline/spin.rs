use crate::{
    config::model::SpinConfig,
    foundation::{core::Direction, math::norm360},
    hub::tokens::SpinToken,
    pipeline::bus::{Bus, FrameCtx, SpinAngle},
};

/// Angular velocity in degrees per millisecond. Clockwise is positive.
pub fn degrees_per_ms(rpm: f64, direction: Direction) -> f64 {
    direction.sign() * rpm * 360.0 / 60_000.0
}

/// Spin angle at `now_ms` for a configuration and the token it was anchored with.
///
/// Zero for a disabled block, a non-positive or non-finite rpm, or a missing token.
pub fn spin_angle_deg(now_ms: f64, cfg: Option<&SpinConfig>, token: Option<&SpinToken>) -> f64 {
    let Some(cfg) = cfg.filter(|c| c.enabled) else {
        return 0.0;
    };
    let Some(token) = token.filter(|t| t.initialized) else {
        return 0.0;
    };
    if !cfg.rpm.is_finite() || cfg.rpm <= 0.0 {
        return 0.0;
    }

    let dt = (now_ms - token.t0_ms).max(0.0);
    norm360(token.phase0_deg + degrees_per_ms(cfg.rpm, cfg.direction) * dt)
}

/// Stage 6: continuous spin.
pub fn spin<'a>(bus: Bus<'a>, ctx: &FrameCtx, token: Option<&SpinToken>) -> Bus<'a> {
    let cfg = bus.cfg().and_then(|c| c.spin.as_ref());
    let deg = spin_angle_deg(ctx.now_ms, cfg, token);
    Bus {
        spin: Some(SpinAngle { deg }),
        ..bus
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/spin.rs"]
mod tests;
