use crate::{
    config::model::LayerConfig,
    foundation::{
        core::{DEFAULT_MAX_FPS, MIN_FPS},
        math::clamp,
    },
};

/// Frame-rate ceiling for one layer.
///
/// Each enabled motion block contributes its own ceiling (60 when unset or zero); the layer
/// takes the lowest, clamped to `[15, 60]`.
pub fn layer_max_fps(cfg: &LayerConfig) -> f64 {
    let ceiling = |enabled: bool, fps: f64| {
        if enabled && fps.is_finite() && fps != 0.0 {
            fps
        } else {
            DEFAULT_MAX_FPS
        }
    };
    let spin = cfg
        .spin
        .as_ref()
        .map_or(DEFAULT_MAX_FPS, |s| ceiling(s.enabled, s.max_fps));
    let orbit = cfg
        .orbit
        .as_ref()
        .map_or(DEFAULT_MAX_FPS, |o| ceiling(o.enabled, o.max_fps));
    clamp(spin.min(orbit), MIN_FPS, DEFAULT_MAX_FPS)
}

/// Per-layer draw bookkeeping.
///
/// The gate never suppresses computation; [`FpsGate::admit`] only reports whether this tick counts
/// as a new draw for the layer's ceiling.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FpsGate {
    /// Time of the last admitted draw.
    pub last_draw_ms: f64,
}

impl FpsGate {
    /// Record a draw at `now_ms` when at least one frame interval has elapsed.
    pub fn admit(&mut self, now_ms: f64, max_fps: f64) -> bool {
        let min_interval = 1000.0 / clamp(max_fps, MIN_FPS, DEFAULT_MAX_FPS);
        let advanced = now_ms - self.last_draw_ms >= min_interval;
        if advanced {
            self.last_draw_ms = now_ms;
        }
        tracing::trace!(now_ms, max_fps, advanced, "fps gate");
        advanced
    }
}

#[cfg(test)]
#[path = "../../tests/unit/hub/gate.rs"]
mod tests;
