//! Virtual frame time.

/// Largest real-time step folded into one frame.
pub const MAX_REAL_DELTA_MS: f64 = 100.0;

/// Virtual clock reading for one frame.
///
/// Only `now_ms` feeds the pipeline. Stalls longer than [`MAX_REAL_DELTA_MS`] (a hidden window, a
/// debugger pause) advance virtual time by at most that much, so spin and orbit never jump.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameTime {
    /// Virtual time in milliseconds.
    pub now_ms: f64,
    /// Virtual delta of the last step.
    pub dt_ms: f64,
}

impl FrameTime {
    /// Clock starting at `now_ms` with no elapsed delta.
    pub fn starting_at(now_ms: f64) -> Self {
        Self { now_ms, dt_ms: 0.0 }
    }

    /// Advance by a real-time delta, clamped to `[0, MAX_REAL_DELTA_MS]`.
    pub fn advance(self, real_delta_ms: f64) -> Self {
        let dt_ms = if real_delta_ms.is_finite() {
            real_delta_ms.clamp(0.0, MAX_REAL_DELTA_MS)
        } else {
            0.0
        };
        Self {
            now_ms: self.now_ms + dt_ms,
            dt_ms,
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/time.rs"]
mod tests;
