//! Orbitdial computes per-frame transforms for layered launcher dials.
//!
//! Every layer of a [`LauncherConfig`] runs through the same eight stages each tick: identity,
//! screen mapping, image mapping, position and scale, anchored angle, spin, orbit and clock. The
//! stages are pure; the only state that survives a tick lives in the [`Hub`]:
//!
//! - spin and orbit continuity tokens, rebased so motion never jumps when configuration changes
//! - per-layer frame-rate gates
//!
//! A host feeds the hub a virtual time (see [`FrameTime`]), the viewport [`Origin`] and whatever
//! [`NaturalSizes`] it knows, and draws the returned [`FrameOutput`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod config;
mod foundation;
mod hub;
mod pipeline;
mod time;
mod units;

pub use crate::assets::probe::{probe_image_size, probe_natural_sizes};
pub use crate::config::model::{
    Align, AngleConfig, BackgroundConfig, BackgroundFit, CenterMode, ClampMode, ClockConfig,
    ClockRole, ClockSync, LauncherConfig, LayerConfig, Meta, OrbitAnchor, OrbitConfig,
    OrbitReference, Pivot, PositionConfig, SecondMode, SpinConfig, StartPhase,
};
pub use crate::foundation::core::{
    DEFAULT_MAX_FPS, Direction, MIN_FPS, ORBIT_EPS, Origin, Point, PointPct, Size, Vec2,
};
pub use crate::foundation::error::{OrbitdialError, OrbitdialResult};
pub use crate::foundation::math::{
    Rounding, almost_equal, angle_diff_deg, cartesian_to_polar, norm180, norm360,
    polar_to_cartesian,
};
pub use crate::hub::gate::{FpsGate, layer_max_fps};
pub use crate::hub::orchestrator::{Hub, NaturalSizes, place_backgrounds, sorted_layers};
pub use crate::hub::output::{BackgroundPlacement, FrameOutput, LayerTransform, OrbitGuide};
pub use crate::hub::tokens::{
    GeometryFingerprint, OrbitToken, SpinToken, make_orbit_token, make_spin_token,
    should_rebase_orbit, should_rebase_spin,
};
pub use crate::pipeline::angle::anchored_angle;
pub use crate::pipeline::bus::{
    AnchoredAngle, Bus, ClockAngle, FrameCtx, ImageMap, ImageSpace, LayerStage, OrbitOffset,
    Placement, ScreenMap, SpinAngle,
};
pub use crate::pipeline::clock::{
    TimeParts, clock, clock_angle_deg, clock_angle_from_parts, device_parts, utc_parts,
};
pub use crate::pipeline::image::map_image;
pub use crate::pipeline::orbit::{
    OrbitParams, derive_orbit_params, orbit, orbit_angle_deg, resolve_anchor_px,
    resolve_reference_px,
};
pub use crate::pipeline::position::position;
pub use crate::pipeline::produce::produce;
pub use crate::pipeline::screen::map_screen;
pub use crate::pipeline::spin::{degrees_per_ms, spin, spin_angle_deg};
pub use crate::time::{FrameTime, MAX_REAL_DELTA_MS};
pub use crate::units::convert::Units;
