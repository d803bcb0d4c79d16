//! Per-frame accumulator threaded through the eight pipeline stages.
//!
//! Each stage consumes a [`Bus`] and returns it with exactly one more field filled in. Stages may
//! read fields written by earlier stages and never touch fields owned by other stages, so every
//! stage can be exercised in isolation from a hand-built bus.

use crate::{
    config::model::LayerConfig,
    foundation::core::{Origin, Point, PointPct, Size},
    units::convert::Units,
};

/// Immutable per-layer snapshot handed to every stage of one tick.
#[derive(Clone, Copy, Debug)]
pub struct FrameCtx {
    /// Virtual time in milliseconds.
    pub now_ms: f64,
    /// Viewport metrics.
    pub origin: Origin,
    /// Unit converter.
    pub units: Units,
    /// Natural size of this layer's image, when known.
    pub natural: Option<Size>,
}

impl FrameCtx {
    /// Build a context with the default converter.
    pub fn new(now_ms: f64, origin: Origin, natural: Option<Size>) -> Self {
        Self {
            now_ms,
            origin,
            units: Units,
            natural,
        }
    }
}

/// The accumulator. Lives for one layer for one frame.
#[derive(Clone, Debug, Default)]
pub struct Bus<'a> {
    /// Stage 1.
    pub layer: Option<LayerStage<'a>>,
    /// Stage 2.
    pub map: Option<ScreenMap>,
    /// Stage 3.
    pub image: Option<ImageMap>,
    /// Stage 4.
    pub pos: Option<Placement>,
    /// Stage 5.
    pub angle: Option<AnchoredAngle>,
    /// Stage 6.
    pub spin: Option<SpinAngle>,
    /// Stage 7.
    pub orbit: Option<OrbitOffset>,
    /// Stage 8.
    pub clock: Option<ClockAngle>,
}

impl<'a> Bus<'a> {
    /// Layer configuration recorded by the producer stage.
    pub fn cfg(&self) -> Option<&'a LayerConfig> {
        self.layer.as_ref().map(|l| l.cfg)
    }
}

/// Normalized layer identity.
#[derive(Clone, Debug)]
pub struct LayerStage<'a> {
    /// Non-empty layer id.
    pub id: String,
    /// Image path.
    pub path: String,
    /// `cfg.enabled && !path.is_empty()`.
    pub enabled: bool,
    /// Finite z-order hint.
    pub z_hint: f64,
    /// The configuration this frame is computed from.
    pub cfg: &'a LayerConfig,
}

/// Viewport metrics in whole pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenMap {
    /// Viewport width.
    pub vw: f64,
    /// Viewport height.
    pub vh: f64,
    /// `min(vw, vh)`.
    pub vmin: f64,
    /// Viewport center.
    pub dotmark: Point,
}

/// Local coordinate convention of image-space points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageSpace {
    /// Origin at the image center, +x right, +y down.
    ImageCentered,
}

/// Natural image size (placeholder until known).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageMap {
    /// Natural size, never degenerate.
    pub natural: Size,
    /// Local space tag.
    pub space: ImageSpace,
}

/// Resolved screen center and rendered height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Layer center in screen pixels.
    pub center_px: Point,
    /// Rendered height in pixels.
    pub scale_px: f64,
}

/// Output of the anchored-angle stage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnchoredAngle {
    /// Base rotation in degrees.
    pub rotation_deg: f64,
    /// Transform origin in percent of the rendered box.
    pub origin_pct: PointPct,
    /// Rotated base point in screen pixels.
    pub base_px: Point,
    /// Rotated tip point in screen pixels.
    pub tip_px: Point,
}

/// Spin contribution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpinAngle {
    /// Degrees in `[0, 360)`.
    pub deg: f64,
}

/// Orbit contribution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitOffset {
    /// Horizontal translation in pixels.
    pub dx: f64,
    /// Vertical translation in pixels.
    pub dy: f64,
}

impl OrbitOffset {
    /// No translation.
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };
}

/// Clock contribution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClockAngle {
    /// Degrees in `[0, 360)`.
    pub deg: f64,
}
