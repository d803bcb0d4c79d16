use crate::{
    config::model::BackgroundFit,
    foundation::core::{Point, PointPct, Vec2},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Orbit circle for debug overlays.
pub struct OrbitGuide {
    /// Reference A, resolved this frame.
    pub center_px: Point,
    /// Token radius.
    pub radius_px: f64,
    /// Whether the radius came from reference geometry.
    pub valid_reference: bool,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Final transform of one layer for one tick.
///
/// A host draws the image with height `scale_px` centered on `center_px`, then translates by
/// `translate_px` and rotates by `rotation_deg` around `origin_pct` of the drawn box.
pub struct LayerTransform {
    /// Layer id.
    pub id: String,
    /// Image path.
    pub path: String,
    /// Draw order.
    pub z: f64,
    /// Center in screen pixels.
    pub center_px: Point,
    /// Rendered height in pixels.
    pub scale_px: f64,
    /// Anchored angle + spin + clock, in degrees.
    pub rotation_deg: f64,
    /// Transform origin, percent of the drawn box.
    pub origin_pct: PointPct,
    /// Orbit translation in pixels.
    pub translate_px: Vec2,
    /// Whether this tick counted as a draw for the layer's frame-rate ceiling.
    pub advanced: bool,
    /// Present when the orbit block asks for a guide.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orbit_guide: Option<OrbitGuide>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Resolved placement of one background image.
pub struct BackgroundPlacement {
    /// Background id.
    pub id: String,
    /// Image source.
    pub src: String,
    /// Center in screen pixels.
    pub center_px: Point,
    /// Rendered height in pixels.
    pub height_px: f64,
    /// Opacity, 0..1.
    pub opacity: f64,
    /// Draw order among backgrounds.
    pub z: f64,
    /// Fit mode.
    pub fit: BackgroundFit,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
/// Everything a host needs to draw one tick.
pub struct FrameOutput {
    /// Virtual time of the tick.
    pub now_ms: f64,
    /// Backgrounds, in draw order.
    pub backgrounds: Vec<BackgroundPlacement>,
    /// Enabled layers, in draw order.
    pub layers: Vec<LayerTransform>,
}
