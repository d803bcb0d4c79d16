use std::path::Path;

use crate::foundation::{
    core::{DEFAULT_MAX_FPS, Direction, PointPct},
    error::{OrbitdialError, OrbitdialResult},
    math::Rounding,
};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Root launcher configuration: static backgrounds plus animated layers.
///
/// Values are consumed as given. Range clamping, min/max swapping and duplicate-id renaming are
/// the job of whatever authored the file; the pipeline only guards against absent blocks and
/// non-finite numbers.
pub struct LauncherConfig {
    /// Schema version string carried through for tooling.
    #[serde(default = "default_schema_version")]
    pub schema_version: String,
    /// Authoring metadata.
    #[serde(default)]
    pub meta: Meta,
    /// Background images, drawn beneath layers.
    #[serde(default)]
    pub backgrounds: Vec<BackgroundConfig>,
    /// Animated image layers.
    #[serde(default)]
    pub layers: Vec<LayerConfig>,
}

fn default_schema_version() -> String {
    "2.0.0".to_owned()
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            meta: Meta::default(),
            backgrounds: Vec::new(),
            layers: Vec::new(),
        }
    }
}

impl LauncherConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json_str(s: &str) -> OrbitdialResult<Self> {
        serde_json::from_str(s).map_err(|e| OrbitdialError::serde(format!("launcher config: {e}")))
    }

    /// Read and parse a configuration file.
    pub fn from_json_file(path: &Path) -> OrbitdialResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            OrbitdialError::config(format!("read '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&text)
    }
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
/// Free-form authoring metadata.
pub struct Meta {
    /// Application name.
    #[serde(default)]
    pub app: String,
    /// Build identifier.
    #[serde(default)]
    pub build: String,
    /// Optional author.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// How a background image fits its box.
pub enum BackgroundFit {
    /// Letterbox inside the box.
    #[default]
    Contain,
    /// Fill the box, cropping overflow.
    Cover,
    /// Stretch to the box.
    Fill,
    /// Natural size.
    None,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// A static background image placed in screen pct100 and scaled in vmin percent.
pub struct BackgroundConfig {
    /// Background identifier.
    pub id: String,
    /// Image source.
    pub src: String,
    /// Horizontal center, 0..100.
    #[serde(default = "default_fifty")]
    pub x_pct: f64,
    /// Vertical center, 0..100.
    #[serde(default = "default_fifty")]
    pub y_pct: f64,
    /// Rendered height as a percent of the shorter viewport side.
    #[serde(default = "default_hundred")]
    pub scale_pct: f64,
    /// Opacity, 0..100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity_pct: Option<f64>,
    /// Stacking order among backgrounds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
    /// Fit mode.
    #[serde(default)]
    pub fit: BackgroundFit,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// One animated layer. Each optional block contributes nothing when absent.
pub struct LayerConfig {
    /// Layer identifier; `layer-<index>` is used when empty.
    #[serde(default)]
    pub id: String,
    /// Image path; an empty path disables the layer.
    #[serde(default)]
    pub path: String,
    /// Master switch.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Ordering hint; lower draws first.
    #[serde(default)]
    pub z_hint: f64,
    /// Position and scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<PositionConfig>,
    /// Anchored base orientation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle: Option<AngleConfig>,
    /// Continuous spin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spin: Option<SpinConfig>,
    /// Orbital revolution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orbit: Option<OrbitConfig>,
    /// Clock hand.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clock: Option<ClockConfig>,
}

impl LayerConfig {
    /// A bare enabled layer with no motion blocks.
    pub fn new(id: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
            enabled: true,
            z_hint: 0.0,
            position: None,
            angle: None,
            spin: None,
            orbit: None,
            clock: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Whether the resolved center is kept inside the viewport.
pub enum ClampMode {
    /// No clamping.
    #[default]
    None,
    /// Clamp into the viewport minus a margin.
    Bounds,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Coordinate space of [`PositionConfig::center`].
pub enum CenterMode {
    /// 0..100, 50 = viewport center.
    #[default]
    Pct100,
    /// -200..200, 0 = viewport center, ±100 = edge.
    ExtendedPct,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Position and scale block.
pub struct PositionConfig {
    /// Block switch.
    pub enabled: bool,
    /// Clamp behaviour.
    pub clamp_mode: ClampMode,
    /// Space used by `center`.
    pub center_mode: CenterMode,
    /// Layer center.
    pub center: PointPct,
    /// Rendered height as a percent of the shorter viewport side.
    pub scale_pct: f64,
    /// Lower scale bound.
    pub min_scale_pct: f64,
    /// Upper scale bound.
    pub max_scale_pct: f64,
    /// Margin for `Bounds`, percent of width/height.
    pub margin_pct: f64,
    /// Rounding applied to center and scale.
    pub rounding: Rounding,
}

impl Default for PositionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            clamp_mode: ClampMode::None,
            center_mode: CenterMode::Pct100,
            center: PointPct::CENTER,
            scale_pct: 100.0,
            min_scale_pct: 10.0,
            max_scale_pct: 400.0,
            margin_pct: 5.0,
            rounding: Rounding::Round,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Pivot of the anchored rotation.
pub enum Pivot {
    /// Image center.
    #[default]
    Center,
    /// The configured base point.
    Base,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Target direction for the base→tip vector.
pub enum Align {
    /// Straight up.
    #[default]
    Vertical,
    /// External axis; currently resolves to `Vertical`.
    Axis,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Anchored-angle block: rotate so base→tip points at the target direction.
pub struct AngleConfig {
    /// Block switch.
    pub enabled: bool,
    /// Base point, image-local percent.
    pub base: PointPct,
    /// Tip point, image-local percent.
    pub tip: PointPct,
    /// Rotation pivot.
    pub pivot: Pivot,
    /// Target direction.
    pub align: Align,
}

impl Default for AngleConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base: PointPct::new(0.0, 50.0),
            tip: PointPct::new(0.0, -50.0),
            pivot: Pivot::Center,
            align: Align::Vertical,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Continuous spin block.
pub struct SpinConfig {
    /// Block switch.
    pub enabled: bool,
    /// Revolutions per minute.
    pub rpm: f64,
    /// Spin direction.
    pub direction: Direction,
    /// Frame-rate ceiling, 15..60.
    pub max_fps: f64,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            rpm: 0.0,
            direction: Direction::Cw,
            max_fps: DEFAULT_MAX_FPS,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Center of revolution ("reference A").
pub enum OrbitAnchor {
    /// Viewport center.
    #[default]
    Dotmark,
    /// Explicit screen pct100 point.
    Point(PointPct),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Point used to derive radius and starting phase ("reference B").
pub enum OrbitReference {
    /// No derivation; use the fallback radius and phase.
    #[default]
    None,
    /// The layer's resolved center.
    Center,
    /// The anchored-angle base point.
    Base,
    /// The anchored-angle tip point.
    Tip,
    /// Explicit screen pct100 point.
    Point(PointPct),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Starting phase used when no reference geometry is available.
pub enum StartPhase {
    /// 0°.
    #[default]
    Auto,
    /// Explicit angle, 0° = right, 90° = down.
    Deg(f64),
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Orbit block.
pub struct OrbitConfig {
    /// Block switch.
    pub enabled: bool,
    /// Revolutions per minute.
    pub rpm: f64,
    /// Orbit direction.
    pub direction: Direction,
    /// Fallback radius, percent of the shorter viewport side.
    pub radius_pct: f64,
    /// Reference A.
    pub anchor: OrbitAnchor,
    /// Reference B.
    pub reference: OrbitReference,
    /// Fallback starting phase.
    pub start_phase: StartPhase,
    /// Frame-rate ceiling, 15..60.
    pub max_fps: f64,
    /// Emit an [`crate::OrbitGuide`] for debug overlays.
    pub show_guide: bool,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            rpm: 0.0,
            direction: Direction::Cw,
            radius_pct: 20.0,
            anchor: OrbitAnchor::Dotmark,
            reference: OrbitReference::None,
            start_phase: StartPhase::Auto,
            max_fps: DEFAULT_MAX_FPS,
            show_guide: false,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Source of wall time for clock hands.
pub enum ClockSync {
    /// Host local time zone.
    #[default]
    Device,
    /// UTC shifted by `utc_offset_minutes`.
    Utc,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Which hand the layer represents.
pub enum ClockRole {
    /// Hour hand.
    Hour,
    /// Minute hand.
    #[default]
    Minute,
    /// Second hand.
    Second,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Second-hand motion.
pub enum SecondMode {
    /// Continuous sweep including milliseconds.
    #[default]
    Smooth,
    /// Whole-second steps.
    Tick,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Clock block.
pub struct ClockConfig {
    /// Block switch.
    pub enabled: bool,
    /// Time source.
    pub sync: ClockSync,
    /// Offset applied in `Utc` mode; 0 when missing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utc_offset_minutes: Option<f64>,
    /// Hand role.
    pub role: ClockRole,
    /// Second-hand motion, only meaningful for `Second`.
    pub second_mode: SecondMode,
    /// 12 or 24 hour dial; anything but 24 means 12.
    pub hour_style: u8,
    /// Extra rotation, clamped to -180..180.
    pub offset_deg: f64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            sync: ClockSync::Device,
            utc_offset_minutes: None,
            role: ClockRole::Minute,
            second_mode: SecondMode::Smooth,
            hour_style: 12,
            offset_deg: 0.0,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_fifty() -> f64 {
    50.0
}

fn default_hundred() -> f64 {
    100.0
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
