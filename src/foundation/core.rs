pub use kurbo::{Point, Vec2};

/// Minimum distance (px) between the orbit references for a derived radius to count.
pub const ORBIT_EPS: f64 = 0.5;
/// Frame-rate ceiling used when a layer does not configure one.
pub const DEFAULT_MAX_FPS: f64 = 60.0;
/// Lowest frame-rate ceiling a layer may request.
pub const MIN_FPS: f64 = 15.0;

/// Viewport metrics in pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Origin {
    /// Viewport width.
    pub width: f64,
    /// Viewport height.
    pub height: f64,
    /// Horizontal center.
    pub center_x: f64,
    /// Vertical center.
    pub center_y: f64,
}

impl Origin {
    /// Build an origin centered in a `width` x `height` surface.
    ///
    /// Non-finite dimensions are treated as zero.
    pub fn from_size(width: f64, height: f64) -> Self {
        let w = if width.is_finite() { width } else { 0.0 };
        let h = if height.is_finite() { height } else { 0.0 };
        Self {
            width: w,
            height: h,
            center_x: w * 0.5,
            center_y: h * 0.5,
        }
    }

    /// Viewport center ("dotmark") as a point.
    pub fn dotmark(self) -> Point {
        Point::new(self.center_x, self.center_y)
    }

    /// Whether `p` lies inside the viewport, edges included.
    pub fn contains(self, p: Point) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
    }
}

/// Pixel size of an image.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Size {
    /// Width in pixels.
    pub w: f64,
    /// Height in pixels.
    pub h: f64,
}

impl Size {
    /// The 1x1 placeholder used until a real natural size is known.
    pub const PLACEHOLDER: Self = Self { w: 1.0, h: 1.0 };

    /// Construct a size.
    pub fn new(w: f64, h: f64) -> Self {
        Self { w, h }
    }

    /// True when both sides are finite and strictly positive.
    pub fn is_usable(self) -> bool {
        self.w.is_finite() && self.h.is_finite() && self.w > 0.0 && self.h > 0.0
    }
}

/// A 2-D value expressed in percent units (the exact space depends on context).
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PointPct {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl PointPct {
    /// Construct a percent point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// `(50, 50)`: the middle of a 0..100 space.
    pub const CENTER: Self = Self::new(50.0, 50.0);
}

/// Rotation direction. Clockwise increases angles.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Clockwise.
    #[default]
    Cw,
    /// Counter-clockwise.
    Ccw,
}

impl Direction {
    /// `+1.0` for clockwise, `-1.0` for counter-clockwise.
    pub fn sign(self) -> f64 {
        match self {
            Self::Cw => 1.0,
            Self::Ccw => -1.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
