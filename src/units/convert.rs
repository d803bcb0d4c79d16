//! Conversions between the percent spaces used by layer configuration and pixels.
//!
//! | space            | range        | zero        | ±100             |
//! |------------------|--------------|-------------|------------------|
//! | screen pct100    | 0..100       | left/top    | right/bottom     |
//! | screen extended  | -200..200    | viewport center | viewport edge |
//! | vmin percent     | scalar       | 0           | `min(w, h)`      |
//! | image-local      | unbounded    | image center | image half-extent |

use crate::foundation::core::{Origin, Point, PointPct, Size, Vec2};

const DENOM_EPS: f64 = 1e-9;

/// Replace a degenerate denominator with 1 so conversions stay finite.
fn non_zero(v: f64) -> f64 {
    if v.is_finite() && v.abs() > DENOM_EPS {
        v
    } else {
        1.0
    }
}

/// Stateless unit converter handed to every pipeline stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Units;

impl Units {
    /// Screen pct100 to screen pixels.
    pub fn screen_pct100_to_px(self, p: PointPct, origin: Origin) -> Point {
        Point::new(p.x / 100.0 * origin.width, p.y / 100.0 * origin.height)
    }

    /// Screen pixels to screen pct100.
    pub fn screen_px_to_pct100(self, p: Point, origin: Origin) -> PointPct {
        let w = non_zero(origin.width);
        let h = non_zero(origin.height);
        PointPct::new(p.x / w * 100.0, p.y / h * 100.0)
    }

    /// Screen extended percent (0 = center, ±100 = edge) to screen pixels.
    pub fn screen_extended_pct_to_px(self, p: PointPct, origin: Origin) -> Point {
        let half_w = origin.width / 2.0;
        let half_h = origin.height / 2.0;
        Point::new(
            origin.center_x + p.x / 100.0 * half_w,
            origin.center_y + p.y / 100.0 * half_h,
        )
    }

    /// Screen pixels to screen extended percent.
    pub fn screen_px_to_extended_pct(self, p: Point, origin: Origin) -> PointPct {
        let half_w = non_zero(origin.width / 2.0);
        let half_h = non_zero(origin.height / 2.0);
        PointPct::new(
            (p.x - origin.center_x) / half_w * 100.0,
            (p.y - origin.center_y) / half_h * 100.0,
        )
    }

    /// Percent of `min(width, height)` to pixels.
    pub fn vmin_pct_to_px(self, pct: f64, origin: Origin) -> f64 {
        pct / 100.0 * origin.width.min(origin.height)
    }

    /// Pixels to percent of `min(width, height)`.
    pub fn px_to_vmin_pct(self, px: f64, origin: Origin) -> f64 {
        px / non_zero(origin.width.min(origin.height)) * 100.0
    }

    /// Image-local percent to a pixel offset from the image center (natural pixels).
    pub fn img_local_pct_to_px(self, p: PointPct, natural: Size) -> Vec2 {
        Vec2::new(p.x / 100.0 * (natural.w / 2.0), p.y / 100.0 * (natural.h / 2.0))
    }

    /// Pixel offset from the image center (natural pixels) to image-local percent.
    pub fn img_local_px_to_pct(self, v: Vec2, natural: Size) -> PointPct {
        let half_w = non_zero(natural.w / 2.0);
        let half_h = non_zero(natural.h / 2.0);
        PointPct::new(v.x / half_w * 100.0, v.y / half_h * 100.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/units/convert.rs"]
mod tests;
