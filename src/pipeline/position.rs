use crate::{
    config::model::{CenterMode, ClampMode, PositionConfig},
    foundation::{
        core::Point,
        math::{Rounding, clamp, finite_or, round_by},
    },
    pipeline::bus::{Bus, FrameCtx, Placement},
};

const DEFAULT_SCALE_PCT: f64 = 100.0;
const DEFAULT_MIN_SCALE_PCT: f64 = 10.0;
const DEFAULT_MAX_SCALE_PCT: f64 = 400.0;

/// Stage 4: layer center in screen pixels and rendered height.
///
/// Without an enabled position block the layer sits on the viewport center at 100% vmin. The
/// block's rounding mode applies either way.
pub fn position<'a>(bus: Bus<'a>, ctx: &FrameCtx) -> Bus<'a> {
    let block = bus
        .cfg()
        .and_then(|c| c.position.as_ref())
        .filter(|p| p.enabled);

    let center = clamp_center(pick_center(block, ctx), block, ctx);
    let scale_px = pick_scale_px(block, ctx);

    let rounding = bus
        .cfg()
        .and_then(|c| c.position.as_ref())
        .map_or(Rounding::Round, |p| p.rounding);

    Bus {
        pos: Some(Placement {
            center_px: Point::new(round_by(rounding, center.x), round_by(rounding, center.y)),
            scale_px: round_by(rounding, scale_px),
        }),
        ..bus
    }
}

fn pick_center(block: Option<&PositionConfig>, ctx: &FrameCtx) -> Point {
    let Some(p) = block else {
        return ctx.origin.dotmark();
    };
    if !(p.center.x.is_finite() && p.center.y.is_finite()) {
        return ctx.origin.dotmark();
    }
    match p.center_mode {
        CenterMode::Pct100 => ctx.units.screen_pct100_to_px(p.center, ctx.origin),
        CenterMode::ExtendedPct => ctx.units.screen_extended_pct_to_px(p.center, ctx.origin),
    }
}

fn clamp_center(pt: Point, block: Option<&PositionConfig>, ctx: &FrameCtx) -> Point {
    let Some(p) = block else {
        return pt;
    };
    if p.clamp_mode != ClampMode::Bounds {
        return pt;
    }

    let m = clamp(finite_or(p.margin_pct, 0.0), 0.0, 50.0) / 100.0;
    let (w, h) = (ctx.origin.width, ctx.origin.height);
    let min_x = m * w;
    let min_y = m * h;
    Point::new(clamp(pt.x, min_x, w - min_x), clamp(pt.y, min_y, h - min_y))
}

fn pick_scale_px(block: Option<&PositionConfig>, ctx: &FrameCtx) -> f64 {
    let pct = match block {
        None => DEFAULT_SCALE_PCT,
        Some(p) => {
            let s = finite_or(p.scale_pct, DEFAULT_SCALE_PCT);
            let a = finite_or(p.min_scale_pct, DEFAULT_MIN_SCALE_PCT);
            let b = finite_or(p.max_scale_pct, DEFAULT_MAX_SCALE_PCT);
            clamp(s, a.min(b), a.max(b))
        }
    };
    ctx.units.vmin_pct_to_px(pct, ctx.origin)
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/position.rs"]
mod tests;
