use crate::pipeline::bus::{Bus, FrameCtx, ScreenMap};

/// Stage 2: whole-pixel viewport metrics and the viewport center.
pub fn map_screen<'a>(bus: Bus<'a>, ctx: &FrameCtx) -> Bus<'a> {
    let vw = whole_px(ctx.origin.width);
    let vh = whole_px(ctx.origin.height);

    Bus {
        map: Some(ScreenMap {
            vw,
            vh,
            vmin: vw.min(vh),
            dotmark: ctx.origin.dotmark(),
        }),
        ..bus
    }
}

fn whole_px(v: f64) -> f64 {
    if v.is_finite() { v.max(0.0).floor() } else { 0.0 }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/screen.rs"]
mod tests;
