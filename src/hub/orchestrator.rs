//! Per-tick orchestration: runs the eight stages for every enabled layer and owns the state that
//! must survive between ticks (continuity tokens and frame-rate gates).

use std::collections::{BTreeMap, BTreeSet};

use crate::{
    config::model::{BackgroundConfig, LauncherConfig, LayerConfig, OrbitConfig, SpinConfig},
    foundation::{
        core::{Origin, Point, PointPct, Size, Vec2},
        math::{clamp, finite_or},
    },
    hub::{
        gate::{FpsGate, layer_max_fps},
        output::{BackgroundPlacement, FrameOutput, LayerTransform, OrbitGuide},
        tokens::{
            GeometryFingerprint, OrbitToken, SpinToken, make_orbit_token, make_spin_token,
            should_rebase_orbit, should_rebase_spin,
        },
    },
    pipeline::{
        angle::anchored_angle,
        bus::{Bus, FrameCtx, OrbitOffset},
        clock::clock,
        image::map_image,
        orbit::{derive_orbit_params, orbit, resolve_anchor_px},
        position::position,
        produce::produce,
        screen::map_screen,
        spin::{spin, spin_angle_deg},
    },
    units::convert::Units,
};

/// Natural image sizes keyed by layer id.
///
/// Only finite, strictly positive sizes are stored; layers without an entry render with the 1x1
/// placeholder.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NaturalSizes {
    sizes: BTreeMap<String, Size>,
}

impl NaturalSizes {
    /// Empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a size. Returns false (and stores nothing) for unusable sizes.
    pub fn insert(&mut self, id: impl Into<String>, size: Size) -> bool {
        if !size.is_usable() {
            return false;
        }
        self.sizes.insert(id.into(), size);
        true
    }

    /// Size recorded for `id`.
    pub fn get(&self, id: &str) -> Option<Size> {
        self.sizes.get(id).copied()
    }

    /// Number of recorded sizes.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

#[derive(Clone, Debug)]
struct SpinState {
    token: SpinToken,
    cfg: Option<SpinConfig>,
}

#[derive(Clone, Debug)]
struct OrbitState {
    token: Option<OrbitToken>,
    cfg: Option<OrbitConfig>,
    fingerprint: GeometryFingerprint,
}

/// Owner of all cross-tick state.
///
/// A `Hub` is driven by repeated [`Hub::tick`] calls with monotonically non-decreasing time. State
/// is keyed by layer id and dropped as soon as an id disappears from the configuration.
#[derive(Clone, Debug, Default)]
pub struct Hub {
    spin: BTreeMap<String, SpinState>,
    orbit: BTreeMap<String, OrbitState>,
    gates: BTreeMap<String, FpsGate>,
}

impl Hub {
    /// Fresh hub with no tokens.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current spin token of a layer.
    pub fn spin_token(&self, id: &str) -> Option<&SpinToken> {
        self.spin.get(id).map(|s| &s.token)
    }

    /// Current orbit token of a layer.
    pub fn orbit_token(&self, id: &str) -> Option<&OrbitToken> {
        self.orbit.get(id).and_then(|s| s.token.as_ref())
    }

    /// Frame-rate gate of a layer.
    pub fn gate(&self, id: &str) -> Option<&FpsGate> {
        self.gates.get(id)
    }

    /// Compute one frame.
    #[tracing::instrument(skip(self, cfg, natural), fields(layers = cfg.layers.len()))]
    pub fn tick(
        &mut self,
        cfg: &LauncherConfig,
        origin: Origin,
        now_ms: f64,
        natural: &NaturalSizes,
    ) -> FrameOutput {
        let order = sorted_layers(&cfg.layers);

        let mut seen = BTreeSet::new();
        let mut layers = Vec::with_capacity(order.len());
        for (sorted_index, layer) in order.into_iter().enumerate() {
            let bus = produce(Bus::default(), layer, sorted_index);
            let Some(stage) = bus.layer.as_ref() else {
                continue;
            };
            let id = stage.id.clone();
            let enabled = stage.enabled;
            seen.insert(id.clone());
            if !enabled {
                continue;
            }
            let ctx = FrameCtx::new(now_ms, origin, natural.get(&id));
            layers.push(self.run_layer(&id, layer, bus, &ctx));
        }

        self.evict(&seen);

        FrameOutput {
            now_ms,
            backgrounds: place_backgrounds(&cfg.backgrounds, origin),
            layers,
        }
    }

    fn run_layer<'a>(
        &mut self,
        id: &str,
        layer: &'a LayerConfig,
        bus: Bus<'a>,
        ctx: &FrameCtx,
    ) -> LayerTransform {
        let bus = map_screen(bus, ctx);
        let bus = map_image(bus, ctx);
        let bus = position(bus, ctx);
        let bus = anchored_angle(bus);

        self.rebase_spin(id, layer.spin.as_ref(), ctx.now_ms);
        let bus = spin(bus, ctx, self.spin_token(id));

        self.rebase_orbit(id, layer.orbit.as_ref(), &bus, ctx);
        let bus = orbit(bus, ctx, self.orbit_token(id));

        let bus = clock(bus, ctx);

        let advanced = self
            .gates
            .entry(id.to_owned())
            .or_default()
            .admit(ctx.now_ms, layer_max_fps(layer));

        let orbit_guide = layer
            .orbit
            .as_ref()
            .filter(|o| o.enabled && o.show_guide)
            .zip(self.orbit_token(id))
            .map(|(o, t)| OrbitGuide {
                center_px: resolve_anchor_px(o, ctx),
                radius_px: t.radius_px,
                valid_reference: t.valid_reference,
            });

        let angle = bus.angle;
        let pos = bus.pos;
        let offset = bus.orbit.unwrap_or(OrbitOffset::ZERO);
        let rotation_deg = angle.map_or(0.0, |a| a.rotation_deg)
            + bus.spin.map_or(0.0, |s| s.deg)
            + bus.clock.map_or(0.0, |c| c.deg);

        LayerTransform {
            id: id.to_owned(),
            path: layer.path.clone(),
            z: z_key(layer.z_hint),
            center_px: pos.map_or(Point::ORIGIN, |p| p.center_px),
            scale_px: pos.map_or(0.0, |p| p.scale_px),
            rotation_deg,
            origin_pct: angle.map_or(PointPct::CENTER, |a| a.origin_pct),
            translate_px: Vec2::new(offset.dx, offset.dy),
            advanced,
            orbit_guide,
        }
    }

    fn rebase_spin(&mut self, id: &str, next: Option<&SpinConfig>, now_ms: f64) {
        let prev = self.spin.get(id);
        let needs_rebase = prev.is_none_or(|s| should_rebase_spin(s.cfg.as_ref(), next));
        if !needs_rebase {
            if let Some(state) = self.spin.get_mut(id) {
                state.cfg = next.cloned();
            }
            return;
        }

        // Phase under the configuration the outgoing token was created for.
        let captured =
            prev.map_or(0.0, |s| spin_angle_deg(now_ms, s.cfg.as_ref(), Some(&s.token)));
        tracing::debug!(layer = id, now_ms, captured, "spin token rebased");
        self.spin.insert(
            id.to_owned(),
            SpinState {
                token: make_spin_token(now_ms, captured),
                cfg: next.cloned(),
            },
        );
    }

    fn rebase_orbit(
        &mut self,
        id: &str,
        next: Option<&OrbitConfig>,
        bus: &Bus<'_>,
        ctx: &FrameCtx,
    ) {
        let fingerprint = GeometryFingerprint::of(bus);
        let prev = self.orbit.get(id);

        let token = match next.filter(|o| o.enabled) {
            None => None,
            Some(cfg) => {
                let needs_rebase = prev.is_none_or(|s| {
                    s.token.is_none()
                        || s.fingerprint != fingerprint
                        || should_rebase_orbit(s.cfg.as_ref(), next)
                });
                match prev.and_then(|s| s.token) {
                    Some(token) if !needs_rebase => Some(token),
                    _ => {
                        let p = derive_orbit_params(ctx, bus, cfg);
                        tracing::debug!(
                            layer = id,
                            now_ms = ctx.now_ms,
                            radius_px = p.radius_px,
                            theta0_deg = p.theta0_deg,
                            valid_reference = p.valid_reference,
                            "orbit token rebased"
                        );
                        Some(make_orbit_token(
                            ctx.now_ms,
                            p.radius_px,
                            p.theta0_deg,
                            p.valid_reference,
                        ))
                    }
                }
            }
        };

        self.orbit.insert(
            id.to_owned(),
            OrbitState {
                token,
                cfg: next.cloned(),
                fingerprint,
            },
        );
    }

    fn evict(&mut self, keep: &BTreeSet<String>) {
        let before = self.spin.len() + self.orbit.len() + self.gates.len();
        self.spin.retain(|id, _| keep.contains(id));
        self.orbit.retain(|id, _| keep.contains(id));
        self.gates.retain(|id, _| keep.contains(id));
        let dropped = before - (self.spin.len() + self.orbit.len() + self.gates.len());
        if dropped > 0 {
            tracing::debug!(dropped, "evicted state for removed layers");
        }
    }
}

/// Layers in draw order: ascending z hint, ties kept in configuration order.
///
/// The position in this order is what empty layer ids fall back to.
pub fn sorted_layers(layers: &[LayerConfig]) -> Vec<&LayerConfig> {
    let mut order: Vec<&LayerConfig> = layers.iter().collect();
    order.sort_by(|a, b| z_key(a.z_hint).total_cmp(&z_key(b.z_hint)));
    order
}

fn z_key(z: f64) -> f64 {
    finite_or(z, 0.0)
}

/// Backgrounds in draw order: center in screen pct100, height in vmin percent.
pub fn place_backgrounds(
    backgrounds: &[BackgroundConfig],
    origin: Origin,
) -> Vec<BackgroundPlacement> {
    let mut out: Vec<BackgroundPlacement> = backgrounds
        .iter()
        .map(|bg| BackgroundPlacement {
            id: bg.id.clone(),
            src: bg.src.clone(),
            center_px: Units.screen_pct100_to_px(
                PointPct::new(finite_or(bg.x_pct, 50.0), finite_or(bg.y_pct, 50.0)),
                origin,
            ),
            height_px: Units.vmin_pct_to_px(finite_or(bg.scale_pct, 100.0), origin),
            opacity: clamp(finite_or(bg.opacity_pct.unwrap_or(100.0), 100.0) / 100.0, 0.0, 1.0),
            z: z_key(bg.z.unwrap_or(0.0)),
            fit: bg.fit,
        })
        .collect();
    out.sort_by(|a, b| a.z.total_cmp(&b.z));
    out
}

#[cfg(test)]
#[path = "../../tests/unit/hub/orchestrator.rs"]
mod tests;
