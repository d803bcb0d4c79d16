use crate::{
    config::model::LayerConfig,
    foundation::math::finite_or,
    pipeline::bus::{Bus, LayerStage},
};

/// Stage 1: normalize the layer's identity and record its configuration.
///
/// `index` is the layer's position in the configuration list and only feeds the fallback id.
pub fn produce<'a>(bus: Bus<'a>, cfg: &'a LayerConfig, index: usize) -> Bus<'a> {
    let id = if cfg.id.is_empty() {
        format!("layer-{index}")
    } else {
        cfg.id.clone()
    };

    Bus {
        layer: Some(LayerStage {
            id,
            path: cfg.path.clone(),
            enabled: cfg.enabled && !cfg.path.is_empty(),
            z_hint: finite_or(cfg.z_hint, 0.0),
            cfg,
        }),
        ..bus
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/produce.rs"]
mod tests;
