use std::path::Path;

use anyhow::Context;

use crate::{
    config::model::LauncherConfig,
    foundation::{
        core::Size,
        error::{OrbitdialError, OrbitdialResult},
    },
    hub::orchestrator::{NaturalSizes, sorted_layers},
    pipeline::{bus::Bus, produce::produce},
};

/// Read the pixel size of an image from its header.
pub fn probe_image_size(path: &Path) -> OrbitdialResult<Size> {
    let (w, h) = image::image_dimensions(path)
        .with_context(|| format!("read image header '{}'", path.display()))?;
    let size = Size::new(f64::from(w), f64::from(h));
    if !size.is_usable() {
        return Err(OrbitdialError::asset(format!(
            "image '{}' has no pixels ({w}x{h})",
            path.display()
        )));
    }
    Ok(size)
}

/// Natural sizes for every enabled layer whose image can be read below `root`.
///
/// Layers whose image is missing or undecodable are logged and left out, so they render with the
/// placeholder size.
#[tracing::instrument(skip(cfg))]
pub fn probe_natural_sizes(cfg: &LauncherConfig, root: &Path) -> NaturalSizes {
    let mut sizes = NaturalSizes::new();
    for (index, layer) in sorted_layers(&cfg.layers).into_iter().enumerate() {
        let Some(stage) = produce(Bus::default(), layer, index).layer else {
            continue;
        };
        if !stage.enabled {
            continue;
        }
        match probe_image_size(&root.join(&stage.path)) {
            Ok(size) => {
                tracing::debug!(layer = %stage.id, w = size.w, h = size.h, "probed natural size");
                sizes.insert(stage.id, size);
            }
            Err(err) => {
                tracing::warn!(
                    layer = %stage.id,
                    path = %stage.path,
                    %err,
                    "natural size unavailable"
                );
            }
        }
    }
    sizes
}

#[cfg(test)]
#[path = "../../tests/unit/assets/probe.rs"]
mod tests;
