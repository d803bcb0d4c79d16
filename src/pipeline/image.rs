use crate::{
    foundation::core::Size,
    pipeline::bus::{Bus, FrameCtx, ImageMap, ImageSpace},
};

/// Stage 3: natural image size, or a 1x1 placeholder until the real size is known.
pub fn map_image<'a>(bus: Bus<'a>, ctx: &FrameCtx) -> Bus<'a> {
    let natural = ctx
        .natural
        .filter(|s| s.is_usable())
        .unwrap_or(Size::PLACEHOLDER);

    Bus {
        image: Some(ImageMap {
            natural,
            space: ImageSpace::ImageCentered,
        }),
        ..bus
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/image.rs"]
mod tests;
