use crate::{
    animation::anim::Anim,
    composition::dsl::{ClipBuilder, CompositionBuilder, TrackBuilder},
    composition::model::{Asset, ClipContent, Composition, Fit},
    foundation::core::Anchor,
    foundation::error::{VreelError, VreelResult},
    pipeline::config::EngineConfig,
};

/// Synthesize the branded closing composition.
///
/// A pure function of (resolution, logo, config): an opaque background fill
/// spans the whole outro, and the logo starts at 30% of the composition
/// width, fades in linearly over the first half of the duration and zooms
/// from 1.0x to the configured factor over the full duration, anchored
/// center throughout.
pub fn build_outro(logo: &Asset, cfg: &EngineConfig) -> VreelResult<Composition> {
    logo.validate()?;
    if !logo.is_visual() {
        return Err(VreelError::validation("outro logo must be a visual asset"));
    }

    let duration = cfg.outro_duration_sec;
    let background = ClipBuilder::new(
        "outro-background",
        ClipContent::Fill {
            color: cfg.outro_background,
        },
        0.0,
        duration,
    )
    .build()?;

    let logo_clip = ClipBuilder::new(
        "outro-logo",
        ClipContent::Image {
            asset: logo.clone(),
            fit: Fit::Contain,
            width_frac: Some(cfg.outro_logo_width_frac),
        },
        0.0,
        duration,
    )
    .anchor(Anchor::Center)
    .opacity(Anim::linear_ramp(0.0, 0.0, 0.5 * duration, 1.0))
    .scale(Anim::linear_ramp(0.0, 1.0, duration, cfg.outro_zoom_factor))
    .build()?;

    CompositionBuilder::new("outro", cfg.target_resolution, duration)
        .track(TrackBuilder::new("background").clip(background).build()?)
        .track(
            TrackBuilder::new("logo")
                .z_base(1)
                .clip(logo_clip)
                .build()?,
        )
        .build()
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/outro.rs"]
mod tests;
