use crate::{
    animation::anim::Anim,
    composition::dsl::{ClipBuilder, CompositionBuilder, TrackBuilder},
    composition::model::{Asset, ClipContent, Composition, Fit, OverlayClip},
    foundation::error::{VreelError, VreelResult},
    pipeline::config::EngineConfig,
};

/// Base z-order of the watermark layer, above the visuals.
pub const WATERMARK_Z_BASE: i32 = 10;

/// Base z-order of the subtitle layer. Subtitles are always topmost so the
/// active word stays legible over any background.
pub const SUBTITLE_Z_BASE: i32 = 20;

/// Merge the visual track, subtitle clips and watermark into the main
/// composition.
///
/// Layer order back to front: visuals, watermark, subtitles. The watermark is
/// a single clip spanning the whole duration, sized proportionally to the
/// composition width so it scales with resolution.
pub fn compose_main(
    visual_track: crate::composition::model::Track,
    subtitle_clips: Vec<OverlayClip>,
    logo: &Asset,
    audio: Option<Asset>,
    total_duration_sec: f64,
    cfg: &EngineConfig,
) -> VreelResult<Composition> {
    logo.validate()?;
    if !logo.is_visual() {
        return Err(VreelError::validation("watermark logo must be a visual asset"));
    }

    let watermark = ClipBuilder::new(
        "watermark",
        ClipContent::Image {
            asset: logo.clone(),
            fit: Fit::Contain,
            width_frac: Some(cfg.watermark_scale),
        },
        0.0,
        total_duration_sec,
    )
    .anchor(cfg.watermark_anchor)
    .inset_px(cfg.watermark_margin_px)
    .opacity(Anim::constant(cfg.watermark_opacity))
    .build()?;

    let mut builder = CompositionBuilder::new("main", cfg.target_resolution, total_duration_sec)
        .track(visual_track)
        .track(
            TrackBuilder::new("watermark")
                .z_base(WATERMARK_Z_BASE)
                .clip(watermark)
                .build()?,
        )
        .track(
            TrackBuilder::new("subtitles")
                .z_base(SUBTITLE_Z_BASE)
                .clips(subtitle_clips)
                .build()?,
        );
    if let Some(audio) = audio {
        builder = builder.audio(audio);
    }
    builder.build()
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/compositor.rs"]
mod tests;
