use tracing::debug;

use crate::{
    composition::dsl::{ClipBuilder, TrackBuilder},
    composition::model::{Asset, ClipContent, Fit, Track},
    foundation::core::Anchor,
    foundation::error::{VreelError, VreelResult},
};

/// Base z-order of the visual slideshow layer.
pub const VISUAL_Z_BASE: i32 = 0;

/// Slice `total_duration_sec` evenly across the visual assets.
///
/// Produces exactly one clip per asset, back to back with no gaps or overlap:
/// `clip[i].start = i * D / n`. Each clip fills the frame with cover fit, so
/// the renderer crops excess instead of distorting the image.
pub fn build_visual_track(visuals: &[Asset], total_duration_sec: f64) -> VreelResult<Track> {
    if visuals.is_empty() {
        return Err(VreelError::empty_input("no visual assets provided"));
    }
    if !total_duration_sec.is_finite() || total_duration_sec <= 0.0 {
        return Err(VreelError::invalid_composition(
            "visual track duration must be finite and > 0",
        ));
    }

    let per_clip_sec = total_duration_sec / visuals.len() as f64;
    debug!(
        count = visuals.len(),
        per_clip_sec, "slicing audio duration across visuals"
    );

    let mut track = TrackBuilder::new("visuals").z_base(VISUAL_Z_BASE);
    for (i, asset) in visuals.iter().enumerate() {
        asset.validate()?;
        if !asset.is_visual() {
            return Err(VreelError::validation(format!(
                "visual asset '{}' is not image-like",
                asset.source()
            )));
        }
        let clip = ClipBuilder::new(
            format!("visual-{i}"),
            ClipContent::Image {
                asset: asset.clone(),
                fit: Fit::Cover,
                width_frac: None,
            },
            i as f64 * per_clip_sec,
            per_clip_sec,
        )
        .anchor(Anchor::Center)
        .build()?;
        track = track.clip(clip);
    }
    track.build()
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/visual.rs"]
mod tests;
