use tracing::info;

use crate::{
    composition::model::{Asset, Timeline},
    foundation::error::{VreelError, VreelResult},
    pipeline::config::EngineConfig,
    subtitle::highlight::{SubtitleSource, build_subtitle_clips},
    timeline::assemble::assemble_timeline,
    timeline::compositor::compose_main,
    timeline::outro::build_outro,
    timeline::visual::build_visual_track,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Fully resolved inputs for one timeline build.
///
/// All assets are metadata handed over by the asset resolver; the engine
/// performs no retrieval or decoding of its own.
pub struct TimelineInputs {
    /// Voiceover duration in seconds; the main composition's time base.
    pub audio_duration_sec: f64,
    /// Ordered visual assets for the slideshow track.
    pub visuals: Vec<Asset>,
    /// Subtitle input, word-timed or legacy equal-split.
    pub subtitles: SubtitleSource,
    /// Brand logo used for the watermark and the outro.
    pub logo: Asset,
    /// Optional voiceover asset reference attached to the main composition.
    pub audio: Option<Asset>,
}

/// Build the complete layered timeline for one request.
///
/// Deterministic and all-or-nothing: identical inputs yield structurally
/// equal timelines, and no partial timeline is ever returned on failure.
#[tracing::instrument(skip(inputs, cfg), fields(visuals = inputs.visuals.len()))]
pub fn build_timeline(inputs: &TimelineInputs, cfg: &EngineConfig) -> VreelResult<Timeline> {
    cfg.validate()?;
    if !inputs.audio_duration_sec.is_finite() || inputs.audio_duration_sec <= 0.0 {
        return Err(VreelError::validation(
            "audio_duration_sec must be finite and > 0",
        ));
    }
    if let Some(audio) = &inputs.audio {
        audio.validate()?;
        if audio.is_visual() {
            return Err(VreelError::validation("inputs.audio must be an audio asset"));
        }
    }

    let duration = inputs.audio_duration_sec;
    let visual_track = build_visual_track(&inputs.visuals, duration)?;
    let subtitle_clips = build_subtitle_clips(&inputs.subtitles, duration, cfg)?;
    let main = compose_main(
        visual_track,
        subtitle_clips,
        &inputs.logo,
        inputs.audio.clone(),
        duration,
        cfg,
    )?;
    let outro = build_outro(&inputs.logo, cfg)?;
    let timeline = assemble_timeline(vec![main, outro])?;

    info!(
        total_duration_sec = timeline.total_duration_sec,
        entries = timeline.entries.len(),
        "timeline assembled"
    );
    Ok(timeline)
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/build.rs"]
mod tests;
