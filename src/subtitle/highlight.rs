use tracing::warn;

use crate::{
    composition::dsl::ClipBuilder,
    composition::model::{ClipContent, OverlayClip, TextSpan},
    foundation::core::{Anchor, MIN_CLIP_DURATION_SEC},
    foundation::error::{VreelError, VreelResult},
    pipeline::config::EngineConfig,
    subtitle::segment::{Line, segment_lines},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Subtitle input variant for one request.
///
/// `WordTimed` is the primary mode. `EqualSplit` reproduces the legacy
/// untimed behavior (equal display slot per script line) and is kept only
/// until callers finish migrating; the two modes never mix within a request.
pub enum SubtitleSource {
    /// Word-level timed transcript.
    WordTimed(Vec<crate::subtitle::segment::TimedWord>),
    /// Untimed script lines, split evenly over the audio duration.
    EqualSplit(Vec<String>),
}

/// Build the ordered subtitle clips for one request.
///
/// Fails with [`VreelError::EmptyInput`] when the source holds no words or
/// lines; a subtitle-free video must be requested explicitly by the caller,
/// never produced by silent degradation.
pub fn build_subtitle_clips(
    source: &SubtitleSource,
    total_duration_sec: f64,
    cfg: &EngineConfig,
) -> VreelResult<Vec<OverlayClip>> {
    match source {
        SubtitleSource::WordTimed(words) => {
            if words.is_empty() {
                return Err(VreelError::empty_input("transcript has no words"));
            }
            for word in words {
                word.validate()?;
            }
            let lines = segment_lines(words, cfg.max_line_chars);
            build_word_clips(&lines, total_duration_sec, cfg)
        }
        SubtitleSource::EqualSplit(lines) => {
            if lines.is_empty() {
                return Err(VreelError::empty_input("script has no lines"));
            }
            build_equal_split_clips(lines, total_duration_sec, cfg)
        }
    }
}

/// Emit one clip per word: the full line with the active word in the accent
/// color and its neighbors in the neutral color.
///
/// A valid duration is always `end - start` exactly, however short. A word
/// with `end <= start` is floored to [`MIN_CLIP_DURATION_SEC`] rather than
/// dropped, and a floored clip near the end of the composition is pulled back
/// so it still fits inside `[0, total_duration_sec)`.
pub fn build_word_clips(
    lines: &[Line],
    total_duration_sec: f64,
    cfg: &EngineConfig,
) -> VreelResult<Vec<OverlayClip>> {
    let mut clips = Vec::new();
    let mut word_index = 0usize;

    for line in lines {
        for (active, word) in line.words.iter().enumerate() {
            let spans: Vec<TextSpan> = line
                .words
                .iter()
                .enumerate()
                .map(|(i, w)| TextSpan {
                    text: w.text.trim().to_string(),
                    color: if i == active {
                        cfg.subtitle_accent
                    } else {
                        cfg.subtitle_neutral
                    },
                })
                .collect();

            let (start_sec, duration_sec) =
                clamp_word_range(word.start_sec, word.end_sec, total_duration_sec, &word.text);

            let clip = ClipBuilder::new(
                format!("subtitle-{word_index}"),
                ClipContent::StyledText {
                    spans,
                    style: cfg.subtitle_style,
                    width_frac: cfg.subtitle_width_frac,
                },
                start_sec,
                duration_sec,
            )
            .anchor(Anchor::BottomCenter)
            .build()?;
            clips.push(clip);
            word_index += 1;
        }
    }
    Ok(clips)
}

fn clamp_word_range(start_sec: f64, end_sec: f64, total_duration_sec: f64, text: &str) -> (f64, f64) {
    let mut start = start_sec;
    let mut duration = end_sec - start;
    if duration <= 0.0 {
        warn!(word = text, start_sec, end_sec, "malformed word timing, flooring duration");
        duration = MIN_CLIP_DURATION_SEC;
    }
    duration = duration.min(total_duration_sec - start);
    if duration <= 0.0 {
        duration = MIN_CLIP_DURATION_SEC.min(total_duration_sec);
        start = (total_duration_sec - duration).max(0.0);
    }
    (start, duration)
}

/// Legacy equal-split mode: each script line owns a `D / line_count` slot and
/// is wrapped at the character budget into one multi-row block, shown for the
/// whole slot in the neutral color.
pub fn build_equal_split_clips(
    lines: &[String],
    total_duration_sec: f64,
    cfg: &EngineConfig,
) -> VreelResult<Vec<OverlayClip>> {
    let slot_sec = total_duration_sec / lines.len() as f64;
    if slot_sec <= 0.0 {
        return Err(VreelError::invalid_composition(
            "equal-split subtitle slot duration must be > 0",
        ));
    }

    let mut clips = Vec::new();
    for (line_index, line) in lines.iter().enumerate() {
        let rows = wrap_plain(line, cfg.max_line_chars);
        if rows.is_empty() {
            continue;
        }
        let clip = ClipBuilder::new(
            format!("subtitle-{line_index}"),
            ClipContent::StyledText {
                spans: vec![TextSpan {
                    text: rows.join("\n"),
                    color: cfg.subtitle_neutral,
                }],
                style: cfg.subtitle_style,
                width_frac: cfg.subtitle_width_frac,
            },
            line_index as f64 * slot_sec,
            slot_sec,
        )
        .anchor(Anchor::BottomCenter)
        .build()?;
        clips.push(clip);
    }
    if clips.is_empty() {
        return Err(VreelError::empty_input("script lines contain no text"));
    }
    Ok(clips)
}

fn wrap_plain(line: &str, budget: usize) -> Vec<String> {
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;
    for word in line.split_whitespace() {
        let word_len = word.chars().count();
        let appended_len = if current.is_empty() {
            word_len
        } else {
            current_len + 1 + word_len
        };
        if appended_len > budget && !current.is_empty() {
            rows.push(std::mem::take(&mut current));
            current_len = word_len;
        } else {
            current_len = appended_len;
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

#[cfg(test)]
#[path = "../../tests/unit/subtitle/highlight.rs"]
mod tests;
