use crate::{
    animation::anim::Anim,
    foundation::core::{Anchor, Resolution, Rgba8},
    foundation::error::{VreelError, VreelResult},
};

/// Tolerance for floating-point range checks on clip timing.
const TIME_EPS: f64 = 1e-9;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Resolved asset metadata handed to the engine by the asset resolver.
///
/// The engine trusts the durations and resolutions it is handed; decoding and
/// retrieval are collaborator concerns.
pub enum Asset {
    /// Still image with native resolution.
    Image {
        /// Local path or handle understood by the renderer.
        source: String,
        /// Native width in pixels.
        width: u32,
        /// Native height in pixels.
        height: u32,
    },
    /// Video file with native resolution and duration.
    Video {
        /// Local path or handle understood by the renderer.
        source: String,
        /// Native width in pixels.
        width: u32,
        /// Native height in pixels.
        height: u32,
        /// Source duration in seconds.
        duration_sec: f64,
    },
    /// Audio file with duration.
    Audio {
        /// Local path or handle understood by the renderer.
        source: String,
        /// Source duration in seconds.
        duration_sec: f64,
    },
}

impl Asset {
    /// Path or handle of the underlying media.
    pub fn source(&self) -> &str {
        match self {
            Self::Image { source, .. } | Self::Video { source, .. } | Self::Audio { source, .. } => {
                source
            }
        }
    }

    /// True for image-like and video assets.
    pub fn is_visual(&self) -> bool {
        !matches!(self, Self::Audio { .. })
    }

    /// Native resolution for visual assets.
    pub fn resolution(&self) -> Option<Resolution> {
        match *self {
            Self::Image { width, height, .. } | Self::Video { width, height, .. } => {
                Some(Resolution { width, height })
            }
            Self::Audio { .. } => None,
        }
    }

    /// Validate asset metadata invariants.
    pub fn validate(&self) -> VreelResult<()> {
        if self.source().trim().is_empty() {
            return Err(VreelError::validation("asset source must be non-empty"));
        }
        if let Some(res) = self.resolution()
            && (res.width == 0 || res.height == 0)
        {
            return Err(VreelError::validation(
                "visual asset native resolution must be > 0",
            ));
        }
        if let Self::Video { duration_sec, .. } | Self::Audio { duration_sec, .. } = self
            && (!duration_sec.is_finite() || *duration_sec <= 0.0)
        {
            return Err(VreelError::validation(
                "asset duration_sec must be finite and > 0",
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// How an image is scaled into its target box.
pub enum Fit {
    /// Fill the box, preserving aspect ratio by cropping excess.
    #[default]
    Cover,
    /// Fit entirely inside the box, preserving aspect ratio.
    Contain,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One color band of a styled subtitle line.
pub struct TextSpan {
    /// Span text (no leading/trailing spaces; spans are space-joined). May
    /// contain `\n` for pre-wrapped multi-row blocks.
    pub text: String,
    /// Fill color of this span.
    pub color: Rgba8,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Rendering style shared by all spans of a subtitle clip.
pub struct TextStyle {
    /// Font size in pixels.
    pub font_size_px: f32,
    /// Outline color.
    pub stroke_color: Rgba8,
    /// Outline width in pixels.
    pub stroke_width_px: f32,
    /// Background band color behind the text.
    pub background: Rgba8,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size_px: 70.0,
            stroke_color: Rgba8::BLACK,
            stroke_width_px: 2.0,
            background: Rgba8 {
                r: 0,
                g: 0,
                b: 0,
                a: 128,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Visual payload of an overlay clip, independent of any rendering backend.
pub enum ClipContent {
    /// An image or video frame source.
    Image {
        /// Source asset metadata.
        asset: Asset,
        /// Scaling policy into the target box.
        fit: Fit,
        /// Target width as a fraction of the composition width; `None` fills
        /// the whole frame.
        width_frac: Option<f64>,
    },
    /// A styled text block (subtitle line), height auto-fit to content.
    StyledText {
        /// Ordered color bands, joined with single spaces.
        spans: Vec<TextSpan>,
        /// Shared text style.
        style: TextStyle,
        /// Target width as a fraction of the composition width.
        width_frac: f64,
    },
    /// An opaque or translucent solid color fill spanning the frame.
    Fill {
        /// Fill color.
        color: Rgba8,
    },
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One timed visual element on a track.
///
/// Clips are immutable once built; timing, opacity and scale are fixed at
/// construction (see [`crate::ClipBuilder`]).
pub struct OverlayClip {
    /// Clip identifier, stable within its composition.
    pub id: String,
    /// Visual payload.
    pub content: ClipContent,
    /// Start time in composition-local seconds.
    pub start_sec: f64,
    /// Duration in seconds, always > 0.
    pub duration_sec: f64,
    /// Placement anchor within the frame.
    pub anchor: Anchor,
    /// Inset from the anchor position in pixels (corner anchors only).
    #[serde(default)]
    pub inset_px: f64,
    /// Opacity over clip-local time, sampled in `[0, 1]`.
    pub opacity: Anim,
    /// Uniform scale multiplier over clip-local time.
    pub scale: Anim,
    /// Z-order offset added on top of the owning track's base.
    pub z_offset: i32,
}

impl OverlayClip {
    /// Exclusive end time in composition-local seconds.
    pub fn end_sec(&self) -> f64 {
        self.start_sec + self.duration_sec
    }

    /// Validate clip invariants.
    pub fn validate(&self) -> VreelResult<()> {
        if self.id.trim().is_empty() {
            return Err(VreelError::validation("clip id must be non-empty"));
        }
        if !self.start_sec.is_finite() || self.start_sec < 0.0 {
            return Err(VreelError::validation(format!(
                "clip '{}' start_sec must be finite and >= 0",
                self.id
            )));
        }
        if !self.duration_sec.is_finite() || self.duration_sec <= 0.0 {
            return Err(VreelError::invalid_composition(format!(
                "clip '{}' duration_sec must be finite and > 0",
                self.id
            )));
        }
        if !self.inset_px.is_finite() || self.inset_px < 0.0 {
            return Err(VreelError::validation(format!(
                "clip '{}' inset_px must be finite and >= 0",
                self.id
            )));
        }
        self.opacity.validate()?;
        self.scale.validate()?;
        match &self.content {
            ClipContent::Image {
                asset, width_frac, ..
            } => {
                asset.validate()?;
                if !asset.is_visual() {
                    return Err(VreelError::validation(format!(
                        "clip '{}' image content references a non-visual asset",
                        self.id
                    )));
                }
                if let Some(w) = width_frac
                    && (!w.is_finite() || *w <= 0.0 || *w > 1.0)
                {
                    return Err(VreelError::validation(format!(
                        "clip '{}' width_frac must be in (0, 1]",
                        self.id
                    )));
                }
            }
            ClipContent::StyledText {
                spans, width_frac, ..
            } => {
                if spans.is_empty() {
                    return Err(VreelError::validation(format!(
                        "clip '{}' styled text must have at least one span",
                        self.id
                    )));
                }
                if !width_frac.is_finite() || *width_frac <= 0.0 || *width_frac > 1.0 {
                    return Err(VreelError::validation(format!(
                        "clip '{}' width_frac must be in (0, 1]",
                        self.id
                    )));
                }
            }
            ClipContent::Fill { .. } => {}
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A z-ordered, time-ordered collection of clips sharing one visual layer.
pub struct Track {
    /// Track name for authoring/debugging.
    pub name: String,
    /// Base z-order applied to all clips in this track.
    pub z_base: i32,
    /// Clips ordered by start time.
    pub clips: Vec<OverlayClip>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A self-contained group of tracks with its own duration and time base.
pub struct Composition {
    /// Composition name for authoring/debugging.
    pub name: String,
    /// Output frame dimensions.
    pub resolution: Resolution,
    /// Total duration in seconds.
    pub duration_sec: f64,
    /// Ordered tracks, back to front by `z_base`.
    pub tracks: Vec<Track>,
    /// Optional soundtrack attached to this composition.
    pub audio: Option<Asset>,
}

impl Composition {
    /// Validate composition invariants and everything nested inside.
    pub fn validate(&self) -> VreelResult<()> {
        if self.name.trim().is_empty() {
            return Err(VreelError::validation("composition name must be non-empty"));
        }
        if self.resolution.width == 0 || self.resolution.height == 0 {
            return Err(VreelError::validation(
                "composition resolution width/height must be > 0",
            ));
        }
        if !self.duration_sec.is_finite() || self.duration_sec <= 0.0 {
            return Err(VreelError::invalid_composition(format!(
                "composition '{}' duration_sec must be finite and > 0",
                self.name
            )));
        }
        if let Some(audio) = &self.audio {
            audio.validate()?;
            if audio.is_visual() {
                return Err(VreelError::validation(format!(
                    "composition '{}' audio must be an audio asset",
                    self.name
                )));
            }
        }
        for track in &self.tracks {
            if track.name.trim().is_empty() {
                return Err(VreelError::validation("track name must be non-empty"));
            }
            if !track
                .clips
                .windows(2)
                .all(|w| w[0].start_sec <= w[1].start_sec)
            {
                return Err(VreelError::validation(format!(
                    "track '{}' clips must be ordered by start time",
                    track.name
                )));
            }
            for clip in &track.clips {
                clip.validate()?;
                if clip.end_sec() > self.duration_sec + TIME_EPS {
                    return Err(VreelError::validation(format!(
                        "clip '{}' range exceeds composition '{}' duration",
                        clip.id, self.name
                    )));
                }
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One composition placed at an absolute offset on the timeline.
pub struct TimelineEntry {
    /// Absolute start offset in seconds from timeline zero.
    pub offset_sec: f64,
    /// The placed composition.
    pub composition: Composition,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// The final, absolute-time-resolved sequence of compositions.
///
/// Built once by [`crate::build_timeline`] and handed to the renderer; never
/// mutated afterwards. Entry offsets are the running sum of predecessor
/// durations.
pub struct Timeline {
    /// Sum of all entry durations in seconds.
    pub total_duration_sec: f64,
    /// Ordered compositions with absolute offsets.
    pub entries: Vec<TimelineEntry>,
}

impl Timeline {
    /// Validate offsets, durations and all nested compositions.
    pub fn validate(&self) -> VreelResult<()> {
        let mut expected_offset = 0.0_f64;
        for entry in &self.entries {
            if (entry.offset_sec - expected_offset).abs() > TIME_EPS {
                return Err(VreelError::validation(format!(
                    "entry '{}' offset does not equal the sum of predecessor durations",
                    entry.composition.name
                )));
            }
            entry.composition.validate()?;
            expected_offset += entry.composition.duration_sec;
        }
        if (self.total_duration_sec - expected_offset).abs() > TIME_EPS {
            return Err(VreelError::validation(
                "timeline total duration does not equal the sum of entry durations",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
