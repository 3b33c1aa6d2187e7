//! Vreel is a timeline composition engine for vertical short-form video.
//!
//! Given a voiceover duration, an ordered set of visual assets, a word-level
//! timed transcript and a brand logo, [`build_timeline`] produces a layered
//! [`Timeline`]: a slideshow visual track sliced evenly over the audio, one
//! word-highlight subtitle clip per spoken word, a proportional watermark,
//! and a synthesized branded outro, all with absolute timing resolved.
//!
//! # Pipeline overview
//!
//! 1. **Segment**: timed words -> display [`Line`]s under a character budget
//! 2. **Highlight**: lines -> one styled [`OverlayClip`] per word
//! 3. **Slice**: visual assets -> a track tiling the audio duration exactly
//! 4. **Compose**: visuals + watermark + subtitles -> the main [`Composition`]
//! 5. **Outro**: logo -> a fixed-duration animated closing [`Composition`]
//! 6. **Assemble**: main + outro -> the final [`Timeline`]
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: identical inputs yield structurally equal timelines.
//! - **No IO**: the engine consumes resolved asset metadata and emits an
//!   abstract timeline; retrieval, decoding and encoding are collaborators.
//! - **Immutable values**: clips, compositions and timelines are built once
//!   from fully-known inputs and never mutated afterwards.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod composition;
mod foundation;
mod pipeline;
mod subtitle;
mod timeline;

pub use animation::anim::{Anim, Keyframe};
pub use animation::ease::Ease;
pub use composition::dsl::{ClipBuilder, CompositionBuilder, TrackBuilder};
pub use composition::model::{
    Asset, ClipContent, Composition, Fit, OverlayClip, TextSpan, TextStyle, Timeline,
    TimelineEntry, Track,
};
pub use foundation::core::{
    Anchor, MIN_CLIP_DURATION_SEC, OUTPUT_FPS, Resolution, Rgba8,
};
pub use foundation::error::{VreelError, VreelResult};
pub use pipeline::build::{TimelineInputs, build_timeline};
pub use pipeline::config::EngineConfig;
pub use subtitle::highlight::{
    SubtitleSource, build_equal_split_clips, build_subtitle_clips, build_word_clips,
};
pub use subtitle::segment::{Line, TimedWord, segment_lines};
pub use timeline::assemble::assemble_timeline;
pub use timeline::compositor::{SUBTITLE_Z_BASE, WATERMARK_Z_BASE, compose_main};
pub use timeline::outro::build_outro;
pub use timeline::visual::{VISUAL_Z_BASE, build_visual_track};
