use crate::{
    animation::anim::Anim,
    composition::model::{Asset, ClipContent, Composition, OverlayClip, Track},
    foundation::core::{Anchor, Resolution},
    foundation::error::{VreelError, VreelResult},
};

/// Builder for [`OverlayClip`] values.
///
/// Clips are fully specified up front; there is no post-construction mutation
/// path, so a built clip can be shared freely.
pub struct ClipBuilder {
    id: String,
    content: ClipContent,
    start_sec: f64,
    duration_sec: f64,
    anchor: Anchor,
    inset_px: f64,
    opacity: Anim,
    scale: Anim,
    z_offset: i32,
}

impl ClipBuilder {
    /// Create a clip builder with required identity, payload and timing.
    pub fn new(
        id: impl Into<String>,
        content: ClipContent,
        start_sec: f64,
        duration_sec: f64,
    ) -> Self {
        Self {
            id: id.into(),
            content,
            start_sec,
            duration_sec,
            anchor: Anchor::Center,
            inset_px: 0.0,
            opacity: Anim::constant(1.0),
            scale: Anim::constant(1.0),
            z_offset: 0,
        }
    }

    /// Set placement anchor.
    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Set inset from the anchor position in pixels.
    pub fn inset_px(mut self, inset: f64) -> Self {
        self.inset_px = inset;
        self
    }

    /// Set opacity animation.
    pub fn opacity(mut self, opacity: Anim) -> Self {
        self.opacity = opacity;
        self
    }

    /// Set uniform scale animation.
    pub fn scale(mut self, scale: Anim) -> Self {
        self.scale = scale;
        self
    }

    /// Set per-clip z-offset.
    pub fn z_offset(mut self, z: i32) -> Self {
        self.z_offset = z;
        self
    }

    /// Build and validate the final [`OverlayClip`].
    pub fn build(self) -> VreelResult<OverlayClip> {
        let clip = OverlayClip {
            id: self.id,
            content: self.content,
            start_sec: self.start_sec,
            duration_sec: self.duration_sec,
            anchor: self.anchor,
            inset_px: self.inset_px,
            opacity: self.opacity,
            scale: self.scale,
            z_offset: self.z_offset,
        };
        clip.validate()?;
        Ok(clip)
    }
}

/// Builder for [`Track`] values.
pub struct TrackBuilder {
    name: String,
    z_base: i32,
    clips: Vec<OverlayClip>,
}

impl TrackBuilder {
    /// Create a track builder with required `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            z_base: 0,
            clips: Vec::new(),
        }
    }

    /// Set base z-order for all clips in the track.
    pub fn z_base(mut self, z: i32) -> Self {
        self.z_base = z;
        self
    }

    /// Append a clip to the track.
    pub fn clip(mut self, clip: OverlayClip) -> Self {
        self.clips.push(clip);
        self
    }

    /// Append all clips in order.
    pub fn clips(mut self, clips: impl IntoIterator<Item = OverlayClip>) -> Self {
        self.clips.extend(clips);
        self
    }

    /// Build the [`Track`]; clips must already be in start order.
    pub fn build(self) -> VreelResult<Track> {
        if self.name.trim().is_empty() {
            return Err(VreelError::validation("track name must be non-empty"));
        }
        Ok(Track {
            name: self.name,
            z_base: self.z_base,
            clips: self.clips,
        })
    }
}

/// Builder for [`Composition`] values.
pub struct CompositionBuilder {
    name: String,
    resolution: Resolution,
    duration_sec: f64,
    tracks: Vec<Track>,
    audio: Option<Asset>,
}

impl CompositionBuilder {
    /// Create a builder for a new composition.
    pub fn new(name: impl Into<String>, resolution: Resolution, duration_sec: f64) -> Self {
        Self {
            name: name.into(),
            resolution,
            duration_sec,
            tracks: Vec::new(),
            audio: None,
        }
    }

    /// Attach a soundtrack asset.
    pub fn audio(mut self, asset: Asset) -> Self {
        self.audio = Some(asset);
        self
    }

    /// Append a track to the composition.
    pub fn track(mut self, track: Track) -> Self {
        self.tracks.push(track);
        self
    }

    /// Build and validate the final [`Composition`].
    pub fn build(self) -> VreelResult<Composition> {
        let comp = Composition {
            name: self.name,
            resolution: self.resolution,
            duration_sec: self.duration_sec,
            tracks: self.tracks,
            audio: self.audio,
        };
        comp.validate()?;
        Ok(comp)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/dsl.rs"]
mod tests;
