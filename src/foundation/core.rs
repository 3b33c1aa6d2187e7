use crate::foundation::error::{VreelError, VreelResult};

/// Output frame rate the renderer encodes at.
pub const OUTPUT_FPS: f64 = 24.0;

/// Minimum clip duration in seconds: one frame interval at [`OUTPUT_FPS`].
///
/// Transcript entries with `end <= start` are floored to this duration rather
/// than dropped, so a defective word timing never deletes a subtitle.
pub const MIN_CLIP_DURATION_SEC: f64 = 1.0 / OUTPUT_FPS;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Output frame dimensions in pixels.
pub struct Resolution {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
}

impl Resolution {
    /// Create a resolution, rejecting zero dimensions.
    pub fn new(width: u32, height: u32) -> VreelResult<Self> {
        if width == 0 || height == 0 {
            return Err(VreelError::validation("resolution width/height must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Width / height ratio.
    pub fn aspect(self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Placement anchor of a clip within its composition frame.
pub enum Anchor {
    /// Centered on both axes.
    #[default]
    Center,
    /// Horizontally centered, pinned to the bottom edge.
    BottomCenter,
    /// Horizontally centered, pinned to the top edge.
    TopCenter,
    /// Top-left corner.
    TopLeft,
    /// Top-right corner.
    TopRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Bottom-right corner.
    BottomRight,
}

/// Straight-alpha RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = opaque).
    pub a: u8,
}

impl Rgba8 {
    /// Opaque color from RGB channels.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Opaque white.
    pub const WHITE: Self = Self::opaque(255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::opaque(0, 0, 0);
}
