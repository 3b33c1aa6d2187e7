use crate::{
    composition::model::TextStyle,
    foundation::core::{Anchor, Resolution, Rgba8},
    foundation::error::{VreelError, VreelResult},
};

/// Engine configuration with documented defaults.
///
/// Every field that used to be an ad-hoc keyword in the legacy pipeline is an
/// explicit, validated value here.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Character budget per subtitle display line.
    pub max_line_chars: usize,
    /// Output frame dimensions.
    pub target_resolution: Resolution,
    /// Subtitle block width as a fraction of the composition width.
    pub subtitle_width_frac: f64,
    /// Text style shared by all subtitle clips.
    pub subtitle_style: TextStyle,
    /// Color of non-active words in a subtitle line.
    pub subtitle_neutral: Rgba8,
    /// Color of the currently spoken word.
    pub subtitle_accent: Rgba8,
    /// Watermark opacity.
    pub watermark_opacity: f64,
    /// Watermark width as a fraction of the composition width.
    pub watermark_scale: f64,
    /// Watermark corner anchor.
    pub watermark_anchor: Anchor,
    /// Watermark inset from its anchor corner in pixels.
    pub watermark_margin_px: f64,
    /// Outro duration in seconds.
    pub outro_duration_sec: f64,
    /// Outro logo end scale relative to its starting size.
    pub outro_zoom_factor: f64,
    /// Outro logo starting width as a fraction of the composition width.
    pub outro_logo_width_frac: f64,
    /// Outro background fill color.
    pub outro_background: Rgba8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_line_chars: 30,
            target_resolution: Resolution {
                width: 1080,
                height: 1920,
            },
            subtitle_width_frac: 0.9,
            subtitle_style: TextStyle::default(),
            subtitle_neutral: Rgba8::WHITE,
            subtitle_accent: Rgba8::opaque(255, 214, 0),
            watermark_opacity: 0.35,
            watermark_scale: 0.1,
            watermark_anchor: Anchor::TopLeft,
            watermark_margin_px: 20.0,
            outro_duration_sec: 1.5,
            outro_zoom_factor: 1.2,
            outro_logo_width_frac: 0.3,
            outro_background: Rgba8::BLACK,
        }
    }
}

impl EngineConfig {
    /// Validate configuration invariants.
    pub fn validate(&self) -> VreelResult<()> {
        if self.max_line_chars == 0 {
            return Err(VreelError::validation("max_line_chars must be > 0"));
        }
        if self.target_resolution.width == 0 || self.target_resolution.height == 0 {
            return Err(VreelError::validation(
                "target_resolution width/height must be > 0",
            ));
        }
        for (name, value) in [
            ("subtitle_width_frac", self.subtitle_width_frac),
            ("watermark_scale", self.watermark_scale),
            ("outro_logo_width_frac", self.outro_logo_width_frac),
        ] {
            if !value.is_finite() || value <= 0.0 || value > 1.0 {
                return Err(VreelError::validation(format!(
                    "{name} must be in (0, 1]"
                )));
            }
        }
        if !self.watermark_opacity.is_finite()
            || !(0.0..=1.0).contains(&self.watermark_opacity)
        {
            return Err(VreelError::validation(
                "watermark_opacity must be in [0, 1]",
            ));
        }
        if !self.watermark_margin_px.is_finite() || self.watermark_margin_px < 0.0 {
            return Err(VreelError::validation(
                "watermark_margin_px must be finite and >= 0",
            ));
        }
        if !self.outro_duration_sec.is_finite() || self.outro_duration_sec <= 0.0 {
            return Err(VreelError::validation(
                "outro_duration_sec must be finite and > 0",
            ));
        }
        if !self.outro_zoom_factor.is_finite() || self.outro_zoom_factor < 1.0 {
            return Err(VreelError::validation("outro_zoom_factor must be >= 1.0"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/config.rs"]
mod tests;
