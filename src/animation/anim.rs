use crate::{
    animation::ease::Ease,
    foundation::error::{VreelError, VreelResult},
};

/// Scalar animation node carried on an overlay clip property.
///
/// Time is clip-local seconds: `0.0` is the owning clip's start. Sampling
/// before the first key or after the last key clamps to the edge value, so an
/// animation shorter than its clip holds its final value.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Anim {
    /// A value that never changes over the clip.
    Constant(f64),
    /// Piecewise animation defined by explicit keyframes.
    Keyframes(Vec<Keyframe>),
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One keyframe of a scalar animation.
pub struct Keyframe {
    /// Clip-local time in seconds.
    pub at_sec: f64,
    /// Value at this keyframe.
    pub value: f64,
    /// Easing applied on the segment leaving this keyframe.
    #[serde(default)]
    pub ease: Ease,
}

impl Anim {
    /// Build a constant animation that always returns `value`.
    pub fn constant(value: f64) -> Self {
        Self::Constant(value)
    }

    /// Build a linear ramp from `(from_sec, from)` to `(to_sec, to)`.
    pub fn linear_ramp(from_sec: f64, from: f64, to_sec: f64, to: f64) -> Self {
        Self::Keyframes(vec![
            Keyframe {
                at_sec: from_sec,
                value: from,
                ease: Ease::Linear,
            },
            Keyframe {
                at_sec: to_sec,
                value: to,
                ease: Ease::Linear,
            },
        ])
    }

    /// Sample the animation at clip-local time `t_sec`.
    pub fn sample(&self, t_sec: f64) -> f64 {
        match self {
            Self::Constant(v) => *v,
            Self::Keyframes(keys) => sample_keys(keys, t_sec),
        }
    }

    /// Validate static invariants for this animation node.
    pub fn validate(&self) -> VreelResult<()> {
        match self {
            Self::Constant(v) => {
                if !v.is_finite() {
                    return Err(VreelError::validation("animation constant must be finite"));
                }
            }
            Self::Keyframes(keys) => {
                if keys.is_empty() {
                    return Err(VreelError::validation(
                        "keyframed animation must have at least one key",
                    ));
                }
                if !keys
                    .iter()
                    .all(|k| k.at_sec.is_finite() && k.value.is_finite())
                {
                    return Err(VreelError::validation("keyframe time/value must be finite"));
                }
                if !keys.windows(2).all(|w| w[0].at_sec <= w[1].at_sec) {
                    return Err(VreelError::validation("keyframes must be sorted by time"));
                }
            }
        }
        Ok(())
    }
}

fn sample_keys(keys: &[Keyframe], t_sec: f64) -> f64 {
    debug_assert!(!keys.is_empty());
    let first = keys[0];
    let last = keys[keys.len() - 1];
    if t_sec <= first.at_sec {
        return first.value;
    }
    if t_sec >= last.at_sec {
        return last.value;
    }
    for w in keys.windows(2) {
        let (a, b) = (w[0], w[1]);
        if t_sec < b.at_sec {
            let span = b.at_sec - a.at_sec;
            if span <= 0.0 {
                return b.value;
            }
            let t = a.ease.apply((t_sec - a.at_sec) / span);
            return a.value + (b.value - a.value) * t;
        }
    }
    last.value
}

#[cfg(test)]
#[path = "../../tests/unit/animation/anim.rs"]
mod tests;
