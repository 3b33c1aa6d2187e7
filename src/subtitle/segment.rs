use crate::foundation::error::{VreelError, VreelResult};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One transcript word with its spoken time range in seconds.
pub struct TimedWord {
    /// Word text.
    pub text: String,
    /// Spoken start time in seconds.
    pub start_sec: f64,
    /// Spoken end time in seconds.
    pub end_sec: f64,
}

impl TimedWord {
    /// Create a timed word, rejecting non-finite or negative times.
    ///
    /// `end_sec <= start_sec` is accepted here; the clip builder floors such
    /// entries to a minimum duration instead of dropping them.
    pub fn new(text: impl Into<String>, start_sec: f64, end_sec: f64) -> VreelResult<Self> {
        let word = Self {
            text: text.into(),
            start_sec,
            end_sec,
        };
        word.validate()?;
        Ok(word)
    }

    /// Validate word invariants.
    ///
    /// Words built from deserialized payloads or struct literals bypass
    /// [`TimedWord::new`]; the clip builder re-checks them here.
    pub fn validate(&self) -> VreelResult<()> {
        if self.text.trim().is_empty() {
            return Err(VreelError::validation("timed word text must be non-empty"));
        }
        if !self.start_sec.is_finite()
            || !self.end_sec.is_finite()
            || self.start_sec < 0.0
            || self.end_sec < 0.0
        {
            return Err(VreelError::validation(
                "timed word times must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// An ordered run of timed words forming one subtitle display row.
pub struct Line {
    /// Words in spoken order.
    pub words: Vec<TimedWord>,
}

impl Line {
    /// Full line text, words joined with single spaces.
    pub fn text(&self) -> String {
        self.words
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Rendered character length including separating spaces.
    pub fn char_len(&self) -> usize {
        let word_chars: usize = self.words.iter().map(|w| w.text.chars().count()).sum();
        word_chars + self.words.len().saturating_sub(1)
    }
}

/// Group timed words into display lines under a character budget.
///
/// Greedy single pass: a word that would push the running line past `budget`
/// closes the line first, unless the line is still empty. A single word longer
/// than the budget stands alone on its own line, never split or truncated.
pub fn segment_lines(words: &[TimedWord], budget: usize) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut current = Line::default();
    let mut current_len = 0usize;

    for word in words {
        let word_len = word.text.chars().count();
        let appended_len = if current.words.is_empty() {
            word_len
        } else {
            current_len + 1 + word_len
        };
        if appended_len > budget && !current.words.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_len = word_len;
        } else {
            current_len = appended_len;
        }
        current.words.push(word.clone());
    }
    if !current.words.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
#[path = "../../tests/unit/subtitle/segment.rs"]
mod tests;
