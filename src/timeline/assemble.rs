use crate::{
    composition::model::{Composition, Timeline, TimelineEntry},
    foundation::error::{VreelError, VreelResult},
};

/// Concatenate compositions into the final timeline.
///
/// A pure structural append: entry `i` starts at the sum of the durations of
/// entries `0..i`, nothing overlaps or is reordered. Any composition with a
/// non-positive duration aborts assembly with
/// [`VreelError::InvalidComposition`].
pub fn assemble_timeline(compositions: Vec<Composition>) -> VreelResult<Timeline> {
    if compositions.is_empty() {
        return Err(VreelError::empty_input("timeline needs at least one composition"));
    }

    let mut offset_sec = 0.0_f64;
    let mut entries = Vec::with_capacity(compositions.len());
    for composition in compositions {
        if !composition.duration_sec.is_finite() || composition.duration_sec <= 0.0 {
            return Err(VreelError::invalid_composition(format!(
                "composition '{}' duration must be > 0",
                composition.name
            )));
        }
        let duration = composition.duration_sec;
        entries.push(TimelineEntry {
            offset_sec,
            composition,
        });
        offset_sec += duration;
    }

    let timeline = Timeline {
        total_duration_sec: offset_sec,
        entries,
    };
    timeline.validate()?;
    Ok(timeline)
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/assemble.rs"]
mod tests;
