//! Rhythm templates
//!
//! A rhythm template is an ordered list of tick durations subdividing one
//! 4/4 bar. Exactly two templates exist, selected by a pattern identifier.

use crate::error::ChordGenError;

/// Ticks per quarter note in the emitted MIDI file.
pub const TICKS_PER_QUARTER: u16 = 480;

/// Total ticks in one 4/4 bar; every template must sum to this.
pub const BAR_TICKS: u32 = 4 * TICKS_PER_QUARTER as u32;

/// Pattern "1": quarter, two eighths, quarter - a 4-beat comping feel.
const PATTERN_1: &[u32] = &[480, 240, 240, 480];

/// Pattern "2": half, two quarters - a coarser 3-hit feel.
const PATTERN_2: &[u32] = &[960, 480, 480];

/// Select the rhythm template for a pattern identifier.
///
/// Identifiers outside the fixed enumeration ("1" and "2") are rejected with
/// [`ChordGenError::InvalidRhythmPattern`].
pub fn rhythm_template(pattern: &str) -> Result<&'static [u32], ChordGenError> {
    match pattern {
        "1" => Ok(PATTERN_1),
        "2" => Ok(PATTERN_2),
        other => Err(ChordGenError::InvalidRhythmPattern(other.to_string())),
    }
}
