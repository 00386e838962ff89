//! Chord symbol resolution
//!
//! Parses chord tokens (Cmaj7, Bbm7b5, G7, etc.) into a root pitch and a
//! harmonic quality, and voices the result as a four-note MIDI pitch set.
//!
//! Chords are rooted in the C3 octave (MIDI 48-59) for piano accompaniment.

use crate::error::ChordGenError;

/// Note-name spellings mapped to MIDI pitch numbers in the C3 octave.
///
/// Two-character spellings come first so that prefix matching never lets a
/// bare note name shadow its sharp or flat ("C#maj7" must resolve to root 49,
/// not to root 48 with a "#maj7" suffix).
const NOTE_TABLE: &[(&str, u8)] = &[
    ("C#", 49),
    ("Db", 49),
    ("D#", 51),
    ("Eb", 51),
    ("F#", 54),
    ("Gb", 54),
    ("G#", 56),
    ("Ab", 56),
    ("A#", 58),
    ("Bb", 58),
    ("C", 48),
    ("D", 50),
    ("E", 52),
    ("F", 53),
    ("G", 55),
    ("A", 57),
    ("B", 59),
];

/// Harmonic quality of a chord, always voiced as four chord tones
/// (root, third, fifth, seventh).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quality {
    Major7,
    Minor7,
    Dominant7,
    HalfDiminished7,
    Diminished7,
}

impl Quality {
    /// Parse a quality suffix (the part of a chord token after the note name).
    ///
    /// A bare note name ("C", "Am") is sketched as seventh-chord harmony:
    /// major chords get a major 7th, minor chords a minor 7th.
    pub fn from_suffix(suffix: &str) -> Option<Quality> {
        match suffix {
            "" | "maj" | "M" | "maj7" | "M7" => Some(Quality::Major7),
            "m" | "min" | "-" | "m7" | "min7" | "-7" => Some(Quality::Minor7),
            "7" => Some(Quality::Dominant7),
            "m7b5" | "min7b5" => Some(Quality::HalfDiminished7),
            "dim" | "dim7" | "o7" => Some(Quality::Diminished7),
            _ => None,
        }
    }

    /// Semitone offsets from the root for the four chord tones.
    pub fn intervals(self) -> [u8; 4] {
        match self {
            Quality::Major7 => [0, 4, 7, 11],          // maj 3rd, perf 5th, maj 7th
            Quality::Minor7 => [0, 3, 7, 10],          // min 3rd, perf 5th, min 7th
            Quality::Dominant7 => [0, 4, 7, 10],       // maj 3rd, perf 5th, min 7th
            Quality::HalfDiminished7 => [0, 3, 6, 10], // min 3rd, dim 5th, min 7th
            Quality::Diminished7 => [0, 3, 6, 9],      // min 3rd, dim 5th, dim 7th
        }
    }
}

/// How a chord's four tones are spread into a pitch set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Voicing {
    /// Chord tones stacked as resolved (root position).
    Close,
    /// Drop-2: the second-highest tone (the fifth) dropped one octave.
    Open,
}

impl Voicing {
    pub fn from_name(name: &str) -> Result<Voicing, ChordGenError> {
        match name {
            "" => Err(ChordGenError::EmptyVoicing),
            "close" => Ok(Voicing::Close),
            "open" => Ok(Voicing::Open),
            other => Err(ChordGenError::InvalidVoicing(other.to_string())),
        }
    }
}

/// A resolved chord token: root pitch in the C3 octave plus harmonic quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chord {
    pub root: u8,
    pub quality: Quality,
}

impl Chord {
    /// Voice the chord as four MIDI pitches.
    ///
    /// Close voicing stacks the quality's intervals on the root; open voicing
    /// drops the second-highest tone by an octave (drop-2).
    pub fn pitches(&self, voicing: Voicing) -> [u8; 4] {
        let intervals = self.quality.intervals();
        let mut pitches = intervals.map(|i| self.root + i);
        if voicing == Voicing::Open {
            pitches[2] -= 12;
        }
        pitches
    }
}

/// Parse a chord token into its root pitch and quality.
///
/// The longest note-name spelling that prefixes the token wins; the remainder
/// must name a known quality. Anything else is a [`ChordGenError::InvalidChord`].
///
/// # Example
/// ```rust
/// use chordgen::{parse_chord, Quality};
///
/// let chord = parse_chord("Bbm7b5")?;
/// assert_eq!(chord.root, 58);
/// assert_eq!(chord.quality, Quality::HalfDiminished7);
/// # Ok::<(), chordgen::ChordGenError>(())
/// ```
pub fn parse_chord(token: &str) -> Result<Chord, ChordGenError> {
    for &(spelling, root) in NOTE_TABLE {
        if let Some(suffix) = token.strip_prefix(spelling) {
            if let Some(quality) = Quality::from_suffix(suffix) {
                return Ok(Chord { root, quality });
            }
        }
    }
    Err(ChordGenError::InvalidChord {
        token: token.to_string(),
    })
}
