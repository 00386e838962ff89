use thiserror::Error;

/// Validation errors for the chordgen compiler.
///
/// Every variant is a synchronous, non-retryable input failure; there is no
/// I/O inside the library. The `Display` text is surfaced verbatim to users,
/// so each variant carries the offending token or bar number where one exists.
#[derive(Error, Debug)]
pub enum ChordGenError {
    /// Tempo is not a whole number of BPM or is outside [40, 240].
    #[error("Tempo must be a whole number between 40 and 240, got '{0}'")]
    InvalidTempo(String),

    #[error("Chord progression cannot be empty")]
    EmptyProgression,

    #[error("Voicing cannot be empty")]
    EmptyVoicing,

    #[error("Unknown voicing '{0}', expected 'close' or 'open'")]
    InvalidVoicing(String),

    #[error("Invalid rhythm pattern '{0}', expected '1' or '2'")]
    InvalidRhythmPattern(String),

    /// A chord token had no recognizable note spelling or quality suffix.
    #[error("Invalid chord name '{token}'")]
    InvalidChord { token: String },

    /// A bar held something other than 1 or 2 chord slots. Bar numbers are
    /// 1-indexed, matching how musicians count measures.
    #[error("Bar {bar} has {slots} chord slots, expected 1 or 2")]
    MalformedBar { bar: usize, slots: usize },

    /// YAML frontmatter in a sheet source could not be deserialized.
    #[error("Invalid metadata: {0}")]
    MetadataError(String),
}
