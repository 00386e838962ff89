pub mod chord;
pub mod error;
pub mod midi;
pub mod parser;
pub mod rhythm;
pub mod sequencer;

pub use chord::{parse_chord, Chord, Quality, Voicing};
pub use error::ChordGenError;
pub use midi::encode_smf;
pub use parser::{parse_progression, parse_sheet, parse_tempo, Bar, Progression, Sheet, SheetMetadata};
pub use rhythm::rhythm_template;
pub use sequencer::{sequence, EventKind, NoteEvent};

/// Generate a standard MIDI file from a chord progression.
/// This is the main entry point for the library.
///
/// The pipeline is linear: parse the progression, resolve each chord, sequence
/// delta-timed note events over the rhythm template, and serialize the stream
/// as format-0 SMF bytes. Any validation failure aborts the whole request; no
/// partial byte stream is ever returned.
pub fn generate(
    bpm: u32,
    progression: &str,
    voicing: &str,
    rhythm_pattern: &str,
) -> Result<Vec<u8>, ChordGenError> {
    if !(40..=240).contains(&bpm) {
        return Err(ChordGenError::InvalidTempo(bpm.to_string()));
    }
    let voicing = Voicing::from_name(voicing)?;
    let template = rhythm_template(rhythm_pattern)?;
    let progression = parse_progression(progression)?;
    let events = sequence(&progression, voicing, template)?;
    midi::encode_smf(bpm, &events)
}

/// Compile a sheet source (optional YAML frontmatter plus progression text)
/// to MIDI bytes.
pub fn compile(source: &str) -> Result<Vec<u8>, ChordGenError> {
    let sheet = parse_sheet(source)?;
    generate(
        sheet.metadata.tempo,
        &sheet.progression,
        &sheet.metadata.voicing,
        &sheet.metadata.rhythm,
    )
}
