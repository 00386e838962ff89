//! Progression and sheet-source parsing
//!
//! The progression notation is deliberately tiny: bars are separated by `|`,
//! and a bar holds either one chord or two chords separated by `-`:
//!
//! ```text
//! Cmaj7|Am7-D7|Gmaj7
//! ```
//!
//! A sheet source may additionally carry YAML frontmatter between `---`
//! markers for tempo, voicing, and rhythm pattern, with sensible defaults for
//! anything omitted:
//!
//! ```text
//! ---
//! tempo: 120
//! voicing: close
//! rhythm: "1"
//! ---
//! Cmaj7|Am7-D7|Gmaj7
//! ```

use serde::Deserialize;

use crate::error::ChordGenError;

/// One measure of harmony: one chord held for the bar, or two chords
/// splitting it. The slot-count invariant lives in the type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bar {
    One(String),
    Two(String, String),
}

/// An ordered, non-empty sequence of bars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progression {
    pub bars: Vec<Bar>,
}

/// Parse raw progression text into bars and chord slots.
///
/// Splits on `|` into bars and on `-` into slots. Empty input is
/// [`ChordGenError::EmptyProgression`]; a bar with 0 or more than 2 slots is
/// [`ChordGenError::MalformedBar`]. Chord tokens are not resolved here - that
/// is the sequencer's job, so a typo aborts with the bar already structured.
pub fn parse_progression(text: &str) -> Result<Progression, ChordGenError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ChordGenError::EmptyProgression);
    }

    let mut bars = Vec::new();
    for (i, raw_bar) in text.split('|').enumerate() {
        if raw_bar.trim().is_empty() {
            return Err(ChordGenError::MalformedBar {
                bar: i + 1,
                slots: 0,
            });
        }
        let slots: Vec<&str> = raw_bar.split('-').map(str::trim).collect();
        match slots.as_slice() {
            [one] => bars.push(Bar::One(one.to_string())),
            [first, second] => bars.push(Bar::Two(first.to_string(), second.to_string())),
            _ => {
                return Err(ChordGenError::MalformedBar {
                    bar: i + 1,
                    slots: slots.len(),
                })
            }
        }
    }

    Ok(Progression { bars })
}

/// Validate a tempo string as a whole number of BPM in [40, 240].
pub fn parse_tempo(s: &str) -> Result<u32, ChordGenError> {
    let trimmed = s.trim();
    let bpm: u32 = trimmed
        .parse()
        .map_err(|_| ChordGenError::InvalidTempo(trimmed.to_string()))?;
    if !(40..=240).contains(&bpm) {
        return Err(ChordGenError::InvalidTempo(trimmed.to_string()));
    }
    Ok(bpm)
}

/// Raw frontmatter for YAML deserialization.
///
/// `tempo` and `rhythm` accept both bare scalars (`tempo: 120`) and quoted
/// strings (`tempo: "120"`), so they come in as YAML values and are
/// stringified before validation.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawSheetMetadata {
    tempo: Option<serde_yaml::Value>,
    voicing: Option<String>,
    rhythm: Option<serde_yaml::Value>,
}

/// Resolved sheet metadata with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetMetadata {
    pub tempo: u32,
    pub voicing: String,
    pub rhythm: String,
}

impl Default for SheetMetadata {
    fn default() -> Self {
        SheetMetadata {
            tempo: 120,
            voicing: "close".to_string(),
            rhythm: "1".to_string(),
        }
    }
}

/// A parsed sheet source: metadata plus the raw progression text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    pub metadata: SheetMetadata,
    pub progression: String,
}

/// Split a source into its frontmatter block (if any) and the body.
fn extract_frontmatter(source: &str) -> (Option<String>, String) {
    let lines: Vec<&str> = source.lines().collect();

    let mut open = 0;
    while open < lines.len() && lines[open].trim().is_empty() {
        open += 1;
    }
    // First non-empty line must be the opening marker
    if open >= lines.len() || lines[open].trim() != "---" {
        return (None, source.to_string());
    }

    for close in open + 1..lines.len() {
        if lines[close].trim() == "---" {
            let frontmatter = lines[open + 1..close].join("\n");
            let body = lines[close + 1..].join("\n");
            return (Some(frontmatter), body);
        }
    }

    // Unterminated marker: treat the whole source as body
    (None, source.to_string())
}

fn yaml_scalar_to_string(value: &serde_yaml::Value, field: &str) -> Result<String, ChordGenError> {
    match value {
        serde_yaml::Value::String(s) => Ok(s.clone()),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        other => Err(ChordGenError::MetadataError(format!(
            "{} must be a scalar, got {:?}",
            field, other
        ))),
    }
}

/// Parse a sheet source: optional YAML frontmatter plus progression text.
///
/// Missing metadata keys fall back to the defaults (tempo 120, close voicing,
/// pattern "1"). The tempo is validated here so that a fractional value like
/// `60.5` fails with [`ChordGenError::InvalidTempo`] before any sequencing.
pub fn parse_sheet(source: &str) -> Result<Sheet, ChordGenError> {
    let (frontmatter, body) = extract_frontmatter(source);

    let mut metadata = SheetMetadata::default();
    if let Some(content) = frontmatter.filter(|c| !c.trim().is_empty()) {
        let raw: RawSheetMetadata = serde_yaml::from_str(&content)
            .map_err(|e| ChordGenError::MetadataError(e.to_string()))?;
        if let Some(tempo) = &raw.tempo {
            metadata.tempo = parse_tempo(&yaml_scalar_to_string(tempo, "tempo")?)?;
        }
        if let Some(voicing) = raw.voicing {
            metadata.voicing = voicing;
        }
        if let Some(rhythm) = &raw.rhythm {
            metadata.rhythm = yaml_scalar_to_string(rhythm, "rhythm")?;
        }
    }

    Ok(Sheet {
        metadata,
        progression: body.trim().to_string(),
    })
}
