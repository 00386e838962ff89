//! Standard MIDI File encoding
//!
//! Serializes a tempo and an ordered note event stream into a format-0 SMF
//! byte sequence: one `MThd` header chunk and one `MTrk` track chunk. The
//! encoder is pure bytes-in-memory; file I/O belongs to callers.

use crate::error::ChordGenError;
use crate::rhythm::TICKS_PER_QUARTER;
use crate::sequencer::{EventKind, NoteEvent};

const NOTE_ON: u8 = 0x90; // channel 0
const NOTE_OFF: u8 = 0x80; // channel 0

/// Microseconds per quarter note for a BPM value, as stored in the tempo
/// meta-event.
pub fn tempo_micros(bpm: u32) -> Result<u32, ChordGenError> {
    if !(40..=240).contains(&bpm) {
        return Err(ChordGenError::InvalidTempo(bpm.to_string()));
    }
    Ok(60_000_000 / bpm)
}

/// Encode a tempo and event stream as a complete format-0 MIDI file.
pub fn encode_smf(bpm: u32, events: &[NoteEvent]) -> Result<Vec<u8>, ChordGenError> {
    let track = build_track_chunk(tempo_micros(bpm)?, events);

    let mut out = Vec::with_capacity(14 + 8 + track.len());
    // MThd: length=6, format=0, ntrks=1, division
    out.extend_from_slice(b"MThd");
    out.extend_from_slice(&6u32.to_be_bytes());
    out.extend_from_slice(&0u16.to_be_bytes());
    out.extend_from_slice(&1u16.to_be_bytes());
    out.extend_from_slice(&TICKS_PER_QUARTER.to_be_bytes());

    // MTrk: payload length, then the payload built above
    out.extend_from_slice(b"MTrk");
    out.extend_from_slice(&(track.len() as u32).to_be_bytes());
    out.extend_from_slice(&track);

    Ok(out)
}

fn build_track_chunk(tempo: u32, events: &[NoteEvent]) -> Vec<u8> {
    let mut t = Vec::new();

    // Tempo meta-event at delta 0: FF 51 03, 24-bit big-endian microseconds
    t.push(0x00);
    t.extend_from_slice(&[0xFF, 0x51, 0x03]);
    t.push((tempo >> 16) as u8);
    t.push((tempo >> 8) as u8);
    t.push(tempo as u8);

    for event in events {
        write_vlq(&mut t, event.delta);
        let status = match event.kind {
            EventKind::NoteOn => NOTE_ON,
            EventKind::NoteOff => NOTE_OFF,
        };
        t.push(status);
        t.push(event.pitch);
        t.push(event.velocity);
    }

    // End-of-track meta-event
    t.extend_from_slice(&[0x00, 0xFF, 0x2F, 0x00]);

    t
}

/// Write a MIDI variable-length quantity: 7 bits per byte, big-endian groups,
/// continuation bit set on all but the last byte.
fn write_vlq(buf: &mut Vec<u8>, mut value: u32) {
    let mut bytes = [0u8; 4];
    let mut i = 3;
    bytes[i] = (value & 0x7F) as u8;
    value >>= 7;
    while value > 0 {
        i -= 1;
        bytes[i] = ((value & 0x7F) | 0x80) as u8;
        value >>= 7;
    }
    buf.extend_from_slice(&bytes[i..]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vlq(value: u32) -> Vec<u8> {
        let mut buf = Vec::new();
        write_vlq(&mut buf, value);
        buf
    }

    #[test]
    fn test_vlq_encoding() {
        assert_eq!(vlq(0), vec![0x00]);
        assert_eq!(vlq(0x40), vec![0x40]);
        assert_eq!(vlq(0x7F), vec![0x7F]);
        assert_eq!(vlq(0x80), vec![0x81, 0x00]);
        assert_eq!(vlq(480), vec![0x83, 0x60]);
        assert_eq!(vlq(960), vec![0x87, 0x40]);
        assert_eq!(vlq(0x3FFF), vec![0xFF, 0x7F]);
        assert_eq!(vlq(0x4000), vec![0x81, 0x80, 0x00]);
    }

    #[test]
    fn test_tempo_micros() {
        assert_eq!(tempo_micros(120).unwrap(), 500_000);
        assert_eq!(tempo_micros(60).unwrap(), 1_000_000);
        assert_eq!(tempo_micros(240).unwrap(), 250_000);
        assert!(matches!(
            tempo_micros(39),
            Err(ChordGenError::InvalidTempo(_))
        ));
        assert!(matches!(
            tempo_micros(241),
            Err(ChordGenError::InvalidTempo(_))
        ));
    }

    #[test]
    fn test_header_chunk_layout() {
        let bytes = encode_smf(120, &[]).unwrap();
        assert_eq!(&bytes[0..4], b"MThd");
        assert_eq!(&bytes[4..8], &6u32.to_be_bytes());
        assert_eq!(&bytes[8..10], &0u16.to_be_bytes()); // format 0
        assert_eq!(&bytes[10..12], &1u16.to_be_bytes()); // one track
        assert_eq!(&bytes[12..14], &TICKS_PER_QUARTER.to_be_bytes());
        assert_eq!(&bytes[14..18], b"MTrk");
    }

    #[test]
    fn test_empty_stream_track() {
        // Tempo meta (7 bytes) + end-of-track (4 bytes)
        let bytes = encode_smf(120, &[]).unwrap();
        let track_len = u32::from_be_bytes([bytes[18], bytes[19], bytes[20], bytes[21]]);
        assert_eq!(track_len, 11);
        assert_eq!(bytes.len(), 14 + 8 + 11);
        // 120 BPM = 500000 us/quarter = 0x07 0xA1 0x20
        assert_eq!(&bytes[22..29], &[0x00, 0xFF, 0x51, 0x03, 0x07, 0xA1, 0x20]);
        assert_eq!(&bytes[29..33], &[0x00, 0xFF, 0x2F, 0x00]);
    }

    #[test]
    fn test_note_event_encoding() {
        let events = [
            NoteEvent {
                kind: EventKind::NoteOn,
                pitch: 48,
                velocity: 64,
                delta: 0,
            },
            NoteEvent {
                kind: EventKind::NoteOff,
                pitch: 48,
                velocity: 64,
                delta: 480,
            },
        ];
        let bytes = encode_smf(120, &events).unwrap();
        let after_tempo = &bytes[29..];
        assert_eq!(&after_tempo[0..4], &[0x00, 0x90, 48, 64]);
        assert_eq!(&after_tempo[4..9], &[0x83, 0x60, 0x80, 48, 64]);
    }

    #[test]
    fn test_track_length_bookkeeping() {
        let events = [NoteEvent {
            kind: EventKind::NoteOn,
            pitch: 60,
            velocity: 64,
            delta: 0,
        }];
        let bytes = encode_smf(100, &events).unwrap();
        let track_len =
            u32::from_be_bytes([bytes[18], bytes[19], bytes[20], bytes[21]]) as usize;
        assert_eq!(bytes.len(), 14 + 8 + track_len);
    }
}
