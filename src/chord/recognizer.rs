use crate::chord::classifier::{categorize, hue_for, note_name};
use crate::chord::types::{ChordClassification, NoteEvent};

/// Buffers note-ons and groups whatever is still live into a chord.
///
/// Each event expires `chord_timeout_ms` after its own arrival, so a chord
/// is whatever was pressed within one timeout of the moment `classify` runs.
#[derive(Clone, Debug)]
pub struct ChordRecognizer {
    window: Vec<NoteEvent>,
    chord_timeout_ms: i64,
    bass_threshold: u8,
}

impl ChordRecognizer {
    pub fn new(chord_timeout_ms: i64, bass_threshold: u8) -> Self {
        ChordRecognizer {
            window: Vec::new(),
            chord_timeout_ms,
            bass_threshold,
        }
    }

    /// Pitches are taken as-is, including values above 127.
    pub fn record_note_on(&mut self, pitch: u8, timestamp_ms: i64) {
        self.window.push(NoteEvent {
            pitch,
            timestamp_ms,
        });
    }

    /// Drop expired events, then classify the remaining distinct pitches.
    pub fn classify(&mut self, now_ms: i64) -> Option<ChordClassification> {
        self.expire(now_ms);

        let mut notes: Vec<u8> = self.window.iter().map(|e| e.pitch).collect();
        notes.sort_unstable();
        notes.dedup();

        let lowest = *notes.first()?;

        let (bass_notes, treble_notes): (Vec<u8>, Vec<u8>) =
            notes.iter().partition(|&&p| p < self.bass_threshold);

        let category = categorize(&notes);
        log::debug!(
            "classified {:?} as {} (bass {:?}, treble {:?})",
            notes,
            category,
            bass_notes,
            treble_notes
        );

        Some(ChordClassification {
            note_names: notes.iter().map(|&p| note_name(p).to_string()).collect(),
            note_count: notes.len(),
            hue: hue_for(lowest),
            notes,
            treble_notes,
            bass_notes,
            category,
        })
    }

    fn expire(&mut self, now_ms: i64) {
        let timeout = self.chord_timeout_ms;
        self.window.retain(|e| now_ms - e.timestamp_ms < timeout);
    }

    pub fn set_chord_timeout(&mut self, ms: i64) {
        self.chord_timeout_ms = ms;
    }

    pub fn chord_timeout(&self) -> i64 {
        self.chord_timeout_ms
    }

    /// Buffered pitches in arrival order, duplicates included.
    /// Reflects the window as of the last `classify`.
    pub fn active_notes(&self) -> Vec<u8> {
        self.window.iter().map(|e| e.pitch).collect()
    }

    pub fn reset(&mut self) {
        self.window.clear();
    }
}
