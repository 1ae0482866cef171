use crate::chord::recognizer::ChordRecognizer;
use crate::chord::types::{ChordClassification, ChordEvent, JumpProfile};
use crate::config::{clamp_chord_timeout, Config};
use crate::midi::message::{MidiError, MidiMessage};
use crate::movement::physics::{chord_event, derive_physics_by_name};

/// Owns the chord window for one game session and turns raw MIDI into
/// chord events.
#[derive(Clone, Debug)]
pub struct MidiController {
    config: Config,
    recognizer: ChordRecognizer,
    game_started: bool,
    initial_chord: Vec<u8>,
}

impl MidiController {
    /// `seed` picks the chord painted behind the title screen.
    pub fn new(config: Config, seed: u32) -> Self {
        let initial_chord = if config.initial_chords.is_empty() {
            Vec::new()
        } else {
            let idx = seed as usize % config.initial_chords.len();
            config.initial_chords[idx].clone()
        };
        let recognizer = ChordRecognizer::new(config.chord_timeout_ms, config.bass_threshold);
        MidiController {
            config,
            recognizer,
            game_started: false,
            initial_chord,
        }
    }

    /// Decode one message. Note-ons are recorded and immediately classified
    /// at `now_ms`; everything else is ignored.
    pub fn handle_message(
        &mut self,
        data: &[u8],
        now_ms: i64,
    ) -> Result<Option<ChordEvent>, MidiError> {
        match MidiMessage::decode(data)? {
            MidiMessage::NoteOn { pitch, velocity } => {
                log::debug!("note on {} (velocity {}) at {}ms", pitch, velocity, now_ms);
                Ok(self.note_on(pitch, now_ms))
            }
            MidiMessage::NoteOff { .. } | MidiMessage::Other { .. } => Ok(None),
        }
    }

    pub fn note_on(&mut self, pitch: u8, now_ms: i64) -> Option<ChordEvent> {
        if !self.game_started {
            log::info!("first note received, game started");
            self.game_started = true;
        }
        self.recognizer.record_note_on(pitch, now_ms);
        self.classify(now_ms)
            .map(|chord| chord_event(chord, &self.config.jump_power, &self.config.glow))
    }

    pub fn record_note_on(&mut self, pitch: u8, timestamp_ms: i64) {
        self.recognizer.record_note_on(pitch, timestamp_ms);
    }

    pub fn classify(&mut self, now_ms: i64) -> Option<ChordClassification> {
        self.recognizer.classify(now_ms)
    }

    /// Returns the timeout actually applied.
    pub fn set_chord_timeout(&mut self, ms: i64) -> i64 {
        let clamped = clamp_chord_timeout(ms);
        if clamped != ms {
            log::warn!("chord timeout {}ms clamped to {}ms", ms, clamped);
        }
        log::info!("chord timeout set to {}ms", clamped);
        self.recognizer.set_chord_timeout(clamped);
        self.config.chord_timeout_ms = clamped;
        clamped
    }

    pub fn chord_timeout(&self) -> i64 {
        self.recognizer.chord_timeout()
    }

    pub fn is_game_started(&self) -> bool {
        self.game_started
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Physics for a category name under this session's tables.
    pub fn derive_physics(&self, category: &str, bass_count: usize) -> JumpProfile {
        derive_physics_by_name(
            category,
            bass_count,
            &self.config.jump_power,
            &self.config.glow,
        )
    }

    pub fn initial_chord(&self) -> &[u8] {
        &self.initial_chord
    }

    /// Notes to paint in the background: the live window, or the seed chord
    /// before anything has been played.
    pub fn background_notes(&self) -> Vec<u8> {
        let active = self.recognizer.active_notes();
        if !self.game_started && active.is_empty() {
            return self.initial_chord.clone();
        }
        active
    }

    pub fn reset(&mut self) {
        self.recognizer.reset();
        self.game_started = false;
    }
}
