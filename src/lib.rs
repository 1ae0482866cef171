use wasm_bindgen::prelude::*;

pub mod chord;
pub mod config;
pub mod midi;
pub mod movement;

use config::Config;
use midi::controller::MidiController;
use movement::character::{Character, Viewport};

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// One game session: the chord window plus the character it drives.
#[wasm_bindgen]
pub struct ChordTraveler {
    controller: MidiController,
    character: Character,
    viewport: Viewport,
}

impl ChordTraveler {
    fn build(config: Config, seed: u32, width: f64, height: f64) -> ChordTraveler {
        let viewport = Viewport { width, height };
        let character = Character::new(config.character.clone(), viewport);
        ChordTraveler {
            controller: MidiController::new(config, seed),
            character,
            viewport,
        }
    }
}

#[wasm_bindgen]
impl ChordTraveler {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32, width: f64, height: f64) -> ChordTraveler {
        Self::build(Config::default(), seed, width, height)
    }

    /// Start a session with page-supplied settings. Missing fields fall back
    /// to defaults.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(
        config_js: JsValue,
        seed: u32,
        width: f64,
        height: f64,
    ) -> Result<ChordTraveler, JsValue> {
        let config: Config = serde_wasm_bindgen::from_value(config_js)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        config
            .validate()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::build(config, seed, width, height))
    }

    /// Feed one Web MIDI message. Returns the chord event (and applies it to
    /// the character) for note-ons, `null` otherwise. `now_ms` defaults to
    /// `Date.now()`.
    #[wasm_bindgen(js_name = handleMidiMessage)]
    pub fn handle_midi_message(
        &mut self,
        data: &[u8],
        now_ms: Option<f64>,
    ) -> Result<JsValue, JsValue> {
        let now = now_ms.unwrap_or_else(js_sys::Date::now) as i64;
        let event = self
            .controller
            .handle_message(data, now)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        match event {
            Some(event) => {
                self.character.apply(&event);
                to_js(&event)
            }
            None => Ok(JsValue::NULL),
        }
    }

    #[wasm_bindgen(js_name = recordNoteOn)]
    pub fn record_note_on(&mut self, pitch: u8, timestamp_ms: f64) {
        self.controller.record_note_on(pitch, timestamp_ms as i64);
    }

    /// Current chord, or `null` when nothing is held within the window.
    pub fn classify(&mut self, now_ms: f64) -> Result<JsValue, JsValue> {
        match self.controller.classify(now_ms as i64) {
            Some(chord) => to_js(&chord),
            None => Ok(JsValue::NULL),
        }
    }

    /// Status line for the last chord event.
    #[wasm_bindgen(js_name = describeEvent)]
    pub fn describe_event(&self, event_js: JsValue) -> Result<String, JsValue> {
        let event: chord::types::ChordEvent = serde_wasm_bindgen::from_value(event_js)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(event.summary(self.controller.chord_timeout()))
    }

    /// Clamped to 50..=300ms; returns the value applied.
    #[wasm_bindgen(js_name = setChordTimeout)]
    pub fn set_chord_timeout(&mut self, ms: f64) -> f64 {
        self.controller.set_chord_timeout(ms as i64) as f64
    }

    /// Like the free `derivePhysics`, but using this session's jump and glow tables.
    #[wasm_bindgen(js_name = derivePhysics)]
    pub fn derive_physics(&self, category: &str, bass_count: usize) -> js_sys::Float64Array {
        profile_array(&self.controller.derive_physics(category, bass_count))
    }

    #[wasm_bindgen(js_name = chordTimeout)]
    pub fn chord_timeout(&self) -> f64 {
        self.controller.chord_timeout() as f64
    }

    #[wasm_bindgen(js_name = isGameStarted)]
    pub fn is_game_started(&self) -> bool {
        self.controller.is_game_started()
    }

    #[wasm_bindgen(js_name = backgroundNotes)]
    pub fn background_notes(&self) -> js_sys::Uint8Array {
        js_sys::Uint8Array::from(self.controller.background_notes().as_slice())
    }

    /// Advance the character one gravity tick. Returns true when it fell out
    /// of the viewport and was put back at the start.
    pub fn tick(&mut self) -> bool {
        self.character.update();
        if self.character.is_fallen(self.viewport.height) {
            self.character.reset(self.viewport);
            return true;
        }
        false
    }

    /// Terrain collision is resolved by the page; this snaps to the ground it found.
    pub fn land(&mut self, y: f64) {
        self.character.land(y);
    }

    pub fn character(&self) -> Result<JsValue, JsValue> {
        to_js(&self.character)
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport = Viewport { width, height };
    }

    pub fn reset(&mut self) {
        self.controller.reset();
        self.character.reset(self.viewport);
    }
}

fn profile_array(profile: &chord::types::JumpProfile) -> js_sys::Float64Array {
    let arr = js_sys::Float64Array::new_with_length(3);
    arr.set_index(0, profile.jump_power as f64);
    arr.set_index(1, profile.jump_distance as f64);
    arr.set_index(2, profile.glow_intensity);
    arr
}

/// Jump profile as Float64Array [power, distance, glow] from the default
/// tables; sessions built with `withConfig` should call their own
/// `derivePhysics`. Unknown categories give zeros.
#[wasm_bindgen(js_name = derivePhysics)]
pub fn derive_physics(category: &str, bass_count: usize) -> js_sys::Float64Array {
    let config = Config::default();
    profile_array(&movement::physics::derive_physics_by_name(
        category,
        bass_count,
        &config.jump_power,
        &config.glow,
    ))
}

#[wasm_bindgen(js_name = noteName)]
pub fn note_name(pitch: u8) -> String {
    chord::classifier::note_name(pitch).to_string()
}

#[wasm_bindgen(js_name = defaultConfig)]
pub fn default_config() -> Result<JsValue, JsValue> {
    to_js(&Config::default())
}

#[cfg(test)]
mod tests {
    use crate::chord::recognizer::ChordRecognizer;
    use crate::chord::types::{ChordCategory, JumpProfile};
    use crate::config::Config;
    use crate::movement::physics;

    fn run(notes: &[(u8, i64)], now_ms: i64) -> Option<(ChordCategory, Vec<u8>, JumpProfile)> {
        let config = Config::default();
        let mut r = ChordRecognizer::new(config.chord_timeout_ms, config.bass_threshold);
        for &(pitch, t) in notes {
            r.record_note_on(pitch, t);
        }
        r.classify(now_ms).map(|chord| {
            let p = physics::derive_physics(
                chord.category,
                chord.bass_notes.len(),
                &config.jump_power,
                &config.glow,
            );
            (chord.category, chord.notes, p)
        })
    }

    #[test]
    fn test_triad_within_window() {
        let (category, _, p) = run(&[(60, 0), (64, 5), (71, 10)], 30).unwrap();
        assert_eq!(category, ChordCategory::Major);
        assert_eq!(p.jump_power, 15);
        assert_eq!(p.jump_distance, 0);
        assert!((p.glow_intensity - 0.3).abs() < 1e-9);

        // Close voicing: neighbouring intervals 4 and 3.
        let (category, _, p) = run(&[(60, 0), (64, 5), (67, 10)], 30).unwrap();
        assert_eq!(category, ChordCategory::Cluster);
        assert_eq!(p.jump_power, 10);
        assert_eq!(p.jump_distance, 0);
        assert!((p.glow_intensity - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_single_note() {
        let (category, _, p) = run(&[(60, 0)], 1).unwrap();
        assert_eq!(category, ChordCategory::Single);
        assert_eq!(p.jump_power, 0);
        assert_eq!(p.jump_distance, 0);
    }

    #[test]
    fn test_bass_under_triad() {
        let (category, _, p) = run(&[(48, 0), (60, 1), (64, 2), (67, 3)], 10).unwrap();
        assert_eq!(category, ChordCategory::Extended);
        assert_eq!(p.jump_power, 28);
        assert_eq!(p.jump_distance, 15);
    }

    #[test]
    fn test_five_notes() {
        let notes = [(60, 0), (62, 1), (64, 2), (66, 3), (68, 4)];
        let (category, _, p) = run(&notes, 10).unwrap();
        assert_eq!(category, ChordCategory::Complex);
        assert_eq!(p.jump_power, 30);
    }

    #[test]
    fn test_per_note_expiry() {
        let (_, notes, _) = run(&[(60, 0), (64, 140)], 145).unwrap();
        assert_eq!(notes, vec![60, 64]);

        let (category, notes, _) = run(&[(60, 0), (64, 140)], 200).unwrap();
        assert_eq!(notes, vec![64]);
        assert_eq!(category, ChordCategory::Single);
    }

    #[test]
    fn test_nothing_played() {
        assert!(run(&[], 0).is_none());
    }
}
