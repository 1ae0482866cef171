use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::chord::types::ChordCategory;

pub const CHORD_TIMEOUT_MS: i64 = 150;
pub const CHORD_TIMEOUT_MIN_MS: i64 = 50;
pub const CHORD_TIMEOUT_MAX_MS: i64 = 300;

/// Middle C. Pitches below it count as bass notes.
pub const BASS_THRESHOLD: u8 = 60;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Chord timeout {0}ms outside {min}..={max}ms", min = CHORD_TIMEOUT_MIN_MS, max = CHORD_TIMEOUT_MAX_MS)]
    TimeoutOutOfRange(i64),

    #[error("Bass threshold {0} is not a MIDI pitch")]
    BassThresholdOutOfRange(u8),

    #[error("Glow intensity for {0} must be within 0.0..=1.0")]
    GlowOutOfRange(ChordCategory),

    #[error("No initial chords configured")]
    NoInitialChords,
}

/// Base jump power per chord category, plus the per-bass-note bonus.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct JumpPowerTable {
    pub single: i32,
    pub major: i32,
    pub minor: i32,
    pub major7: i32,
    pub minor7: i32,
    pub dominant7: i32,
    pub extended: i32,
    pub complex: i32,
    pub cluster: i32,
    pub bass_multiplier: i32,
    /// Horizontal distance added for each bass note.
    pub bass_distance: i32,
}

impl Default for JumpPowerTable {
    fn default() -> Self {
        JumpPowerTable {
            single: 0,
            major: 15,
            minor: 15,
            major7: 20,
            minor7: 20,
            dominant7: 20,
            extended: 25,
            complex: 30,
            cluster: 10,
            bass_multiplier: 3,
            bass_distance: 15,
        }
    }
}

impl JumpPowerTable {
    pub fn base_power(&self, category: ChordCategory) -> i32 {
        match category {
            ChordCategory::Single => self.single,
            ChordCategory::Major => self.major,
            ChordCategory::Minor => self.minor,
            ChordCategory::Major7 => self.major7,
            ChordCategory::Minor7 => self.minor7,
            ChordCategory::Dominant7 => self.dominant7,
            ChordCategory::Extended => self.extended,
            ChordCategory::Complex => self.complex,
            ChordCategory::Cluster => self.cluster,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct GlowTable {
    pub single: f64,
    pub major: f64,
    pub minor: f64,
    pub major7: f64,
    pub minor7: f64,
    pub dominant7: f64,
    pub extended: f64,
    pub complex: f64,
    pub cluster: f64,
}

impl Default for GlowTable {
    fn default() -> Self {
        GlowTable {
            single: 0.0,
            major: 0.3,
            minor: 0.3,
            major7: 0.6,
            minor7: 0.6,
            dominant7: 0.6,
            extended: 0.8,
            complex: 1.0,
            cluster: 0.2,
        }
    }
}

impl GlowTable {
    pub fn intensity(&self, category: ChordCategory) -> f64 {
        match category {
            ChordCategory::Single => self.single,
            ChordCategory::Major => self.major,
            ChordCategory::Minor => self.minor,
            ChordCategory::Major7 => self.major7,
            ChordCategory::Minor7 => self.minor7,
            ChordCategory::Dominant7 => self.dominant7,
            ChordCategory::Extended => self.extended,
            ChordCategory::Complex => self.complex,
            ChordCategory::Cluster => self.cluster,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct CharacterConfig {
    pub size: f64,
    pub gravity: f64,
    pub step_size: f64,
    pub air_resistance: f64,
    /// How far below the viewport the character may drop before it counts as fallen.
    pub fall_margin: f64,
}

impl Default for CharacterConfig {
    fn default() -> Self {
        CharacterConfig {
            size: 60.0,
            gravity: 1.0,
            step_size: 30.0,
            air_resistance: 0.95,
            fall_margin: 100.0,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    pub chord_timeout_ms: i64,
    pub bass_threshold: u8,
    pub jump_power: JumpPowerTable,
    pub glow: GlowTable,
    pub character: CharacterConfig,
    /// Triads painted behind the title screen before the first note arrives.
    pub initial_chords: Vec<Vec<u8>>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            chord_timeout_ms: CHORD_TIMEOUT_MS,
            bass_threshold: BASS_THRESHOLD,
            jump_power: JumpPowerTable::default(),
            glow: GlowTable::default(),
            character: CharacterConfig::default(),
            initial_chords: vec![
                vec![60, 64, 67], // C major
                vec![60, 63, 67], // C minor
                vec![62, 66, 69], // D major
                vec![64, 68, 71], // E major
                vec![65, 69, 72], // F major
                vec![67, 71, 74], // G major
                vec![69, 73, 76], // A major
                vec![71, 75, 78], // B major
            ],
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(CHORD_TIMEOUT_MIN_MS..=CHORD_TIMEOUT_MAX_MS).contains(&self.chord_timeout_ms) {
            return Err(ConfigError::TimeoutOutOfRange(self.chord_timeout_ms));
        }
        if self.bass_threshold > 127 {
            return Err(ConfigError::BassThresholdOutOfRange(self.bass_threshold));
        }
        for category in ChordCategory::ALL {
            let glow = self.glow.intensity(category);
            if !(0.0..=1.0).contains(&glow) {
                return Err(ConfigError::GlowOutOfRange(category));
            }
        }
        if self.initial_chords.iter().all(|c| c.is_empty()) {
            return Err(ConfigError::NoInitialChords);
        }
        Ok(())
    }
}

/// Clamp a requested chord timeout into the supported range.
pub fn clamp_chord_timeout(ms: i64) -> i64 {
    ms.clamp(CHORD_TIMEOUT_MIN_MS, CHORD_TIMEOUT_MAX_MS)
}
