use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoteEvent {
    pub pitch: u8,
    pub timestamp_ms: i64,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ChordCategory {
    Single,
    Major,
    Minor,
    Major7,
    Minor7,
    Dominant7,
    Extended,
    Complex,
    Cluster,
}

impl ChordCategory {
    pub const ALL: [ChordCategory; 9] = [
        ChordCategory::Single,
        ChordCategory::Major,
        ChordCategory::Minor,
        ChordCategory::Major7,
        ChordCategory::Minor7,
        ChordCategory::Dominant7,
        ChordCategory::Extended,
        ChordCategory::Complex,
        ChordCategory::Cluster,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChordCategory::Single => "single",
            ChordCategory::Major => "major",
            ChordCategory::Minor => "minor",
            ChordCategory::Major7 => "major7",
            ChordCategory::Minor7 => "minor7",
            ChordCategory::Dominant7 => "dominant7",
            ChordCategory::Extended => "extended",
            ChordCategory::Complex => "complex",
            ChordCategory::Cluster => "cluster",
        }
    }
}

impl fmt::Display for ChordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChordCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        ChordCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| format!("Unknown chord category: {}", s))
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ChordClassification {
    /// Distinct pitches, ascending.
    pub notes: Vec<u8>,
    pub treble_notes: Vec<u8>,
    pub bass_notes: Vec<u8>,
    #[serde(rename = "type")]
    pub category: ChordCategory,
    pub note_names: Vec<String>,
    pub note_count: usize,
    pub hue: u16,
}

// Movement outputs

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct JumpProfile {
    pub jump_power: i32,
    pub jump_distance: i32,
    pub glow_intensity: f64,
}

impl JumpProfile {
    pub fn zero() -> Self {
        JumpProfile {
            jump_power: 0,
            jump_distance: 0,
            glow_intensity: 0.0,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MovementCommand {
    Step,
    Jump { power: i32, distance: i32 },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ChordEvent {
    pub chord: ChordClassification,
    pub physics: JumpProfile,
    pub command: MovementCommand,
}

impl ChordEvent {
    /// One-line status text for the page's debug readout.
    pub fn summary(&self, chord_timeout_ms: i64) -> String {
        let bass_info = if self.chord.bass_notes.is_empty() {
            String::new()
        } else {
            let bass: Vec<String> = self.chord.bass_notes.iter().map(|p| p.to_string()).collect();
            format!(" | Bass: {}", bass.join(","))
        };
        let movement = match self.command {
            MovementCommand::Step => "Step".to_string(),
            MovementCommand::Jump { power, distance } => {
                format!("Jump (H:{}, D:{})", power, distance)
            }
        };
        format!(
            "Chord: {} ({}){} - {} | {}ms",
            self.chord.category,
            self.chord.note_names.join(", "),
            bass_info,
            movement,
            chord_timeout_ms
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trips_through_str() {
        for category in ChordCategory::ALL {
            assert_eq!(category.as_str().parse::<ChordCategory>(), Ok(category));
        }
        assert_eq!("Dominant7".parse::<ChordCategory>(), Ok(ChordCategory::Dominant7));
        assert!("sus4".parse::<ChordCategory>().is_err());
    }

    #[test]
    fn test_summary_with_bass() {
        let event = ChordEvent {
            chord: ChordClassification {
                notes: vec![48, 60, 64, 67],
                treble_notes: vec![60, 64, 67],
                bass_notes: vec![48],
                category: ChordCategory::Extended,
                note_names: vec!["C".into(), "C".into(), "E".into(), "G".into()],
                note_count: 4,
                hue: 240,
            },
            physics: JumpProfile {
                jump_power: 28,
                jump_distance: 15,
                glow_intensity: 0.8,
            },
            command: MovementCommand::Jump {
                power: 28,
                distance: 15,
            },
        };
        assert_eq!(
            event.summary(150),
            "Chord: extended (C, C, E, G) | Bass: 48 - Jump (H:28, D:15) | 150ms"
        );
    }

    #[test]
    fn test_summary_single_step() {
        let event = ChordEvent {
            chord: ChordClassification {
                notes: vec![62],
                treble_notes: vec![62],
                bass_notes: vec![],
                category: ChordCategory::Single,
                note_names: vec!["D".into()],
                note_count: 1,
                hue: 310,
            },
            physics: JumpProfile::zero(),
            command: MovementCommand::Step,
        };
        assert_eq!(event.summary(90), "Chord: single (D) - Step | 90ms");
    }
}
