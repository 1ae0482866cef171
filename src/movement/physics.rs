use crate::chord::types::{
    ChordCategory, ChordClassification, ChordEvent, JumpProfile, MovementCommand,
};
use crate::config::{GlowTable, JumpPowerTable};

/// Jump height, reach and glow for a chord with `bass_count` bass notes.
/// Saturates at `i32::MAX` for absurd bass counts.
pub fn derive_physics(
    category: ChordCategory,
    bass_count: usize,
    power: &JumpPowerTable,
    glow: &GlowTable,
) -> JumpProfile {
    let bass = i32::try_from(bass_count).unwrap_or(i32::MAX);
    JumpProfile {
        jump_power: power
            .base_power(category)
            .saturating_add(bass.saturating_mul(power.bass_multiplier)),
        jump_distance: bass.saturating_mul(power.bass_distance),
        glow_intensity: glow.intensity(category),
    }
}

/// Same as [`derive_physics`] but keyed on a category name; unknown names
/// produce a zero profile.
pub fn derive_physics_by_name(
    category: &str,
    bass_count: usize,
    power: &JumpPowerTable,
    glow: &GlowTable,
) -> JumpProfile {
    match category.parse::<ChordCategory>() {
        Ok(category) => derive_physics(category, bass_count, power, glow),
        Err(_) => JumpProfile::zero(),
    }
}

/// Single notes step; everything else jumps.
pub fn movement_for(category: ChordCategory, physics: &JumpProfile) -> MovementCommand {
    match category {
        ChordCategory::Single => MovementCommand::Step,
        _ => MovementCommand::Jump {
            power: physics.jump_power,
            distance: physics.jump_distance,
        },
    }
}

pub fn chord_event(
    chord: ChordClassification,
    power: &JumpPowerTable,
    glow: &GlowTable,
) -> ChordEvent {
    let physics = derive_physics(chord.category, chord.bass_notes.len(), power, glow);
    let command = movement_for(chord.category, &physics);
    ChordEvent {
        chord,
        physics,
        command,
    }
}
