use crate::chord::types::ChordCategory;

const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

pub fn note_name(pitch: u8) -> &'static str {
    NOTE_NAMES[(pitch % 12) as usize]
}

/// Background hue for a chord, keyed on its lowest pitch.
pub fn hue_for(lowest_pitch: u8) -> u16 {
    ((lowest_pitch as u32 * 5) % 360) as u16
}

/// Intervals between neighbouring pitches, folded into one octave.
/// Expects `sorted` ascending.
fn adjacent_intervals(sorted: &[u8]) -> Vec<u8> {
    sorted.windows(2).map(|w| (w[1] - w[0]) % 12).collect()
}

fn contains_all(intervals: &[u8], wanted: &[u8]) -> bool {
    wanted.iter().all(|w| intervals.contains(w))
}

/// Categorize a set of distinct pitches.
///
/// Only adjacent intervals of the sorted voicing are inspected, so some
/// inversions land in `Cluster` or `Extended` rather than their textbook
/// quality. Branch order decides ties between the seventh-chord shapes.
pub fn categorize(distinct: &[u8]) -> ChordCategory {
    let count = distinct.len();
    if count < 2 {
        return ChordCategory::Single;
    }

    let mut sorted = distinct.to_vec();
    sorted.sort_unstable();
    let intervals = adjacent_intervals(&sorted);

    if count == 3 && contains_all(&intervals, &[4, 7]) {
        return ChordCategory::Major;
    }
    if count == 3 && contains_all(&intervals, &[3, 7]) {
        return ChordCategory::Minor;
    }
    if count == 4 && contains_all(&intervals, &[4, 7, 11]) {
        return ChordCategory::Major7;
    }
    if count == 4 && contains_all(&intervals, &[3, 7, 10]) {
        return ChordCategory::Minor7;
    }
    if count == 4 && contains_all(&intervals, &[4, 7, 10]) {
        return ChordCategory::Dominant7;
    }
    if count >= 5 {
        return ChordCategory::Complex;
    }
    if count == 4 {
        return ChordCategory::Extended;
    }
    ChordCategory::Cluster
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_names() {
        assert_eq!(note_name(60), "C");
        assert_eq!(note_name(61), "C#");
        assert_eq!(note_name(71), "B");
        assert_eq!(note_name(0), "C");
        assert_eq!(note_name(127), "G");
    }

    #[test]
    fn test_hue() {
        assert_eq!(hue_for(60), 300);
        assert_eq!(hue_for(48), 240);
        assert_eq!(hue_for(72), 0);
        for p in 0..=127u8 {
            assert!(hue_for(p) < 360);
        }
    }

    #[test]
    fn test_single() {
        assert_eq!(categorize(&[]), ChordCategory::Single);
        assert_eq!(categorize(&[60]), ChordCategory::Single);
    }

    #[test]
    fn test_major_and_minor_by_adjacent_intervals() {
        assert_eq!(categorize(&[60, 64, 71]), ChordCategory::Major);
        assert_eq!(categorize(&[71, 60, 64]), ChordCategory::Major);
        assert_eq!(categorize(&[60, 67, 71]), ChordCategory::Major);
        assert_eq!(categorize(&[60, 63, 70]), ChordCategory::Minor);
        assert_eq!(categorize(&[60, 67, 70]), ChordCategory::Minor);
    }

    #[test]
    fn test_close_voiced_triads_are_clusters() {
        // Neighbouring intervals 4,3 and 3,4 never include the fifth.
        assert_eq!(categorize(&[60, 64, 67]), ChordCategory::Cluster);
        assert_eq!(categorize(&[60, 63, 67]), ChordCategory::Cluster);
        assert_eq!(categorize(&[62, 66, 69]), ChordCategory::Cluster);
    }

    #[test]
    fn test_two_notes_is_cluster() {
        assert_eq!(categorize(&[60, 67]), ChordCategory::Cluster);
        assert_eq!(categorize(&[60, 61]), ChordCategory::Cluster);
    }

    #[test]
    fn test_sevenths() {
        // 4, 7, 11 as adjacent intervals
        assert_eq!(categorize(&[40, 44, 51, 62]), ChordCategory::Major7);
        // 3, 7, 10
        assert_eq!(categorize(&[40, 43, 50, 60]), ChordCategory::Minor7);
        // 4, 7, 10
        assert_eq!(categorize(&[40, 44, 51, 61]), ChordCategory::Dominant7);
    }

    #[test]
    fn test_bass_plus_triad_is_extended() {
        // intervals 12, 4, 3 -> 0, 4, 3
        assert_eq!(categorize(&[48, 60, 64, 67]), ChordCategory::Extended);
    }

    #[test]
    fn test_five_or_more_is_complex() {
        assert_eq!(categorize(&[60, 62, 64, 66, 68]), ChordCategory::Complex);
        assert_eq!(
            categorize(&[36, 48, 60, 64, 67, 71, 74]),
            ChordCategory::Complex
        );
    }

    #[test]
    fn test_octave_interval_folds_to_zero() {
        assert_eq!(adjacent_intervals(&[48, 60, 64, 67]), vec![0, 4, 3]);
    }
}
