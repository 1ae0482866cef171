use thiserror::Error;

const NOTE_ON: u8 = 0x90;
const NOTE_OFF: u8 = 0x80;

#[derive(Debug, Error, PartialEq)]
pub enum MidiError {
    #[error("MIDI message too short: expected 3 bytes, got {0}")]
    Truncated(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MidiMessage {
    NoteOn { pitch: u8, velocity: u8 },
    NoteOff { pitch: u8 },
    Other { status: u8 },
}

impl MidiMessage {
    /// Decode a raw `[status, data1, data2]` message as delivered by Web MIDI.
    ///
    /// Only channel-1 status bytes are recognised as note messages. A note-on
    /// with zero velocity is a note-off. Short non-note messages (clock,
    /// active sensing) decode as `Other`.
    pub fn decode(data: &[u8]) -> Result<MidiMessage, MidiError> {
        let [status, pitch, velocity] = match data {
            [s, p, v, ..] => [*s, *p, *v],
            [s, ..] if *s != NOTE_ON && *s != NOTE_OFF => {
                return Ok(MidiMessage::Other { status: *s })
            }
            _ => return Err(MidiError::Truncated(data.len())),
        };

        Ok(match status {
            NOTE_ON if velocity > 0 => MidiMessage::NoteOn { pitch, velocity },
            NOTE_ON | NOTE_OFF => MidiMessage::NoteOff { pitch },
            _ => MidiMessage::Other { status },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_on() {
        assert_eq!(
            MidiMessage::decode(&[0x90, 60, 100]),
            Ok(MidiMessage::NoteOn {
                pitch: 60,
                velocity: 100
            })
        );
    }

    #[test]
    fn test_zero_velocity_note_on_is_note_off() {
        assert_eq!(
            MidiMessage::decode(&[0x90, 64, 0]),
            Ok(MidiMessage::NoteOff { pitch: 64 })
        );
    }

    #[test]
    fn test_note_off() {
        assert_eq!(
            MidiMessage::decode(&[0x80, 67, 40]),
            Ok(MidiMessage::NoteOff { pitch: 67 })
        );
    }

    #[test]
    fn test_other_channels_and_messages() {
        assert_eq!(
            MidiMessage::decode(&[0x91, 60, 100]),
            Ok(MidiMessage::Other { status: 0x91 })
        );
        assert_eq!(
            MidiMessage::decode(&[0xB0, 64, 127]),
            Ok(MidiMessage::Other { status: 0xB0 })
        );
    }

    #[test]
    fn test_truncated() {
        assert_eq!(MidiMessage::decode(&[0x90, 60]), Err(MidiError::Truncated(2)));
        assert_eq!(MidiMessage::decode(&[]), Err(MidiError::Truncated(0)));
    }

    #[test]
    fn test_realtime_bytes_are_other() {
        assert_eq!(
            MidiMessage::decode(&[0xF8]),
            Ok(MidiMessage::Other { status: 0xF8 })
        );
    }
}
