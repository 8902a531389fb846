//! Lookup tables shared with playback clients.

use crate::consts::*;

/// Playback-rate multiplier for each key, starting at key 33 (F#3).
///
/// Two octaves in semitone steps; entry 12 (key 45, F#4) plays the sample
/// unshifted.
pub const KEY_TO_PITCH: [f32; NUM_PITCHES] = [
    0.5, 0.53, 0.56, 0.6, 0.63, 0.67, 0.7, 0.76, 0.8, 0.84, 0.9, 0.94, // F#3 - F4
    1.0, 1.06, 1.12, 1.18, 1.26, 1.34, 1.42, 1.5, 1.6, 1.68, 1.78, 1.88, // F#4 - F5
    2.0, // F#5
];

/// Sound id for each instrument. Instruments without a known sound are `None`.
pub const INSTRUMENT_SOUND_IDS: [Option<u16>; NUM_INSTRUMENTS] = [
    Some(76), // Harp
    Some(70), // Double bass (wood)
    Some(71), // Bass drum (stone)
    Some(79), // Snare drum (sand)
    Some(78), // Click (glass)
    Some(75), // Guitar (wool)
    Some(74), // Flute (clay)
    Some(72), // Bell (gold block)
    Some(73), // Chime (packed ice)
    Some(80), // Xylophone (bone block)
    None,     // Iron xylophone
    None,     // Cow bell
    None,     // Didgeridoo
    None,     // Bit
    None,     // Banjo
    None,     // Pling
];

/// Pitch multiplier for a key. Keys outside the table map to `0.0`.
pub fn key_to_pitch(key: i32) -> f32 {
    key.checked_sub(KEY_OFFSET)
        .filter(|&i| i >= 0)
        .and_then(|i| KEY_TO_PITCH.get(i as usize))
        .copied()
        .unwrap_or(0.0)
}

/// Sound id for an instrument, or `None` when no sound is known for it.
pub fn instrument_sound_id(instrument: u8) -> Option<u16> {
    INSTRUMENT_SOUND_IDS
        .get(usize::from(instrument))
        .copied()
        .flatten()
}
