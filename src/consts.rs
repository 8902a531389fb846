/// Instrument keys are stored as piano keys; key 33 (F#3) plays the sample
/// at half speed and is the first entry of the pitch table.
pub(crate) const KEY_OFFSET: i32 = 33;
pub(crate) const NUM_PITCHES: usize = 25;
pub(crate) const NUM_INSTRUMENTS: usize = 16;

pub(crate) const DEFAULT_VOLUME: u8 = 100;

/// Delta value that ends both the tick stream and each layer stream.
pub(crate) const END_OF_STREAM: u16 = 0;

/// Legacy song length, written by every version of the format.
pub(crate) const FORMAT_MARKER_LENGTH: usize = 2;
/// Auto-save toggle, auto-save interval, time signature.
pub(crate) const TEMPO_FLAGS_LENGTH: usize = 3;
/// Minutes spent, left clicks, right clicks, blocks added, blocks removed.
pub(crate) const STATISTICS_LENGTH: usize = 5 * 4;
/// Loop toggle, max loop count (bytes) and loop start tick (short).
pub(crate) const LOOP_SETTINGS_LENGTH: usize = 4;
/// Velocity, panning (bytes) and pitch bend (short) following a note's key.
pub(crate) const NOTE_EXTRAS_LENGTH: usize = 4;

/// Harp, the sound used for instruments without a known sound id.
pub(crate) const FALLBACK_SOUND_ID: u16 = 76;
/// Playback coordinates are fixed point with three fractional bits.
pub(crate) const POSITION_SCALE: i32 = 8;
