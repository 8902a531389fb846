//! Sound effects for playing notes through a block-game client.

use crate::consts::*;
use crate::song::Note;

/// A sound to trigger at a position in the world.
///
/// Coordinates are fixed point: block coordinates multiplied by 8.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoundEffect {
    pub sound_id: u16,
    pub sound_category: u8,
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub volume: f32,
    pub pitch: f32,
}

impl Note {
    /// Describe this note as a sound played at a block position.
    ///
    /// Instruments without a known sound fall back to the harp. Coordinates
    /// too large for fixed point saturate.
    ///
    /// ```rust
    /// use nbs::Note;
    ///
    /// let effect = Note::new(0, 45).sound_effect([2, 2, 1]);
    /// assert_eq!((effect.x, effect.y, effect.z), (16, 16, 8));
    /// assert_eq!(effect.pitch, 1.0);
    /// ```
    pub fn sound_effect(&self, position: [i32; 3]) -> SoundEffect {
        let [x, y, z] = position;

        SoundEffect {
            sound_id: self.sound_id().unwrap_or(FALLBACK_SOUND_ID),
            sound_category: 0,
            x: x.saturating_mul(POSITION_SCALE),
            y: y.saturating_mul(POSITION_SCALE),
            z: z.saturating_mul(POSITION_SCALE),
            volume: 1.0,
            pitch: self.pitch,
        }
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn known_instrument() {
        let effect = Note::new(6, 50).sound_effect([0, 0, 0]);

        assert_eq!(
            effect,
            SoundEffect {
                sound_id: 74,
                sound_category: 0,
                x: 0,
                y: 0,
                z: 0,
                volume: 1.0,
                pitch: 1.34,
            }
        );
    }

    #[test]
    fn unknown_instrument_plays_harp() {
        let effect = Note::new(13, 20).sound_effect([-1, 64, 3]);

        assert_eq!(effect.sound_id, 76);
        assert_eq!(effect.pitch, 0.0);
        assert_eq!((effect.x, effect.y, effect.z), (-8, 512, 24));
    }

    #[test]
    fn far_positions_saturate() {
        let effect = Note::new(0, 45).sound_effect([i32::MAX, i32::MIN, i32::MAX / 8]);

        assert_eq!(effect.x, i32::MAX);
        assert_eq!(effect.y, i32::MIN);
        assert_eq!(effect.z, i32::MAX / 8 * 8);
    }
}
