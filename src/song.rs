use alloc::collections::BTreeMap;
use alloc::string::String;

use crate::consts::*;
use crate::decode;
use crate::errors::Error;
use crate::options::Options;
use crate::tables::{instrument_sound_id, key_to_pitch};

/// A decoded song: header metadata and the layers that hold notes.
///
/// Only populated layers exist; empty ticks and layers are never stored.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Song {
    pub title: String,
    pub author: String,
    pub description: String,
    pub original_author: String,
    /// Name of the MIDI or schematic file the song was imported from.
    pub imported_name: String,
    /// Ticks per second.
    pub tempo: f32,
    /// Length of the song in ticks.
    pub length: u16,
    /// Number of layers declared by the header.
    pub song_height: u16,
    pub layers: BTreeMap<u32, Layer>,
}

/// A track holding at most one note per tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub name: String,
    /// Volume in percent.
    pub volume: u8,
    /// `None` until the layer receives its metadata.
    pub locked: Option<bool>,
    /// `None` until the layer receives its metadata.
    pub stereo: Option<bool>,
    pub notes: BTreeMap<u32, Note>,
}

/// A single note. The pitch multiplier is resolved once, from the key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Note {
    pub instrument: u8,
    pub key: u8,
    pub pitch: f32,
}

impl Song {
    /// Create a new `Song` from a byte slice.
    ///
    /// ```rust
    /// # fn main() -> Result<(), nbs::Error> {
    /// # let data = [0_u8; 0];
    /// match nbs::Song::from_slice(&data) {
    ///     Err(e) => assert!(e.is_truncated()),
    ///     Ok(song) => println!("{} layers", song.layers.len()),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_slice(slice: &[u8]) -> Result<Song, Error> {
        Self::from_slice_with(slice, &Options::default())
    }

    /// Create a new `Song` from a byte slice with explicit decoder options.
    pub fn from_slice_with(slice: &[u8], options: &Options) -> Result<Song, Error> {
        decode::decode(slice, options)
    }

    /// Read and decode a song file.
    #[cfg(feature = "std")]
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Song, Error> {
        let data = std::fs::read(path)?;

        Self::from_slice(&data)
    }

    pub fn layer(&self, index: u32) -> Option<&Layer> {
        self.layers.get(&index)
    }

    /// The note at a (tick, layer) position, if any.
    pub fn note_at(&self, tick: u32, layer: u32) -> Option<&Note> {
        self.layer(layer).and_then(|l| l.note(tick))
    }

    /// Total number of notes across all layers.
    pub fn note_count(&self) -> usize {
        self.layers.values().map(|l| l.notes.len()).sum()
    }

    /// Place a note, creating its layer on first use.
    pub(crate) fn set_note(&mut self, tick: u32, layer: u32, note: Note) {
        self.layers
            .entry(layer)
            .or_insert_with(Layer::default)
            .set_note(tick, note);
    }
}

impl Default for Layer {
    fn default() -> Self {
        Self {
            name: String::new(),
            volume: DEFAULT_VOLUME,
            locked: None,
            stereo: None,
            notes: BTreeMap::new(),
        }
    }
}

impl Layer {
    /// Set the note at `tick`, replacing any previous note there.
    pub fn set_note(&mut self, tick: u32, note: Note) {
        self.notes.insert(tick, note);
    }

    pub fn note(&self, tick: u32) -> Option<&Note> {
        self.notes.get(&tick)
    }
}

impl Note {
    pub fn new(instrument: u8, key: u8) -> Self {
        Self {
            instrument,
            key,
            pitch: key_to_pitch(i32::from(key)),
        }
    }

    /// Sound id of this note's instrument, if one is known.
    pub fn sound_id(&self) -> Option<u16> {
        instrument_sound_id(self.instrument)
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_layer_defaults() {
        let layer = Layer::default();

        assert_eq!(layer.volume, 100);
        assert_eq!(layer.name, "");
        assert_eq!(layer.locked, None);
        assert_eq!(layer.stereo, None);
        assert!(layer.notes.is_empty());
    }

    #[test]
    fn note_pitch_from_key() {
        assert_eq!(Note::new(0, 45).pitch, 1.0);
        assert_eq!(Note::new(0, 57).pitch, 2.0);
        assert_eq!(Note::new(0, 0).pitch, 0.0);
        assert_eq!(Note::new(0, 87).pitch, 0.0);
    }

    #[test]
    fn later_note_replaces_earlier() {
        let mut song = Song::default();
        song.set_note(3, 1, Note::new(0, 45));
        song.set_note(3, 1, Note::new(4, 50));
        song.set_note(4, 1, Note::new(2, 33));

        assert_eq!(song.layers.len(), 1);
        assert_eq!(song.note_count(), 2);
        assert_eq!(song.note_at(3, 1), Some(&Note::new(4, 50)));
        assert_eq!(song.note_at(3, 0), None);
    }

    #[test]
    fn sound_id_for_unknown_instrument() {
        assert_eq!(Note::new(1, 45).sound_id(), Some(70));
        assert_eq!(Note::new(12, 45).sound_id(), None);
    }
}
