//! Grid decoder: rebuilds the sparse tick × layer note grid from the
//! delta-encoded note stream.

use alloc::collections::BTreeMap;
use alloc::string::String;
use log::{debug, trace};

use crate::consts::*;
use crate::cursor::Cursor;
use crate::errors::Error;
use crate::options::Options;
use crate::song::{Note, Song};

/// Header fields in file order. Skipped fields are not kept.
#[derive(Debug)]
struct Header {
    version: u8,
    vanilla_instruments: u8,
    length: u16,
    song_height: u16,
    title: String,
    author: String,
    original_author: String,
    description: String,
    tempo: f32,
    imported_name: String,
}

/// A stream of deltas ending with [`END_OF_STREAM`].
///
/// The running index starts one before zero, so a first delta of 1 yields
/// index 0. Yielded indices are strictly increasing.
#[derive(Debug, Default)]
struct Deltas {
    index: Option<u32>,
}

impl Deltas {
    /// Read the next delta and return the index it lands on, or `None` at the
    /// end of the stream.
    fn advance(&mut self, cursor: &mut Cursor) -> Result<Option<u32>, Error> {
        let offset = cursor.offset();
        let jump = cursor.read_u16()?;
        if jump == END_OF_STREAM {
            return Ok(None);
        }

        let jump = u32::from(jump);
        let index = match self.index {
            None => jump - 1,
            Some(index) => index
                .checked_add(jump)
                .ok_or(Error::IndexOverflow { offset })?,
        };
        self.index = Some(index);

        Ok(Some(index))
    }
}

pub(crate) fn decode(slice: &[u8], options: &Options) -> Result<Song, Error> {
    let mut cursor = Cursor::new(slice);

    let header = read_header(&mut cursor)?;
    debug!(
        "Song {:?} by {:?}: version {}, {} vanilla instruments, {} ticks, {} layers, {} t/s",
        header.title,
        header.author,
        header.version,
        header.vanilla_instruments,
        header.length,
        header.song_height,
        header.tempo,
    );

    let mut song = Song {
        title: header.title,
        author: header.author,
        description: header.description,
        original_author: header.original_author,
        imported_name: header.imported_name,
        tempo: header.tempo,
        length: header.length,
        song_height: header.song_height,
        layers: BTreeMap::new(),
    };

    read_notes(&mut cursor, &mut song, options)?;
    read_layers(&mut cursor, &mut song)?;

    if cursor.remaining() > 0 {
        // Custom instruments in newer files; not part of the song model.
        trace!("Ignoring {} trailing bytes", cursor.remaining());
    }

    Ok(song)
}

fn read_header(cursor: &mut Cursor) -> Result<Header, Error> {
    cursor.skip(FORMAT_MARKER_LENGTH)?;

    let version = cursor.read_u8()?;
    let vanilla_instruments = cursor.read_u8()?;
    let length = cursor.read_u16()?;
    let song_height = cursor.read_u16()?;

    let title = cursor.read_string()?;
    let author = cursor.read_string()?;
    let original_author = cursor.read_string()?;
    let description = cursor.read_string()?;

    // Stored in hundredths of a tick per second
    let tempo = f32::from(cursor.read_u16()?) / 100.0;

    cursor.skip(TEMPO_FLAGS_LENGTH)?;
    cursor.skip(STATISTICS_LENGTH)?;

    let imported_name = cursor.read_string()?;
    cursor.skip(LOOP_SETTINGS_LENGTH)?;

    Ok(Header {
        version,
        vanilla_instruments,
        length,
        song_height,
        title,
        author,
        original_author,
        description,
        tempo,
        imported_name,
    })
}

/// Walk the tick stream and, for each tick, its layer stream.
fn read_notes(cursor: &mut Cursor, song: &mut Song, options: &Options) -> Result<(), Error> {
    let mut ticks = Deltas::default();
    let mut count = 0_usize;

    while let Some(tick) = ticks.advance(cursor)? {
        let mut layers = Deltas::default();

        while let Some(layer) = layers.advance(cursor)? {
            if options.strict_layers && layer >= u32::from(song.song_height) {
                return Err(Error::LayerOutOfRange {
                    layer,
                    song_height: song.song_height,
                });
            }

            let instrument = cursor.read_u8()?;
            let key = cursor.read_u8()?;
            cursor.skip(NOTE_EXTRAS_LENGTH)?;

            song.set_note(tick, layer, Note::new(instrument, key));
            count += 1;
        }
    }

    debug!("Read {} notes on {} layers", count, song.layers.len());

    Ok(())
}

/// Assign metadata to populated layers below the song height. Layers without
/// notes have no record in the file.
fn read_layers(cursor: &mut Cursor, song: &mut Song) -> Result<(), Error> {
    for index in 0..u32::from(song.song_height) {
        let layer = match song.layers.get_mut(&index) {
            Some(layer) => layer,
            None => continue,
        };

        layer.name = cursor.read_string()?;
        layer.locked = Some(cursor.read_u8()? != 0);
        layer.volume = cursor.read_u8()?;
        layer.stereo = Some(cursor.read_u8()? != 0);

        trace!("Layer {} {:?}: volume {}", index, layer.name, layer.volume);
    }

    Ok(())
}
