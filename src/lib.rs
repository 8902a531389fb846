//! Decoder for Note Block Studio (`.nbs`) songs.
//!
//! ```rust,no_run
//! let song = nbs::Song::from_file("song.nbs")?;
//!
//! for (index, layer) in &song.layers {
//!     for (tick, note) in &layer.notes {
//!         println!("{} {}: instrument {} pitch {}", index, tick, note.instrument, note.pitch);
//!     }
//! }
//! # Ok::<(), nbs::Error>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod consts;
mod cursor;
mod decode;
mod errors;
mod options;
mod packet;
mod song;
pub mod tables;

pub use errors::Error;
pub use options::Options;
pub use packet::SoundEffect;
pub use song::{Layer, Note, Song};
