#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![forbid(unsafe_code)]

use colored::Colorize;
use error_iter::ErrorIter;
use log::info;
use nbs::{Error as NbsError, Options, Song};
use std::process::ExitCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing nbs-file argument\nUsage: dump [--strict] <nbs-file>")]
    MissingFilename,

    #[error("NBS error")]
    Nbs(#[from] NbsError),

    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

impl ErrorIter for Error {}

fn main() -> ExitCode {
    env_logger::init();

    match dump() {
        Err(e) => {
            eprintln!("{} {}", "error:".red(), e);

            for cause in e.chain().skip(1) {
                eprintln!("{} {}", "caused by:".bright_red(), cause);
            }

            ExitCode::FAILURE
        }
        Ok(()) => ExitCode::SUCCESS,
    }
}

fn dump() -> Result<(), Error> {
    let mut options = Options::default();
    let mut filename = None;
    for arg in std::env::args().skip(1) {
        if arg == "--strict" {
            options.strict_layers = true;
        } else {
            filename = Some(arg);
        }
    }
    let filename = filename.ok_or(Error::MissingFilename)?;

    let data = std::fs::read(&filename)?;
    info!("Read {} bytes from {}", data.len(), filename);

    let song = Song::from_slice_with(&data, &options)?;

    println!("{} {}", "title:".bold(), song.title);
    println!("{} {}", "author:".bold(), song.author);
    println!("{} {}", "original author:".bold(), song.original_author);
    println!("{} {}", "imported from:".bold(), song.imported_name);
    println!(
        "{} {} ticks at {} t/s, {} notes",
        "length:".bold(),
        song.length,
        song.tempo,
        song.note_count()
    );

    for (index, layer) in &song.layers {
        let unknown = layer.notes.values().filter(|n| n.sound_id().is_none()).count();
        println!(
            "  {:>3} {:<20} volume {:>3}% {:>5} notes{}",
            index,
            layer.name,
            layer.volume,
            layer.notes.len(),
            if unknown > 0 {
                format!(" ({} without a sound)", unknown).yellow()
            } else {
                "".normal()
            }
        );
    }

    Ok(())
}
