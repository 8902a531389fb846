/// Possible errors.
#[derive(Debug)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum Error {
    /// The input ended before a field could be read. There is no partial
    /// song: the format has no markers to resynchronize on.
    #[cfg_attr(
        feature = "std",
        error("Truncated input: needed {needed} bytes at offset {offset}, {remaining} remaining")
    )]
    TruncatedInput {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    /// A tick or layer delta pushed the running index past `u32::MAX`.
    #[cfg_attr(feature = "std", error("Index overflow at offset {offset}"))]
    IndexOverflow { offset: usize },

    /// A note was placed on a layer beyond the song height. Only reported
    /// with [`Options::strict_layers`](crate::Options::strict_layers).
    #[cfg_attr(
        feature = "std",
        error("Layer {layer} is out of range for song height {song_height}")
    )]
    LayerOutOfRange { layer: u32, song_height: u16 },

    #[cfg(feature = "std")]
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns `true` when the input was cut short.
    pub fn is_truncated(&self) -> bool {
        matches!(self, Error::TruncatedInput { .. })
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use error_iter::ErrorIter;

    impl ErrorIter for Error {}

    #[test]
    fn display_truncated_input() {
        let error = Error::TruncatedInput {
            offset: 12,
            needed: 4,
            remaining: 1,
        };

        assert!(error.is_truncated());
        assert_eq!(
            error.to_string(),
            "Truncated input: needed 4 bytes at offset 12, 1 remaining"
        );
    }

    #[test]
    fn io_error_is_a_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "oh no!");
        let error = Error::from(io);

        assert!(!error.is_truncated());

        let mut counter = 0;
        for source in error.chain().skip(1) {
            counter += 1;
            assert_eq!(format!("{}", source), "oh no!");
        }

        assert_eq!(counter, 1);
    }
}
