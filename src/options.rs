/// Decoder configuration.
///
/// The defaults accept everything the format can express, including notes on
/// layers beyond the song height.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Fail with [`Error::LayerOutOfRange`](crate::Error::LayerOutOfRange)
    /// when a note is placed on a layer index at or above the song height.
    pub strict_layers: bool,
}

impl Options {
    /// Options that reject notes outside the declared song height.
    pub fn strict() -> Self {
        Self {
            strict_layers: true,
        }
    }
}
