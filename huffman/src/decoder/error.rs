use std::{error, fmt};

/// Contains error options that can be encountered while performing the
/// decoding operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoderError {
    /// The trailing partial byte's bits did not match the high-order bits
    /// of the EOS code.
    InvalidPadding,

    /// The EOS symbol was decoded from the middle of the stream. EOS may
    /// only ever appear implicitly, as padding.
    EosInStream,

    /// Fewer than 8 bits remained buffered but they did not fit in a
    /// single trailing padding byte (HPACK only allows up to 7 bits of
    /// padding).
    OverlongPadding,
}

impl fmt::Display for DecoderError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidPadding => write!(fmt, "invalid Huffman padding"),
            Self::EosInStream => write!(fmt, "EOS symbol found in Huffman stream"),
            Self::OverlongPadding => write!(fmt, "Huffman padding is 8 bits or longer"),
        }
    }
}

impl error::Error for DecoderError {}
