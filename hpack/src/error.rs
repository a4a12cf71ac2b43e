use std::{error, fmt, io};

use hpack_huffman::DecoderError as HuffmanError;

/// Errors that can occur while decoding a compressed header block.
///
/// Per RFC 7541, a decoding error leaves the compression context's state
/// undefined for future use; callers should tear down the connection on any
/// of these (§4.8 of the HPACK core spec this crate implements).
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// The input ended in the middle of an integer, a string, or a
    /// representation.
    Truncated,

    /// A combined table index was `0` or exceeded `61 + used`.
    InvalidIndex,

    /// A Huffman-encoded string failed to decode.
    InvalidHuffman(HuffmanError),

    /// A decoded integer would have exceeded `2^32 - 1`.
    IntegerOverflow,

    /// A dynamic table size update representation appeared somewhere other
    /// than the head of a block, or raised the table above the peer's
    /// signaled limit.
    ProtocolError,

    /// A decoded string exceeded the caller-supplied maximum length.
    TooLong,
}

impl From<HuffmanError> for Error {
    fn from(err: HuffmanError) -> Self {
        Self::InvalidHuffman(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Truncated => write!(fmt, "truncated HPACK input"),
            Self::InvalidIndex => write!(fmt, "invalid HPACK table index"),
            Self::InvalidHuffman(err) => write!(fmt, "invalid Huffman string: {}", err),
            Self::IntegerOverflow => write!(fmt, "HPACK integer overflow"),
            Self::ProtocolError => write!(fmt, "HPACK protocol error"),
            Self::TooLong => write!(fmt, "decoded string exceeds maximum length"),
        }
    }
}

impl error::Error for Error {}

/// Errors that can occur while encoding a header field.
#[derive(Debug)]
pub enum EncoderError {
    /// The caller referenced a table index that does not exist.
    InvalidIndex,

    /// A requested dynamic table resize exceeds the peer-signaled maximum.
    CapacityExceeded,

    /// The encoder could not produce a valid representation for its input.
    /// Indicates a bug in the encoder rather than bad input.
    InternalInvariant,

    /// Writing to the destination sink failed.
    Io(io::Error),
}

impl From<io::Error> for EncoderError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl fmt::Display for EncoderError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidIndex => write!(fmt, "invalid HPACK table index"),
            Self::CapacityExceeded => write!(fmt, "dynamic table capacity exceeds peer limit"),
            Self::InternalInvariant => write!(fmt, "encoder could not select a representation"),
            Self::Io(err) => write!(fmt, "write error: {}", err),
        }
    }
}

impl error::Error for EncoderError {}
