//! HPACK ([RFC 7541]) header compression for HTTP/2: integer and string
//! literal codecs, the static and dynamic tables, and a representation
//! codec tying them together into [`Decoder`] and [`Encoder`].
//!
//! [RFC 7541]: https://tools.ietf.org/html/rfc7541

pub mod decoder;
pub mod encoder;
mod error;
mod integer;
mod string;
mod table;

pub use decoder::Decoder;
pub use encoder::{Encoder, EncoderInput, EncoderPolicy};
pub use error::{EncoderError, Error};

/// A decoded header field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub name: Vec<u8>,
    pub value: Vec<u8>,
    /// Set when the field arrived as a "never indexed" literal: callers
    /// should avoid re-transmitting it in cleartext (e.g. over a proxy)
    /// and must never insert it into a dynamic table.
    pub sensitive: bool,
}

impl Header {
    pub fn new(name: Vec<u8>, value: Vec<u8>) -> Self {
        Self {
            name,
            value,
            sensitive: false,
        }
    }

    pub fn sensitive(name: Vec<u8>, value: Vec<u8>) -> Self {
        Self {
            name,
            value,
            sensitive: true,
        }
    }
}
