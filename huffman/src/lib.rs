//! Provides an implementation of the canonical Huffman code required by
//! [HPACK] (HTTP/2 header compression, [RFC 7541]) for encoding and
//! decoding literal string octets.
//!
//! [HPACK]: https://tools.ietf.org/html/rfc7541
//! [RFC 7541]: https://tools.ietf.org/html/rfc7541#appendix-B

pub mod decoder;
pub mod encoder;
pub mod table;

pub use decoder::{decode, DecoderError};
pub use encoder::{encode, encoded_len};
