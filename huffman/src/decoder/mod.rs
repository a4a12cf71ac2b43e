//! Provides an implementation of the HPACK [canonical Huffman] decoder.
//!
//! Decoding walks an implicit binary tree bit by bit: each `0` descends
//! left, each `1` descends right, and reaching a leaf emits the associated
//! octet and restarts from the root. The tree is built once, lazily, from
//! [`crate::table::ENCODE_TABLE`] and shared across all decode calls.
//!
//! At the end of the stream, up to 7 leftover bits are valid as long as
//! they are all ones — the leading bits of the EOS code, which is itself
//! never emitted. Anything else (8 or more leftover bits, or leftover bits
//! that are not all ones, or an EOS symbol reached mid-stream) is an error.
//!
//! [canonical Huffman]: https://en.wikipedia.org/wiki/Canonical_Huffman_code

mod error;
mod tree;

pub use error::*;
use tree::tree;

/// Index of the end-of-string symbol.
const EOS: u16 = 256;

/// Decodes a Huffman-compressed `src` sequence into `dst`, appending the
/// decoded octets.
///
/// **Example:**
///
/// ```rust
/// use hpack_huffman::decode;
///
/// let mut dst = Vec::new();
/// decode(&[0xf1, 0xe3, 0xc2, 0xe5, 0xf2, 0x3a, 0x6b, 0xa0, 0xab, 0x90, 0xf4, 0xff], &mut dst).unwrap();
/// assert_eq!(dst, b"www.example.com");
/// ```
pub fn decode(src: &[u8], dst: &mut Vec<u8>) -> Result<(), DecoderError> {
    let nodes = tree();
    let mut node = 0usize; // current tree position, 0 = root
    let mut pad_bits: u32 = 0; // bits consumed since the last completed symbol
    let mut pad_buf: u32 = 0; // their raw value, used to check "all ones" padding

    for &byte in src {
        for i in (0..8).rev() {
            let bit = ((byte >> i) & 1) as usize;
            node = match nodes[node].children[bit] {
                Some(next) => next,
                None => return Err(DecoderError::InvalidPadding),
            };
            pad_bits += 1;
            pad_buf = (pad_buf << 1) | bit as u32;

            if let Some(symbol) = nodes[node].symbol {
                if symbol == EOS {
                    return Err(DecoderError::EosInStream);
                }
                dst.push(symbol as u8);
                node = 0;
                pad_bits = 0;
                pad_buf = 0;
            }
        }
    }

    if node != 0 {
        if pad_bits >= 8 {
            return Err(DecoderError::OverlongPadding);
        }
        let all_ones = pad_buf == (1u32 << pad_bits) - 1;
        if !all_ones {
            return Err(DecoderError::InvalidPadding);
        }
    }

    Ok(())
}
