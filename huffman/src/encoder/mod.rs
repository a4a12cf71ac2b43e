//! Provides an implementation of the HPACK [canonical Huffman] encoder.
//!
//! The encoder packs one variable-length code per input octet into a
//! contiguous bit stream, most significant bit first. When the last octet's
//! code does not end on a byte boundary, the remaining bits are padded with
//! the high-order bits of the end-of-string (EOS) code, which are all ones.
//! The EOS symbol itself is never emitted.
//!
//! [canonical Huffman]: https://en.wikipedia.org/wiki/Canonical_Huffman_code

use crate::table::ENCODE_TABLE;

/// Index of the end-of-string symbol in [`ENCODE_TABLE`].
const EOS: usize = 256;

/// Returns the number of bytes that `encode` would produce for `src`,
/// without allocating an output buffer. Used by callers deciding whether
/// Huffman encoding is shorter than the raw octet string (HPACK requires
/// this comparison before choosing a representation).
pub fn encoded_len(src: &[u8]) -> usize {
    let bits: usize = src
        .iter()
        .map(|&b| ENCODE_TABLE[b as usize].0 as usize)
        .sum();
    (bits + 7) / 8
}

/// Encodes `src` into `dst` using the canonical Huffman code from
/// [`ENCODE_TABLE`], appending the bit-packed, byte-padded result.
///
/// **Example:**
///
/// ```rust
/// use hpack_huffman::encode;
///
/// let mut dst = Vec::new();
/// encode(b"www.example.com", &mut dst);
/// ```
pub fn encode(src: &[u8], dst: &mut Vec<u8>) {
    let mut buf: u64 = 0; // bit accumulator, MSB-aligned within `bits_len`
    let mut bits_len: u32 = 0;

    for &byte in src {
        let (bits, code) = ENCODE_TABLE[byte as usize];
        buf = (buf << bits) | (code as u64);
        bits_len += bits as u32;

        while bits_len >= 8 {
            bits_len -= 8;
            dst.push(((buf >> bits_len) & 0xff) as u8);
        }
    }

    if bits_len > 0 {
        let (_, eos_code) = ENCODE_TABLE[EOS];
        let pad_bits = 8 - bits_len;
        buf = (buf << pad_bits) | (eos_code as u64 >> (30 - pad_bits));
        dst.push((buf & 0xff) as u8);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// Should pack each octet's canonical code into a byte-aligned stream,
    /// padding the final byte with the leading bits of the EOS code.
    #[test]
    fn encodes_ascii() {
        let mut dst = Vec::new();
        encode(b"www.example.com", &mut dst);
        assert_eq!(
            dst,
            vec![
                0xf1, 0xe3, 0xc2, 0xe5, 0xf2, 0x3a, 0x6b, 0xa0, 0xab, 0x90, 0xf4, 0xff,
            ]
        );
    }

    /// Should produce an empty stream for an empty input.
    #[test]
    fn encodes_empty() {
        let mut dst = Vec::new();
        encode(b"", &mut dst);
        assert!(dst.is_empty());
    }

    /// `encoded_len` should match the actual encoded length for arbitrary
    /// inputs, so callers can pick Huffman vs. raw without encoding twice.
    #[test]
    fn encoded_len_matches_encode() {
        for s in [&b""[..], b"a", b"www.example.com", b"Mozilla/5.0"] {
            let mut dst = Vec::new();
            encode(s, &mut dst);
            assert_eq!(encoded_len(s), dst.len());
        }
    }
}
