//! Provides HPACK's string literal representation ([RFC 7541 §5.2]).
//!
//! A string on the wire is a one-bit Huffman flag `H` packed into the high
//! bit of a 7-bit length prefix, followed by `length` octets: either raw, or
//! Huffman-encoded (decoded per the rules in [`hpack_huffman`]).
//!
//! [RFC 7541 §5.2]: https://tools.ietf.org/html/rfc7541#section-5.2

use std::io::Write;

use hpack_huffman::{decode as huffman_decode, encode as huffman_encode, encoded_len};

use crate::error::{Error, EncoderError};

/// Encodes `value` as an HPACK string literal into `dst`. Uses the Huffman
/// form iff it is strictly shorter than the raw octets (per the encoder
/// policy in RFC 7541 §4.7 / this crate's §4.7).
pub fn encode_string<W: Write>(value: &[u8], huffman: bool, mut dst: W) -> Result<(), EncoderError> {
    if huffman {
        let mut encoded = Vec::with_capacity(encoded_len(value));
        huffman_encode(value, &mut encoded);
        crate::integer::encode_integer(encoded.len() as u32, 0x80, 7, &mut dst)?;
        dst.write_all(&encoded)?;
    } else {
        crate::integer::encode_integer(value.len() as u32, 0x0, 7, &mut dst)?;
        dst.write_all(value)?;
    }
    Ok(())
}

/// Chooses whether Huffman-encoding `value` is strictly shorter than its
/// raw form.
pub fn should_huffman(value: &[u8]) -> bool {
    encoded_len(value) < value.len()
}

/// Decodes an HPACK string literal starting at `src[0]` (the length-prefix
/// byte). `max_len` bounds the decoded octet count; exceeding it is
/// [`Error::TooLong`]. Returns the decoded bytes and the number of input
/// bytes consumed.
pub fn decode_string(src: &[u8], max_len: usize) -> Result<(Vec<u8>, usize), Error> {
    let first = *src.first().ok_or(Error::Truncated)?;
    let huffman = first & 0x80 != 0;
    let (len, int_consumed) = crate::integer::decode_integer(first, 7, &src[1..])?;
    let len = len as usize;
    let header_len = 1 + int_consumed;

    let raw = src
        .get(header_len..header_len + len)
        .ok_or(Error::Truncated)?;

    let decoded = if huffman {
        let mut out = Vec::new();
        huffman_decode(raw, &mut out)?;
        if out.len() > max_len {
            return Err(Error::TooLong);
        }
        out
    } else {
        if raw.len() > max_len {
            return Err(Error::TooLong);
        }
        raw.to_vec()
    };

    Ok((decoded, header_len + len))
}

#[cfg(test)]
mod test {
    use super::*;

    /// RFC 7541 C.2.1: "custom-key" encoded raw.
    #[test]
    fn encodes_raw_string() {
        let mut dst = Vec::new();
        encode_string(b"custom-key", false, &mut dst).unwrap();
        assert_eq!(dst[0], 10);
        assert_eq!(&dst[1..], b"custom-key");
    }

    /// RFC 7541 C.4.1: ":authority" and "www.example.com" Huffman forms.
    #[test]
    fn encodes_huffman_string() {
        let mut dst = Vec::new();
        encode_string(b"www.example.com", true, &mut dst).unwrap();
        assert_eq!(dst[0] & 0x80, 0x80);
        assert_eq!(dst[0] & 0x7f, 12); // encoded length
    }

    /// Round-trips through decode with a generous max_len.
    #[test]
    fn roundtrips() {
        for (s, huffman) in [(&b"hello world"[..], false), (b"hello world", true)] {
            let mut dst = Vec::new();
            encode_string(s, huffman, &mut dst).unwrap();
            let (decoded, consumed) = decode_string(&dst, 4096).unwrap();
            assert_eq!(decoded, s);
            assert_eq!(consumed, dst.len());
        }
    }

    /// 0-length string boundary.
    #[test]
    fn zero_length_string() {
        let mut dst = Vec::new();
        encode_string(b"", false, &mut dst).unwrap();
        assert_eq!(dst, vec![0]);
        let (decoded, consumed) = decode_string(&dst, 16).unwrap();
        assert!(decoded.is_empty());
        assert_eq!(consumed, 1);
    }

    /// Decoding beyond the caller's buffer bound is `TooLong`.
    #[test]
    fn too_long_is_rejected() {
        let mut dst = Vec::new();
        encode_string(b"0123456789", false, &mut dst).unwrap();
        assert_eq!(decode_string(&dst, 5), Err(Error::TooLong));
    }

    /// A length prefix claiming more bytes than remain is `Truncated`.
    #[test]
    fn truncated_string_body() {
        assert_eq!(decode_string(&[5, b'a', b'b'], 16), Err(Error::Truncated));
    }
}
