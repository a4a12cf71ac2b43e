//! Builds HPACK header blocks: wraps a [`Table`] and chooses wire
//! representations for header fields, either explicitly via
//! [`Encoder::encode`] or automatically via [`Encoder::encode_header`].

mod input;
mod policy;

pub use input::EncoderInput;
pub use policy::EncoderPolicy;

use std::io::Write;

use crate::error::EncoderError;
use crate::integer;
use crate::string;
use crate::table::Table;

/// Huffman-encode the literal name.
pub const HUFFMAN_NAME: u8 = 0x1;
/// Huffman-encode the literal value.
pub const HUFFMAN_VALUE: u8 = 0x2;
/// Add this entry to the dynamic table after emitting it.
pub const WITH_INDEXING: u8 = 0x4;
/// Mark this entry "never indexed": intermediaries must re-encode it as a
/// literal too, and never add it to a dynamic table.
pub const NEVER_INDEXED: u8 = 0x8;
/// Let the encoder choose Huffman vs. raw per-string on whichever is
/// shorter, instead of respecting `HUFFMAN_NAME`/`HUFFMAN_VALUE` literally.
pub const BEST_FORMAT: u8 = 0x10;

/// Encodes header fields into HPACK header blocks against a running
/// compression context.
pub struct Encoder {
    table: Table,
    policy: EncoderPolicy,
}

impl Encoder {
    /// Creates an encoder with a dynamic table starting at `capacity`
    /// bytes of HPACK-accounted size, bounded by `max_allowed_size` (the
    /// peer's advertised `SETTINGS_HEADER_TABLE_SIZE`).
    pub fn new(capacity: u32, max_allowed_size: u32) -> Self {
        Self {
            table: Table::new(capacity, max_allowed_size),
            policy: EncoderPolicy::default(),
        }
    }

    /// Replaces the default encoding policy.
    pub fn with_policy(mut self, policy: EncoderPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Current dynamic table size, in HPACK-accounted bytes.
    pub fn max_dynamic_size(&self) -> u32 {
        self.table.max_dynamic_size()
    }

    /// Raises the ceiling future resizes must respect — call this when the
    /// peer raises `SETTINGS_HEADER_TABLE_SIZE`.
    pub fn set_max_allowed_size(&mut self, max_allowed: u32) {
        self.table.set_max_allowed_size(max_allowed);
    }

    /// Resizes the dynamic table and emits the corresponding dynamic table
    /// size update representation on the wire. Fails if `new_size`
    /// exceeds the peer-signaled ceiling.
    pub fn update_max_dynamic_size<W: Write>(
        &mut self,
        new_size: u32,
        mut dst: W,
    ) -> Result<(), EncoderError> {
        if new_size > self.table.max_allowed_size() {
            return Err(EncoderError::CapacityExceeded);
        }
        integer::encode_integer(new_size, 0x20, 5, &mut dst)?;
        self.table.update_max_dynamic_size(new_size);
        Ok(())
    }

    /// Encodes an explicit wire representation, performing the matching
    /// dynamic table insertion when the input carries `WITH_INDEXING`.
    pub fn encode<'a, F, W>(&mut self, input: F, mut dst: W) -> Result<(), EncoderError>
    where
        F: Into<EncoderInput<'a>>,
        W: Write,
    {
        match input.into() {
            EncoderInput::Indexed(index) => self.encode_indexed(index, dst),

            EncoderInput::IndexedNameOwned(index, value, flags) => {
                self.encode_indexed_name(index, &value, flags, &mut dst)?;
                if flags & WITH_INDEXING != 0 {
                    let (name, _) = self.table.get(index).ok_or(EncoderError::InvalidIndex)?;
                    self.table.insert(&name, &value);
                }
                Ok(())
            }

            EncoderInput::IndexedNameBorrowed(index, value, flags) => {
                self.encode_indexed_name(index, value, flags, &mut dst)?;
                if flags & WITH_INDEXING != 0 {
                    let (name, _) = self.table.get(index).ok_or(EncoderError::InvalidIndex)?;
                    self.table.insert(&name, value);
                }
                Ok(())
            }

            EncoderInput::LiteralOwned(name, value, flags) => {
                self.encode_literal(&name, &value, flags, &mut dst)?;
                if flags & WITH_INDEXING != 0 {
                    self.table.insert(&name, &value);
                }
                Ok(())
            }

            EncoderInput::LiteralBorrowed(name, value, flags) => {
                self.encode_literal(name, value, flags, &mut dst)?;
                if flags & WITH_INDEXING != 0 {
                    self.table.insert(name, value);
                }
                Ok(())
            }
        }
    }

    /// Encodes `(name, value)` using this encoder's [`EncoderPolicy`] to
    /// pick indexing, Huffman coding, and never-indexed status
    /// automatically. `sensitive` forces a never-indexed literal
    /// regardless of policy.
    pub fn encode_header<W: Write>(
        &mut self,
        name: &[u8],
        value: &[u8],
        sensitive: bool,
        mut dst: W,
    ) -> Result<(), EncoderError> {
        if let Some((index, exact)) = self.table.find(name, value) {
            if exact && !sensitive {
                return self.encode(index, &mut dst);
            }

            let flags = self.literal_flags(name, value, sensitive);
            return self.encode((index, value.to_vec(), flags), &mut dst);
        }

        let flags = self.literal_flags(name, value, sensitive)
            | if self.policy.should_huffman(name) { HUFFMAN_NAME } else { 0 };
        self.encode((name.to_vec(), value.to_vec(), flags), &mut dst)
    }

    /// Encodes an entire header list into one header block, in order,
    /// applying [`Encoder::encode_header`]'s automatic policy to each
    /// `(name, value, sensitive)` triple.
    pub fn encode_headers<'a, W, I>(&mut self, headers: I, mut dst: W) -> Result<(), EncoderError>
    where
        W: Write,
        I: IntoIterator<Item = (&'a [u8], &'a [u8], bool)>,
    {
        for (name, value, sensitive) in headers {
            self.encode_header(name, value, sensitive, &mut dst)?;
        }
        Ok(())
    }

    fn literal_flags(&self, name: &[u8], value: &[u8], sensitive: bool) -> u8 {
        let mut flags = 0u8;
        if self.policy.should_huffman(value) {
            flags |= HUFFMAN_VALUE;
        }
        if sensitive {
            flags |= NEVER_INDEXED;
        } else if self.policy.should_index(name) {
            flags |= WITH_INDEXING;
        }
        flags
    }

    fn encode_indexed<W: Write>(&self, index: u32, dst: W) -> Result<(), EncoderError> {
        integer::encode_integer(index, 0x80, 7, dst)
    }

    fn encode_indexed_name<W: Write>(
        &self,
        index: u32,
        value: &[u8],
        flags: u8,
        mut dst: W,
    ) -> Result<(), EncoderError> {
        let (high_bits, prefix_bits) = representation_bits(flags);
        integer::encode_integer(index, high_bits, prefix_bits, &mut dst)?;
        string::encode_string(value, huffman_bit(flags, HUFFMAN_VALUE, value), dst)
    }

    fn encode_literal<W: Write>(
        &self,
        name: &[u8],
        value: &[u8],
        flags: u8,
        mut dst: W,
    ) -> Result<(), EncoderError> {
        let (high_bits, prefix_bits) = representation_bits(flags);
        integer::encode_integer(0, high_bits, prefix_bits, &mut dst)?;
        string::encode_string(name, huffman_bit(flags, HUFFMAN_NAME, name), &mut dst)?;
        string::encode_string(value, huffman_bit(flags, HUFFMAN_VALUE, value), dst)
    }
}

/// Whether a string should be Huffman-encoded: `BEST_FORMAT` defers to
/// whichever form is shorter, otherwise the caller's explicit flag wins.
fn huffman_bit(flags: u8, bit: u8, value: &[u8]) -> bool {
    if flags & BEST_FORMAT != 0 {
        string::should_huffman(value)
    } else {
        flags & bit != 0
    }
}

/// Maps representation flags to the leading high bits and prefix width
/// shared by both indexed-name and literal-name forms.
fn representation_bits(flags: u8) -> (u8, u8) {
    if flags & WITH_INDEXING != 0 {
        (0x40, 6)
    } else if flags & NEVER_INDEXED != 0 {
        (0x10, 4)
    } else {
        (0x00, 4)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn encodes_indexed() {
        let mut encoder = Encoder::new(4096, 4096);
        let mut dst = Vec::new();
        encoder.encode(2u32, &mut dst).unwrap();
        assert_eq!(dst, vec![0x82]);
    }

    #[test]
    fn encodes_indexed_name_with_indexing() {
        let mut encoder = Encoder::new(4096, 4096);
        let mut dst = Vec::new();
        // :path index 5, value "/sample/path", with indexing, no huffman.
        encoder
            .encode((5u32, b"/sample/path".to_vec(), WITH_INDEXING), &mut dst)
            .unwrap();
        assert_eq!(dst[0] & 0xc0, 0x40);
        assert_eq!(encoder.table.dynamic_len(), 1);
    }

    #[test]
    fn encodes_literal_with_indexing() {
        let mut encoder = Encoder::new(4096, 4096);
        let mut dst = Vec::new();
        encoder
            .encode(
                (b"custom-key".to_vec(), b"custom-header".to_vec(), WITH_INDEXING),
                &mut dst,
            )
            .unwrap();
        assert_eq!(dst[0], 0x40);
        assert_eq!(encoder.table.dynamic_len(), 1);
    }

    #[test]
    fn encodes_borrowed_literal_with_indexing() {
        let mut encoder = Encoder::new(4096, 4096);
        let mut dst = Vec::new();
        let name: &[u8] = b"custom-key";
        let value: &[u8] = b"custom-header";
        encoder.encode((name, value, WITH_INDEXING), &mut dst).unwrap();
        assert_eq!(encoder.table.dynamic_len(), 1);
    }

    #[test]
    fn encodes_indexed_name_without_indexing() {
        let mut encoder = Encoder::new(4096, 4096);
        let mut dst = Vec::new();
        encoder.encode((5u32, b"/sample/path".to_vec(), 0u8), &mut dst).unwrap();
        assert_eq!(dst[0] & 0xf0, 0x00);
        assert_eq!(encoder.table.dynamic_len(), 0);
    }

    #[test]
    fn encodes_literal_without_indexing() {
        let mut encoder = Encoder::new(4096, 4096);
        let mut dst = Vec::new();
        encoder
            .encode((b"custom-key".to_vec(), b"custom-header".to_vec(), 0u8), &mut dst)
            .unwrap();
        assert_eq!(dst[0], 0x00);
        assert_eq!(encoder.table.dynamic_len(), 0);
    }

    #[test]
    fn encodes_indexed_name_never_indexed() {
        let mut encoder = Encoder::new(4096, 4096);
        let mut dst = Vec::new();
        encoder
            .encode((4u32, b"secret".to_vec(), NEVER_INDEXED), &mut dst)
            .unwrap();
        assert_eq!(dst[0] & 0xf0, 0x10);
        assert_eq!(encoder.table.dynamic_len(), 0);
    }

    #[test]
    fn encodes_literal_never_indexed() {
        let mut encoder = Encoder::new(4096, 4096);
        let mut dst = Vec::new();
        encoder
            .encode((b"password".to_vec(), b"secret".to_vec(), NEVER_INDEXED), &mut dst)
            .unwrap();
        assert_eq!(dst[0], 0x10);
    }

    #[test]
    fn encodes_literal_automatically() {
        let mut encoder = Encoder::new(4096, 4096);
        let mut dst = Vec::new();
        encoder.encode_header(b"accept", b"*/*", false, &mut dst).unwrap();
        assert_eq!(encoder.table.dynamic_len(), 1);
    }

    #[test]
    fn sensitive_headers_are_never_indexed_and_not_stored() {
        let mut encoder = Encoder::new(4096, 4096);
        let mut dst = Vec::new();
        encoder
            .encode_header(b"authorization", b"Bearer t0k3n", true, &mut dst)
            .unwrap();
        assert_eq!(dst[0], 0x10);
        assert_eq!(encoder.table.dynamic_len(), 0);
    }

    #[test]
    fn policy_excludes_high_cardinality_headers_from_indexing() {
        let mut encoder = Encoder::new(4096, 4096);
        let mut dst = Vec::new();
        encoder.encode_header(b":path", b"/a/b/c", false, &mut dst).unwrap();
        assert_eq!(encoder.table.dynamic_len(), 0);
    }

    #[test]
    fn repeated_header_reuses_dynamic_index() {
        let mut encoder = Encoder::new(4096, 4096);
        let mut first = Vec::new();
        encoder.encode_header(b"x-request-id", b"abc", false, &mut first).unwrap();
        let mut second = Vec::new();
        encoder.encode_header(b"x-request-id", b"abc", false, &mut second).unwrap();
        assert_eq!(second, vec![0xbe]); // indexed, combined index 62
        assert_eq!(encoder.table.dynamic_len(), 1);
    }

    #[test]
    fn encodes_a_header_list_in_order() {
        let mut encoder = Encoder::new(4096, 4096);
        let mut decoder = crate::Decoder::new(4096, 4096);
        let mut dst = Vec::new();
        encoder
            .encode_headers(
                [
                    (&b":method"[..], &b"GET"[..], false),
                    (b":path", b"/", false),
                    (b"accept", b"*/*", false),
                ],
                &mut dst,
            )
            .unwrap();
        let (headers, consumed) = decoder.decode(&dst).unwrap();
        assert_eq!(consumed, dst.len());
        assert_eq!(headers.len(), 3);
        assert_eq!(headers[0].name, b":method");
        assert_eq!(headers[1].name, b":path");
        assert_eq!(headers[2].name, b"accept");
    }

    #[test]
    fn updates_max_dynamic_size() {
        let mut encoder = Encoder::new(4096, 4096);
        let mut dst = Vec::new();
        encoder.update_max_dynamic_size(100, &mut dst).unwrap();
        assert_eq!(encoder.max_dynamic_size(), 100);
        assert_eq!(dst[0] & 0xe0, 0x20);
    }

    #[test]
    fn resize_above_peer_ceiling_is_rejected() {
        let mut encoder = Encoder::new(4096, 4096);
        let mut dst = Vec::new();
        assert!(matches!(
            encoder.update_max_dynamic_size(8192, &mut dst),
            Err(EncoderError::CapacityExceeded)
        ));
    }
}
