//! The representation codec: turns an HPACK header block into header
//! fields, per [RFC 7541 §6].
//!
//! Decoding works against a clone of the live table and only swaps it in
//! once the whole block has decoded successfully, so a truncated or
//! malformed representation midway through a block cannot leave the real
//! dynamic table half-updated. Self-referencing indices (a literal that
//! names an entry the same block just inserted) still resolve correctly,
//! since the clone is mutated in place as the block is walked.
//!
//! [RFC 7541 §6]: https://tools.ietf.org/html/rfc7541#section-6

use crate::error::Error;
use crate::integer;
use crate::string;
use crate::table::Table;
use crate::Header;

/// Default ceiling on a single decoded name or value, guarding against a
/// peer claiming an enormous string length to exhaust memory.
pub const DEFAULT_MAX_STRING_LEN: usize = 4096;

/// Decodes HPACK header blocks against a running compression context.
pub struct Decoder {
    table: Table,
    max_string_len: usize,
}

impl Decoder {
    /// Creates a decoder with a dynamic table starting at `dynamic_size`
    /// bytes of HPACK-accounted size, bounded by `max_allowed_size` (the
    /// value this endpoint has advertised via
    /// `SETTINGS_HEADER_TABLE_SIZE`).
    pub fn new(dynamic_size: u32, max_allowed_size: u32) -> Self {
        Self {
            table: Table::new(dynamic_size, max_allowed_size),
            max_string_len: DEFAULT_MAX_STRING_LEN,
        }
    }

    /// Overrides the per-string length ceiling.
    pub fn with_max_string_len(mut self, max: usize) -> Self {
        self.max_string_len = max;
        self
    }

    /// Current dynamic table capacity, in HPACK-accounted bytes.
    pub fn max_dynamic_size(&self) -> u32 {
        self.table.max_dynamic_size()
    }

    /// Raises or lowers the ceiling future size-update representations must
    /// respect — call this when this endpoint's own advertised
    /// `SETTINGS_HEADER_TABLE_SIZE` changes, so an incoming size update above
    /// the new limit is rejected as a `ProtocolError` rather than silently
    /// honored against a stale ceiling.
    pub fn set_max_allowed_size(&mut self, max_allowed: u32) {
        self.table.set_max_allowed_size(max_allowed);
    }

    /// Sum of `len(name)+len(value)+32` over currently live dynamic
    /// entries.
    pub fn dynamic_table_size(&self) -> usize {
        self.table.dynamic_size()
    }

    /// Decodes one complete header block into a sequence of header fields,
    /// in wire order, alongside the number of bytes consumed from `src`
    /// (always `src.len()` on success: the whole buffer must hold exactly
    /// one block, with no trailing bytes belonging to the next one).
    pub fn decode(&mut self, src: &[u8]) -> Result<(Vec<Header>, usize), Error> {
        let mut staged = self.table.clone();
        let mut headers = Vec::new();
        let mut pos = 0;
        let mut seen_non_update = false;

        while pos < src.len() {
            let first = src[pos];

            if first & 0x80 != 0 {
                let (index, consumed) = integer::decode_integer(first, 7, &src[pos + 1..])?;
                pos += 1 + consumed;
                if index == 0 {
                    return Err(Error::InvalidIndex);
                }
                let (name, value) = staged.get(index).ok_or(Error::InvalidIndex)?;
                headers.push(Header::new(name, value));
                seen_non_update = true;
            } else if first & 0x40 != 0 {
                let (index, consumed) = integer::decode_integer(first, 6, &src[pos + 1..])?;
                pos += 1 + consumed;
                let (name, value, new_pos) =
                    self.read_literal(&staged, index, src, pos)?;
                pos = new_pos;
                staged.insert(&name, &value);
                headers.push(Header::new(name, value));
                seen_non_update = true;
            } else if first & 0x20 != 0 {
                if seen_non_update {
                    return Err(Error::ProtocolError);
                }
                let (new_size, consumed) = integer::decode_integer(first, 5, &src[pos + 1..])?;
                pos += 1 + consumed;
                if !staged.update_max_dynamic_size(new_size) {
                    return Err(Error::ProtocolError);
                }
            } else if first & 0x10 != 0 {
                let (index, consumed) = integer::decode_integer(first, 4, &src[pos + 1..])?;
                pos += 1 + consumed;
                let (name, value, new_pos) =
                    self.read_literal(&staged, index, src, pos)?;
                pos = new_pos;
                headers.push(Header::sensitive(name, value));
                seen_non_update = true;
            } else {
                let (index, consumed) = integer::decode_integer(first, 4, &src[pos + 1..])?;
                pos += 1 + consumed;
                let (name, value, new_pos) =
                    self.read_literal(&staged, index, src, pos)?;
                pos = new_pos;
                headers.push(Header::new(name, value));
                seen_non_update = true;
            }
        }

        self.table = staged;
        Ok((headers, pos))
    }

    /// Reads a literal's name (from the table if `index != 0`, else as a
    /// string literal) followed by its value, returning the position just
    /// past the value.
    fn read_literal(
        &self,
        table: &Table,
        index: u32,
        src: &[u8],
        mut pos: usize,
    ) -> Result<(Vec<u8>, Vec<u8>, usize), Error> {
        let name = if index == 0 {
            let (name, consumed) = string::decode_string(&src[pos..], self.max_string_len)?;
            pos += consumed;
            name
        } else {
            let (name, _) = table.get(index).ok_or(Error::InvalidIndex)?;
            name
        };

        let (value, consumed) = string::decode_string(&src[pos..], self.max_string_len)?;
        pos += consumed;

        Ok((name, value, pos))
    }
}
