//! Inputs accepted by [`super::Encoder::encode`], letting a caller pick an
//! exact wire representation instead of going through
//! [`super::Encoder::encode_header`]'s automatic policy.

/// A single header field to encode, in one of HPACK's wire forms.
#[derive(Debug, Clone)]
pub enum EncoderInput<'a> {
    /// A fully indexed header field (`name` and `value` both already in
    /// the table).
    Indexed(u32),

    /// An indexed name with an owned literal value.
    IndexedNameOwned(u32, Vec<u8>, u8),

    /// An indexed name with a borrowed literal value.
    IndexedNameBorrowed(u32, &'a [u8], u8),

    /// A literal name and value, both owned.
    LiteralOwned(Vec<u8>, Vec<u8>, u8),

    /// A literal name and value, both borrowed.
    LiteralBorrowed(&'a [u8], &'a [u8], u8),
}

impl From<u32> for EncoderInput<'_> {
    fn from(index: u32) -> Self {
        Self::Indexed(index)
    }
}

impl From<(u32, Vec<u8>, u8)> for EncoderInput<'_> {
    fn from((index, value, flags): (u32, Vec<u8>, u8)) -> Self {
        Self::IndexedNameOwned(index, value, flags)
    }
}

impl<'a> From<(u32, &'a [u8], u8)> for EncoderInput<'a> {
    fn from((index, value, flags): (u32, &'a [u8], u8)) -> Self {
        Self::IndexedNameBorrowed(index, value, flags)
    }
}

impl From<(Vec<u8>, Vec<u8>, u8)> for EncoderInput<'_> {
    fn from((name, value, flags): (Vec<u8>, Vec<u8>, u8)) -> Self {
        Self::LiteralOwned(name, value, flags)
    }
}

impl<'a> From<(&'a [u8], &'a [u8], u8)> for EncoderInput<'a> {
    fn from((name, value, flags): (&'a [u8], &'a [u8], u8)) -> Self {
        Self::LiteralBorrowed(name, value, flags)
    }
}
