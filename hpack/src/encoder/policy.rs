//! Default choices [`super::Encoder::encode_header`] makes on a caller's
//! behalf: whether to Huffman-encode a string, and whether a new literal is
//! worth adding to the dynamic table.

use std::collections::BTreeSet;

/// Governs the automatic representation choices `encode_header` makes.
#[derive(Debug, Clone)]
pub struct EncoderPolicy {
    huffman: bool,
    with_indexing: bool,
    not_indexed_names: BTreeSet<Vec<u8>>,
}

impl Default for EncoderPolicy {
    fn default() -> Self {
        Self {
            huffman: true,
            with_indexing: true,
            not_indexed_names: default_not_indexed_names(),
        }
    }
}

impl EncoderPolicy {
    /// Disables Huffman coding entirely, always emitting raw string
    /// literals. Useful for interop testing against decoders that don't
    /// support it.
    pub fn without_huffman(mut self) -> Self {
        self.huffman = false;
        self
    }

    /// Never adds new literals to the dynamic table, regardless of name.
    pub fn without_indexing(mut self) -> Self {
        self.with_indexing = false;
        self
    }

    /// Marks `name` as one that should never be added to the dynamic
    /// table (e.g. a header whose values vary per-request and would only
    /// evict more useful entries).
    pub fn never_index(mut self, name: &[u8]) -> Self {
        self.not_indexed_names.insert(name.to_vec());
        self
    }

    pub(super) fn should_huffman(&self, value: &[u8]) -> bool {
        self.huffman && crate::string::should_huffman(value)
    }

    pub(super) fn should_index(&self, name: &[u8]) -> bool {
        self.with_indexing && !self.not_indexed_names.contains(name)
    }
}

/// Headers excluded from indexing by default: either highly variable
/// per-request (cache pollution with little reuse) or already bounded in
/// size such that indexing buys nothing.
fn default_not_indexed_names() -> BTreeSet<Vec<u8>> {
    [
        ":path",
        "set-cookie",
        "content-length",
        "etag",
        "if-modified-since",
        "if-none-match",
        "location",
        "date",
    ]
    .iter()
    .map(|s| s.as_bytes().to_vec())
    .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults_exclude_high_cardinality_headers() {
        let policy = EncoderPolicy::default();
        assert!(!policy.should_index(b":path"));
        assert!(policy.should_index(b"accept"));
    }

    #[test]
    fn without_indexing_excludes_everything() {
        let policy = EncoderPolicy::default().without_indexing();
        assert!(!policy.should_index(b"accept"));
    }

    #[test]
    fn never_index_adds_to_the_exclusion_set() {
        let policy = EncoderPolicy::default().never_index(b"x-request-id");
        assert!(!policy.should_index(b"x-request-id"));
    }
}
