//! The HPACK static table ([RFC 7541 Appendix A]): 61 fixed, well-known
//! `(name, value)` pairs, 1-indexed. Index `0` is reserved and never
//! resolves to an entry.
//!
//! [RFC 7541 Appendix A]: https://tools.ietf.org/html/rfc7541#appendix-A

macro_rules! static_table {
    ($($name:expr, $value:expr);+ $(;)?) => {
        &[$(($name, $value)),+]
    };
}

#[rustfmt::skip]
pub const STATIC_TABLE: &[(&str, &str)] = static_table!(
    "", "";
    ":authority", "";
    ":method", "GET";
    ":method", "POST";
    ":path", "/";
    ":path", "/index.html";
    ":scheme", "http";
    ":scheme", "https";
    ":status", "200";
    ":status", "204";
    ":status", "206";
    ":status", "304";
    ":status", "400";
    ":status", "404";
    ":status", "500";
    "accept-charset", "";
    "accept-encoding", "gzip, deflate";
    "accept-language", "";
    "accept-ranges", "";
    "accept", "";
    "access-control-allow-origin", "";
    "age", "";
    "allow", "";
    "authorization", "";
    "cache-control", "";
    "content-disposition", "";
    "content-encoding", "";
    "content-language", "";
    "content-length", "";
    "content-location", "";
    "content-range", "";
    "content-type", "";
    "cookie", "";
    "date", "";
    "etag", "";
    "expect", "";
    "expires", "";
    "from", "";
    "host", "";
    "if-match", "";
    "if-modified-since", "";
    "if-none-match", "";
    "if-range", "";
    "if-unmodified-since", "";
    "last-modified", "";
    "link", "";
    "location", "";
    "max-forwards", "";
    "proxy-authenticate", "";
    "proxy-authorization", "";
    "range", "";
    "referer", "";
    "refresh", "";
    "retry-after", "";
    "server", "";
    "set-cookie", "";
    "strict-transport-security", "";
    "transfer-encoding", "";
    "user-agent", "";
    "vary", "";
    "via", "";
    "www-authenticate", "";
);

/// Number of real entries, excluding the unused index-0 slot.
pub const STATIC_TABLE_SIZE: usize = 61;

/// Looks up a static table entry by its 1-based index. Returns `None` for
/// index `0` or any index beyond the static table.
pub fn get(index: u32) -> Option<(&'static str, &'static str)> {
    if index == 0 || index as usize > STATIC_TABLE_SIZE {
        return None;
    }
    STATIC_TABLE.get(index as usize).copied()
}

/// Looks up `(name, value)` in the static table. Returns the lowest index
/// with a matching name, and separately whether the value also matched
/// (`exact`). Name comparison is ASCII case-insensitive.
pub fn find(name: &[u8], value: &[u8]) -> Option<(u32, bool)> {
    let mut name_match: Option<u32> = None;
    for (i, &(n, v)) in STATIC_TABLE.iter().enumerate().skip(1) {
        if n.as_bytes().eq_ignore_ascii_case(name) {
            if v.as_bytes() == value {
                return Some((i as u32, true));
            }
            if name_match.is_none() {
                name_match = Some(i as u32);
            }
        }
    }
    name_match.map(|i| (i, false))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn index_zero_is_reserved() {
        assert_eq!(get(0), None);
    }

    #[test]
    fn known_indices_match_rfc_appendix_a() {
        assert_eq!(get(2), Some((":method", "GET")));
        assert_eq!(get(8), Some((":status", "200")));
        assert_eq!(get(61), Some(("www-authenticate", "")));
        assert_eq!(get(62), None);
    }

    #[test]
    fn find_prefers_exact_value_match() {
        assert_eq!(find(b":method", b"POST"), Some((3, true)));
        assert_eq!(find(b":method", b"PATCH"), Some((2, false))); // first name match
        assert_eq!(find(b"x-unknown", b""), None);
    }

    #[test]
    fn find_is_case_insensitive_on_name() {
        assert_eq!(find(b":Method", b"GET"), Some((2, true)));
    }
}
