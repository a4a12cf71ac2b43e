//! The canonical Huffman code table used by HPACK (RFC 7541 Appendix B).
//!
//! Entry `k` holds `(bits, code)`: the number of bits in the code and the
//! code itself left-justified in the low `bits` bits of a `u32`. Octets
//! `0..=255` map one-to-one to table entries; entry `256` is the
//! end-of-string (EOS) symbol, which must never appear as a decoded octet.
//!
//! This table was generated from the HPACK specification's Huffman code
//! listing, the same source the `wtarreau/http2-exp` prototype hard-codes
//! in its `ht[257]` array.

#[rustfmt::skip]
pub const ENCODE_TABLE: [(u8, u32); 257] = [
    (13, 0x00001ff8),
    (23, 0x007fffd8),
    (28, 0x0fffffe2),
    (28, 0x0fffffe3),
    (28, 0x0fffffe4),
    (28, 0x0fffffe5),
    (28, 0x0fffffe6),
    (28, 0x0fffffe7),
    (28, 0x0fffffe8),
    (24, 0x00ffffea),
    (30, 0x3ffffffc),
    (28, 0x0fffffe9),
    (28, 0x0fffffea),
    (30, 0x3ffffffd),
    (28, 0x0fffffeb),
    (28, 0x0fffffec),
    (28, 0x0fffffed),
    (28, 0x0fffffee),
    (28, 0x0fffffef),
    (28, 0x0ffffff0),
    (28, 0x0ffffff1),
    (28, 0x0ffffff2),
    (30, 0x3ffffffe),
    (28, 0x0ffffff3),
    (28, 0x0ffffff4),
    (28, 0x0ffffff5),
    (28, 0x0ffffff6),
    (28, 0x0ffffff7),
    (28, 0x0ffffff8),
    (28, 0x0ffffff9),
    (28, 0x0ffffffa),
    (28, 0x0ffffffb),
    (6, 0x00000014),
    (10, 0x000003f8),
    (10, 0x000003f9),
    (12, 0x00000ffa),
    (13, 0x00001ff9),
    (6, 0x00000015),
    (8, 0x000000f8),
    (11, 0x000007fa),
    (10, 0x000003fa),
    (10, 0x000003fb),
    (8, 0x000000f9),
    (11, 0x000007fb),
    (8, 0x000000fa),
    (6, 0x00000016),
    (6, 0x00000017),
    (6, 0x00000018),
    (5, 0x00000000),
    (5, 0x00000001),
    (5, 0x00000002),
    (6, 0x00000019),
    (6, 0x0000001a),
    (6, 0x0000001b),
    (6, 0x0000001c),
    (6, 0x0000001d),
    (6, 0x0000001e),
    (6, 0x0000001f),
    (7, 0x0000005c),
    (8, 0x000000fb),
    (15, 0x00007ffc),
    (6, 0x00000020),
    (12, 0x00000ffb),
    (10, 0x000003fc),
    (13, 0x00001ffa),
    (6, 0x00000021),
    (7, 0x0000005d),
    (7, 0x0000005e),
    (7, 0x0000005f),
    (7, 0x00000060),
    (7, 0x00000061),
    (7, 0x00000062),
    (7, 0x00000063),
    (7, 0x00000064),
    (7, 0x00000065),
    (7, 0x00000066),
    (7, 0x00000067),
    (7, 0x00000068),
    (7, 0x00000069),
    (7, 0x0000006a),
    (7, 0x0000006b),
    (7, 0x0000006c),
    (7, 0x0000006d),
    (7, 0x0000006e),
    (7, 0x0000006f),
    (7, 0x00000070),
    (7, 0x00000071),
    (7, 0x00000072),
    (8, 0x000000fc),
    (7, 0x00000073),
    (8, 0x000000fd),
    (13, 0x00001ffb),
    (19, 0x0007fff0),
    (13, 0x00001ffc),
    (14, 0x00003ffc),
    (6, 0x00000022),
    (15, 0x00007ffd),
    (5, 0x00000003),
    (6, 0x00000023),
    (5, 0x00000004),
    (6, 0x00000024),
    (5, 0x00000005),
    (6, 0x00000025),
    (6, 0x00000026),
    (6, 0x00000027),
    (5, 0x00000006),
    (7, 0x00000074),
    (7, 0x00000075),
    (6, 0x00000028),
    (6, 0x00000029),
    (6, 0x0000002a),
    (5, 0x00000007),
    (6, 0x0000002b),
    (7, 0x00000076),
    (6, 0x0000002c),
    (5, 0x00000008),
    (5, 0x00000009),
    (6, 0x0000002d),
    (7, 0x00000077),
    (7, 0x00000078),
    (7, 0x00000079),
    (7, 0x0000007a),
    (7, 0x0000007b),
    (15, 0x00007ffe),
    (11, 0x000007fc),
    (14, 0x00003ffd),
    (13, 0x00001ffd),
    (28, 0x0ffffffc),
    (20, 0x000fffe6),
    (22, 0x003fffd2),
    (20, 0x000fffe7),
    (20, 0x000fffe8),
    (22, 0x003fffd3),
    (22, 0x003fffd4),
    (22, 0x003fffd5),
    (23, 0x007fffd9),
    (22, 0x003fffd6),
    (23, 0x007fffda),
    (23, 0x007fffdb),
    (23, 0x007fffdc),
    (23, 0x007fffdd),
    (23, 0x007fffde),
    (24, 0x00ffffeb),
    (23, 0x007fffdf),
    (24, 0x00ffffec),
    (24, 0x00ffffed),
    (22, 0x003fffd7),
    (23, 0x007fffe0),
    (24, 0x00ffffee),
    (23, 0x007fffe1),
    (23, 0x007fffe2),
    (23, 0x007fffe3),
    (23, 0x007fffe4),
    (21, 0x001fffdc),
    (22, 0x003fffd8),
    (23, 0x007fffe5),
    (22, 0x003fffd9),
    (23, 0x007fffe6),
    (23, 0x007fffe7),
    (24, 0x00ffffef),
    (22, 0x003fffda),
    (21, 0x001fffdd),
    (20, 0x000fffe9),
    (22, 0x003fffdb),
    (22, 0x003fffdc),
    (23, 0x007fffe8),
    (23, 0x007fffe9),
    (21, 0x001fffde),
    (23, 0x007fffea),
    (22, 0x003fffdd),
    (22, 0x003fffde),
    (24, 0x00fffff0),
    (21, 0x001fffdf),
    (22, 0x003fffdf),
    (23, 0x007fffeb),
    (23, 0x007fffec),
    (21, 0x001fffe0),
    (21, 0x001fffe1),
    (22, 0x003fffe0),
    (21, 0x001fffe2),
    (23, 0x007fffed),
    (22, 0x003fffe1),
    (23, 0x007fffee),
    (23, 0x007fffef),
    (20, 0x000fffea),
    (22, 0x003fffe2),
    (22, 0x003fffe3),
    (22, 0x003fffe4),
    (23, 0x007ffff0),
    (22, 0x003fffe5),
    (22, 0x003fffe6),
    (23, 0x007ffff1),
    (26, 0x03ffffe0),
    (26, 0x03ffffe1),
    (20, 0x000fffeb),
    (19, 0x0007fff1),
    (22, 0x003fffe7),
    (23, 0x007ffff2),
    (22, 0x003fffe8),
    (25, 0x01ffffec),
    (26, 0x03ffffe2),
    (26, 0x03ffffe3),
    (26, 0x03ffffe4),
    (27, 0x07ffffde),
    (27, 0x07ffffdf),
    (26, 0x03ffffe5),
    (24, 0x00fffff1),
    (25, 0x01ffffed),
    (19, 0x0007fff2),
    (21, 0x001fffe3),
    (26, 0x03ffffe6),
    (27, 0x07ffffe0),
    (27, 0x07ffffe1),
    (26, 0x03ffffe7),
    (27, 0x07ffffe2),
    (24, 0x00fffff2),
    (21, 0x001fffe4),
    (21, 0x001fffe5),
    (26, 0x03ffffe8),
    (26, 0x03ffffe9),
    (28, 0x0ffffffd),
    (27, 0x07ffffe3),
    (27, 0x07ffffe4),
    (27, 0x07ffffe5),
    (20, 0x000fffec),
    (24, 0x00fffff3),
    (20, 0x000fffed),
    (21, 0x001fffe6),
    (22, 0x003fffe9),
    (21, 0x001fffe7),
    (21, 0x001fffe8),
    (23, 0x007ffff3),
    (22, 0x003fffea),
    (22, 0x003fffeb),
    (25, 0x01ffffee),
    (25, 0x01ffffef),
    (24, 0x00fffff4),
    (24, 0x00fffff5),
    (26, 0x03ffffea),
    (23, 0x007ffff4),
    (26, 0x03ffffeb),
    (27, 0x07ffffe6),
    (26, 0x03ffffec),
    (26, 0x03ffffed),
    (27, 0x07ffffe7),
    (27, 0x07ffffe8),
    (27, 0x07ffffe9),
    (27, 0x07ffffea),
    (27, 0x07ffffeb),
    (28, 0x0ffffffe),
    (27, 0x07ffffec),
    (27, 0x07ffffed),
    (27, 0x07ffffee),
    (27, 0x07ffffef),
    (27, 0x07fffff0),
    (26, 0x03ffffee),
    (30, 0x3fffffff)

];
