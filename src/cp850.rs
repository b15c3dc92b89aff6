//! IBM code page 850 (DOS Latin-1).
//!
//! CP850 is outside the WHATWG repertoire, so the external provider does
//! not carry it; mail and documents produced on DOS-era systems still
//! label it, so it is decoded via a compile-time table.  Bytes 0x00..0x7F
//! are ASCII (identity, not in the table); the upper half mixes Western
//! European letters with the DOS box-drawing set.
//!
//! Source: the IBM/Unicode mapping for code page 850.

/// CP850 upper-half decode table.
#[rustfmt::skip]
static CP850_HIGH: [u16; 128] = [
    // 0x80      0x81   0x82   0x83   0x84   0x85   0x86   0x87
    0x00C7, 0x00FC, 0x00E9, 0x00E2, 0x00E4, 0x00E0, 0x00E5, 0x00E7,
    // 0x88      0x89   0x8A   0x8B   0x8C   0x8D   0x8E   0x8F
    0x00EA, 0x00EB, 0x00E8, 0x00EF, 0x00EE, 0x00EC, 0x00C4, 0x00C5,
    // 0x90      0x91   0x92   0x93   0x94   0x95   0x96   0x97
    0x00C9, 0x00E6, 0x00C6, 0x00F4, 0x00F6, 0x00F2, 0x00FB, 0x00F9,
    // 0x98      0x99   0x9A   0x9B   0x9C   0x9D   0x9E   0x9F
    0x00FF, 0x00D6, 0x00DC, 0x00F8, 0x00A3, 0x00D8, 0x00D7, 0x0192,
    // 0xA0      0xA1   0xA2   0xA3   0xA4   0xA5   0xA6   0xA7
    0x00E1, 0x00ED, 0x00F3, 0x00FA, 0x00F1, 0x00D1, 0x00AA, 0x00BA,
    // 0xA8      0xA9   0xAA   0xAB   0xAC   0xAD   0xAE   0xAF
    0x00BF, 0x00AE, 0x00AC, 0x00BD, 0x00BC, 0x00A1, 0x00AB, 0x00BB,
    // 0xB0      0xB1   0xB2   0xB3   0xB4   0xB5   0xB6   0xB7
    0x2591, 0x2592, 0x2593, 0x2502, 0x2524, 0x00C1, 0x00C2, 0x00C0,
    // 0xB8      0xB9   0xBA   0xBB   0xBC   0xBD   0xBE   0xBF
    0x00A9, 0x2563, 0x2551, 0x2557, 0x255D, 0x00A2, 0x00A5, 0x2510,
    // 0xC0      0xC1   0xC2   0xC3   0xC4   0xC5   0xC6   0xC7
    0x2514, 0x2534, 0x252C, 0x251C, 0x2500, 0x253C, 0x00E3, 0x00C3,
    // 0xC8      0xC9   0xCA   0xCB   0xCC   0xCD   0xCE   0xCF
    0x255A, 0x2554, 0x2569, 0x2566, 0x2560, 0x2550, 0x256C, 0x00A4,
    // 0xD0      0xD1   0xD2   0xD3   0xD4   0xD5   0xD6   0xD7
    0x00F0, 0x00D0, 0x00CA, 0x00CB, 0x00C8, 0x0131, 0x00CD, 0x00CE,
    // 0xD8      0xD9   0xDA   0xDB   0xDC   0xDD   0xDE   0xDF
    0x00CF, 0x2518, 0x250C, 0x2588, 0x2584, 0x00A6, 0x00CC, 0x2580,
    // 0xE0      0xE1   0xE2   0xE3   0xE4   0xE5   0xE6   0xE7
    0x00D3, 0x00DF, 0x00D4, 0x00D2, 0x00F5, 0x00D5, 0x00B5, 0x00FE,
    // 0xE8      0xE9   0xEA   0xEB   0xEC   0xED   0xEE   0xEF
    0x00DE, 0x00DA, 0x00DB, 0x00D9, 0x00FD, 0x00DD, 0x00AF, 0x00B4,
    // 0xF0      0xF1   0xF2   0xF3   0xF4   0xF5   0xF6   0xF7
    0x00AD, 0x00B1, 0x2017, 0x00BE, 0x00B6, 0x00A7, 0x00F7, 0x00B8,
    // 0xF8      0xF9   0xFA   0xFB   0xFC   0xFD   0xFE   0xFF
    0x00B0, 0x00A8, 0x00B7, 0x00B9, 0x00B3, 0x00B2, 0x25A0, 0x00A0,
];

/// Decode a single CP850 byte.
pub(crate) fn decode_byte(b: u8) -> char {
    if b < 0x80 {
        b as char
    } else {
        // Every entry in the table is a valid BMP scalar.
        char::from_u32(u32::from(CP850_HIGH[(b - 0x80) as usize])).unwrap_or('\u{FFFD}')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Spot-check the positions where CP850 departs from CP437 and from
    /// Latin-1 ordering.
    #[test]
    fn cp850_spot_checks() {
        let cases: &[(u8, char)] = &[
            (0x80, '\u{00C7}'), // Ç
            (0x82, '\u{00E9}'), // é
            (0x9B, '\u{00F8}'), // ø
            (0x9E, '\u{00D7}'), // × (CP437 has ₧ here)
            (0x9F, '\u{0192}'), // ƒ
            (0xA9, '\u{00AE}'), // ® (CP437 has ⌐ here)
            (0xB5, '\u{00C1}'), // Á (CP437 box drawing)
            (0xC6, '\u{00E3}'), // ã
            (0xC9, '\u{2554}'), // ╔
            (0xCF, '\u{00A4}'), // ¤
            (0xD0, '\u{00F0}'), // ð
            (0xD5, '\u{0131}'), // ı (dotless i)
            (0xDD, '\u{00A6}'), // ¦
            (0xE1, '\u{00DF}'), // ß
            (0xE6, '\u{00B5}'), // µ
            (0xF0, '\u{00AD}'), // soft hyphen
            (0xF2, '\u{2017}'), // ‗
            (0xFE, '\u{25A0}'), // ■
            (0xFF, '\u{00A0}'), // no-break space
        ];
        for &(byte, expected) in cases {
            assert_eq!(decode_byte(byte), expected, "byte 0x{byte:02X}");
        }
    }

    /// Every byte decodes without panic and the low half is identity.
    #[test]
    fn cp850_full_range() {
        for b in 0u8..=255 {
            let c = decode_byte(b);
            if b < 0x80 {
                assert_eq!(c as u32, u32::from(b), "ASCII identity for 0x{b:02X}");
            } else {
                assert_ne!(c, '\u{FFFD}', "no unmapped bytes in CP850");
            }
        }
    }
}
