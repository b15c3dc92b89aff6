//! Minimal UTF-7 decoder (RFC 2152).
//!
//! UTF-7 survives almost exclusively in mail archives, and the external
//! provider refuses to carry it, so the decoder lives here.  Direct bytes
//! pass through; a `+` shifts into a modified-Base64 sequence of UTF-16BE
//! code units, terminated by `-` (absorbed) or by any non-Base64 byte
//! (reprocessed); `+-` is a literal `+`.  Surrogate pairs inside a shift
//! sequence combine into a single scalar.
//!
//! Decode-only: this crate never produces UTF-7.

use crate::decode::push_char;
use crate::error::Error;

/// Modified Base64 alphabet (RFC 2045 without padding).
const BASE64: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Decode a Base64 byte to its 6-bit value.
fn base64_value(b: u8) -> Option<u32> {
    BASE64.iter().position(|&c| c == b).map(|p| p as u32)
}

enum State {
    /// Bytes pass through as ASCII.
    Direct,
    /// Inside a `+`...`-` shift sequence.  `bits`/`nbits` accumulate
    /// Base64 sextets; `first` is true until the first sextet, so `+-`
    /// can decode as a literal `+`.
    Shifted { bits: u32, nbits: u8, first: bool },
}

pub(crate) struct Utf7Decoder {
    state: State,
    /// High surrogate awaiting its pair within a shift sequence.
    high_surrogate: Option<u16>,
}

impl Utf7Decoder {
    pub(crate) fn new() -> Utf7Decoder {
        Utf7Decoder {
            state: State::Direct,
            high_surrogate: None,
        }
    }

    pub(crate) fn decode(&mut self, src: &[u8], out: &mut Vec<u8>, last: bool) -> Result<(), Error> {
        for &b in src {
            self.step(b, out)?;
        }
        if last {
            // End of text implicitly terminates a shift sequence.
            if let State::Shifted { bits, nbits, .. } = self.state {
                end_shift(bits, nbits, self.high_surrogate)?;
                self.state = State::Direct;
            }
        }
        Ok(())
    }

    fn step(&mut self, b: u8, out: &mut Vec<u8>) -> Result<(), Error> {
        match self.state {
            State::Direct => self.step_direct(b, out),
            State::Shifted { bits, nbits, first } => {
                if first && b == b'-' {
                    // "+-" is a literal '+'.
                    push_char(out, '+');
                    self.state = State::Direct;
                    return Ok(());
                }
                if let Some(v) = base64_value(b) {
                    let mut bits = bits << 6 | v;
                    let mut nbits = nbits + 6;
                    while nbits >= 16 {
                        nbits -= 16;
                        let unit = (bits >> nbits) as u16;
                        bits &= (1 << nbits) - 1;
                        self.emit_unit(unit, out)?;
                    }
                    self.state = State::Shifted { bits, nbits, first: false };
                    return Ok(());
                }
                // Any non-Base64 byte ends the sequence; '-' is absorbed
                // as the terminator, everything else is reprocessed as a
                // direct byte.
                if first {
                    return Err(Error::decode("empty UTF-7 shift sequence"));
                }
                end_shift(bits, nbits, self.high_surrogate)?;
                self.state = State::Direct;
                if b == b'-' {
                    Ok(())
                } else {
                    self.step_direct(b, out)
                }
            }
        }
    }

    fn step_direct(&mut self, b: u8, out: &mut Vec<u8>) -> Result<(), Error> {
        match b {
            b'+' => {
                self.state = State::Shifted { bits: 0, nbits: 0, first: true };
                Ok(())
            }
            0x00..=0x7F => {
                push_char(out, b as char);
                Ok(())
            }
            _ => Err(Error::decode("8-bit byte outside UTF-7 shift sequence")),
        }
    }

    /// Consume one UTF-16 code unit from the shift sequence.
    fn emit_unit(&mut self, unit: u16, out: &mut Vec<u8>) -> Result<(), Error> {
        if let Some(high) = self.high_surrogate.take() {
            if !(0xDC00..=0xDFFF).contains(&unit) {
                return Err(Error::decode("unpaired surrogate in UTF-7 shift sequence"));
            }
            let scalar =
                0x10000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(unit) - 0xDC00);
            match char::from_u32(scalar) {
                Some(c) => push_char(out, c),
                None => return Err(Error::decode("invalid surrogate pair in UTF-7 shift sequence")),
            }
            return Ok(());
        }
        match unit {
            0xD800..=0xDBFF => {
                self.high_surrogate = Some(unit);
                Ok(())
            }
            0xDC00..=0xDFFF => Err(Error::decode("unpaired surrogate in UTF-7 shift sequence")),
            _ => {
                match char::from_u32(u32::from(unit)) {
                    Some(c) => push_char(out, c),
                    // Unreachable for BMP non-surrogates, but stay panic-free.
                    None => return Err(Error::decode("invalid scalar in UTF-7 shift sequence")),
                }
                Ok(())
            }
        }
    }
}

/// Validate shift-sequence termination: leftover bits must be zero
/// padding (fewer than 6 bits), and no surrogate may be left hanging.
fn end_shift(bits: u32, nbits: u8, high_surrogate: Option<u16>) -> Result<(), Error> {
    if nbits >= 6 || bits != 0 {
        return Err(Error::decode("ill-formed padding in UTF-7 shift sequence"));
    }
    if high_surrogate.is_some() {
        return Err(Error::decode("unpaired surrogate in UTF-7 shift sequence"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(input: &[u8]) -> Result<String, Error> {
        let mut decoder = Utf7Decoder::new();
        let mut out = Vec::new();
        decoder.decode(input, &mut out, true)?;
        Ok(String::from_utf8(out).expect("decoder emits UTF-8"))
    }

    #[test]
    fn decode_table() {
        let cases: &[(&[u8], &str, &str)] = &[
            // (input, expected, description)
            (b"Hello, World!", "Hello, World!", "plain ASCII"),
            (b"", "", "empty input"),
            (b"+-", "+", "literal plus"),
            (b"1 +- 1 = 2", "1 + 1 = 2", "literal plus in context"),
            (b"A+ImIDkQ.", "A\u{2262}\u{0391}.", "RFC 2152 example"),
            (b"Hi Mom -+Jjo--!", "Hi Mom -\u{263A}-!", "RFC 2152 smiley example"),
            (b"+ZeVnLIqe-", "\u{65E5}\u{672C}\u{8A9E}", "RFC 2152 Japanese example"),
            (b"+2D3eAA-", "\u{1F600}", "surrogate pair combines"),
            (b"+Jjo", "\u{263A}", "shift sequence implicitly ends at EOF"),
            (b"+Jjo-+Jjo-", "\u{263A}\u{263A}", "back-to-back sequences"),
            (b"+Jjo-Jjo", "\u{263A}Jjo", "terminator absorbed, rest is direct"),
            (b"+Jjo Jjo", "\u{263A} Jjo", "non-Base64 byte ends sequence and is kept"),
        ];
        for &(input, expected, desc) in cases {
            let result = decode(input).unwrap_or_else(|e| panic!("{desc}: {e}"));
            assert_eq!(result, expected, "{desc}");
        }
    }

    #[test]
    fn malformed_table() {
        let cases: &[(&[u8], &str)] = &[
            (b"caf\xC3\xA9", "raw 8-bit bytes"),
            (b"+ ", "empty shift sequence"),
            (b"+3AA-", "lone low surrogate"),
            (b"+2D0-", "lone high surrogate"),
            (b"+2D0", "lone high surrogate at EOF"),
            (b"+Jjr-", "nonzero padding bits"),
        ];
        for &(input, desc) in cases {
            let err = decode(input).expect_err(desc);
            assert!(err.is_decode(), "{desc}");
        }
    }

    /// Chunk boundaries anywhere -- including mid-sextet runs -- do not
    /// change the result.
    #[test]
    fn byte_at_a_time_matches_whole_input() {
        let input = b"Hi Mom -+Jjo--!";
        let mut decoder = Utf7Decoder::new();
        let mut out = Vec::new();
        for &b in input.iter() {
            decoder.decode(&[b], &mut out, false).expect("chunk");
        }
        decoder.decode(b"", &mut out, true).expect("finish");
        assert_eq!(String::from_utf8(out).expect("utf-8"), "Hi Mom -\u{263A}-!");
    }
}
