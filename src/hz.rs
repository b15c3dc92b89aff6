//! Minimal HZ-GB2312 decoder (RFC 1843).
//!
//! HZ frames GB2312 text inside 7-bit ASCII: `~{` shifts into double-byte
//! GB mode, `~}` shifts back out, `~~` is a literal tilde and `~` before
//! a newline is a line continuation.  Only the framing is handled here;
//! each GB byte pair is re-based to its EUC form (high bits set) and fed
//! through the external GBK decoder, which owns the actual character
//! tables.
//!
//! Unlike the ISO-2022-CN/KR labels, which are stubbed to a replacement
//! decoder, HZ really decodes.

use crate::decode::{drive_external, push_char};
use crate::error::Error;

enum State {
    /// Plain ASCII passes through.
    Ascii,
    /// Saw `~` in ASCII mode; deciding between `{`, `~` and newline.
    AsciiTilde,
    /// Inside a `~{` ... `~}` GB segment, at a pair boundary.
    Gb,
    /// Inside a GB segment with the pair's lead byte in hand.
    GbLead(u8),
    /// Saw `~` at a GB pair boundary; only `}` may follow.
    GbTilde,
}

pub(crate) struct HzDecoder {
    state: State,
    /// Per-instance GBK decoder; it only ever sees complete EUC pairs.
    gbk: encoding_rs::Decoder,
}

impl HzDecoder {
    pub(crate) fn new() -> HzDecoder {
        HzDecoder {
            state: State::Ascii,
            gbk: encoding_rs::GBK.new_decoder_without_bom_handling(),
        }
    }

    pub(crate) fn decode(&mut self, src: &[u8], out: &mut Vec<u8>, last: bool) -> Result<(), Error> {
        for &b in src {
            self.step(b, out)?;
        }
        if last {
            match self.state {
                State::Ascii => drive_external(&mut self.gbk, b"", out, true),
                _ => Err(Error::decode("truncated HZ-GB2312 input")),
            }
        } else {
            Ok(())
        }
    }

    fn step(&mut self, b: u8, out: &mut Vec<u8>) -> Result<(), Error> {
        match self.state {
            State::Ascii => match b {
                b'~' => {
                    self.state = State::AsciiTilde;
                    Ok(())
                }
                0x00..=0x7F => {
                    push_char(out, b as char);
                    Ok(())
                }
                _ => Err(Error::decode("8-bit byte outside HZ GB segment")),
            },
            State::AsciiTilde => match b {
                b'{' => {
                    self.state = State::Gb;
                    Ok(())
                }
                b'~' => {
                    push_char(out, '~');
                    self.state = State::Ascii;
                    Ok(())
                }
                b'\n' => {
                    // Line continuation: both bytes vanish.
                    self.state = State::Ascii;
                    Ok(())
                }
                _ => Err(Error::decode("invalid HZ escape sequence")),
            },
            State::Gb => match b {
                b'~' => {
                    self.state = State::GbTilde;
                    Ok(())
                }
                0x21..=0x7D => {
                    self.state = State::GbLead(b);
                    Ok(())
                }
                _ => Err(Error::decode("invalid byte in HZ GB segment")),
            },
            State::GbLead(lead) => match b {
                0x21..=0x7E => {
                    let pair = [lead | 0x80, b | 0x80];
                    drive_external(&mut self.gbk, &pair, out, false)
                        .map_err(|_| Error::decode("invalid HZ GB2312 byte pair"))?;
                    self.state = State::Gb;
                    Ok(())
                }
                _ => Err(Error::decode("invalid byte in HZ GB segment")),
            },
            State::GbTilde => match b {
                b'}' => {
                    self.state = State::Ascii;
                    Ok(())
                }
                _ => Err(Error::decode("invalid HZ escape sequence")),
            },
        }
    }
}
