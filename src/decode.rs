//! Per-call incremental decoders.
//!
//! [`Decoder`] is the one-shot, stateful form of a decode capability:
//! every decode -- eager or streaming -- gets a fresh instance, so shift
//! states and partial multi-byte sequences never leak between calls.
//! Output is UTF-8 bytes appended to a caller-owned buffer; input chunks
//! are always consumed whole, which keeps the streaming wrapper's
//! bookkeeping trivial.

use encoding_rs::DecoderResult;

use crate::charset::Codec;
use crate::cp850;
use crate::error::Error;
use crate::hz::HzDecoder;
use crate::utf7::Utf7Decoder;

/// Output-step size when driving the external provider.
const DECODE_BUF: usize = 4096;

/// A one-shot incremental decoder from a legacy encoding to UTF-8.
///
/// Feed input chunks with [`push`](Decoder::push), then call
/// [`finish`](Decoder::finish) exactly once at end of input so trailing
/// incomplete sequences are reported.  Not reusable after `finish` or
/// after an error.
pub(crate) enum Decoder {
    /// Decoded by the external provider.
    Encoding(encoding_rs::Decoder),
    /// ISO-8859-1 proper: byte value == code point.
    Latin1,
    /// CP850 high-half table.
    Cp850,
    /// RFC 2152 UTF-7.
    Utf7(Utf7Decoder),
    /// HZ framing around the GBK capability.
    Hz(HzDecoder),
    /// One U+FFFD for any non-empty input, then nothing.
    Replacement { emitted: bool },
}

impl Decoder {
    pub(crate) fn new(codec: Codec) -> Decoder {
        match codec {
            Codec::Encoding(enc) => Decoder::Encoding(enc.new_decoder_without_bom_handling()),
            Codec::Latin1 => Decoder::Latin1,
            Codec::Cp850 => Decoder::Cp850,
            Codec::Utf7 => Decoder::Utf7(Utf7Decoder::new()),
            Codec::HzGb2312 => Decoder::Hz(HzDecoder::new()),
            Codec::Replacement => Decoder::Replacement { emitted: false },
        }
    }

    /// Decode a chunk, appending UTF-8 bytes to `out`.
    ///
    /// The chunk is consumed entirely; sequences split across chunk
    /// boundaries are carried in decoder state until the next call.
    pub(crate) fn push(&mut self, src: &[u8], out: &mut Vec<u8>) -> Result<(), Error> {
        self.drive(src, out, false)
    }

    /// Signal end of input, flushing pending state.
    ///
    /// A trailing incomplete sequence (a lone lead byte, an unterminated
    /// shift sequence) is a decode error.
    pub(crate) fn finish(&mut self, out: &mut Vec<u8>) -> Result<(), Error> {
        self.drive(b"", out, true)
    }

    fn drive(&mut self, src: &[u8], out: &mut Vec<u8>, last: bool) -> Result<(), Error> {
        match self {
            Decoder::Encoding(decoder) => drive_external(decoder, src, out, last),
            Decoder::Latin1 => {
                for &b in src {
                    push_char(out, b as char);
                }
                Ok(())
            }
            Decoder::Cp850 => {
                for &b in src {
                    push_char(out, cp850::decode_byte(b));
                }
                Ok(())
            }
            Decoder::Utf7(utf7) => utf7.decode(src, out, last),
            Decoder::Hz(hz) => hz.decode(src, out, last),
            Decoder::Replacement { emitted } => {
                if !src.is_empty() && !*emitted {
                    *emitted = true;
                    push_char(out, '\u{FFFD}');
                }
                Ok(())
            }
        }
    }
}

/// Drive the external decoder over `src` in `DECODE_BUF`-sized output
/// steps, appending to `out`.
pub(crate) fn drive_external(
    decoder: &mut encoding_rs::Decoder,
    src: &[u8],
    out: &mut Vec<u8>,
    last: bool,
) -> Result<(), Error> {
    let mut buf = [0u8; DECODE_BUF];
    let mut total_read = 0;
    loop {
        let (result, read, written) =
            decoder.decode_to_utf8_without_replacement(&src[total_read..], &mut buf, last);
        total_read += read;
        out.extend_from_slice(&buf[..written]);
        match result {
            DecoderResult::InputEmpty => return Ok(()),
            DecoderResult::OutputFull => continue,
            DecoderResult::Malformed(_, _) => return Err(Error::decode("malformed byte sequence")),
        }
    }
}

/// Append one scalar to a UTF-8 output buffer.
pub(crate) fn push_char(out: &mut Vec<u8>, c: char) {
    let mut buf = [0u8; 4];
    out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
}
