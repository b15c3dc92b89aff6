//! Streaming charset decoding over [`std::io::Read`].

use std::io::{self, Read};

use crate::charset::Charset;
use crate::decode::Decoder;
use crate::error::Error;

/// How many bytes to pull from the inner reader per refill.
const INPUT_BUF: usize = 4096;

/// A reader that lazily decodes a legacy-charset byte stream to UTF-8.
///
/// Built by [`DecodeReader::new`] (or [`decode_reader`](crate::decode_reader)).
/// When the label is already exactly `utf-8` (case-insensitively -- not
/// its aliases), reads are served straight from the inner reader with no
/// transform in between; [`is_passthrough`](DecodeReader::is_passthrough)
/// reports which mode was chosen.
///
/// Decoding is pull-driven: each `read` performs at most one read on the
/// inner source and decodes whatever arrived.  No background work, no
/// internal threads.  The stream is finite iff the inner source is, and
/// is not restartable once drained.
///
/// Malformed input surfaces as [`io::ErrorKind::InvalidData`] wrapping
/// this crate's [`Error`], at the point the offending bytes are reached;
/// I/O errors from the inner source pass through unchanged.
pub struct DecodeReader<R> {
    inner: R,
    /// `None` when the source is already UTF-8 (passthrough).
    transform: Option<Transform>,
}

impl<R> std::fmt::Debug for DecodeReader<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecodeReader")
            .field("passthrough", &self.transform.is_none())
            .finish_non_exhaustive()
    }
}

struct Transform {
    decoder: Decoder,
    /// Canonical name, for error labels.
    charset: &'static str,
    /// Decoded output not yet handed to the caller.
    pending: Vec<u8>,
    pos: usize,
    /// The inner source hit EOF and the decoder was flushed.
    done: bool,
}

impl<R: Read> DecodeReader<R> {
    /// Build a decoding reader for `charset` over `inner`.
    ///
    /// Fails with an unsupported-charset error (carrying the original
    /// label) if the label is not in the alias table.  The lookup happens
    /// here; the first byte is not pulled until the first `read`.
    pub fn new(charset: &str, inner: R) -> Result<DecodeReader<R>, Error> {
        if charset.eq_ignore_ascii_case("utf-8") {
            debug!(label = charset, "charset reader: passthrough");
            return Ok(DecodeReader {
                inner,
                transform: None,
            });
        }
        let cs = Charset::for_label(charset).ok_or_else(|| Error::unsupported_charset(charset))?;
        debug!(label = charset, canonical = cs.name(), "charset reader: decoding");
        Ok(DecodeReader {
            inner,
            transform: Some(Transform {
                decoder: cs.new_decoder(),
                charset: cs.name(),
                pending: Vec::new(),
                pos: 0,
                done: false,
            }),
        })
    }

    /// `true` if reads are served straight from the inner reader.
    pub fn is_passthrough(&self) -> bool {
        self.transform.is_none()
    }

    /// Consumes the reader, returning the inner source.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for DecodeReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let Some(t) = &mut self.transform else {
            return self.inner.read(buf);
        };
        if buf.is_empty() {
            return Ok(0);
        }
        loop {
            // Serve already-decoded output first.
            if t.pos < t.pending.len() {
                let n = (t.pending.len() - t.pos).min(buf.len());
                buf[..n].copy_from_slice(&t.pending[t.pos..t.pos + n]);
                t.pos += n;
                if t.pos == t.pending.len() {
                    t.pending.clear();
                    t.pos = 0;
                }
                return Ok(n);
            }
            if t.done {
                return Ok(0);
            }
            let mut chunk = [0u8; INPUT_BUF];
            let n = self.inner.read(&mut chunk)?;
            if n == 0 {
                t.decoder
                    .finish(&mut t.pending)
                    .map_err(|e| io::Error::from(e.with_label(t.charset)))?;
                t.done = true;
            } else {
                t.decoder
                    .push(&chunk[..n], &mut t.pending)
                    .map_err(|e| io::Error::from(e.with_label(t.charset)))?;
            }
            // A short inner read may decode to nothing (e.g. half of a
            // multi-byte pair); loop for another refill rather than
            // returning a misleading Ok(0).
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Yields one byte per read, to force sequence splits at every
    /// possible boundary.
    struct OneByteReader<R>(R);

    impl<R: Read> Read for OneByteReader<R> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if buf.is_empty() {
                return Ok(0);
            }
            self.0.read(&mut buf[..1])
        }
    }

    /// Fails with `BrokenPipe` after serving its payload.
    struct FailingReader {
        payload: Cursor<Vec<u8>>,
        failed: bool,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.payload.read(buf)?;
            if n == 0 && !self.failed {
                self.failed = true;
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "source failed"));
            }
            Ok(n)
        }
    }

    fn read_all(reader: &mut impl Read) -> io::Result<String> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(text)
    }

    #[test]
    fn passthrough_only_for_the_canonical_label() {
        let cases: &[(&str, bool)] = &[
            ("utf-8", true),
            ("UTF-8", true),
            ("utf8", false),            // alias, not the canonical spelling
            ("unicode-1-1-utf-8", false),
            ("windows-1252", false),
        ];
        for &(label, expected) in cases {
            let reader = DecodeReader::new(label, Cursor::new(b"x".to_vec())).expect(label);
            assert_eq!(reader.is_passthrough(), expected, "{label}");
        }
    }

    #[test]
    fn passthrough_hands_back_the_inner_source() {
        let reader = DecodeReader::new("utf-8", Cursor::new(b"hello".to_vec())).expect("utf-8");
        let mut inner = reader.into_inner();
        assert_eq!(read_all(&mut inner).expect("read"), "hello");
    }

    #[test]
    fn decodes_a_legacy_stream() {
        let input = Cursor::new(vec![0x93, 0x41, 0x94]);
        let mut reader = DecodeReader::new("windows-1252", input).expect("windows-1252");
        assert_eq!(read_all(&mut reader).expect("read"), "\u{201C}A\u{201D}");
    }

    /// One-byte inner reads and a tiny caller buffer together exercise
    /// both the refill loop and the pending-output buffering.
    #[test]
    fn chunked_reads_match_eager_decode() {
        let bytes = b"Hello, ~{Dc:C~}!".to_vec();
        let eager = crate::decode_to_string("hz-gb-2312", &bytes).expect("eager");

        let inner = OneByteReader(Cursor::new(bytes));
        let mut reader = DecodeReader::new("hz-gb-2312", inner).expect("hz-gb-2312");
        let mut streamed = Vec::new();
        let mut buf = [0u8; 2];
        loop {
            let n = reader.read(&mut buf).expect("read");
            if n == 0 {
                break;
            }
            streamed.extend_from_slice(&buf[..n]);
        }
        assert_eq!(String::from_utf8(streamed).expect("utf-8"), eager);
    }

    #[test]
    fn unknown_label_fails_before_any_read() {
        let err = DecodeReader::new("wtf-9", Cursor::new(Vec::new())).expect_err("unknown");
        assert!(err.is_unsupported_charset());
        assert_eq!(err.label(), Some("wtf-9"));
    }

    #[test]
    fn malformed_input_surfaces_as_invalid_data() {
        let input = Cursor::new(vec![0x82]); // lone Shift_JIS lead byte
        let mut reader = DecodeReader::new("shift_jis", input).expect("shift_jis");
        let err = read_all(&mut reader).expect_err("truncated input");
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        let inner = err.get_ref().and_then(|e| e.downcast_ref::<Error>()).expect("source");
        assert!(inner.is_decode());
        assert_eq!(inner.label(), Some("shift_jis"));
    }

    #[test]
    fn inner_io_errors_pass_through() {
        let inner = FailingReader {
            payload: Cursor::new(b"ok".to_vec()),
            failed: false,
        };
        let mut reader = DecodeReader::new("koi8-r", inner).expect("koi8-r");
        let err = read_all(&mut reader).expect_err("source failure");
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
