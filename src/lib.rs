#![doc = include_str!("../README.md")]
#![deny(missing_docs)]

#[macro_use]
mod tracing;

mod charset;
mod cp850;
mod decode;
mod error;
mod html;
mod hz;
mod reader;
mod utf7;

pub use charset::Charset;
pub use error::Error;
pub use html::{charset_in_content_type, find_charset_in_html};
pub use reader::DecodeReader;

/// A `Result` alias where the `Err` case is [`mailcharset::Error`](Error).
pub type Result<T> = std::result::Result<T, Error>;

/// Decode `bytes` as declared by the charset label into a UTF-8 string.
///
/// The label is matched case-insensitively against the alias table; the
/// whole input is then decoded eagerly through the charset's decode
/// capability -- including when the input is already UTF-8, for one
/// consistent code path.  Fails with an unsupported-charset error
/// (carrying the original label) for unknown labels, or a decode error
/// for byte sequences that are malformed under the claimed encoding.
/// No partial output is ever returned.
///
/// ```
/// // Curly quotes from a windows-1252 mail body.
/// let text = mailcharset::decode_to_string("windows-1252", &[0x93, 0x41, 0x94]).unwrap();
/// assert_eq!(text, "\u{201C}A\u{201D}");
///
/// let err = mailcharset::decode_to_string("wtf-9", b"payload").unwrap_err();
/// assert!(err.is_unsupported_charset());
/// ```
pub fn decode_to_string(charset: &str, bytes: &[u8]) -> Result<String> {
    let cs = Charset::for_label(charset).ok_or_else(|| Error::unsupported_charset(charset))?;
    trace!(label = charset, canonical = cs.name(), len = bytes.len(), "decoding to string");
    cs.decode(bytes)
}

/// Wrap `input` in a reader that lazily decodes from the charset to UTF-8.
///
/// If the label is already exactly `utf-8` (case-insensitively), the
/// returned reader is a zero-cost passthrough.  See [`DecodeReader`].
///
/// ```
/// use std::io::Read;
///
/// let input = std::io::Cursor::new(vec![0xC4, 0xE3, 0xBA, 0xC3]);
/// let mut reader = mailcharset::decode_reader("gbk", input).unwrap();
/// let mut text = String::new();
/// reader.read_to_string(&mut text).unwrap();
/// assert_eq!(text, "\u{4F60}\u{597D}");
/// ```
pub fn decode_reader<R: std::io::Read>(charset: &str, input: R) -> Result<DecodeReader<R>> {
    DecodeReader::new(charset, input)
}
