//! Error type for mailcharset.
//!
//! Provides [`Error`] with query methods for the two failure classes:
//! [`is_unsupported_charset()`](Error::is_unsupported_charset) for labels
//! absent from the alias table, and [`is_decode()`](Error::is_decode) for
//! byte sequences that are malformed under the claimed encoding (or a byte
//! source that failed mid-stream).

use std::fmt;
use std::io;

pub(crate) type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The error type for charset lookup and decoding operations.
///
/// Errors carry a `kind` classification that powers the
/// [`is_unsupported_charset()`](Error::is_unsupported_charset) /
/// [`is_decode()`](Error::is_decode) query methods.
///
/// When the failing charset label is known it is preserved in its original
/// spelling (not lowercased) and available via [`label()`](Error::label)
/// for diagnostics.
pub struct Error {
    pub(crate) kind: ErrorKind,
    pub(crate) message: String,
    pub(crate) source: Option<BoxError>,
    pub(crate) label: Option<String>,
}

/// Classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorKind {
    /// The (lowercased) label has no entry in the alias table.
    UnsupportedCharset,
    /// The decoder, or the byte source feeding it, failed mid-stream.
    Decode,
}

impl Error {
    /// Returns `true` if the charset label was not recognized.
    ///
    /// Non-retryable: the caller must pick a fallback charset or surface
    /// the failure.  This crate never guesses.
    pub fn is_unsupported_charset(&self) -> bool {
        matches!(self.kind, ErrorKind::UnsupportedCharset)
    }

    /// Returns `true` if decoding failed mid-stream.
    ///
    /// Covers both byte sequences that are malformed under the claimed
    /// encoding and I/O failures from an underlying reader.  The caller
    /// may retry with a different assumed charset; no partial output was
    /// produced.
    pub fn is_decode(&self) -> bool {
        matches!(self.kind, ErrorKind::Decode)
    }

    /// Returns the charset label associated with this error, if known.
    ///
    /// Always the caller's original spelling, not the lowercased form used
    /// for table lookup.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Attach a charset label to this error (builder pattern).
    #[must_use]
    pub(crate) fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_owned());
        self
    }

    /// Attach a source error (builder pattern).
    ///
    /// Stores the underlying cause so that [`std::error::Error::source`]
    /// returns it, making error chains inspectable by `anyhow`, `eyre`,
    /// and manual walks.
    #[must_use]
    pub(crate) fn with_source(mut self, source: impl Into<BoxError>) -> Self {
        self.source = Some(source.into());
        self
    }

    // -- Internal constructors --

    /// Shared constructor for simple errors (no source, no label).
    fn with_kind(kind: ErrorKind, msg: impl Into<String>) -> Self {
        Self {
            kind,
            message: msg.into(),
            source: None,
            label: None,
        }
    }

    /// Create an unsupported-charset error, keeping the original label.
    pub(crate) fn unsupported_charset(label: &str) -> Self {
        Self::with_kind(ErrorKind::UnsupportedCharset, format!("unsupported charset {label:?}"))
            .with_label(label)
    }

    /// Create a decode error.
    pub(crate) fn decode(msg: impl Into<String>) -> Self {
        Self::with_kind(ErrorKind::Decode, msg)
    }
}

impl fmt::Display for Error {
    /// The message, then ` (charset <name>)` when the label is known and
    /// not already part of the message.  The source error detail is
    /// available via [`std::error::Error::source`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        if self.kind == ErrorKind::Decode {
            if let Some(label) = &self.label {
                write!(f, " (charset {label})")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Error")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .field("label", &self.label)
            .field("source", &self.source)
            .finish()
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| &**e as &(dyn std::error::Error + 'static))
    }
}

impl From<Error> for io::Error {
    /// Decode failures surface through `io::Read` as `InvalidData`;
    /// unsupported labels (rejected before any read) as `InvalidInput`.
    fn from(err: Error) -> io::Error {
        let kind = match err.kind {
            ErrorKind::UnsupportedCharset => io::ErrorKind::InvalidInput,
            ErrorKind::Decode => io::ErrorKind::InvalidData,
        };
        io::Error::new(kind, err)
    }
}

// Ensure Error is Send + Sync so it can cross threads and be boxed as a
// source by downstream error types.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Error>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn unsupported_charset_keeps_original_spelling() {
        let err = Error::unsupported_charset("Wtf-9");
        assert!(err.is_unsupported_charset());
        assert!(!err.is_decode());
        assert_eq!(err.label(), Some("Wtf-9"));
        assert_eq!(err.to_string(), "unsupported charset \"Wtf-9\"");
    }

    #[test]
    fn decode_display_includes_label() {
        let err = Error::decode("malformed byte sequence").with_label("shift_jis");
        assert!(err.is_decode());
        assert_eq!(err.to_string(), "malformed byte sequence (charset shift_jis)");
    }

    #[test]
    fn source_chain_is_walkable() {
        let inner = io::Error::new(io::ErrorKind::UnexpectedEof, "short read");
        let err = Error::decode("byte source failed").with_source(inner);
        let source = err.source().expect("source should be set");
        assert!(source.downcast_ref::<io::Error>().is_some());
    }

    #[test]
    fn io_error_kinds() {
        let io_err: io::Error = Error::decode("malformed byte sequence").into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
        let io_err: io::Error = Error::unsupported_charset("bogus").into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidInput);
    }
}
