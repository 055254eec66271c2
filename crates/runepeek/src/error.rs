use alloc::vec::Vec;

use thiserror::Error;

/// Terminal condition reported by a [`CodePointSource`](crate::CodePointSource).
///
/// [`Lookahead`](crate::Lookahead) never produces one of these itself; it
/// hands back exactly what the source reported.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
pub enum SourceError {
    /// The source has no more code points.
    #[error("end of input")]
    EndOfInput,
    /// The source met bytes that do not form a code point.
    #[error("invalid UTF-8: {0}")]
    Decode(#[from] DecodeError),
}

impl SourceError {
    /// Returns `true` for a clean end of input.
    #[must_use]
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, SourceError::EndOfInput)
    }

    /// Returns `true` when the source stopped on malformed input.
    #[must_use]
    pub fn is_decode(&self) -> bool {
        matches!(self, SourceError::Decode(_))
    }
}

/// A malformed UTF-8 sequence.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[error("{len} invalid byte(s) at offset {offset}")]
pub struct DecodeError {
    /// Byte offset of the first invalid byte.
    pub offset: usize,
    /// Length of the invalid prefix, in bytes.
    pub len: usize,
}

/// A peek that could not gather every requested code point.
///
/// Carries the code points that were obtained before the source stopped, in
/// stream order. They remain buffered and will be returned by later reads.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("peeked {} of {requested} code points: {source}", .partial.len())]
pub struct PeekError {
    pub(crate) partial: Vec<char>,
    pub(crate) requested: usize,
    pub(crate) source: SourceError,
}

impl PeekError {
    /// Code points obtained before the source stopped.
    #[must_use]
    pub fn partial(&self) -> &[char] {
        &self.partial
    }

    /// Consumes the error, returning the code points obtained.
    #[must_use]
    pub fn into_partial(self) -> Vec<char> {
        self.partial
    }

    /// Number of code points the caller asked for.
    #[must_use]
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// The error reported by the source, unchanged.
    #[must_use]
    pub fn source_error(&self) -> SourceError {
        self.source
    }
}
