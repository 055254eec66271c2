use core::str::Chars;

use crate::SourceError;

/// A decoded code point together with the size of its encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
pub struct CodePoint {
    /// The code point.
    pub ch: char,
    /// Number of bytes the source consumed for `ch` (1-4 for valid UTF-8).
    pub ch_len: u8,
}

impl CodePoint {
    /// A code point whose length is its UTF-8 encoded length.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn new(ch: char) -> Self {
        Self {
            ch,
            ch_len: ch.len_utf8() as u8,
        }
    }
}

impl From<char> for CodePoint {
    fn from(ch: char) -> Self {
        Self::new(ch)
    }
}

/// A stateful producer of code points.
///
/// Each call yields the next code point and advances the source. Once a call
/// returns an error, every later call must keep returning a terminal error;
/// [`Lookahead`](crate::Lookahead) relies on this and never retries.
pub trait CodePointSource {
    /// Produces the next code point.
    ///
    /// # Errors
    ///
    /// [`SourceError::EndOfInput`] once the source is drained, or
    /// [`SourceError::Decode`] when the underlying bytes are malformed.
    fn next_code_point(&mut self) -> Result<CodePoint, SourceError>;
}

impl<S: CodePointSource + ?Sized> CodePointSource for &mut S {
    #[inline]
    fn next_code_point(&mut self) -> Result<CodePoint, SourceError> {
        (**self).next_code_point()
    }
}

/// Code points of an in-memory string.
#[derive(Debug, Clone)]
pub struct StrSource<'a> {
    chars: Chars<'a>,
    offset: usize,
}

impl<'a> StrSource<'a> {
    /// Reads `text` from the beginning.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars(),
            offset: 0,
        }
    }

    /// Bytes consumed so far.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The part of the string not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> &'a str {
        self.chars.as_str()
    }
}

impl CodePointSource for StrSource<'_> {
    fn next_code_point(&mut self) -> Result<CodePoint, SourceError> {
        let ch = self.chars.next().ok_or(SourceError::EndOfInput)?;
        let cp = CodePoint::new(ch);
        self.offset += usize::from(cp.ch_len);
        Ok(cp)
    }
}
