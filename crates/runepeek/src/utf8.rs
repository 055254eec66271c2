//! Code points decoded from raw UTF-8 bytes.
//!
//! Decoding uses [`bstr::decode_utf8`], which reports the maximal invalid
//! prefix when the bytes at the cursor are not a valid scalar. What happens
//! next is chosen by [`Utf8Options`].

use crate::{CodePoint, CodePointSource, DecodeError, SourceError};

/// How [`Utf8Source`] treats malformed input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
pub enum InvalidUtf8 {
    /// Stop at the first invalid sequence and report it on every later call.
    #[default]
    Fail,
    /// Substitute U+FFFD for each invalid sequence and keep going.
    Replace,
}

/// Configuration for [`Utf8Source`].
///
/// # Default
///
/// Invalid input is an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
pub struct Utf8Options {
    /// Policy for malformed sequences.
    pub invalid: InvalidUtf8,
}

/// Code points decoded from a byte slice.
#[derive(Debug, Clone)]
pub struct Utf8Source<'a> {
    bytes: &'a [u8],
    offset: usize,
    options: Utf8Options,
    failed: Option<DecodeError>,
}

impl<'a> Utf8Source<'a> {
    /// Decodes `bytes` with default options.
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self::with_options(bytes, Utf8Options::default())
    }

    /// Decodes `bytes`, handling malformed input as `options` says.
    #[must_use]
    pub fn with_options(bytes: &'a [u8], options: Utf8Options) -> Self {
        Self {
            bytes,
            offset: 0,
            options,
            failed: None,
        }
    }

    /// Bytes consumed so far. Does not advance past an invalid sequence in
    /// [`InvalidUtf8::Fail`] mode.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl CodePointSource for Utf8Source<'_> {
    #[expect(clippy::cast_possible_truncation)]
    fn next_code_point(&mut self) -> Result<CodePoint, SourceError> {
        if let Some(err) = self.failed {
            return Err(err.into());
        }

        let rest = &self.bytes[self.offset..];
        let (ch, len) = bstr::decode_utf8(rest);
        if len == 0 {
            return Err(SourceError::EndOfInput);
        }

        let ch = match (ch, self.options.invalid) {
            (Some(ch), _) => ch,
            (None, InvalidUtf8::Replace) => char::REPLACEMENT_CHARACTER,
            (None, InvalidUtf8::Fail) => {
                let err = DecodeError {
                    offset: self.offset,
                    len,
                };
                self.failed = Some(err);
                return Err(err.into());
            }
        };

        self.offset += len;
        // bstr never reports more than 4 bytes for one scalar or invalid prefix
        Ok(CodePoint {
            ch,
            ch_len: len as u8,
        })
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::String, vec::Vec};

    use super::*;

    fn drain(src: &mut Utf8Source<'_>) -> (String, SourceError) {
        let mut out = String::new();
        loop {
            match src.next_code_point() {
                Ok(cp) => out.push(cp.ch),
                Err(err) => return (out, err),
            }
        }
    }

    #[test]
    fn decodes_multibyte_scalars() {
        let text = "Héllô ¥º®£Ð";
        let mut src = Utf8Source::new(text.as_bytes());
        let mut lens = Vec::new();
        while let Ok(cp) = src.next_code_point() {
            lens.push(cp.ch_len);
        }
        assert_eq!(lens, [1, 2, 1, 1, 2, 1, 2, 2, 2, 2, 2]);
        assert_eq!(src.offset(), text.len());
    }

    #[test]
    fn fail_mode_latches_first_error() {
        let mut src = Utf8Source::new(b"ab\xFFcd");
        let (prefix, err) = drain(&mut src);
        assert_eq!(prefix, "ab");
        let expected = SourceError::Decode(DecodeError { offset: 2, len: 1 });
        assert_eq!(err, expected);
        assert_eq!(src.next_code_point(), Err(expected));
        assert_eq!(src.offset(), 2);
    }

    #[test]
    fn truncated_sequence_is_one_error() {
        // first two bytes of a three byte scalar
        let mut src = Utf8Source::new(b"x\xE2\x82");
        let (prefix, err) = drain(&mut src);
        assert_eq!(prefix, "x");
        assert_eq!(err, SourceError::Decode(DecodeError { offset: 1, len: 2 }));
    }

    #[test]
    fn replace_mode_substitutes_and_continues() {
        let options = Utf8Options {
            invalid: InvalidUtf8::Replace,
        };
        let mut src = Utf8Source::with_options(b"a\xFF\xFEb", options);
        let (text, err) = drain(&mut src);
        assert_eq!(text, "a\u{FFFD}\u{FFFD}b");
        assert_eq!(err, SourceError::EndOfInput);
        assert_eq!(src.offset(), 4);
    }

    #[test]
    fn empty_input_is_end_of_input() {
        let mut src = Utf8Source::new(b"");
        assert_eq!(src.next_code_point(), Err(SourceError::EndOfInput));
        assert_eq!(src.next_code_point(), Err(SourceError::EndOfInput));
    }
}
