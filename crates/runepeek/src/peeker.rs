use alloc::{collections::VecDeque, vec::Vec};

use crate::{CodePoint, CodePointSource, DecodeError, PeekError, SourceError};

/// A lookahead buffer over a [`CodePointSource`].
///
/// Code points pulled from the source to satisfy a peek are kept in a pending
/// queue and handed out by later reads before the source is touched again,
/// so the sequence seen through any mix of [`read`](Self::read) and
/// [`peek`](Self::peek) calls is exactly the sequence the source produces.
///
/// Pass `&mut source` to keep ownership of the source; the borrow guarantees
/// nothing else pulls from it while the buffer is alive.
#[derive(Debug)]
pub struct Lookahead<S> {
    source: S,
    pending: VecDeque<char>,
}

impl<S: CodePointSource> Lookahead<S> {
    /// Wraps `source` with an empty pending queue.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            pending: VecDeque::new(),
        }
    }

    /// Like [`new`](Self::new), with room for `capacity` pending code points.
    #[must_use]
    pub fn with_capacity(source: S, capacity: usize) -> Self {
        Self {
            source,
            pending: VecDeque::with_capacity(capacity),
        }
    }

    /// Reads the next code point.
    ///
    /// Buffered code points are returned first, with their UTF-8 length
    /// recomputed. Otherwise the source's result is returned as is.
    ///
    /// # Errors
    ///
    /// Whatever the source reports once nothing is buffered.
    pub fn read(&mut self) -> Result<CodePoint, SourceError> {
        match self.pending.pop_front() {
            Some(ch) => Ok(CodePoint::new(ch)),
            None => self.source.next_code_point(),
        }
    }

    /// Returns the next `n` code points without consuming them.
    ///
    /// Peeking `0` code points touches neither the buffer nor the source.
    /// Repeating a peek with no read in between returns the same result.
    ///
    /// # Errors
    ///
    /// If the source stops before `n` code points are available, the
    /// returned [`PeekError`] holds the ones that were obtained and the
    /// source's error. Those code points stay buffered for later reads.
    pub fn peek(&mut self, n: usize) -> Result<Vec<char>, PeekError> {
        let stopped = self.fill(n).err();
        let peeked: Vec<char> = self.pending.iter().take(n).copied().collect();

        match stopped {
            None => Ok(peeked),
            Some(source) => {
                log::debug!(
                    "peek stopped after {} of {n} code points: {source}",
                    peeked.len()
                );
                Err(PeekError {
                    partial: peeked,
                    requested: n,
                    source,
                })
            }
        }
    }

    /// Returns the next code point without consuming it.
    ///
    /// # Errors
    ///
    /// Whatever the source reports if nothing is buffered.
    pub fn peek_char(&mut self) -> Result<char, SourceError> {
        if let Some(&ch) = self.pending.front() {
            return Ok(ch);
        }
        let cp = self.source.next_code_point()?;
        self.pending.push_back(cp.ch);
        Ok(cp.ch)
    }

    /// Pulls from the source until `n` code points are pending.
    ///
    /// Stops at the first error without buffering anything for the failed
    /// pull. The queue grows only as code points arrive, so `n` may be far
    /// larger than what the source holds.
    fn fill(&mut self, n: usize) -> Result<(), SourceError> {
        while self.pending.len() < n {
            let cp = self.source.next_code_point()?;
            log::trace!("buffered {:?} ({} bytes)", cp.ch, cp.ch_len);
            self.pending.push_back(cp.ch);
        }
        Ok(())
    }
}

impl<S> Lookahead<S> {
    /// Number of code points pulled from the source but not yet read.
    #[must_use]
    pub fn buffered(&self) -> usize {
        self.pending.len()
    }

    /// Shared access to the wrapped source.
    ///
    /// The source's position is ahead of the reader by [`buffered`](Self::buffered)
    /// code points.
    #[must_use]
    pub fn get_ref(&self) -> &S {
        &self.source
    }

    /// Releases the source along with any code points that were buffered but
    /// not read, in stream order.
    #[must_use]
    pub fn into_parts(self) -> (S, VecDeque<char>) {
        (self.source, self.pending)
    }
}

/// Reads code points until end of input.
///
/// A decode error is yielded as `Some(Err(_))`; sources keep reporting it, so
/// callers should stop at the first error.
impl<S: CodePointSource> Iterator for Lookahead<S> {
    type Item = Result<char, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.read() {
            Ok(cp) => Some(Ok(cp.ch)),
            Err(SourceError::EndOfInput) => None,
            Err(SourceError::Decode(err)) => Some(Err(err)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.pending.len(), None)
    }
}
