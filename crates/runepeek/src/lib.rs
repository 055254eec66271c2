//! Read and peek Unicode code points from a stream.
//!
//! [`Lookahead`] wraps any [`CodePointSource`] and lets a consumer inspect an
//! arbitrary number of upcoming code points without consuming them, while
//! still reading them one at a time in stream order.
//!
//! ```rust
//! use runepeek::{Lookahead, StrSource};
//!
//! let mut peeker = Lookahead::new(StrSource::new("Héllô"));
//!
//! assert_eq!(peeker.peek(2).unwrap(), ['H', 'é']);
//!
//! let h = peeker.read().unwrap();
//! assert_eq!((h.ch, h.ch_len), ('H', 1));
//! let e = peeker.read().unwrap();
//! assert_eq!((e.ch, e.ch_len), ('é', 2));
//!
//! // Asking for more than remains yields what is left plus the source error.
//! let short = peeker.peek(10).unwrap_err();
//! assert_eq!(short.partial(), ['l', 'l', 'ô']);
//! assert!(short.source_error().is_end_of_input());
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod peeker;
mod source;
mod utf8;


pub use error::{DecodeError, PeekError, SourceError};
pub use peeker::Lookahead;
pub use source::{CodePoint, CodePointSource, StrSource};
pub use utf8::{InvalidUtf8, Utf8Options, Utf8Source};
