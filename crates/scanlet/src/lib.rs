//! An allocation-light cursor over a fixed byte buffer.
//!
//! `scanlet` is a substrate for hand-rolled parsers on small targets: bind a
//! [`Scanner`] to some bytes, then drive it with typed reads (booleans,
//! integers, floats, delimited runs) and cursor movement (skip, jump, search,
//! compare). Every movement is driven either by a literal byte, a literal
//! token, or a single-byte predicate (a [`Criterion`]).
//!
//! Scanning never fails loudly. A read that does not find its lexical class
//! at the cursor returns the type's zero value and leaves the cursor where it
//! was; callers detect a failed parse by looking at the return value or at
//! [`Scanner::position`].
//!
//! ```rust
//! use scanlet::{Scanner, class};
//!
//! let mut s = Scanner::from("temp=-12.5;fan=1");
//! s.jump_after(b'=');
//! assert_eq!(s.read_f32(), -12.5);
//! s.skip_while(class::is_separator);
//! assert_eq!(s.read_string(b'='), "fan");
//! s.skip(1);
//! assert_eq!(s.read_u8(), 1);
//! assert!(s.is_overflow());
//! ```
//!
//! The crate is `no_std`; only [`Scanner::read_string`] allocates.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod class;
mod criterion;
mod error;
mod numbers;
mod options;
mod scanner;

#[cfg(test)]
mod tests;

pub use bstr::{BStr, BString};
pub use criterion::Criterion;
pub use error::ScanError;
pub use numbers::ScanValue;
pub use options::{CriterionCompare, ScannerOptions};
pub use scanner::Scanner;
