//! Pull-based lazy sequences.
//!
//! A [`Sequence`] wraps a [`Producer`]: something that, when asked, either
//! produces the next element or reports that there are no more. Nothing is
//! computed until a consumer pulls, so a sequence can be infinite as long as
//! something downstream bounds it.
//!
//! ```
//! use fseq::{repeat, Sequence};
//!
//! let words = ["foo", "bar", "baz"].map(String::from);
//! let shouted = Sequence::lift(&words)
//!     .map(|s| s.to_uppercase())
//!     .exclude(|s| s.starts_with('F'))
//!     .collect();
//! assert_eq!(shouted, vec!["BAR".to_string(), "BAZ".to_string()]);
//!
//! // infinite sources are fine as long as something takes from them
//! let ticks = Sequence::new(repeat(1)).take(3).fold(0, |acc, x| acc + x);
//! assert_eq!(ticks, 3);
//! ```
//!
//! `collect` and `fold` pull until the sequence is exhausted. Calling them on
//! a sequence that is still infinite after all combinators never returns.
//! This is not detected.

mod sequence;

pub use sequence::{repeat, IntoIter, Producer, Repeat, Sequence};
