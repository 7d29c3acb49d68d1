//! A sequence is a lazily evaluated stream of elements, driven by pulling.
//!
//! The [`Producer`] trait is the pull contract; [`Sequence`] adds the
//! exhaustion state machine and the combinators on top of it.

mod combinator;
mod iter;
mod producer;
mod sequence_core;

pub use iter::IntoIter;
pub use producer::{repeat, Producer, Repeat};
pub use sequence_core::Sequence;
