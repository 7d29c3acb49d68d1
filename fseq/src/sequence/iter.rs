use std::iter::FusedIterator;

use super::sequence_core::Sequence;

/// An iterator that pulls from a [`Sequence`].
///
/// Created by `Sequence::into_iter`. It is fused: a sequence never yields
/// again after exhaustion.
#[derive(Debug)]
pub struct IntoIter<'a, T> {
    sequence: Sequence<'a, T>,
}

impl<'a, T> IntoIter<'a, T> {
    pub(crate) fn new(sequence: Sequence<'a, T>) -> Self {
        Self { sequence }
    }
}

impl<'a, T: 'a> Iterator for IntoIter<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.sequence.pull()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.sequence.is_exhausted() {
            (0, Some(0))
        } else {
            (0, None)
        }
    }
}

impl<'a, T: 'a> FusedIterator for IntoIter<'a, T> {}
