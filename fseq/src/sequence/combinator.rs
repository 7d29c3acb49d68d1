use super::producer::Producer;
use super::sequence_core::Sequence;

pub(crate) struct MapProducer<'a, T, F> {
    upstream: Sequence<'a, T>,
    f: F,
}

impl<'a, T, F> MapProducer<'a, T, F> {
    pub(crate) fn new(upstream: Sequence<'a, T>, f: F) -> Self {
        Self { upstream, f }
    }
}

impl<'a, T: 'a, F> Producer<T> for MapProducer<'a, T, F>
where
    F: FnMut(T) -> T,
{
    fn produce(&mut self) -> Option<T> {
        self.upstream.pull().map(&mut self.f)
    }
}

/// Shared by filter and exclude: an element passes when the predicate
/// result equals `keep`.
pub(crate) struct FilterProducer<'a, T, P> {
    upstream: Sequence<'a, T>,
    predicate: P,
    keep: bool,
}

impl<'a, T, P> FilterProducer<'a, T, P> {
    pub(crate) fn new(upstream: Sequence<'a, T>, predicate: P, keep: bool) -> Self {
        Self {
            upstream,
            predicate,
            keep,
        }
    }
}

impl<'a, T: 'a, P> Producer<T> for FilterProducer<'a, T, P>
where
    P: FnMut(&T) -> bool,
{
    fn produce(&mut self) -> Option<T> {
        loop {
            let item = self.upstream.pull()?;
            if (self.predicate)(&item) == self.keep {
                return Some(item);
            }
        }
    }
}

pub(crate) struct TakeProducer<'a, T> {
    upstream: Sequence<'a, T>,
    remaining: usize,
}

impl<'a, T> TakeProducer<'a, T> {
    pub(crate) fn new(upstream: Sequence<'a, T>, n: usize) -> Self {
        Self {
            upstream,
            remaining: n,
        }
    }
}

impl<'a, T: 'a> Producer<T> for TakeProducer<'a, T> {
    fn produce(&mut self) -> Option<T> {
        // checked before pulling so the (n+1)th element is never requested
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.upstream.pull()
    }
}

pub(crate) struct DropProducer<'a, T> {
    upstream: Sequence<'a, T>,
    pending: usize,
}

impl<'a, T> DropProducer<'a, T> {
    pub(crate) fn new(upstream: Sequence<'a, T>, n: usize) -> Self {
        Self {
            upstream,
            pending: n,
        }
    }
}

impl<'a, T: 'a> Producer<T> for DropProducer<'a, T> {
    fn produce(&mut self) -> Option<T> {
        while self.pending > 0 {
            self.pending -= 1;
            self.upstream.pull()?;
        }
        self.upstream.pull()
    }
}

pub(crate) struct ChainProducer<'a, T> {
    first: Sequence<'a, T>,
    second: Sequence<'a, T>,
}

impl<'a, T> ChainProducer<'a, T> {
    pub(crate) fn new(first: Sequence<'a, T>, second: Sequence<'a, T>) -> Self {
        Self { first, second }
    }
}

impl<'a, T: 'a> Producer<T> for ChainProducer<'a, T> {
    fn produce(&mut self) -> Option<T> {
        // an exhausted sequence answers without pulling, so once `first` is
        // done this goes straight to `second`
        match self.first.pull() {
            Some(item) => Some(item),
            None => self.second.pull(),
        }
    }
}
