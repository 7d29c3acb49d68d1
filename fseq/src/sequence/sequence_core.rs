use std::fmt;

use super::combinator::{ChainProducer, DropProducer, FilterProducer, MapProducer, TakeProducer};
use super::iter::IntoIter;
use super::producer::{Lift, Producer};

/// A lazily evaluated, possibly infinite, single-pass stream of `T`.
///
/// Every combinator takes the sequence by value and wraps it, so each
/// sequence in a chain is owned by exactly one downstream consumer.
/// Elements are only computed when something pulls.
pub struct Sequence<'a, T> {
    state: State<'a, T>,
}

enum State<'a, T> {
    Active(Box<dyn Producer<T> + 'a>),
    // the producer is dropped as soon as it reports exhaustion
    Exhausted,
}

impl<'a, T: 'a> Sequence<'a, T> {
    /// Wrap a producer into a sequence.
    pub fn new(producer: impl Producer<T> + 'a) -> Self {
        Self {
            state: State::Active(Box::new(producer)),
        }
    }

    /// A sequence over the elements of `items`, in order.
    ///
    /// `items` is only borrowed; lift it again to traverse it again.
    pub fn lift(items: &'a [T]) -> Self
    where
        T: Clone,
    {
        Self::new(Lift::new(items))
    }

    /// Pull the next element, or `None` if the sequence is exhausted.
    ///
    /// Once this has returned `None` it keeps returning `None`; the
    /// underlying producer is not consulted again.
    pub fn pull(&mut self) -> Option<T> {
        let State::Active(producer) = &mut self.state else {
            return None;
        };
        let next = producer.produce();
        if next.is_none() {
            self.state = State::Exhausted;
        }
        next
    }

    /// Whether a pull has already reported exhaustion.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.state, State::Exhausted)
    }

    /// Apply `f` to each element as it is pulled.
    pub fn map(self, f: impl FnMut(T) -> T + 'a) -> Self {
        Self::new(MapProducer::new(self, f))
    }

    /// Keep only the elements for which `predicate` holds.
    pub fn filter(self, predicate: impl FnMut(&T) -> bool + 'a) -> Self {
        Self::new(FilterProducer::new(self, predicate, true))
    }

    /// Keep only the elements for which `predicate` does not hold.
    pub fn exclude(self, predicate: impl FnMut(&T) -> bool + 'a) -> Self {
        Self::new(FilterProducer::new(self, predicate, false))
    }

    /// Yield at most the first `n` elements.
    ///
    /// Never pulls more than `n` elements from upstream, which is what makes
    /// taking from an infinite sequence terminate.
    pub fn take(self, n: usize) -> Self {
        Self::new(TakeProducer::new(self, n))
    }

    /// Discard the first `n` elements, then yield the rest.
    ///
    /// The discarded elements are pulled on the first demand.
    pub fn drop(self, n: usize) -> Self {
        Self::new(DropProducer::new(self, n))
    }

    /// Yield every element of `self`, then every element of `other`.
    ///
    /// `other` is not pulled until `self` is exhausted, so an infinite `self`
    /// means `other` is never reached.
    pub fn chain(self, other: Sequence<'a, T>) -> Self {
        Self::new(ChainProducer::new(self, other))
    }

    /// Pull until exhaustion, returning the elements in order.
    ///
    /// Does not return if the sequence is infinite.
    pub fn collect(self) -> Vec<T> {
        self.into_iter().collect()
    }

    /// Left fold: starting from `seed`, replace the accumulator with
    /// `f(accumulator, element)` for each element in order.
    ///
    /// Does not return if the sequence is infinite.
    pub fn fold(self, seed: T, f: impl FnMut(T, T) -> T) -> T {
        self.into_iter().fold(seed, f)
    }
}

impl<'a, T: 'a> IntoIterator for Sequence<'a, T> {
    type Item = T;
    type IntoIter = IntoIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<T> fmt::Debug for Sequence<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.state {
            State::Active(_) => "Active",
            State::Exhausted => "Exhausted",
        };
        f.debug_tuple("Sequence").field(&format_args!("{state}")).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::repeat;

    #[test]
    fn test_lift_collect() {
        let items = vec!["bar".to_string(), "foo".to_string()];
        assert_eq!(Sequence::lift(&items).collect(), items);
    }

    #[test]
    fn test_lift_empty() {
        let items: Vec<i32> = vec![];
        assert_eq!(Sequence::lift(&items).collect(), Vec::<i32>::new());
    }

    #[test]
    fn test_pull_after_exhaustion() {
        let items = [1];
        let mut seq = Sequence::lift(&items);
        assert!(!seq.is_exhausted());
        assert_eq!(seq.pull(), Some(1));
        assert!(!seq.is_exhausted());
        assert_eq!(seq.pull(), None);
        assert!(seq.is_exhausted());
        assert_eq!(seq.pull(), None);
    }

    #[test]
    fn test_exhaustion_is_not_resurrected() {
        // a misbehaving producer that yields again after saying it was done
        let calls = Cell::new(0);
        let mut seq = Sequence::new(|| {
            calls.set(calls.get() + 1);
            match calls.get() {
                1 => Some(1),
                2 => None,
                _ => Some(99),
            }
        });
        assert_eq!(seq.pull(), Some(1));
        assert_eq!(seq.pull(), None);
        assert_eq!(seq.pull(), None);
        assert_eq!(seq.pull(), None);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_repeat_take() {
        let result = Sequence::new(repeat("foo")).take(3).collect();
        assert_eq!(result, vec!["foo", "foo", "foo"]);
    }

    #[test]
    fn test_fold_prepend() {
        let items = ["foo", "bar", "baz"].map(String::from);
        let result = Sequence::lift(&items).fold(String::new(), |a, b| b + &a);
        assert_eq!(result, "bazbarfoo");
    }

    #[test]
    fn test_fold_empty_is_seed() {
        let items: [i32; 0] = [];
        assert_eq!(Sequence::lift(&items).fold(7, |a, b| a + b), 7);
    }

    #[test]
    fn test_for_loop() {
        let items = [1, 2, 3];
        let mut total = 0;
        for x in Sequence::lift(&items).map(|x| x * 10) {
            total += x;
        }
        assert_eq!(total, 60);
    }

    #[test]
    fn test_debug_shows_state() {
        let items = [1];
        let mut seq = Sequence::lift(&items);
        assert_eq!(format!("{seq:?}"), "Sequence(Active)");
        seq.pull();
        seq.pull();
        assert_eq!(format!("{seq:?}"), "Sequence(Exhausted)");
    }
}
