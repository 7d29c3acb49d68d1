/// The pull contract underneath every sequence.
///
/// `produce` returns `Some` with the next element, or `None` once there are
/// no more. A producer does not have to keep returning `None` after the
/// first one; [`Sequence`](crate::Sequence) guarantees that on its own.
pub trait Producer<T> {
    fn produce(&mut self) -> Option<T>;
}

impl<T, F> Producer<T> for F
where
    F: FnMut() -> Option<T>,
{
    #[inline]
    fn produce(&mut self) -> Option<T> {
        self()
    }
}

/// An infinite producer yielding clones of one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repeat<T> {
    value: T,
}

/// Create a producer that yields `value` forever.
///
/// Wrap it with [`Sequence::new`](crate::Sequence::new) and bound it with
/// [`take`](crate::Sequence::take) before consuming it.
pub fn repeat<T: Clone>(value: T) -> Repeat<T> {
    Repeat { value }
}

impl<T: Clone> Producer<T> for Repeat<T> {
    #[inline]
    fn produce(&mut self) -> Option<T> {
        Some(self.value.clone())
    }
}

/// Yields clones of the elements of a borrowed slice.
pub(crate) struct Lift<'a, T> {
    items: &'a [T],
    index: usize,
}

impl<'a, T> Lift<'a, T> {
    pub(crate) fn new(items: &'a [T]) -> Self {
        Self { items, index: 0 }
    }
}

impl<T: Clone> Producer<T> for Lift<'_, T> {
    fn produce(&mut self) -> Option<T> {
        let item = self.items.get(self.index)?.clone();
        self.index += 1;
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_producer() {
        let mut n = 0;
        let mut counter = move || {
            n += 1;
            (n <= 2).then_some(n)
        };
        assert_eq!(counter.produce(), Some(1));
        assert_eq!(counter.produce(), Some(2));
        assert_eq!(counter.produce(), None);
    }

    #[test]
    fn test_repeat_never_exhausts() {
        let mut r = repeat("foo");
        for _ in 0..1000 {
            assert_eq!(r.produce(), Some("foo"));
        }
    }

    #[test]
    fn test_lift_does_not_touch_items() {
        let items = vec![1, 2];
        let mut lift = Lift::new(&items);
        assert_eq!(lift.produce(), Some(1));
        assert_eq!(lift.produce(), Some(2));
        assert_eq!(lift.produce(), None);
        assert_eq!(items, vec![1, 2]);
    }
}
