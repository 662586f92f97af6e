use std::{iter::Peekable, marker::PhantomData};

use crate::{error::Error, Pull, Sequence, Step};

/// Yields the items of an iterator in order, then completes.
pub struct Of<I>(I);

/// Create a sequence over a finite list of items.
///
/// ```rust
/// use seqgen::prelude::*;
///
/// assert_eq!(of([7, 6, 5]).to_vec().unwrap(), vec![7, 6, 5]);
/// assert_eq!(of(Vec::<i32>::new()).count().unwrap(), 0);
/// ```
pub fn of<I>(items: I) -> Of<I::IntoIter>
where
    I: IntoIterator,
{
    Of(items.into_iter())
}

impl<I> Sequence for Of<I>
where
    I: Iterator,
{
    type Item = I::Item;
    fn advance(&mut self) -> Pull<Self::Item> {
        Ok(match self.0.next() {
            Some(v) => Step::Yielded(v),
            None => Step::Complete(None),
        })
    }
}

/// Yields all items but the last, then completes with the last as terminal value.
pub struct OfReturn<I>
where
    I: Iterator,
{
    items: Peekable<I>,
}

/// Create a sequence whose last item is delivered as its terminal value.
///
/// ```rust
/// use seqgen::prelude::*;
///
/// let mut seq = of_return([1, 2]);
/// assert_eq!(seq.advance().unwrap(), Step::Yielded(1));
/// assert_eq!(seq.advance().unwrap(), Step::Complete(Some(2)));
/// assert_eq!(seq.advance().unwrap(), Step::Complete(None));
/// ```
pub fn of_return<I>(items: I) -> OfReturn<I::IntoIter>
where
    I: IntoIterator,
{
    OfReturn {
        items: items.into_iter().peekable(),
    }
}

impl<I> Sequence for OfReturn<I>
where
    I: Iterator,
{
    type Item = I::Item;
    fn advance(&mut self) -> Pull<Self::Item> {
        Ok(match self.items.next() {
            Some(v) if self.items.peek().is_none() => Step::Complete(Some(v)),
            Some(v) => Step::Yielded(v),
            None => Step::Complete(None),
        })
    }
}

/// Cycles through a list of items forever.
pub struct OfInfinite<T> {
    items: Vec<T>,
    index: usize,
}

/// Create a sequence repeating `items` cyclically.
///
/// An empty list is rejected with [`Error::InvalidArgument`] on the first pull.
///
/// ```rust
/// use seqgen::prelude::*;
///
/// let seq = of_infinite([7, 6]).limit(5);
/// assert_eq!(seq.to_vec().unwrap(), vec![7, 6, 7, 6, 7]);
/// ```
pub fn of_infinite<I>(items: I) -> OfInfinite<I::Item>
where
    I: IntoIterator,
{
    OfInfinite {
        items: items.into_iter().collect(),
        index: 0,
    }
}

impl<T> Sequence for OfInfinite<T>
where
    T: Clone,
{
    type Item = T;
    fn advance(&mut self) -> Pull<T> {
        let Some(item) = self.items.get(self.index) else {
            return Err(Error::invalid("of_infinite needs at least one item"));
        };
        let item = item.clone();
        self.index = (self.index + 1) % self.items.len();
        Ok(Step::Yielded(item))
    }
}

/// A sequence with no elements.
pub struct Empty<T>(PhantomData<fn() -> T>);

/// Create a sequence that completes on its first pull.
///
/// ```rust
/// use seqgen::prelude::*;
///
/// assert!(empty::<i32>().advance().unwrap().is_exhausted());
/// ```
pub fn empty<T>() -> Empty<T> {
    Empty(PhantomData)
}

impl<T> Sequence for Empty<T> {
    type Item = T;
    fn advance(&mut self) -> Pull<T> {
        Ok(Step::Complete(None))
    }
}
