//! Core trait for pull-based sequences.
//!
//! A [`Sequence`] is a single-pass producer. Each call to
//! [`advance`](Sequence::advance) returns one of three outcomes:
//!
//! - `Step::Yielded(v)`: an element, more may follow
//! - `Step::Complete(None)`: finished
//! - `Step::Complete(Some(v))`: finished, with `v` as one last element
//!
//! The third outcome is the *terminal value*. Every combinator in this crate
//! either forwards it or folds it in as a final element, and none of them
//! pulls an input again once that input has completed.
//!
//! ```rust
//! use seqgen::prelude::*;
//!
//! let mut seq = of_return([1, 2, 3]);
//! assert_eq!(seq.advance().unwrap().unwrap_yielded(), 1);
//! assert_eq!(seq.advance().unwrap().unwrap_yielded(), 2);
//! assert_eq!(seq.advance().unwrap().unwrap_complete(), Some(3));
//! ```

use std::{cell::RefCell, rc::Rc};

use crate::{
    compose::{Chain, Filter, FlatMap, Limit, Map, Scan, Skip},
    consume,
    error::{Error, Result},
    iter::SequenceIter,
    step::Step,
};

/// Result of one pull from a sequence.
pub type Pull<T> = Result<Step<T, Option<T>>>;

/// A type-erased sequence.
pub type BoxSequence<'a, T> = Box<dyn Sequence<Item = T> + 'a>;

/// A single-pass, pull-based, possibly infinite producer of elements.
pub trait Sequence {
    /// Type of the produced elements.
    type Item;

    /// Pull the next outcome.
    fn advance(&mut self) -> Pull<Self::Item>;

    fn boxed<'a>(self) -> BoxSequence<'a, Self::Item>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }

    /// Transform every element, including a terminal value.
    ///
    /// ```rust
    /// use seqgen::prelude::*;
    ///
    /// let squares = of([1, 2, 3]).map(|x| x * x);
    /// assert_eq!(squares.to_vec().unwrap(), vec![1, 4, 9]);
    /// ```
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> U,
    {
        Map::new(self, f)
    }

    /// Keep the elements that satisfy `predicate`.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        crate::compose::filter(self, predicate)
    }

    /// Replace every element with the elements of the sequence `f` builds from it.
    fn flat_map<S, F>(self, f: F) -> FlatMap<Self, S, F>
    where
        Self: Sized,
        S: Sequence,
        F: FnMut(Self::Item) -> S,
    {
        crate::compose::flat_map(self, f)
    }

    /// Yield each running accumulation.
    fn scan<A, F>(self, init: A, f: F) -> Scan<Self, A, F>
    where
        Self: Sized,
        A: Clone,
        F: FnMut(&A, Self::Item) -> A,
    {
        crate::compose::scan(self, init, f)
    }

    /// Stop after at most `max` elements.
    fn limit(self, max: usize) -> Limit<Self>
    where
        Self: Sized,
    {
        crate::compose::limit(self, max)
    }

    /// Drop the first `n` elements. `n` must be at least one.
    fn skip(self, n: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        crate::compose::skip(self, n)
    }

    /// Continue with `next` once this sequence is exhausted.
    fn chain<S>(self, next: S) -> Chain<Self, S>
    where
        Self: Sized,
        S: Sequence<Item = Self::Item>,
    {
        crate::compose::chain(self, next)
    }

    /// Adapt into a standard [`Iterator`] over `Result`s.
    fn iter(self) -> SequenceIter<Self>
    where
        Self: Sized,
    {
        SequenceIter::new(self)
    }

    fn for_each<F>(self, action: F) -> Result<()>
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        consume::for_each(self, action)
    }

    fn fold<A, F>(self, init: A, f: F) -> Result<A>
    where
        Self: Sized,
        F: FnMut(A, Self::Item) -> A,
    {
        consume::fold(self, init, f)
    }

    fn to_vec(self) -> Result<Vec<Self::Item>>
    where
        Self: Sized,
    {
        consume::to_vec(self)
    }

    /// The `index`-th element, counting from one.
    fn element_at(self, index: usize) -> Result<Option<Self::Item>>
    where
        Self: Sized,
    {
        consume::element_at(self, index)
    }

    fn count(self) -> Result<usize>
    where
        Self: Sized,
    {
        consume::count(self)
    }

    fn all<P>(self, predicate: P) -> Result<bool>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        consume::all(self, predicate)
    }

    fn any<P>(self, predicate: P) -> Result<bool>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        consume::any(self, predicate)
    }
}

impl<S> Sequence for &mut S
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;
    fn advance(&mut self) -> Pull<Self::Item> {
        (**self).advance()
    }
}

impl<S> Sequence for Box<S>
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;
    fn advance(&mut self) -> Pull<Self::Item> {
        (**self).advance()
    }
}

/// A shared sequence. Pulling it while it is already being pulled is a
/// [`Error::CyclicDemand`].
impl<S> Sequence for Rc<RefCell<S>>
where
    S: Sequence,
{
    type Item = S::Item;
    fn advance(&mut self) -> Pull<Self::Item> {
        let mut inner = self.try_borrow_mut().map_err(|_| Error::CyclicDemand)?;
        inner.advance()
    }
}

impl<S> Sequence for Option<S>
where
    S: Sequence,
{
    type Item = S::Item;
    fn advance(&mut self) -> Pull<Self::Item> {
        match self {
            Some(s) => s.advance(),
            None => Ok(Step::Complete(None)),
        }
    }
}

impl<L, R> Sequence for either::Either<L, R>
where
    L: Sequence,
    R: Sequence<Item = L::Item>,
{
    type Item = L::Item;
    fn advance(&mut self) -> Pull<Self::Item> {
        match self {
            either::Either::Left(l) => l.advance(),
            either::Either::Right(r) => r.advance(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{empty, of, of_return};
    use either::Either;

    #[test]
    fn test_mut_ref_leaves_sequence_usable() {
        let mut seq = of([1, 2, 3, 4]);
        assert_eq!((&mut seq).limit(2).to_vec().unwrap(), vec![1, 2]);
        assert_eq!(seq.to_vec().unwrap(), vec![3, 4]);
    }

    #[test]
    fn test_boxed_sequences_mix_types() {
        let seqs: Vec<BoxSequence<'_, i32>> = vec![of([1, 2]).boxed(), of_return([3, 4]).boxed()];
        let total: Vec<i32> = seqs
            .into_iter()
            .flat_map(|s| s.to_vec().unwrap())
            .collect();
        assert_eq!(total, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_option_none_is_empty() {
        let mut seq: Option<crate::build::Of<std::vec::IntoIter<i32>>> = None;
        assert!(seq.advance().unwrap().is_exhausted());
    }

    #[test]
    fn test_either_dispatches() {
        let pick = |left: bool| {
            if left {
                Either::Left(of([1, 2]))
            } else {
                Either::Right(empty())
            }
        };
        assert_eq!(pick(true).to_vec().unwrap(), vec![1, 2]);
        assert_eq!(pick(false).to_vec().unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn test_shared_sequence_is_pulled_in_turn() {
        let shared = Rc::new(RefCell::new(of([1, 2, 3])));
        let mut a = Rc::clone(&shared);
        let mut b = Rc::clone(&shared);
        assert_eq!(a.advance().unwrap().unwrap_yielded(), 1);
        assert_eq!(b.advance().unwrap().unwrap_yielded(), 2);
        assert_eq!(a.advance().unwrap().unwrap_yielded(), 3);
        assert!(b.advance().unwrap().is_exhausted());
    }

    #[test]
    fn test_shared_sequence_rejects_reentrant_pull() {
        let shared = Rc::new(RefCell::new(of([1])));
        let mut other = Rc::clone(&shared);
        let _guard = shared.borrow_mut();
        assert_eq!(other.advance(), Err(Error::CyclicDemand));
    }
}
