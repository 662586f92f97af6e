//! Iterator adapter for sequences.
//!
//! [`SequenceIter`] turns any [`Sequence`] into a standard [`Iterator`] over
//! `Result<Item, Error>`, so sequences can feed `for` loops and iterator
//! chains. The terminal value is delivered like any other element, and
//! [`SequenceIter::finish`] tells afterwards how the sequence ended.
//!
//! ```rust
//! use seqgen::prelude::*;
//! use seqgen::iter::Finish;
//!
//! let mut iter = of_return([1, 2, 3]).iter();
//! let values: Vec<_> = iter.by_ref().collect::<Result<_, _>>().unwrap();
//! assert_eq!(values, vec![1, 2, 3]);
//! assert_eq!(iter.finish(), Some(&Finish::WithValue));
//! ```

use crate::{error::Error, Sequence, Step};

/// How a sequence ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finish {
    /// Plain completion.
    Exhausted,
    /// Completion with a terminal value, which was the last item produced.
    WithValue,
    /// An `advance` call failed; the error was the last item produced.
    Failed,
}

/// Iterator adapter for a [`Sequence`].
///
/// Both `SequenceIter` and `&mut SequenceIter` implement `Iterator`, so the
/// wrapper can be iterated without being consumed and inspected afterwards.
pub struct SequenceIter<S> {
    state: SequenceIterState<S>,
}

enum SequenceIterState<S> {
    Active(S),
    Finished(Finish),
}

impl<S> SequenceIter<S>
where
    S: Sequence,
{
    /// Wrap `seq`; nothing is pulled until the first `next`.
    ///
    /// ```rust
    /// use seqgen::prelude::*;
    /// use seqgen::SequenceIter;
    ///
    /// let mut iter = SequenceIter::new(of([1]));
    /// assert_eq!(iter.finish(), None);
    /// assert_eq!(iter.next(), Some(Ok(1)));
    /// ```
    pub fn new(seq: S) -> Self {
        Self {
            state: SequenceIterState::Active(seq),
        }
    }

    /// Check if the sequence has ended.
    pub fn is_finished(&self) -> bool {
        matches!(self.state, SequenceIterState::Finished(_))
    }

    /// How the sequence ended, or `None` while it is still running.
    pub fn finish(&self) -> Option<&Finish> {
        match &self.state {
            SequenceIterState::Finished(finish) => Some(finish),
            SequenceIterState::Active(_) => None,
        }
    }
}

impl<S> Iterator for SequenceIter<S>
where
    S: Sequence,
{
    type Item = Result<S::Item, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let SequenceIterState::Active(seq) = &mut self.state else {
            return None;
        };
        let (item, finish) = match seq.advance() {
            Ok(Step::Yielded(v)) => return Some(Ok(v)),
            Ok(Step::Complete(Some(v))) => (Some(Ok(v)), Finish::WithValue),
            Ok(Step::Complete(None)) => (None, Finish::Exhausted),
            Err(e) => (Some(Err(e)), Finish::Failed),
        };
        self.state = SequenceIterState::Finished(finish);
        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{of, of_infinite, range_from};

    #[test]
    fn test_iter_plain_completion() {
        let mut iter = of([1, 2]).iter();
        assert_eq!(iter.next(), Some(Ok(1)));
        assert_eq!(iter.next(), Some(Ok(2)));
        assert!(!iter.is_finished());
        assert_eq!(iter.next(), None);
        assert_eq!(iter.finish(), Some(&Finish::Exhausted));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_iter_with_mut_ref_on_infinite_sequence() {
        let mut iter = range_from(0).iter();
        let values: Vec<_> = (&mut iter).take(3).map(Result::unwrap).collect();
        assert_eq!(values, vec![0, 1, 2]);
        assert!(!iter.is_finished());
        assert_eq!(iter.finish(), None);
    }

    #[test]
    fn test_iter_reports_error_once() {
        let mut iter = of_infinite(Vec::<i32>::new()).iter();
        assert!(matches!(iter.next(), Some(Err(Error::InvalidArgument(_)))));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.finish(), Some(&Finish::Failed));
    }

    #[test]
    fn test_for_loop() {
        let mut total = 0;
        for value in of([1, 2, 3]).iter() {
            total += value.unwrap();
        }
        assert_eq!(total, 6);
    }
}
