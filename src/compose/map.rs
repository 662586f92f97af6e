//! Element transforms: unary and n-ary mapping, running accumulation.

use crate::{compose::Fuse, Pull, Sequence, Step};

/// Applies a function to every element, terminal value included.
///
/// Created via [`Sequence::map`].
pub struct Map<S, F> {
    seq: Fuse<S>,
    f: F,
}

impl<S, F> Map<S, F> {
    pub(crate) fn new(seq: S, f: F) -> Self {
        Map {
            seq: Fuse::new(seq),
            f,
        }
    }
}

impl<U, S, F> Sequence for Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> U,
{
    type Item = U;
    fn advance(&mut self) -> Pull<U> {
        Ok(match self.seq.advance()? {
            Step::Yielded(v) => Step::Yielded((self.f)(v)),
            Step::Complete(tail) => Step::Complete(tail.map(&mut self.f)),
        })
    }
}

/// Zips several sequences through an n-ary function.
///
/// Created via [`map`].
pub struct MapAll<S, F>
where
    S: Sequence,
{
    seqs: Vec<S>,
    f: F,
    values: Vec<S::Item>,
    done: bool,
}

/// Apply `f` to the next element of every sequence in `seqs`, in order.
///
/// Stops as soon as any input is exhausted; the remaining inputs are not
/// pulled in that round. A terminal value counts as an element, and the round
/// that consumed one is the last. With no inputs the result is empty.
///
/// ```rust
/// use seqgen::prelude::*;
///
/// let products = map(|xs: &[i32]| xs[0] * xs[1], [of(vec![1, 2, 3]), of(vec![4, 5])]);
/// assert_eq!(products.to_vec().unwrap(), vec![4, 10]);
/// ```
pub fn map<I, U, F>(f: F, seqs: I) -> MapAll<I::Item, F>
where
    I: IntoIterator,
    I::Item: Sequence,
    F: FnMut(&[<I::Item as Sequence>::Item]) -> U,
{
    let seqs: Vec<_> = seqs.into_iter().collect();
    MapAll {
        done: seqs.is_empty(),
        values: Vec::with_capacity(seqs.len()),
        seqs,
        f,
    }
}

impl<U, S, F> Sequence for MapAll<S, F>
where
    S: Sequence,
    F: FnMut(&[S::Item]) -> U,
{
    type Item = U;
    fn advance(&mut self) -> Pull<U> {
        if self.done {
            return Ok(Step::Complete(None));
        }
        self.values.clear();
        let mut last_round = false;
        for seq in &mut self.seqs {
            match seq.advance()? {
                Step::Yielded(v) => self.values.push(v),
                Step::Complete(Some(v)) => {
                    self.values.push(v);
                    last_round = true;
                }
                Step::Complete(None) => {
                    self.done = true;
                    self.values.clear();
                    return Ok(Step::Complete(None));
                }
            }
        }
        self.done = last_round;
        Ok(Step::Yielded((self.f)(&self.values)))
    }
}

/// Yields every intermediate accumulation.
///
/// Created via [`scan`] or [`Sequence::scan`].
pub struct Scan<S, A, F> {
    seq: Fuse<S>,
    acc: A,
    f: F,
}

/// Fold `seq` with `f` starting from `init`, yielding each new accumulator.
///
/// A terminal value contributes one last yielded accumulation.
///
/// ```rust
/// use seqgen::prelude::*;
///
/// let running = scan(of([1, 2, 3]), 6, |acc, x| acc - x);
/// assert_eq!(running.to_vec().unwrap(), vec![5, 3, 0]);
/// ```
pub fn scan<S, A, F>(seq: S, init: A, f: F) -> Scan<S, A, F>
where
    S: Sequence,
    A: Clone,
    F: FnMut(&A, S::Item) -> A,
{
    Scan {
        seq: Fuse::new(seq),
        acc: init,
        f,
    }
}

impl<S, A, F> Sequence for Scan<S, A, F>
where
    S: Sequence,
    A: Clone,
    F: FnMut(&A, S::Item) -> A,
{
    type Item = A;
    fn advance(&mut self) -> Pull<A> {
        match self.seq.advance()?.into_value() {
            Some(v) => {
                self.acc = (self.f)(&self.acc, v);
                Ok(Step::Yielded(self.acc.clone()))
            }
            None => Ok(Step::Complete(None)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{empty, of, of_return, Of};
    use std::cell::Cell;

    #[test]
    fn test_map_unary() {
        assert_eq!(of([1, 2, 3]).map(|x| x * x).to_vec().unwrap(), vec![1, 4, 9]);
        assert_eq!(
            of_return([1, 2, 3]).map(|x| x * x).to_vec().unwrap(),
            vec![1, 4, 9]
        );
    }

    #[test]
    fn test_map_unary_keeps_terminal_value_terminal() {
        let mut seq = of_return([1, 2]).map(|x| x * 10);
        assert_eq!(seq.advance().unwrap(), Step::Yielded(10));
        assert_eq!(seq.advance().unwrap(), Step::Complete(Some(20)));
        assert!(seq.advance().unwrap().is_exhausted());
    }

    #[test]
    fn test_map_zips_to_shortest() {
        let products = map(|xs: &[i32]| xs[0] * xs[1], [of(vec![1, 2, 3]), of(vec![4, 5])]);
        assert_eq!(products.to_vec().unwrap(), vec![4, 10]);

        let with_empty = map(
            |xs: &[i32]| xs.iter().product::<i32>(),
            [of(vec![1, 2, 3]), of(vec![4, 5]), of(vec![])],
        );
        assert_eq!(with_empty.to_vec().unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn test_map_counts_terminal_value_as_element() {
        let squares = map(|xs: &[i32]| xs[0] * xs[0], [of_return(vec![1, 2, 3])]);
        assert_eq!(squares.to_vec().unwrap(), vec![1, 4, 9]);

        let products = map(
            |xs: &[i32]| xs[0] * xs[1],
            [of_return(vec![1, 2, 3]).boxed(), of(vec![4, 5]).boxed()],
        );
        assert_eq!(products.to_vec().unwrap(), vec![4, 10]);
    }

    #[test]
    fn test_map_never_pulls_a_completed_input_again() {
        let pulls = Cell::new(0);
        let counted = crate::build::from_fn(|| {
            pulls.set(pulls.get() + 1);
            Ok(Step::Complete(Some(7)))
        });
        let mut seq = map(|xs: &[i32]| xs[0], [counted]);
        assert_eq!(seq.advance().unwrap(), Step::Yielded(7));
        assert!(seq.advance().unwrap().is_exhausted());
        assert!(seq.advance().unwrap().is_exhausted());
        assert_eq!(pulls.get(), 1);
    }

    #[test]
    fn test_map_without_inputs_is_empty() {
        let mut seq = map(|xs: &[i32]| xs.len(), Vec::<Of<std::vec::IntoIter<i32>>>::new());
        assert!(seq.advance().unwrap().is_exhausted());
    }

    #[test]
    fn test_scan() {
        assert_eq!(
            scan(of([1, 2, 3]), 6, |acc, x| acc - x).to_vec().unwrap(),
            vec![5, 3, 0]
        );
        assert_eq!(
            scan(empty::<i32>(), 6, |acc, x| acc - x).to_vec().unwrap(),
            Vec::<i32>::new()
        );
        assert_eq!(
            of_return([1, 2, 3]).scan(6, |acc, x| acc - x).to_vec().unwrap(),
            vec![5, 3, 0]
        );
    }

    #[test]
    fn test_scan_emits_terminal_accumulation_as_element() {
        let mut seq = scan(of_return([1, 2]), 0, |acc, x| acc + x);
        assert_eq!(seq.advance().unwrap(), Step::Yielded(1));
        assert_eq!(seq.advance().unwrap(), Step::Yielded(3));
        assert!(seq.advance().unwrap().is_exhausted());
    }
}
