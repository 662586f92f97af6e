use std::collections::VecDeque;

use crate::{Pull, Sequence, Step};

/// Run the first sequence to completion, then continue with the second.
///
/// A terminal value of the first sequence is yielded as an ordinary element;
/// the second sequence's terminal outcome is forwarded unchanged.
pub fn chain<A, B>(first: A, second: B) -> Chain<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    Chain(Some(first), second)
}

/// Two sequences back to back.
///
/// Created via [`chain`] or [`Sequence::chain`]. The first sequence is
/// dropped once it completes.
pub struct Chain<A, B>(Option<A>, B);

impl<A, B> Sequence for Chain<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    type Item = A::Item;
    fn advance(&mut self) -> Pull<Self::Item> {
        match self.0 {
            Some(ref mut first) => match first.advance()? {
                Step::Yielded(v) => Ok(Step::Yielded(v)),
                Step::Complete(tail) => {
                    self.0 = None; // we drop the old sequence when it's done
                    match tail {
                        Some(v) => Ok(Step::Yielded(v)),
                        None => self.1.advance(),
                    }
                }
            },
            None => self.1.advance(),
        }
    }
}

/// Create a sequence of all elements of `seqs`, one sequence after another.
///
/// Only the last sequence's terminal value is forwarded as the terminal value;
/// earlier terminal values are yielded as ordinary elements.
///
/// ```rust
/// use seqgen::prelude::*;
///
/// let joined = concat([of(vec![2, 3]), of(vec![4, 5]), of(vec![6, 7])]);
/// assert_eq!(joined.to_vec().unwrap(), vec![2, 3, 4, 5, 6, 7]);
/// ```
pub fn concat<I>(seqs: I) -> Concat<I::Item>
where
    I: IntoIterator,
    I::Item: Sequence,
{
    Concat {
        seqs: seqs.into_iter().collect(),
    }
}

/// Any number of sequences of the same type, back to back.
pub struct Concat<S> {
    seqs: VecDeque<S>,
}

impl<S> Sequence for Concat<S>
where
    S: Sequence,
{
    type Item = S::Item;
    fn advance(&mut self) -> Pull<S::Item> {
        while let Some(current) = self.seqs.front_mut() {
            let step = current.advance()?;
            let Step::Complete(tail) = step else {
                return Ok(step);
            };
            self.seqs.pop_front();
            if self.seqs.is_empty() {
                return Ok(Step::Complete(tail));
            }
            if let Some(v) = tail {
                return Ok(Step::Yielded(v));
            }
        }
        Ok(Step::Complete(None))
    }
}
