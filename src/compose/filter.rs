use crate::{compose::Fuse, Pull, Sequence, Step};

/// Keeps the elements matching a predicate.
pub struct Filter<S, P> {
    seq: Fuse<S>,
    predicate: P,
}

/// Keep the elements of `seq` that satisfy `predicate`.
///
/// A terminal value that satisfies the predicate stays the terminal value;
/// one that does not is dropped.
///
/// ```rust
/// use seqgen::prelude::*;
///
/// let mut evens = filter(of_return([1, 2, 3, 4]), |x| x % 2 == 0);
/// assert_eq!(evens.advance().unwrap(), Step::Yielded(2));
/// assert_eq!(evens.advance().unwrap(), Step::Complete(Some(4)));
/// ```
pub fn filter<S, P>(seq: S, predicate: P) -> Filter<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    Filter {
        seq: Fuse::new(seq),
        predicate,
    }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;
    fn advance(&mut self) -> Pull<S::Item> {
        loop {
            match self.seq.advance()? {
                Step::Yielded(v) if (self.predicate)(&v) => return Ok(Step::Yielded(v)),
                Step::Yielded(_) => continue,
                Step::Complete(tail) => {
                    return Ok(Step::Complete(tail.filter(|v| (self.predicate)(v))));
                }
            }
        }
    }
}

/// Expands every element into a sequence and flattens the results.
pub struct FlatMap<S, I, F> {
    outer: Fuse<S>,
    inner: Option<I>,
    f: F,
}

/// Yield every element of `f(x)` for each element `x` of `seq`.
///
/// The outer terminal value is expanded like any other element. Terminal
/// values of the inner sequences are yielded as ordinary elements, so the
/// result always ends with plain completion.
///
/// ```rust
/// use seqgen::prelude::*;
///
/// let doubled = flat_map(of([1, 2, 3]), |x| of([x, x * 2]));
/// assert_eq!(doubled.to_vec().unwrap(), vec![1, 2, 2, 4, 3, 6]);
/// ```
pub fn flat_map<S, I, F>(seq: S, f: F) -> FlatMap<S, I, F>
where
    S: Sequence,
    I: Sequence,
    F: FnMut(S::Item) -> I,
{
    FlatMap {
        outer: Fuse::new(seq),
        inner: None,
        f,
    }
}

impl<S, I, F> Sequence for FlatMap<S, I, F>
where
    S: Sequence,
    I: Sequence,
    F: FnMut(S::Item) -> I,
{
    type Item = I::Item;
    fn advance(&mut self) -> Pull<I::Item> {
        loop {
            if let Some(inner) = &mut self.inner {
                match inner.advance()? {
                    Step::Yielded(v) => return Ok(Step::Yielded(v)),
                    Step::Complete(tail) => {
                        self.inner = None;
                        if let Some(v) = tail {
                            return Ok(Step::Yielded(v));
                        }
                    }
                }
            }
            match self.outer.advance()?.into_value() {
                Some(x) => self.inner = Some((self.f)(x)),
                None => return Ok(Step::Complete(None)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{empty, of, of_return};
    use either::Either;

    #[test]
    fn test_filter() {
        assert_eq!(
            filter(of([1, 2, 3, 4]), |x| x % 2 == 0).to_vec().unwrap(),
            vec![2, 4]
        );
    }

    #[test]
    fn test_filter_terminal_value() {
        let mut evens = filter(of_return([1, 2, 3, 4]), |x| x % 2 == 0);
        assert_eq!(evens.advance().unwrap(), Step::Yielded(2));
        assert_eq!(evens.advance().unwrap(), Step::Complete(Some(4)));
        assert!(evens.advance().unwrap().is_exhausted());

        let mut odds = of_return([1, 2, 3, 4]).filter(|x| x % 2 == 1);
        assert_eq!(odds.advance().unwrap(), Step::Yielded(1));
        assert_eq!(odds.advance().unwrap(), Step::Yielded(3));
        assert!(odds.advance().unwrap().is_exhausted());
    }

    #[test]
    fn test_filter_keeps_none_elements() {
        let kept = of([Some(1), None, Some(2)]).filter(|x| x != &Some(2));
        assert_eq!(kept.to_vec().unwrap(), vec![Some(1), None]);
    }

    #[test]
    fn test_flat_map() {
        assert_eq!(
            flat_map(of([1, 2, 3]), |x| of([x, x * 2])).to_vec().unwrap(),
            vec![1, 2, 2, 4, 3, 6]
        );
        assert_eq!(
            flat_map(empty::<i32>(), |x| of([x, x * 2])).to_vec().unwrap(),
            Vec::<i32>::new()
        );
    }

    #[test]
    fn test_flat_map_with_empty_inner() {
        let seq = of([1, 2, 3]).flat_map(|x| {
            if x % 2 == 0 {
                Either::Left(empty())
            } else {
                Either::Right(of([x, x * 2]))
            }
        });
        assert_eq!(seq.to_vec().unwrap(), vec![1, 2, 3, 6]);
    }

    #[test]
    fn test_flat_map_expands_terminal_values() {
        let seq = flat_map(of_return([1, 2, 3]), |x| of([x, x * 2]));
        assert_eq!(seq.to_vec().unwrap(), vec![1, 2, 2, 4, 3, 6]);

        let mut inner_tails = flat_map(of([1, 2]), |x| of_return([x, -x]));
        let mut pulled = Vec::new();
        loop {
            match inner_tails.advance().unwrap() {
                Step::Yielded(v) => pulled.push(v),
                Step::Complete(tail) => {
                    assert_eq!(tail, None);
                    break;
                }
            }
        }
        assert_eq!(pulled, vec![1, -1, 2, -2]);
    }

    #[test]
    fn test_flat_map_keeps_none_elements() {
        let seq = of([1, 2]).flat_map(|x| of([None, Some(x)]));
        assert_eq!(seq.to_vec().unwrap(), vec![None, Some(1), None, Some(2)]);
    }
}
