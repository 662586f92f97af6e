use crate::{compose::Fuse, error::Error, Pull, Sequence, Step};

/// Yields at most a fixed number of elements.
pub struct Limit<S> {
    seq: Fuse<S>,
    remaining: usize,
}

/// Take at most `max` elements from `seq`.
///
/// The source is not pulled again once `max` elements have been yielded. If
/// the source finishes with a terminal value before that, the value is
/// forwarded as this sequence's terminal value.
///
/// ```rust
/// use seqgen::prelude::*;
///
/// assert_eq!(limit(of_infinite([1]), 3).to_vec().unwrap(), vec![1, 1, 1]);
///
/// let mut seq = limit(of_return([1, 2, 3]), 3);
/// seq.advance().unwrap();
/// seq.advance().unwrap();
/// assert_eq!(seq.advance().unwrap(), Step::Complete(Some(3)));
/// ```
pub fn limit<S>(seq: S, max: usize) -> Limit<S>
where
    S: Sequence,
{
    Limit {
        seq: Fuse::new(seq),
        remaining: max,
    }
}

impl<S> Sequence for Limit<S>
where
    S: Sequence,
{
    type Item = S::Item;
    fn advance(&mut self) -> Pull<S::Item> {
        if self.remaining == 0 {
            self.seq.close();
            return Ok(Step::Complete(None));
        }
        let step = self.seq.advance()?;
        if step.is_yielded() {
            self.remaining -= 1;
        }
        Ok(step)
    }
}

/// Drops a fixed number of leading elements.
pub struct Skip<S> {
    seq: Fuse<S>,
    count: usize,
    skipped: usize,
}

/// Discard the first `n` elements of `seq` and forward the rest unchanged.
///
/// `n` must be at least one; zero is an [`Error::InvalidArgument`] raised on
/// the first pull. If the source completes while elements are being
/// discarded, the result is empty and a terminal value met there is dropped.
///
/// ```rust
/// use seqgen::prelude::*;
///
/// assert_eq!(skip(of([1, 2, 3, 4]), 2).to_vec().unwrap(), vec![3, 4]);
/// assert_eq!(skip(of([1, 2, 3, 4]), 5).to_vec().unwrap(), vec![]);
/// assert!(skip(of([1, 2, 3, 4]), 0).advance().is_err());
/// ```
pub fn skip<S>(seq: S, n: usize) -> Skip<S>
where
    S: Sequence,
{
    Skip {
        seq: Fuse::new(seq),
        count: n,
        skipped: 0,
    }
}

impl<S> Sequence for Skip<S>
where
    S: Sequence,
{
    type Item = S::Item;
    fn advance(&mut self) -> Pull<S::Item> {
        if self.count == 0 {
            return Err(Error::invalid("skip count must be positive"));
        }
        while self.skipped < self.count {
            match self.seq.advance()? {
                Step::Yielded(_) => self.skipped += 1,
                Step::Complete(_) => {
                    self.skipped = self.count;
                    return Ok(Step::Complete(None));
                }
            }
        }
        self.seq.advance()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{of, of_infinite, of_return, range_from};

    #[test]
    fn test_limit() {
        assert_eq!(limit(of([1, 2, 3]), 2).to_vec().unwrap(), vec![1, 2]);
        assert_eq!(limit(of([1, 2, 3]), 3).to_vec().unwrap(), vec![1, 2, 3]);
        assert_eq!(limit(of([1, 2, 3]), 4).to_vec().unwrap(), vec![1, 2, 3]);
        assert_eq!(limit(of_infinite([1]), 3).to_vec().unwrap(), vec![1, 1, 1]);
        assert_eq!(limit(of([1, 2, 3]), 0).to_vec().unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn test_limit_terminal_value_within_budget() {
        let mut seq = limit(of_return([1, 2, 3]), 2);
        assert_eq!(seq.advance().unwrap(), Step::Yielded(1));
        assert_eq!(seq.advance().unwrap(), Step::Yielded(2));
        assert!(seq.advance().unwrap().is_exhausted());

        for max in [3, 4] {
            let mut seq = limit(of_return([1, 2, 3]), max);
            assert_eq!(seq.advance().unwrap(), Step::Yielded(1));
            assert_eq!(seq.advance().unwrap(), Step::Yielded(2));
            assert_eq!(seq.advance().unwrap(), Step::Complete(Some(3)));
            assert!(seq.advance().unwrap().is_exhausted());
        }
    }

    #[test]
    fn test_limit_does_not_pull_past_budget() {
        let mut source = range_from(1);
        assert_eq!(limit(&mut source, 3).to_vec().unwrap(), vec![1, 2, 3]);
        assert_eq!(source.advance().unwrap().unwrap_yielded(), 4);
    }

    #[test]
    fn test_skip() {
        assert_eq!(skip(of([1, 2, 3, 4]), 2).to_vec().unwrap(), vec![3, 4]);
        assert_eq!(skip(of([1, 2, 3, 4]), 3).to_vec().unwrap(), vec![4]);
        assert_eq!(skip(of([1, 2, 3, 4]), 4).to_vec().unwrap(), Vec::<i32>::new());
        assert_eq!(skip(of([1, 2, 3, 4]), 5).to_vec().unwrap(), Vec::<i32>::new());
        assert_eq!(skip(of(Vec::<i32>::new()), 1).to_vec().unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn test_skip_rejects_zero() {
        let mut seq = skip(of([1, 2]), 0);
        assert!(matches!(seq.advance(), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_skip_forwards_remaining_terminal_value() {
        let mut seq = skip(of_return([1, 2, 3]), 1);
        assert_eq!(seq.advance().unwrap(), Step::Yielded(2));
        assert_eq!(seq.advance().unwrap(), Step::Complete(Some(3)));
    }

    #[test]
    fn test_skip_drops_terminal_value_met_while_skipping() {
        let mut seq = skip(of_return([1, 2, 3]), 3);
        assert!(seq.advance().unwrap().is_exhausted());
        assert!(seq.advance().unwrap().is_exhausted());
    }
}
