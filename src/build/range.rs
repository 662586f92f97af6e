use num_traits::Num;

use crate::{error::Error, Pull, Sequence, Step};

/// An inclusive, possibly unbounded arithmetic progression.
pub struct Range<N> {
    start: N,
    end: Option<N>,
    step: N,
    state: RangeState<N>,
}

enum RangeState<N> {
    Unchecked,
    Last(N),
    Finished,
}

/// Create the progression `start`, `start + step`, ... up to and including `end`.
///
/// Without an `end` the progression never completes. The arguments are
/// checked on the first pull: a zero `step`, or an `end` lying behind `start`
/// in the direction of `step`, is an [`Error::InvalidArgument`].
///
/// ```rust
/// use seqgen::prelude::*;
///
/// assert_eq!(range(2, 7, 2).to_vec().unwrap(), vec![2, 4, 6]);
/// assert_eq!(range(7, 5, -1).to_vec().unwrap(), vec![7, 6, 5]);
/// assert_eq!(range(2, None, 2).limit(3).to_vec().unwrap(), vec![2, 4, 6]);
/// assert!(range(1, 2, 0).advance().is_err());
/// ```
pub fn range<N>(start: N, end: impl Into<Option<N>>, step: N) -> Range<N>
where
    N: Num + PartialOrd + Copy,
{
    Range {
        start,
        end: end.into(),
        step,
        state: RangeState::Unchecked,
    }
}

/// Count upwards from `start` forever.
pub fn range_from<N>(start: N) -> Range<N>
where
    N: Num + PartialOrd + Copy,
{
    range(start, None, N::one())
}

impl<N> Range<N>
where
    N: Num + PartialOrd + Copy,
{
    fn check(&self) -> Result<(), Error> {
        let zero = N::zero();
        match self.end {
            _ if self.step == zero => Err(Error::invalid("step must not be 0")),
            Some(end) if self.step > zero && self.start > end => {
                Err(Error::invalid("start is bigger than end"))
            }
            Some(end) if self.step < zero && self.start < end => {
                Err(Error::invalid("start is smaller than end"))
            }
            _ => Ok(()),
        }
    }

    /// The element after `prev`, if it is still within bounds.
    ///
    /// Neither the sum nor the gap to `end` may leave the type's range. When
    /// `prev` and `end` lie on the same side of zero the gap is compared with
    /// the step. Otherwise `prev` and `step` have opposite signs, so the sum
    /// itself is safe to form and compare.
    fn successor(&self, prev: N) -> Option<N> {
        let zero = N::zero();
        let step = self.step;
        match self.end {
            None => Some(prev + step),
            Some(end) if step > zero => {
                if prev < zero && end >= zero {
                    Some(prev + step).filter(|next| *next <= end)
                } else {
                    (end - prev >= step).then(|| prev + step)
                }
            }
            Some(end) => {
                if prev >= zero && end < zero {
                    Some(prev + step).filter(|next| *next >= end)
                } else {
                    (prev - end + step >= zero).then(|| prev + step)
                }
            }
        }
    }
}

impl<N> Sequence for Range<N>
where
    N: Num + PartialOrd + Copy,
{
    type Item = N;
    fn advance(&mut self) -> Pull<N> {
        let next = match self.state {
            RangeState::Unchecked => {
                self.check()?;
                Some(self.start)
            }
            RangeState::Last(prev) => self.successor(prev),
            RangeState::Finished => None,
        };
        Ok(match next {
            Some(n) => {
                self.state = RangeState::Last(n);
                Step::Yielded(n)
            }
            None => {
                self.state = RangeState::Finished;
                Step::Complete(None)
            }
        })
    }
}
