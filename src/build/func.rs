use crate::{Pull, Sequence, Step};

/// Delegates every pull to a closure.
pub struct FromFn<F>(F);

/// Create a sequence from a closure returning each pull outcome.
///
/// ```rust
/// use seqgen::prelude::*;
///
/// let mut n = 0;
/// let countdown = from_fn(move || {
///     n += 1;
///     Ok(if n < 3 { Step::Yielded(n) } else { Step::Complete(Some(n)) })
/// });
/// assert_eq!(countdown.to_vec().unwrap(), vec![1, 2, 3]);
/// ```
pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    F: FnMut() -> Pull<T>,
{
    FromFn(f)
}

impl<T, F> Sequence for FromFn<F>
where
    F: FnMut() -> Pull<T>,
{
    type Item = T;
    fn advance(&mut self) -> Pull<T> {
        (self.0)()
    }
}

/// Calls a supplier once per pull, forever.
pub struct Generate<F>(F);

/// Create an infinite sequence of `supplier()` results.
///
/// ```rust
/// use seqgen::prelude::*;
///
/// let mut i = 0;
/// let naturals = generate(move || {
///     i += 1;
///     i
/// });
/// assert_eq!(naturals.limit(4).to_vec().unwrap(), vec![1, 2, 3, 4]);
/// ```
pub fn generate<T, F>(supplier: F) -> Generate<F>
where
    F: FnMut() -> T,
{
    Generate(supplier)
}

impl<T, F> Sequence for Generate<F>
where
    F: FnMut() -> T,
{
    type Item = T;
    fn advance(&mut self) -> Pull<T> {
        Ok(Step::Yielded((self.0)()))
    }
}

/// Repeated application of a step function to a seed.
pub struct Iterate<T, F> {
    last: T,
    started: bool,
    step: F,
}

/// Create the infinite sequence `seed`, `step(seed)`, `step(step(seed))`, ...
///
/// `step` runs lazily, once per pull after the first.
///
/// ```rust
/// use seqgen::prelude::*;
///
/// let powers = iterate(1, |x| x * 2);
/// assert_eq!(powers.limit(6).to_vec().unwrap(), vec![1, 2, 4, 8, 16, 32]);
/// ```
pub fn iterate<T, F>(seed: T, step: F) -> Iterate<T, F>
where
    F: FnMut(&T) -> T,
{
    Iterate {
        last: seed,
        started: false,
        step,
    }
}

impl<T, F> Sequence for Iterate<T, F>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
    type Item = T;
    fn advance(&mut self) -> Pull<T> {
        if self.started {
            self.last = (self.step)(&self.last);
        } else {
            self.started = true;
        }
        Ok(Step::Yielded(self.last.clone()))
    }
}
