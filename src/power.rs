use crate::{error::Error, Pull, Sequence, Step};

/// Depth-first enumeration of the tuples of a Cartesian power.
///
/// Created via [`power_generator`] or [`power_generator_with`].
pub struct PowerGenerator<T, P> {
    list: Vec<T>,
    n: usize,
    predicate: P,
    tuple: Vec<T>,
    /// Next list index to try at each open depth.
    cursors: Vec<usize>,
    started: bool,
}

/// Every tuple of length `n` over `list`, in list-major order.
///
/// A power of zero is an [`Error::InvalidArgument`] on the first pull.
///
/// ```rust
/// use seqgen::prelude::*;
///
/// let pairs = power_generator([1, 2], 2).to_vec().unwrap();
/// assert_eq!(pairs, vec![vec![1, 1], vec![1, 2], vec![2, 1], vec![2, 2]]);
/// ```
pub fn power_generator<T, I>(list: I, n: usize) -> PowerGenerator<T, fn(&[T]) -> bool>
where
    I: IntoIterator<Item = T>,
    T: Clone,
{
    power_generator_with(list, n, accept_all::<T> as fn(&[T]) -> bool)
}

fn accept_all<T>(_: &[T]) -> bool {
    true
}

/// Like [`power_generator`], but only extends prefixes accepted by `predicate`.
///
/// `predicate` sees every partial tuple right after an element is appended.
/// Rejecting a prefix prunes all tuples that start with it, so the predicate
/// can bound a search that would otherwise visit `len^n` tuples.
///
/// ```rust
/// use seqgen::prelude::*;
///
/// // strictly increasing triples
/// let rising = power_generator_with(1..=4, 3, |t: &[i32]| t.windows(2).all(|w| w[0] < w[1]));
/// assert_eq!(rising.count().unwrap(), 4);
/// ```
pub fn power_generator_with<T, I, P>(list: I, n: usize, predicate: P) -> PowerGenerator<T, P>
where
    I: IntoIterator<Item = T>,
    T: Clone,
    P: FnMut(&[T]) -> bool,
{
    PowerGenerator {
        list: list.into_iter().collect(),
        n,
        predicate,
        tuple: Vec::with_capacity(n),
        cursors: Vec::with_capacity(n),
        started: false,
    }
}

impl<T, P> Sequence for PowerGenerator<T, P>
where
    T: Clone,
    P: FnMut(&[T]) -> bool,
{
    type Item = Vec<T>;
    fn advance(&mut self) -> Pull<Vec<T>> {
        if !self.started {
            self.started = true;
            if self.n == 0 {
                return Err(Error::invalid("power must be positive"));
            }
            self.cursors.push(0);
        }
        loop {
            let Some(cursor) = self.cursors.last_mut() else {
                return Ok(Step::Complete(None));
            };
            let Some(item) = self.list.get(*cursor) else {
                self.cursors.pop();
                self.tuple.pop();
                continue;
            };
            *cursor += 1;
            self.tuple.push(item.clone());
            if !(self.predicate)(&self.tuple) {
                tracing::trace!(depth = self.tuple.len(), "pruning power tuple prefix");
                self.tuple.pop();
                continue;
            }
            if self.tuple.len() == self.n {
                let tuple = self.tuple.clone();
                self.tuple.pop();
                return Ok(Step::Yielded(tuple));
            }
            self.cursors.push(0);
        }
    }
}
