//! Functions for driving sequences to completion.
//!
//! Every consumer here treats a terminal value as one final element and never
//! pulls the sequence again after its terminal outcome. Consumers that read
//! to the end do not return on an infinite input.

use crate::{
    error::{Error, Result},
    Sequence, Step,
};

/// Call `action` on every element.
///
/// ```rust
/// use seqgen::prelude::*;
///
/// let mut seen = String::new();
/// for_each(of_return([1, 2, 3]), |x| seen.push_str(&x.to_string())).unwrap();
/// assert_eq!(seen, "123");
/// ```
pub fn for_each<S, F>(seq: S, mut action: F) -> Result<()>
where
    S: Sequence,
    F: FnMut(S::Item),
{
    fold(seq, (), |(), v| action(v))
}

/// Combine all elements into one value, left to right.
///
/// ```rust
/// use seqgen::prelude::*;
///
/// assert_eq!(fold(of([1, 2, 3]), 6, |acc, x| acc - x).unwrap(), 0);
/// ```
pub fn fold<S, A, F>(mut seq: S, init: A, mut f: F) -> Result<A>
where
    S: Sequence,
    F: FnMut(A, S::Item) -> A,
{
    let mut acc = init;
    loop {
        match seq.advance()? {
            Step::Yielded(v) => acc = f(acc, v),
            Step::Complete(tail) => {
                if let Some(v) = tail {
                    acc = f(acc, v);
                }
                return Ok(acc);
            }
        }
    }
}

/// Collect all elements into a vector.
pub fn to_vec<S>(seq: S) -> Result<Vec<S::Item>>
where
    S: Sequence,
{
    let mut out = Vec::new();
    for_each(seq, |v| out.push(v))?;
    Ok(out)
}

/// The `index`-th element, counting from one, or `None` if the sequence is
/// shorter.
///
/// An `index` of zero is an [`Error::InvalidArgument`].
///
/// ```rust
/// use seqgen::prelude::*;
///
/// assert_eq!(element_at(of([1, 2, 3]), 2).unwrap(), Some(2));
/// assert_eq!(element_at(of([1, 2, 3]), 4).unwrap(), None);
/// ```
pub fn element_at<S>(mut seq: S, index: usize) -> Result<Option<S::Item>>
where
    S: Sequence,
{
    if index == 0 {
        return Err(Error::invalid("element index must be positive"));
    }
    for position in 1..=index {
        match seq.advance()? {
            Step::Yielded(v) if position == index => return Ok(Some(v)),
            Step::Yielded(_) => continue,
            Step::Complete(tail) => return Ok(tail.filter(|_| position == index)),
        }
    }
    Ok(None)
}

/// Number of elements.
pub fn count<S>(seq: S) -> Result<usize>
where
    S: Sequence,
{
    let mut n = 0;
    for_each(seq, |_| n += 1)?;
    Ok(n)
}

/// Whether every element satisfies `predicate`. Stops at the first failure.
///
/// ```rust
/// use seqgen::prelude::*;
///
/// assert!(all(of([1, 2, 3]), |x| *x < 4).unwrap());
/// assert!(!all(range_from(1), |x| *x < 4).unwrap());
/// ```
pub fn all<S, P>(mut seq: S, mut predicate: P) -> Result<bool>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    loop {
        match seq.advance()? {
            Step::Yielded(v) if !predicate(&v) => return Ok(false),
            Step::Yielded(_) => continue,
            Step::Complete(tail) => return Ok(tail.map_or(true, |v| predicate(&v))),
        }
    }
}

/// Whether some element satisfies `predicate`. Stops at the first match.
pub fn any<S, P>(mut seq: S, mut predicate: P) -> Result<bool>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    loop {
        match seq.advance()? {
            Step::Yielded(v) if predicate(&v) => return Ok(true),
            Step::Yielded(_) => continue,
            Step::Complete(tail) => return Ok(tail.is_some_and(|v| predicate(&v))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{empty, of, of_infinite, of_return, range_from};

    #[test]
    fn test_for_each() {
        let mut result = String::new();
        for_each(of([1, 2, 3]), |x| result += &x.to_string()).unwrap();
        assert_eq!(result, "123");

        result.clear();
        for_each(empty::<i32>(), |x| result += &x.to_string()).unwrap();
        assert_eq!(result, "");

        result.clear();
        for_each(of_return([1, 2, 3]), |x| result += &x.to_string()).unwrap();
        assert_eq!(result, "123");
    }

    #[test]
    fn test_fold() {
        assert_eq!(fold(of([1, 2, 3]), 6, |acc, x| acc - x).unwrap(), 0);
        assert_eq!(fold(empty::<i32>(), 6, |acc, x| acc - x).unwrap(), 6);
        assert_eq!(fold(of_return([1, 2, 3]), 6, |acc, x| acc - x).unwrap(), 0);
    }

    #[test]
    fn test_to_vec() {
        assert_eq!(to_vec(of([1, 2, 3])).unwrap(), vec![1, 2, 3]);
        assert_eq!(to_vec(empty::<i32>()).unwrap(), Vec::<i32>::new());
        assert_eq!(to_vec(of_return([1, 2, 3])).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_element_at() {
        assert_eq!(element_at(of([1, 2, 3]), 2).unwrap(), Some(2));
        assert_eq!(element_at(of([1, 2, 3]), 3).unwrap(), Some(3));
        assert_eq!(element_at(of([1, 2, 3]), 4).unwrap(), None);
        assert_eq!(element_at(of_return([1, 2, 3]), 2).unwrap(), Some(2));
        assert_eq!(element_at(of_return([1, 2, 3]), 3).unwrap(), Some(3));
        assert_eq!(element_at(of_return([1, 2, 3]), 4).unwrap(), None);
        assert_eq!(element_at(range_from(1), 1000).unwrap(), Some(1000));
    }

    #[test]
    fn test_element_at_rejects_zero() {
        assert!(matches!(
            element_at(of([1]), 0),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_count() {
        assert_eq!(count(of([1, 2, 3])).unwrap(), 3);
        assert_eq!(count(empty::<i32>()).unwrap(), 0);
        assert_eq!(count(of_return([1, 2, 3])).unwrap(), 3);
    }

    #[test]
    fn test_all() {
        assert!(all(of([1, 2, 3]), |x| *x < 4).unwrap());
        assert!(!all(of([1, 2, 3]), |x| x % 2 == 0).unwrap());
        assert!(all(empty::<i32>(), |_| false).unwrap());
        assert!(all(of_return([1, 2, 3]), |x| *x < 4).unwrap());
        assert!(!all(of_return([1, 2, 5]), |x| *x < 4).unwrap());
    }

    #[test]
    fn test_any() {
        assert!(!any(of([1, 2, 3]), |x| *x > 4).unwrap());
        assert!(any(of([1, 2, 3]), |x| x % 2 == 0).unwrap());
        assert!(!any(empty::<i32>(), |_| true).unwrap());
        assert!(!any(of_return([1, 2, 3]), |x| *x > 4).unwrap());
        assert!(any(of_return([1, 2, 5]), |x| *x > 4).unwrap());
        assert!(any(of_infinite([1, 2, 3]), |x| *x == 3).unwrap());
    }

    #[test]
    fn test_consumers_propagate_errors() {
        assert!(count(of_infinite(Vec::<i32>::new())).is_err());
        assert!(to_vec(crate::build::range(1, 0, 1)).is_err());
    }
}
