use crate::{Pull, Sequence, Step};

/// Fair round-robin merge of several sequences.
///
/// Created via [`interleave`]. Finished sequences are dropped from their
/// slot and skipped on later passes.
pub struct Interleave<S> {
    seqs: Vec<Option<S>>,
    next: usize,
    active: usize,
}

/// Merge `seqs` by pulling one element from each active sequence per pass.
///
/// Output is pass-major: the first element of every sequence, then the
/// second of every sequence, and so on. A sequence finishing with a terminal
/// value contributes that value in its turn before dropping out.
///
/// ```rust
/// use seqgen::prelude::*;
///
/// let merged = interleave([of(vec![1, 2, 3]), of(vec![4, 5]), of(vec![7])]);
/// assert_eq!(merged.to_vec().unwrap(), vec![1, 4, 7, 2, 5, 3]);
/// ```
pub fn interleave<I>(seqs: I) -> Interleave<I::Item>
where
    I: IntoIterator,
    I::Item: Sequence,
{
    let seqs: Vec<_> = seqs.into_iter().map(Some).collect();
    Interleave {
        active: seqs.len(),
        seqs,
        next: 0,
    }
}

impl<S> Sequence for Interleave<S>
where
    S: Sequence,
{
    type Item = S::Item;
    fn advance(&mut self) -> Pull<S::Item> {
        while self.active > 0 {
            let index = self.next;
            let following = (index + 1) % self.seqs.len();
            let Some(seq) = &mut self.seqs[index] else {
                self.next = following;
                continue;
            };
            // a failed pull keeps this input's turn
            let step = seq.advance()?;
            self.next = following;
            match step {
                Step::Yielded(v) => return Ok(Step::Yielded(v)),
                Step::Complete(tail) => {
                    self.seqs[index] = None;
                    self.active -= 1;
                    if let Some(v) = tail {
                        return Ok(Step::Yielded(v));
                    }
                }
            }
        }
        Ok(Step::Complete(None))
    }
}
