//! Cartesian products of possibly infinite sequences.
//!
//! A nested loop over two infinite sequences never leaves the first element
//! of the outer one. [`outer_product`] walks the product along diagonals
//! instead: all tuples whose depths add up to 0, then to 1, and so on, so
//! every tuple is reached after finitely many pulls.

use crate::{compose::Fuse, Pull, Sequence, Step};

/// Diagonal enumeration of a Cartesian product.
///
/// Created via [`outer_product`].
pub struct OuterProduct<S, F>
where
    S: Sequence,
{
    inputs: Vec<Memo<S>>,
    f: F,
    stack: Vec<Frame>,
    depths: Vec<usize>,
    args: Vec<S::Item>,
    sum: Option<usize>,
    emitted: bool,
    done: bool,
}

/// Pending choices for one level of the nested loop: depths `next..=budget`.
#[derive(Debug, Clone, Copy)]
struct Frame {
    level: usize,
    next: usize,
    budget: usize,
}

/// Everything pulled from one input so far, terminal value included.
struct Memo<S>
where
    S: Sequence,
{
    seq: Fuse<S>,
    values: Vec<S::Item>,
    exhausted: bool,
}

impl<S> Memo<S>
where
    S: Sequence,
{
    /// Whether the input has an element at `depth`, pulling up to it if needed.
    fn reach(&mut self, depth: usize) -> crate::Result<bool> {
        while self.values.len() <= depth && !self.exhausted {
            match self.seq.advance()? {
                Step::Yielded(v) => self.values.push(v),
                Step::Complete(tail) => {
                    self.exhausted = true;
                    self.values.extend(tail);
                }
            }
        }
        Ok(depth < self.values.len())
    }
}

/// Apply `f` to every tuple drawn from `seqs`, in order of increasing depth sum.
///
/// Within one sum the depth in the last sequence varies slowest and the first
/// sequence takes whatever remains. Inputs are pulled lazily and memoized, so
/// each element is pulled once no matter how many tuples use it. Over finite
/// inputs every tuple appears exactly once; the result completes after the
/// first diagonal that produces nothing.
///
/// ```rust
/// use seqgen::prelude::*;
///
/// let sums = outer_product(|xy: &[i32]| xy[0] + xy[1], [range_from(2).boxed(), of([2, 7]).boxed()]);
/// assert_eq!(sums.limit(8).to_vec().unwrap(), vec![4, 5, 9, 6, 10, 7, 11, 8]);
/// ```
pub fn outer_product<I, U, F>(f: F, seqs: I) -> OuterProduct<I::Item, F>
where
    I: IntoIterator,
    I::Item: Sequence,
    <I::Item as Sequence>::Item: Clone,
    F: FnMut(&[<I::Item as Sequence>::Item]) -> U,
{
    let inputs: Vec<_> = seqs
        .into_iter()
        .map(|seq| Memo {
            seq: Fuse::new(seq),
            values: Vec::new(),
            exhausted: false,
        })
        .collect();
    OuterProduct {
        done: inputs.is_empty(),
        stack: Vec::with_capacity(inputs.len()),
        depths: vec![0; inputs.len()],
        args: Vec::with_capacity(inputs.len()),
        inputs,
        f,
        sum: None,
        emitted: false,
    }
}

impl<S, F> OuterProduct<S, F>
where
    S: Sequence,
{
    /// Begin the next diagonal, or finish if the last one was empty.
    fn next_diagonal(&mut self) {
        let sum = match self.sum {
            Some(_) if !self.emitted => {
                self.done = true;
                self.inputs.clear();
                return;
            }
            Some(sum) => sum + 1,
            None => 0,
        };
        tracing::trace!(sum, "starting outer product diagonal");
        self.sum = Some(sum);
        self.emitted = false;
        self.stack.push(Frame {
            level: self.inputs.len() - 1,
            next: 0,
            budget: sum,
        });
    }
}

impl<U, S, F> Sequence for OuterProduct<S, F>
where
    S: Sequence,
    S::Item: Clone,
    F: FnMut(&[S::Item]) -> U,
{
    type Item = U;
    fn advance(&mut self) -> Pull<U> {
        loop {
            if self.done {
                return Ok(Step::Complete(None));
            }
            let Some(frame) = self.stack.pop() else {
                self.next_diagonal();
                continue;
            };

            if frame.level == 0 {
                // the first input takes the rest of the sum
                if !self.inputs[0].reach(frame.budget)? {
                    continue;
                }
                self.depths[0] = frame.budget;
                self.args.clear();
                for (input, &depth) in self.inputs.iter().zip(&self.depths) {
                    self.args.push(input.values[depth].clone());
                }
                self.emitted = true;
                return Ok(Step::Yielded((self.f)(&self.args)));
            }

            if frame.next > frame.budget {
                continue;
            }
            // a missing depth means every deeper one is missing too
            if !self.inputs[frame.level].reach(frame.next)? {
                continue;
            }
            self.depths[frame.level] = frame.next;
            self.stack.push(Frame {
                next: frame.next + 1,
                ..frame
            });
            self.stack.push(Frame {
                level: frame.level - 1,
                next: 0,
                budget: frame.budget - frame.next,
            });
        }
    }
}
