use crate::{Pull, Sequence, Step};

/// Drops the wrapped sequence at its first terminal outcome, so it is never
/// pulled again.
pub(crate) struct Fuse<S>(Option<S>);

impl<S> Fuse<S> {
    pub(crate) fn new(seq: S) -> Self {
        Fuse(Some(seq))
    }

    pub(crate) fn close(&mut self) {
        self.0 = None;
    }
}

impl<S> Sequence for Fuse<S>
where
    S: Sequence,
{
    type Item = S::Item;
    fn advance(&mut self) -> Pull<Self::Item> {
        match self.0 {
            Some(ref mut seq) => {
                let step = seq.advance()?;
                if step.is_complete() {
                    self.0 = None; // we drop the source once it is done
                }
                Ok(step)
            }
            None => Ok(Step::Complete(None)),
        }
    }
}
