//! Mutually recursive sequences.
//!
//! [`letrec`] ties a group of definitions into a fixed point. Every
//! definition receives forward references ([`Delay`]) to all members of the
//! group, including itself, and returns the sequence it defines. Definitions
//! run lazily, at most once, on the first pull of their output.
//!
//! Each member's output is memoized: its defining sequence is pulled exactly
//! once per element, and every [`Cursor`] on that member replays the shared
//! memo from the start. This is what makes recurrences like
//! `a(k) = a(k - 1) / k` work: the definition reads its own earlier elements
//! through a cursor while producing the next one.
//!
//! The memo lives as long as the group. New cursors can be forced at any time
//! and start from the first element, so nothing is ever discarded: memory
//! grows with the number of elements pulled from each member. Drop the
//! [`Knot`] and its cursors to release it.
//!
//! ```rust
//! use seqgen::prelude::*;
//!
//! // e = sum of 1/k!, written as a(0) = 1, a(k) = a(k - 1) / k
//! let terms = fix(|a: &Delay<f64>| {
//!     let mut previous = a.force();
//!     let mut k = 0.0;
//!     of([1.0]).chain(from_fn(move || {
//!         k += 1.0;
//!         let k = k;
//!         Ok(previous.advance()?.map_yielded(|x| x / k))
//!     }))
//! });
//!
//! let e: f64 = terms.force().limit(20).fold(0.0, |acc, x| acc + x).unwrap();
//! assert!((e - std::f64::consts::E).abs() < 1e-10);
//! ```

use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
};

use crate::{error::Error, BoxSequence, Pull, Sequence, Step};

/// One member of a recursive group: builds its sequence from references to
/// every member of the group.
pub type Definition<T> = Box<dyn FnOnce(&[Delay<T>]) -> BoxSequence<'static, T>>;

/// Box a closure as a [`Definition`].
pub fn define<T, S, F>(f: F) -> Definition<T>
where
    F: FnOnce(&[Delay<T>]) -> S + 'static,
    S: Sequence<Item = T> + 'static,
{
    Box::new(move |refs: &[Delay<T>]| f(refs).boxed())
}

/// Tie `definitions` into a recursive group and return its first member.
///
/// Every element a member produces stays in its memo until the group is
/// dropped.
///
/// ```rust
/// use seqgen::prelude::*;
///
/// // Two sequences defined through each other: evens start at 0, odds at 1,
/// // and each continues from the other's elements plus one.
/// let evens = letrec([
///     define(|r: &[Delay<u32>]| of([0]).chain(r[1].force().map(|x| x + 1))),
///     define(|r: &[Delay<u32>]| r[0].force().map(|x| x + 1)),
/// ]);
/// assert_eq!(evens.force().limit(4).to_vec().unwrap(), vec![0, 2, 4, 6]);
/// ```
pub fn letrec<T, I>(definitions: I) -> Knot<T>
where
    I: IntoIterator<Item = Definition<T>>,
{
    let slots = definitions
        .into_iter()
        .map(|definition| Slot {
            definition: Cell::new(Some(definition)),
            source: RefCell::new(None),
            memo: RefCell::new(Vec::new()),
            end: Cell::new(End::Open),
        })
        .collect();
    Knot {
        group: Rc::new(Group { slots }),
        index: 0,
    }
}

/// A group of one: `f` receives a reference to the sequence it defines.
pub fn fix<T, S, F>(f: F) -> Knot<T>
where
    F: FnOnce(&Delay<T>) -> S + 'static,
    S: Sequence<Item = T> + 'static,
{
    letrec([define(move |refs: &[Delay<T>]| f(&refs[0]))])
}

/// Entry point of a recursive group, returned by [`letrec`].
///
/// Keeps the group alive; every [`Cursor`] forced from it does too.
pub struct Knot<T> {
    group: Rc<Group<T>>,
    index: usize,
}

impl<T> Knot<T> {
    /// A new cursor at the start of this member's output.
    pub fn force(&self) -> Cursor<T> {
        Cursor {
            handle: Handle::Strong(Rc::clone(&self.group)),
            index: self.index,
            position: 0,
        }
    }
}

impl<T> Clone for Knot<T> {
    fn clone(&self) -> Self {
        Knot {
            group: Rc::clone(&self.group),
            index: self.index,
        }
    }
}

/// Forward reference to a member of a recursive group, handed to definitions.
///
/// Holds the group weakly, so a group whose members refer to each other is
/// still freed once its [`Knot`] and outside cursors are gone.
pub struct Delay<T> {
    group: Weak<Group<T>>,
    index: usize,
}

impl<T> Delay<T> {
    /// A new cursor at the start of this member's output.
    pub fn force(&self) -> Cursor<T> {
        Cursor {
            handle: Handle::Weak(Weak::clone(&self.group)),
            index: self.index,
            position: 0,
        }
    }
}

impl<T> Clone for Delay<T> {
    fn clone(&self) -> Self {
        Delay {
            group: Weak::clone(&self.group),
            index: self.index,
        }
    }
}

/// Reads one member of a recursive group from the shared memo.
pub struct Cursor<T> {
    handle: Handle<T>,
    index: usize,
    position: usize,
}

enum Handle<T> {
    Strong(Rc<Group<T>>),
    Weak(Weak<Group<T>>),
}

impl<T> Handle<T> {
    fn group(&self) -> Option<Rc<Group<T>>> {
        match self {
            Handle::Strong(group) => Some(Rc::clone(group)),
            Handle::Weak(group) => group.upgrade(),
        }
    }
}

impl<T> Sequence for Cursor<T>
where
    T: Clone,
{
    type Item = T;
    fn advance(&mut self) -> Pull<T> {
        let Some(group) = self.handle.group() else {
            return Ok(Step::Complete(None));
        };
        let step = group.element(self.index, self.position)?;
        if step.is_yielded() {
            self.position += 1;
        } else {
            self.position = usize::MAX;
        }
        Ok(step)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum End {
    Open,
    Exhausted,
    WithValue,
}

struct Slot<T> {
    definition: Cell<Option<Definition<T>>>,
    source: RefCell<Option<BoxSequence<'static, T>>>,
    memo: RefCell<Vec<T>>,
    end: Cell<End>,
}

struct Group<T> {
    slots: Vec<Slot<T>>,
}

impl<T> Group<T>
where
    T: Clone,
{
    /// The outcome at `position` of member `index`, pulling its source as
    /// far as needed.
    fn element(self: &Rc<Self>, index: usize, position: usize) -> Pull<T> {
        let slot = self
            .slots
            .get(index)
            .ok_or_else(|| Error::invalid("letrec needs at least one definition"))?;
        loop {
            {
                let memo = slot.memo.borrow();
                if let Some(v) = memo.get(position) {
                    let last = position + 1 == memo.len() && slot.end.get() == End::WithValue;
                    return Ok(if last {
                        Step::Complete(Some(v.clone()))
                    } else {
                        Step::Yielded(v.clone())
                    });
                }
            }
            if slot.end.get() != End::Open {
                return Ok(Step::Complete(None));
            }
            self.extend(index, slot)?;
        }
    }

    /// Pull one more outcome from the member's source into its memo.
    fn extend(self: &Rc<Self>, index: usize, slot: &Slot<T>) -> Result<(), Error> {
        let mut source = slot
            .source
            .try_borrow_mut()
            .map_err(|_| Error::CyclicDemand)?;
        if source.is_none() {
            let definition = slot.definition.take().ok_or(Error::CyclicDemand)?;
            tracing::debug!(index, "forcing recursive definition");
            let refs: Vec<Delay<T>> = (0..self.slots.len())
                .map(|index| Delay {
                    group: Rc::downgrade(self),
                    index,
                })
                .collect();
            *source = Some(definition(&refs));
        }
        let Some(seq) = source.as_mut() else {
            return Err(Error::CyclicDemand);
        };
        match seq.advance()? {
            Step::Yielded(v) => slot.memo.borrow_mut().push(v),
            Step::Complete(tail) => {
                *source = None;
                match tail {
                    Some(v) => {
                        slot.memo.borrow_mut().push(v);
                        slot.end.set(End::WithValue);
                    }
                    None => slot.end.set(End::Exhausted),
                }
            }
        }
        Ok(())
    }
}
