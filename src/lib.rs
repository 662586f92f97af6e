//! # seqgen: Composable Pull-Based Lazy Sequences
//!
//! Build lazy, possibly infinite sequences and combine them with operators
//! that never compute an element before it is asked for.
//!
//! ## Core Types
//!
//! - **[`Sequence`]**: single-pass producer, pulled with [`Sequence::advance`]
//! - **[`Step`]**: outcome of one pull; `Step::Complete` may carry a final
//!   *terminal value* that every operator folds in as one more element
//!
//! ## Key Features
//!
//! - **Infinite-safe**: `range_from`, `of_infinite`, `generate` and `iterate`
//!   produce unbounded sequences; `limit`, `element_at`, `any` and `all` stop
//!   pulling as soon as they can
//! - **Self-referential**: [`letrec`] ties sequences defined in terms of
//!   themselves, like power series given by their recurrences
//! - **Fair enumeration**: [`outer_product`] walks products of infinite
//!   sequences diagonally, [`interleave`] round-robins its inputs
//! - **Pruned search**: [`power_generator_with`] skips every tuple under a
//!   rejected prefix
//!
//! ## Example
//!
//! ```
//! use seqgen::prelude::*;
//!
//! // squares of the odd numbers, as long as they stay below 100
//! let odd_squares = range_from(1)
//!     .filter(|x| x % 2 == 1)
//!     .map(|x| x * x)
//!     .limit(5);
//! assert_eq!(odd_squares.to_vec().unwrap(), vec![1, 9, 25, 49, 81]);
//!
//! // an interleaving of a cycle and a progression
//! let mixed = interleave([of_infinite(vec![0]).boxed(), range(1, 3, 1).boxed()]);
//! assert_eq!(mixed.limit(6).to_vec().unwrap(), vec![0, 1, 0, 2, 0, 3]);
//! ```
//!
//! ## Common Functions
//!
//! **Building Sequences:**
//! - [`of(items)`](of), [`of_return(items)`](of_return) - Finite sequences, the
//!   latter delivering its last item as the terminal value
//! - [`of_infinite(items)`](of_infinite) - Cycle through a list forever
//! - [`range(start, end, step)`](range) - Inclusive arithmetic progression
//! - [`generate(f)`](generate), [`iterate(seed, f)`](iterate) - Closure-driven
//!
//! **Combining:**
//! - [`concat(seqs)`](concat), [`interleave(seqs)`](interleave), [`map(f, seqs)`](map)
//! - [`outer_product(f, seqs)`](outer_product), [`power_generator(list, n)`](power_generator)
//!
//! **Consuming:**
//! - [`to_vec`], [`fold`], [`for_each`], [`element_at`], [`count`], [`all`], [`any`]
//! - [`Sequence::iter`] - Adapt into a standard `Iterator`

pub mod build;
pub mod compose;
pub mod consume;
mod error;
pub mod iter;
pub mod letrec;
pub mod prelude;
mod power;
mod product;
mod sequence;
mod step;

pub use build::*;
pub use compose::*;
pub use consume::*;
pub use error::*;
pub use iter::{Finish, SequenceIter};
pub use letrec::{define, fix, letrec, Cursor, Definition, Delay, Knot};
pub use power::*;
pub use product::*;
pub use sequence::*;
pub use step::*;
