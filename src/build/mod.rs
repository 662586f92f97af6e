//! Building sequences from scratch
//!
//! This module provides the source constructors: literal lists, cyclic
//! repetition, arithmetic progressions, and closure-driven sequences.

mod func;
mod literal;
mod range;

// Re-export building blocks
pub use func::{from_fn, generate, iterate, FromFn, Generate, Iterate};
pub use literal::{empty, of, of_infinite, of_return, Empty, Of, OfInfinite, OfReturn};
pub use range::{range, range_from, Range};
