//! Commonly used imports
//!
//! Use `use seqgen::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{BoxSequence, Error, Pull, Sequence, Step};

// Source constructors
pub use crate::build::{empty, from_fn, generate, iterate, of, of_infinite, of_return, range, range_from};

// Structural combinators
pub use crate::compose::{concat, interleave, limit, skip};

// Transformations
pub use crate::compose::{filter, flat_map, map, scan};

// Enumeration
pub use crate::{outer_product, power_generator, power_generator_with};

// Recursive definitions
pub use crate::letrec::{define, fix, letrec, Delay, Knot};

// Consumers
pub use crate::consume::{all, any, count, element_at, fold, for_each, to_vec};
