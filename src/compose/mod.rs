//! Combining and transforming sequences
//!
//! This module provides the structural combinators (concatenation, fair
//! interleaving, slicing) and the element transforms built on top of them.

mod chain;
mod filter;
mod fuse;
mod interleave;
mod map;
mod slice;

// Re-export composition operations
pub use chain::{chain, concat, Chain, Concat};
pub use filter::{filter, flat_map, Filter, FlatMap};
pub(crate) use fuse::Fuse;
pub use interleave::{interleave, Interleave};
pub use map::{map, scan, Map, MapAll, Scan};
pub use slice::{limit, skip, Limit, Skip};
