//! Hamiltonian path search over a [`Graph`](crate::graph::Graph).
//!
//! This module provides the [`PathSearch`] abstraction, its brute-force
//! implementation [`ExhaustiveSearch`], and the lazy ordering generator the
//! search walks.

mod exhaustive;
mod permutations;
mod result;

pub use exhaustive::*;
pub use permutations::*;
pub use result::*;
