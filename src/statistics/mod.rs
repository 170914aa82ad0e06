//! Work counters for Hamiltonian path searches.
//!
//! This module provides a structure for collecting and aggregating metrics about
//! search effort, including number of searches, orderings walked, arcs checked,
//! and disagreements with the expected labels of the input records.

mod stats;
pub use stats::*;
