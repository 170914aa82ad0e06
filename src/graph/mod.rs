//! In-memory graph model used by the Hamiltonian path search.
//!
//! A [`Graph`] is built once from an ordered vertex list and a collection of
//! directed arcs, and is read-only afterwards. Vertex names are interned into
//! dense [`Symbol`]s so that arc membership is a single hash lookup.

mod arc_graph;
mod symbols;

pub use arc_graph::*;
pub use symbols::*;
