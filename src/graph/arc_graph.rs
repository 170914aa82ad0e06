use std::fmt::Debug;

use hashbrown::HashSet;

use crate::graph::{Symbol, SymbolTable};

/// Textual vertex identifier, compared by exact string equality.
pub type VertexId = String;

/// A directed arc `(source, target)`.
pub type DirectedArc = (VertexId, VertexId);

/// Immutable directed graph over named vertices.
///
/// # Invariants
/// - `positions[i]` is the symbol of `vertices[i]`.
/// - Every symbol below `vertex_symbols` names at least one entry of `vertices`.
///   Symbols at or above it were only seen as arc endpoints ("dangling").
/// - `arcs` holds each supplied arc once; `supplied_arcs` counts them with
///   multiplicity.
///
/// Arcs whose endpoints do not appear in the vertex list are accepted. They can
/// never lie on a Hamiltonian path since the search only walks listed vertices,
/// and [`Graph::dangling_arcs`] reports how many there are.
pub struct Graph {
    vertices: Box<[VertexId]>,
    positions: Box<[Symbol]>,
    symbols: SymbolTable,
    vertex_symbols: usize,
    arcs: HashSet<(Symbol, Symbol)>,
    supplied_arcs: usize,
    dangling_arcs: usize,
}

impl Graph {
    /// Builds a graph from an ordered vertex list and directed arcs. Never fails.
    ///
    /// Repeated vertex names are kept as separate positions. Undirected input must
    /// already be expanded into both directions by the caller.
    pub fn new<A>(vertices: Vec<VertexId>, arcs: A) -> Self
    where
        A: IntoIterator<Item = DirectedArc>,
    {
        let mut symbols = SymbolTable::new();
        let positions: Box<[Symbol]> = vertices.iter().map(|v| symbols.intern(v)).collect();
        let vertex_symbols = symbols.len();

        let mut arc_set = HashSet::new();
        let mut supplied_arcs = 0;
        let mut dangling_arcs = 0;
        for (source, target) in arcs {
            let from = symbols.intern(&source);
            let to = symbols.intern(&target);
            if from.internal >= vertex_symbols || to.internal >= vertex_symbols {
                dangling_arcs += 1;
            }
            arc_set.insert((from, to));
            supplied_arcs += 1;
        }

        Graph {
            vertices: vertices.into_boxed_slice(),
            positions,
            symbols,
            vertex_symbols,
            arcs: arc_set,
            supplied_arcs,
            dangling_arcs,
        }
    }

    /// Whether the arc `(source, target)` was supplied at construction.
    ///
    /// No reflexive or transitive closure is applied.
    pub fn has_arc(&self, source: &str, target: &str) -> bool {
        match (self.symbols.lookup(source), self.symbols.lookup(target)) {
            (Some(from), Some(to)) => self.arcs.contains(&(from, to)),
            _ => false,
        }
    }

    /// Same as [`Graph::has_arc`], addressed by positions in the vertex list.
    ///
    /// # Panics
    /// If either position is out of bounds.
    pub fn has_arc_between_positions(&self, from: usize, to: usize) -> bool {
        self.arcs.contains(&(self.positions[from], self.positions[to]))
    }

    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of arcs supplied at construction, duplicates included.
    pub fn arc_count(&self) -> usize {
        self.supplied_arcs
    }

    /// Number of supplied arcs with at least one endpoint missing from the vertex list.
    pub fn dangling_arcs(&self) -> usize {
        self.dangling_arcs
    }

    /// Whether some vertex name appears at more than one position.
    pub fn has_repeated_vertices(&self) -> bool {
        self.vertex_symbols < self.vertices.len()
    }
}

impl Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("vertices", &self.vertices)
            .field("arcs", &self.supplied_arcs)
            .field("dangling_arcs", &self.dangling_arcs)
            .finish()
    }
}
