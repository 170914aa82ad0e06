use std::time::Instant;

use tracing::debug;

use crate::{
    graph::Graph,
    search::{PositionPermutations, SearchResult},
    statistics::Stats,
};

/// A strategy deciding whether a graph admits a Hamiltonian path.
pub trait PathSearch {
    /// Runs the search, recording the work done into `stats`.
    ///
    /// Always terminates with a definite answer; the reported time covers the
    /// whole call.
    fn search(&self, graph: &Graph, stats: &mut Stats) -> SearchResult;
}

/// Brute-force search over every ordering of the vertex positions.
///
/// # Algorithm
/// - A single vertex is a path on its own, whatever the arcs.
/// - Otherwise orderings are generated lazily. Each one is walked pair by pair
///   and dropped at the first consecutive pair with no arc. The first ordering
///   whose walk completes ends the search.
/// - If every ordering fails, there is no Hamiltonian path.
///
/// Runtime is factorial in the vertex count; beyond a dozen vertices it is
/// impractical. There is no timeout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExhaustiveSearch;

impl ExhaustiveSearch {
    fn walk_orderings(graph: &Graph, stats: &mut Stats) -> bool {
        let n = graph.vertex_count();
        if n == 1 {
            return true;
        }

        let mut orderings = PositionPermutations::new(n);
        while let Some(order) = orderings.advance() {
            stats.bump_permutations();

            let mut checked = 0;
            let complete = order.windows(2).all(|pair| {
                checked += 1;
                graph.has_arc_between_positions(pair[0], pair[1])
            });
            stats.bump_arcs_checked(checked);

            // an empty graph has no final pair to reach
            if complete && n > 1 {
                return true;
            }
        }
        false
    }
}

impl PathSearch for ExhaustiveSearch {
    fn search(&self, graph: &Graph, stats: &mut Stats) -> SearchResult {
        let start_time = Instant::now();
        let found = Self::walk_orderings(graph, stats);
        let elapsed = start_time.elapsed();

        stats.bump_searches(found, elapsed);
        debug!(
            vertices = graph.vertex_count(),
            arcs = graph.arc_count(),
            found,
            elapsed_secs = elapsed.as_secs_f64(),
            "search finished"
        );
        SearchResult { found, elapsed }
    }
}

/// Decides Hamiltonian path existence with [`ExhaustiveSearch`], discarding the work counters.
pub fn find_hamiltonian(graph: &Graph) -> SearchResult {
    ExhaustiveSearch.search(graph, &mut Stats::new())
}
