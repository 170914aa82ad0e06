use std::time::Duration;

/// Outcome of one Hamiltonian path search.
///
/// Only existence is reported; the ordering that proved it is not kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub found: bool,
    pub elapsed: Duration,
}

impl SearchResult {
    /// Wall-clock search time in seconds, with sub-millisecond precision.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}
