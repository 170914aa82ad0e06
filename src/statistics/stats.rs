use std::time::Duration;

pub struct Stats {
    searches: usize,
    permutations_examined: usize,
    arcs_checked: usize,
    paths_found: usize,
    label_mismatches: usize,
    search_time: Duration,
}

impl Stats {
    pub fn new() -> Self {
        Stats {
            searches: 0,
            permutations_examined: 0,
            arcs_checked: 0,
            paths_found: 0,
            label_mismatches: 0,
            search_time: Duration::ZERO,
        }
    }

    /// Record into the statistics object that a search has completed
    pub fn bump_searches(&mut self, found: bool, elapsed: Duration) {
        self.searches += 1;
        if found {
            self.paths_found += 1;
        }
        self.search_time += elapsed;
    }

    /// Record that one more vertex ordering was walked
    pub fn bump_permutations(&mut self) {
        self.permutations_examined += 1
    }

    pub fn bump_arcs_checked(&mut self, amount: usize) {
        self.arcs_checked += amount
    }

    /// Record that a search disagreed with the ground-truth label of its record
    pub fn bump_label_mismatches(&mut self) {
        self.label_mismatches += 1
    }

    pub fn get_searches(&self) -> usize {
        self.searches
    }

    pub fn get_permutations_examined(&self) -> usize {
        self.permutations_examined
    }

    pub fn get_arcs_checked(&self) -> usize {
        self.arcs_checked
    }

    pub fn get_paths_found(&self) -> usize {
        self.paths_found
    }

    pub fn get_label_mismatches(&self) -> usize {
        self.label_mismatches
    }

    pub fn get_search_time(&self) -> Duration {
        self.search_time
    }

    pub fn merge(self, other: &Stats) -> Stats {
        Stats {
            searches: self.searches + other.searches,
            permutations_examined: self.permutations_examined + other.permutations_examined,
            arcs_checked: self.arcs_checked + other.arcs_checked,
            paths_found: self.paths_found + other.paths_found,
            label_mismatches: self.label_mismatches + other.label_mismatches,
            search_time: self.search_time + other.search_time,
        }
    }

    /// Write a summary of the stats object to stdout
    pub fn dump(&self) {
        println!(
            "Graphs searched: {}, Hamiltonian: {}, label mismatches: {}",
            self.searches, self.paths_found, self.label_mismatches
        );
        println!(
            "Permutations examined: {}, arcs checked: {}, total search time: {:.6}s",
            self.permutations_examined,
            self.arcs_checked,
            self.search_time.as_secs_f64()
        );
    }
}

impl Default for Stats {
    fn default() -> Self {
        Stats::new()
    }
}
