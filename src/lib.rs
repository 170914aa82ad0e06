pub mod fs;
pub mod graph;
pub mod search;
pub mod statistics;
