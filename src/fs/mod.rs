//! File system I/O for graph records and search results.
//!
//! This module reads the comma-separated graph record format one complete
//! record at a time, and writes per-graph results as CSV or JSON lines.

mod error;
mod record_load;
mod result_write;

pub use error::*;
pub use record_load::*;
pub use result_write::*;
