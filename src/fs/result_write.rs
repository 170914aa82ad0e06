use std::{
    fmt::Display,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use serde::Serialize;

use crate::{fs::RecordError, fs::RecordHeader, graph::Graph, search::SearchResult};

/// Layout of the results stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `Case_Number,nVertices,Is_Hamiltonian,Elapsed_Time` rows
    Csv,
    /// One JSON object per line with every reported field
    Json,
}

pub const CSV_HEADER: &str = "Case_Number,nVertices,Is_Hamiltonian,Elapsed_Time";

/// Everything reported for one searched graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow {
    pub case: String,
    pub vertices: usize,
    pub edges: usize,
    pub found: bool,
    pub expected: bool,
    pub elapsed_secs: f64,
}

impl ResultRow {
    pub fn new(header: &RecordHeader, graph: &Graph, result: &SearchResult) -> Self {
        ResultRow {
            case: header.case.clone(),
            vertices: graph.vertex_count(),
            edges: graph.arc_count(),
            found: result.found,
            expected: header.expected_hamiltonian,
            elapsed_secs: result.elapsed_secs(),
        }
    }

    pub fn matches_expected(&self) -> bool {
        self.found == self.expected
    }
}

// booleans are spelled the way existing result logs spell them
fn title_case(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

/// Multi-line console report.
impl Display for ResultRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Graph {}:", self.case)?;
        writeln!(f, "  Number of Vertices: {}", self.vertices)?;
        writeln!(f, "  Number of Edges: {}", self.edges)?;
        writeln!(f, "  Hamiltonian Result: {}", title_case(self.found))?;
        writeln!(f, "  Expected Result: {}", title_case(self.expected))?;
        write!(f, "  Elapsed Time: {}", self.elapsed_secs)
    }
}

/// Writes result rows to a stream in the chosen [`OutputFormat`].
pub struct ResultWriter<W: Write> {
    out: W,
    format: OutputFormat,
}

impl ResultWriter<BufWriter<File>> {
    pub fn create<P: AsRef<Path>>(path: P, format: OutputFormat) -> Result<Self, RecordError> {
        let file = File::create(path)?;
        ResultWriter::new(BufWriter::new(file), format)
    }
}

impl<W: Write> ResultWriter<W> {
    /// Wraps `out`, writing the CSV header right away when needed.
    pub fn new(mut out: W, format: OutputFormat) -> Result<Self, RecordError> {
        if format == OutputFormat::Csv {
            writeln!(out, "{CSV_HEADER}")?;
        }
        Ok(ResultWriter { out, format })
    }

    pub fn write_row(&mut self, row: &ResultRow) -> Result<(), RecordError> {
        match self.format {
            OutputFormat::Csv => writeln!(
                self.out,
                "{},{},{},{}",
                row.case,
                row.vertices,
                title_case(row.found),
                row.elapsed_secs
            )?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, row)?;
                writeln!(self.out)?;
            }
        }
        Ok(())
    }

    /// Flushes and hands back the underlying stream.
    pub fn finish(mut self) -> Result<W, RecordError> {
        self.out.flush()?;
        Ok(self.out)
    }
}
