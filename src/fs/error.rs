use thiserror::Error;

/// Failures while reading graph records or writing results.
///
/// Line numbers are 1-based and count every physical line, blank ones included.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A line started with the wrong tag. A body line with no header before it lands here.
    #[error("line {line}: expected a `{expected}` line, found `{found}`")]
    UnexpectedTag {
        line: usize,
        expected: &'static str,
        found: String,
    },

    #[error("line {line}: `{tag}` line needs {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        tag: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: unknown directedness flag `{flag}`, expected `u` or `d`")]
    UnknownDirectedness { line: usize, flag: String },

    #[error("line {line}: unknown expected label `{label}`, expected `h` or `n`")]
    UnknownLabel { line: usize, label: String },

    #[error("line {line}: `{value}` is not a valid count")]
    InvalidCount { line: usize, value: String },

    #[error("line {line}: vertex list is empty or has a blank name")]
    InvalidVertexList { line: usize },

    #[error("case `{case}`: input ended while expecting a `{expected}` line")]
    Truncated { case: String, expected: &'static str },
}
