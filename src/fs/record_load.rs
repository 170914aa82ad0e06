use std::{
    fs::File,
    io::{BufRead, BufReader, Lines},
    path::Path,
};

use tracing::warn;

use crate::{
    fs::RecordError,
    graph::{DirectedArc, Graph, VertexId},
};

/// How the `e` lines of a record turn into arcs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directedness {
    // one arc per edge line
    Directed,
    // two opposite arcs per edge line
    Undirected,
}

impl Directedness {
    pub fn from_flag(flag: &str) -> Option<Self> {
        match flag {
            "d" => Some(Directedness::Directed),
            "u" => Some(Directedness::Undirected),
            _ => None,
        }
    }

    /// Appends the arcs for one parsed edge.
    pub fn push_arcs(self, source: VertexId, target: VertexId, arcs: &mut Vec<DirectedArc>) {
        match self {
            Directedness::Directed => arcs.push((source, target)),
            Directedness::Undirected => {
                arcs.push((source.clone(), target.clone()));
                arcs.push((target, source));
            }
        }
    }
}

/// The `c` line of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordHeader {
    pub case: String,
    /// Ground-truth label: `h` in the input.
    pub expected_hamiltonian: bool,
}

/// One complete graph record: header plus the graph built from its body.
#[derive(Debug)]
pub struct GraphRecord {
    pub header: RecordHeader,
    pub directedness: Directedness,
    pub graph: Graph,
}

/// Streaming reader for the line-oriented graph record format.
///
/// ```text
/// c,<case>,<h|n>
/// p,<u|d>,<vertex count>,<edge count>
/// v,<name>,<name>,...
/// e,<source>,<target>      (edge count times)
/// ```
///
/// Blank lines are skipped. Each call to `next` yields a whole record or an
/// error; after the first error the reader yields nothing more.
pub struct RecordReader<R: BufRead> {
    lines: Lines<R>,
    line_number: usize,
    failed: bool,
}

impl RecordReader<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, RecordError> {
        let file = File::open(path)?;
        Ok(RecordReader::new(BufReader::new(file)))
    }
}

impl<R: BufRead> RecordReader<R> {
    pub fn new(reader: R) -> Self {
        RecordReader {
            lines: reader.lines(),
            line_number: 0,
            failed: false,
        }
    }

    /// Next non-blank line, stripped, with its line number.
    fn next_line(&mut self) -> Result<Option<(usize, String)>, RecordError> {
        for line in &mut self.lines {
            self.line_number += 1;
            let line = line?;
            let stripped = line.trim();
            if !stripped.is_empty() {
                return Ok(Some((self.line_number, stripped.to_owned())));
            }
        }
        Ok(None)
    }

    fn expect_line(
        &mut self,
        case: &str,
        tag: &'static str,
    ) -> Result<(usize, Vec<String>), RecordError> {
        let Some((line, text)) = self.next_line()? else {
            return Err(RecordError::Truncated {
                case: case.to_owned(),
                expected: tag,
            });
        };
        let fields = split_tagged(line, &text, tag)?;
        Ok((line, fields))
    }

    fn read_header(&mut self) -> Result<Option<RecordHeader>, RecordError> {
        let Some((line, text)) = self.next_line()? else {
            return Ok(None);
        };
        let fields = split_tagged(line, &text, "c")?;
        check_field_count(line, "c", &fields, 3)?;

        let expected_hamiltonian = match fields[2].as_str() {
            "h" => true,
            "n" => false,
            other => {
                return Err(RecordError::UnknownLabel {
                    line,
                    label: other.to_owned(),
                });
            }
        };
        Ok(Some(RecordHeader {
            case: fields[1].clone(),
            expected_hamiltonian,
        }))
    }

    fn read_record(&mut self) -> Result<Option<GraphRecord>, RecordError> {
        let Some(header) = self.read_header()? else {
            return Ok(None);
        };

        let (line, problem) = self.expect_line(&header.case, "p")?;
        check_field_count(line, "p", &problem, 4)?;
        let directedness =
            Directedness::from_flag(&problem[1]).ok_or_else(|| RecordError::UnknownDirectedness {
                line,
                flag: problem[1].clone(),
            })?;
        let declared_vertices = parse_count(line, &problem[2])?;
        let edge_count = parse_count(line, &problem[3])?;

        let (line, mut vertex_fields) = self.expect_line(&header.case, "v")?;
        let vertices: Vec<VertexId> = vertex_fields.split_off(1);
        if vertices.is_empty() || vertices.iter().any(String::is_empty) {
            return Err(RecordError::InvalidVertexList { line });
        }
        if vertices.len() != declared_vertices {
            warn!(
                case = %header.case,
                declared = declared_vertices,
                listed = vertices.len(),
                "vertex count in problem line does not match vertex list"
            );
        }

        let mut arcs = Vec::new();
        for _ in 0..edge_count {
            let (line, mut edge) = self.expect_line(&header.case, "e")?;
            check_field_count(line, "e", &edge, 3)?;
            let target = edge.pop().unwrap_or_default();
            let source = edge.pop().unwrap_or_default();
            directedness.push_arcs(source, target, &mut arcs);
        }

        Ok(Some(GraphRecord {
            header,
            directedness,
            graph: Graph::new(vertices, arcs),
        }))
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = Result<GraphRecord, RecordError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.read_record() {
            Ok(record) => record.map(Ok),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

fn split_tagged(line: usize, text: &str, tag: &'static str) -> Result<Vec<String>, RecordError> {
    let fields: Vec<String> = text.split(',').map(str::to_owned).collect();
    if fields[0] != tag {
        return Err(RecordError::UnexpectedTag {
            line,
            expected: tag,
            found: fields[0].clone(),
        });
    }
    Ok(fields)
}

fn check_field_count(
    line: usize,
    tag: &'static str,
    fields: &[String],
    expected: usize,
) -> Result<(), RecordError> {
    if fields.len() != expected {
        return Err(RecordError::FieldCount {
            line,
            tag,
            expected,
            found: fields.len(),
        });
    }
    Ok(())
}

fn parse_count(line: usize, value: &str) -> Result<usize, RecordError> {
    value.parse().map_err(|_| RecordError::InvalidCount {
        line,
        value: value.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::find_hamiltonian;

    fn read_all(input: &str) -> Vec<Result<GraphRecord, RecordError>> {
        RecordReader::new(input.as_bytes()).collect()
    }

    #[test]
    fn test_directed_record() {
        let records = read_all("c,1,h\np,d,3,2\nv,a,b,c\ne,a,b\ne,b,c\n");
        assert_eq!(records.len(), 1);
        let record = records.into_iter().next().unwrap().unwrap();
        assert_eq!(record.header.case, "1");
        assert!(record.header.expected_hamiltonian);
        assert_eq!(record.directedness, Directedness::Directed);
        assert_eq!(record.graph.vertex_count(), 3);
        assert_eq!(record.graph.arc_count(), 2);
        assert!(record.graph.has_arc("a", "b"));
        assert!(!record.graph.has_arc("b", "a"));
    }

    #[test]
    fn test_undirected_record_expands_each_edge_once() {
        let records = read_all("c,2,n\np,u,3,2\nv,a,b,c\ne,a,b\ne,b,c\n");
        let record = records.into_iter().next().unwrap().unwrap();
        assert!(!record.header.expected_hamiltonian);
        assert_eq!(record.directedness, Directedness::Undirected);
        assert_eq!(record.graph.arc_count(), 4);
        for (u, v) in [("a", "b"), ("b", "a"), ("b", "c"), ("c", "b")] {
            assert!(record.graph.has_arc(u, v), "{u} -> {v}");
        }
        assert!(!record.graph.has_arc("a", "c"));
    }

    #[test]
    fn test_several_records_with_blank_lines() {
        let input = "c,1,h\np,d,1,0\nv,x\n\n\nc,2,n\np,u,2,0\nv,x,y\n";
        let records: Vec<GraphRecord> = read_all(input).into_iter().map(Result::unwrap).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].header.case, "1");
        assert_eq!(records[0].graph.vertex_count(), 1);
        assert_eq!(records[1].header.case, "2");
        assert_eq!(records[1].graph.arc_count(), 0);
    }

    #[test]
    fn test_empty_input() {
        assert!(read_all("").is_empty());
        assert!(read_all("\n\n").is_empty());
    }

    #[test]
    fn test_crlf_line_endings() {
        let records = read_all("c,7,h\r\np,d,2,1\r\nv,a,b\r\ne,a,b\r\n");
        let record = records.into_iter().next().unwrap().unwrap();
        assert_eq!(record.header.case, "7");
        assert!(record.graph.has_arc("a", "b"));
    }

    #[test]
    fn test_body_line_without_header_fails() {
        let records = read_all("c,1,h\np,d,2,1\nv,a,b\ne,a,b\ne,b,a\n");
        assert_eq!(records.len(), 2);
        assert!(records[0].is_ok());
        match &records[1] {
            Err(RecordError::UnexpectedTag {
                line,
                expected,
                found,
            }) => {
                assert_eq!(*line, 5);
                assert_eq!(*expected, "c");
                assert_eq!(found, "e");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_reader_stops_after_error() {
        let records = read_all("x,1,h\nc,2,h\np,d,1,0\nv,a\n");
        assert_eq!(records.len(), 1);
        assert!(records[0].is_err());
    }

    #[test]
    fn test_truncated_record() {
        let records = read_all("c,9,h\np,d,2,2\nv,a,b\ne,a,b\n");
        match &records[0] {
            Err(RecordError::Truncated { case, expected }) => {
                assert_eq!(case, "9");
                assert_eq!(*expected, "e");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_missing_problem_line() {
        let records = read_all("c,3,h\n");
        assert!(matches!(
            records[0],
            Err(RecordError::Truncated { expected: "p", .. })
        ));
    }

    #[test]
    fn test_unknown_directedness() {
        let records = read_all("c,1,h\np,x,1,0\nv,a\n");
        assert!(matches!(
            records[0],
            Err(RecordError::UnknownDirectedness { line: 2, .. })
        ));
    }

    #[test]
    fn test_unknown_label() {
        let records = read_all("c,1,maybe\np,d,1,0\nv,a\n");
        assert!(matches!(
            records[0],
            Err(RecordError::UnknownLabel { line: 1, .. })
        ));
    }

    #[test]
    fn test_invalid_edge_count() {
        let records = read_all("c,1,h\np,d,1,many\nv,a\n");
        assert!(matches!(
            records[0],
            Err(RecordError::InvalidCount { line: 2, .. })
        ));
    }

    #[test]
    fn test_edge_line_with_extra_endpoint() {
        let records = read_all("c,1,h\np,d,3,1\nv,a,b,c\ne,a,b,c\n");
        assert!(matches!(
            records[0],
            Err(RecordError::FieldCount {
                line: 4,
                tag: "e",
                expected: 3,
                found: 4
            })
        ));
    }

    #[test]
    fn test_empty_vertex_list() {
        let records = read_all("c,1,h\np,d,0,0\nv\n");
        assert!(matches!(
            records[0],
            Err(RecordError::InvalidVertexList { line: 3 })
        ));
        let records = read_all("c,1,h\np,d,1,0\nv,\n");
        assert!(matches!(
            records[0],
            Err(RecordError::InvalidVertexList { line: 3 })
        ));
    }

    #[test]
    fn test_vertex_count_mismatch_is_tolerated() {
        let records = read_all("c,1,h\np,d,5,0\nv,a,b\n");
        let record = records.into_iter().next().unwrap().unwrap();
        assert_eq!(record.graph.vertex_count(), 2);
    }

    #[test]
    fn test_edges_to_unlisted_vertices_are_kept() {
        let records = read_all("c,1,n\np,u,2,1\nv,a,b\ne,a,z\n");
        let record = records.into_iter().next().unwrap().unwrap();
        assert_eq!(record.graph.arc_count(), 2);
        assert_eq!(record.graph.dangling_arcs(), 2);
    }

    #[test]
    fn test_push_arcs() {
        let mut arcs = Vec::new();
        Directedness::Directed.push_arcs("a".into(), "b".into(), &mut arcs);
        assert_eq!(arcs, vec![("a".to_string(), "b".to_string())]);

        arcs.clear();
        Directedness::Undirected.push_arcs("a".into(), "b".into(), &mut arcs);
        assert_eq!(
            arcs,
            vec![
                ("a".to_string(), "b".to_string()),
                ("b".to_string(), "a".to_string())
            ]
        );
    }

    #[test]
    fn test_from_flag() {
        assert_eq!(Directedness::from_flag("d"), Some(Directedness::Directed));
        assert_eq!(Directedness::from_flag("u"), Some(Directedness::Undirected));
        assert_eq!(Directedness::from_flag("D"), None);
    }

    #[test]
    fn test_loading_example_file() {
        let records: Vec<GraphRecord> = RecordReader::open("test_data/cases.csv")
            .unwrap()
            .map(Result::unwrap)
            .collect();
        assert_eq!(records.len(), 6);
        assert_eq!(records[0].header.case, "1");
        assert_eq!(records[5].header.case, "6");
        assert_eq!(records[5].graph.arc_count(), 10);

        for record in &records {
            assert_eq!(
                find_hamiltonian(&record.graph).found,
                record.header.expected_hamiltonian,
                "case {}",
                record.header.case
            );
        }
    }
}
