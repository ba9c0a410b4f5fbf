use super::{AdjacencyGraph, GraphError};
use std::io::BufRead;
use std::num::ParseIntError;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while parsing the line-oriented graph description.
///
/// The first failure is propagated immediately; no partial graph is returned.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The underlying reader failed.
    #[error("error reading the graph description")]
    Io(#[from] std::io::Error),
    /// The input has no vertex-count line.
    #[error("missing vertex-count line")]
    MissingVertexCount,
    /// An edge line does not have exactly three fields.
    #[error("line {line}: expected `u v w`, found {found} fields")]
    WrongFieldCount { line: usize, found: usize },
    /// A field is not a valid integer.
    #[error("line {line}: invalid integer `{token}`")]
    InvalidInteger {
        line: usize,
        token: String,
        source: ParseIntError,
    },
    /// An edge references a vertex outside the graph.
    #[error("line {line}: {source}")]
    Edge { line: usize, source: GraphError },
}

fn parse_field<T: FromStr<Err = ParseIntError>>(token: &str, line: usize) -> Result<T, ParseError> {
    token.parse().map_err(|source| ParseError::InvalidInteger {
        line,
        token: token.to_owned(),
        source,
    })
}

impl AdjacencyGraph {
    /// Parses a graph description from a buffered reader.
    ///
    /// The first line is the number of vertices; every further line is an
    /// edge `u v w` of three whitespace-separated integers with `u` and `v`
    /// in `[0, num_nodes)` and a signed weight `w`. The edge list ends at end
    /// of input.
    pub fn from_reader(reader: impl BufRead) -> Result<Self, ParseError> {
        let mut lines = reader.lines();
        let first = match lines.next() {
            Some(line) => line?,
            None => return Err(ParseError::MissingVertexCount),
        };
        let num_nodes = parse_field(first.trim(), 1)?;
        let mut graph = AdjacencyGraph::new(num_nodes);

        for (index, line) in lines.enumerate() {
            let line = line?;
            let line_number = index + 2;
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() != 3 {
                return Err(ParseError::WrongFieldCount {
                    line: line_number,
                    found: fields.len(),
                });
            }
            let u = parse_field(fields[0], line_number)?;
            let v = parse_field(fields[1], line_number)?;
            let w = parse_field(fields[2], line_number)?;
            graph.add_edge(u, v, w).map_err(|source| ParseError::Edge {
                line: line_number,
                source,
            })?;
        }

        Ok(graph)
    }

    /// Opens and parses a graph description file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        Self::from_reader(std::io::BufReader::new(std::fs::File::open(path)?))
    }
}

impl FromStr for AdjacencyGraph {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_reader(s.as_bytes())
    }
}
