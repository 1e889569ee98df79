use crate::dependency_tree::domain::EdgeMap;
use crate::shared::error::DeptreeError;
use crate::shared::Result;
use std::io::BufRead;

/// EdgeListParser service for `go mod graph` output
///
/// Each line holds exactly two whitespace-separated tokens, `from` and
/// `to`. Lines with any other token count are skipped.
pub struct EdgeListParser;

impl EdgeListParser {
    /// Parses graph output that is already in memory.
    pub fn parse_str(text: &str) -> EdgeMap {
        let mut edges = EdgeMap::new();
        for line in text.lines() {
            Self::parse_line(line, &mut edges);
        }
        edges
    }

    /// Parses graph output from a reader.
    ///
    /// # Errors
    /// Returns `DeptreeError::GraphRead` if the stream cannot be consumed,
    /// including when it is not valid UTF-8.
    pub fn parse_reader<R: BufRead>(reader: R) -> Result<EdgeMap> {
        let mut edges = EdgeMap::new();
        for line in reader.lines() {
            let line = line.map_err(|e| DeptreeError::GraphRead {
                details: e.to_string(),
            })?;
            Self::parse_line(&line, &mut edges);
        }
        Ok(edges)
    }

    fn parse_line(line: &str, edges: &mut EdgeMap) {
        let mut tokens = line.split_whitespace();
        if let (Some(from), Some(to), None) = (tokens.next(), tokens.next(), tokens.next()) {
            edges.add_edge(from, to);
        }
    }
}
