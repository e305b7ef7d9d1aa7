use std::io::BufRead;

use crate::error::Error;
use crate::Result;

use super::Graph;

/// Parses `origin,destination,weight` records into a graph.
///
/// One record per line, no header. Fields are trimmed, blank lines are
/// skipped. Line numbers in errors are 1-based.
pub fn parse_graph_records<R: BufRead>(reader: R) -> Result<Graph> {
    let mut graph = Graph::new();
    for (line_index, line) in reader.lines().enumerate() {
        let line_number = line_index + 1;
        let content = line.map_err(|e| Error::FailedToReadGraphRecord(line_number, e))?;
        if content.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = content.split(',').map(str::trim).collect();
        if fields.len() != 3 {
            return Err(Error::GraphRecordFieldCountMismatch(
                line_number,
                fields.len(),
            ));
        }
        let weight: f64 = fields[2]
            .parse()
            .map_err(|_| Error::GraphRecordWeightNotParsable(line_number, fields[2].to_owned()))?;
        graph.add_edge(fields[0], fields[1], weight)?;
    }
    Ok(graph)
}
