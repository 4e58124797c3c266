//! Edge-list file loader
//!
//! Reads a comma-separated edge file into a validated [`Graph`]. The first
//! line is a header and is skipped; every other non-blank line starts with
//! `source,target` (extra columns, e.g. timestamps, are ignored). Nodes are
//! registered in order of first appearance and duplicate edges collapse to
//! one.

use super::store::{Graph, GraphError};
use rustc_hash::FxHashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::num::ParseIntError;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading an edge-list file
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Line {line}: expected `source,target`, got `{text}`")]
    MalformedLine { line: usize, text: String },

    #[error("Line {line}: invalid node id: {source}")]
    InvalidNodeId {
        line: usize,
        #[source]
        source: ParseIntError,
    },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type LoadResult<T> = Result<T, LoadError>;

/// Read an edge-list file into a graph snapshot.
pub fn read_graph(path: impl AsRef<Path>) -> LoadResult<Graph> {
    let file = File::open(path.as_ref())?;
    let graph = read_edges(BufReader::new(file))?;
    debug!(
        path = %path.as_ref().display(),
        nodes = graph.node_count(),
        "loaded edge list"
    );
    Ok(graph)
}

/// Read edge-list rows from any buffered reader.
pub fn read_edges<R: BufRead>(reader: R) -> LoadResult<Graph> {
    let mut pairs: Vec<(u64, u64)> = Vec::new();
    let mut seen: FxHashSet<(u64, u64)> = FxHashSet::default();

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let row = line?;
        if line_no == 1 {
            // header row
            continue;
        }
        let text = row.trim();
        if text.is_empty() {
            continue;
        }

        let mut columns = text.split(',');
        let u = next_node(&mut columns, text, line_no)?;
        let v = next_node(&mut columns, text, line_no)?;

        if seen.insert((u, v)) {
            pairs.push((u, v));
        }
    }

    Ok(Graph::from_pairs(pairs)?)
}

fn next_node<'a>(
    columns: &mut impl Iterator<Item = &'a str>,
    text: &str,
    line: usize,
) -> LoadResult<u64> {
    let column = columns.next().ok_or_else(|| LoadError::MalformedLine {
        line,
        text: text.to_string(),
    })?;
    column
        .trim()
        .parse::<u64>()
        .map_err(|source| LoadError::InvalidNodeId { line, source })
}
