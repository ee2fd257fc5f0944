use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {line}: expected `<node>: <neighbor> ...`, got {text:?}")]
    MissingColon { line: usize, text: String },
}

/// Parse adjacency-list text into an undirected graph.
///
/// Each line has the form `<node>: <neighbor1> <neighbor2> ...`. The listed
/// direction carries no meaning; labels are deduplicated across the whole
/// input, while parallel edges and self-loops are kept as given.
pub fn parse_graph(input: &str) -> Result<UnGraph<String, ()>, ParseError> {
    let mut graph = UnGraph::new_undirected();
    let mut indices: HashMap<String, NodeIndex> = HashMap::new();

    for (number, line) in input.lines().enumerate() {
        let (source, neighbors) =
            line.split_once(':').ok_or_else(|| ParseError::MissingColon {
                line: number + 1,
                text: line.to_string(),
            })?;

        let source = intern(&mut graph, &mut indices, source.trim());
        for neighbor in neighbors.split_whitespace() {
            let neighbor = intern(&mut graph, &mut indices, neighbor);
            graph.add_edge(source, neighbor, ());
        }
    }

    Ok(graph)
}

fn intern(
    graph: &mut UnGraph<String, ()>,
    indices: &mut HashMap<String, NodeIndex>,
    label: &str,
) -> NodeIndex {
    *indices
        .entry(label.to_string())
        .or_insert_with(|| graph.add_node(label.to_string()))
}
