use petgraph::visit::{EdgeRef, IntoEdgeReferences, NodeCount, NodeIndexable};
use thiserror::Error;

use crate::cuts::Cut;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MinCutError {
    #[error("minimum cut is undefined for a graph with fewer than two nodes")]
    TooFewNodes,
}

/// Compute a global minimum edge cut with the Stoer-Wagner algorithm.
///
/// Edges are unweighted; each parallel edge adds one unit of capacity across
/// the partition. Disconnected graphs are fine: one of the phases then has
/// weight 0, which is the correct answer.
pub fn global_min_cut<G>(graph: G) -> Result<Cut, MinCutError>
where
    G: NodeCount + NodeIndexable + IntoEdgeReferences,
{
    if graph.node_count() < 2 {
        return Err(MinCutError::TooFewNodes);
    }

    let bound = graph.node_bound();
    let mut weights = vec![vec![0usize; bound]; bound];
    for edge in graph.edge_references() {
        let source = NodeIndexable::to_index(&graph, edge.source());
        let target = NodeIndexable::to_index(&graph, edge.target());
        // a self-loop never crosses a partition
        if source != target {
            weights[source][target] += 1;
            weights[target][source] += 1;
        }
    }

    // which original vertices each remaining super-vertex has absorbed
    let mut merged: Vec<Vec<usize>> = (0..bound).map(|vertex| vec![vertex]).collect();
    let mut active: Vec<usize> = (0..bound).collect();

    let mut best: Option<Cut> = None;

    while active.len() > 1 {
        // grow a maximum-adjacency order from the first active vertex
        let mut in_order = vec![false; bound];
        let mut key = vec![0usize; bound];
        let start = active[0];
        in_order[start] = true;
        for &vertex in &active {
            key[vertex] = weights[start][vertex];
        }

        let mut previous = start;
        let mut last = start;
        for _ in 1..active.len() {
            let next = active
                .iter()
                .copied()
                .filter(|&vertex| !in_order[vertex])
                .max_by_key(|&vertex| key[vertex])
                .expect("an active vertex outside the order remains");
            in_order[next] = true;
            previous = last;
            last = next;
            for &vertex in &active {
                if !in_order[vertex] {
                    key[vertex] += weights[next][vertex];
                }
            }
        }

        // cut of the phase: everything absorbed into `last` against the rest
        let phase_weight = key[last];
        if best.as_ref().map_or(true, |cut| phase_weight < cut.size) {
            let mut source_set = merged[last].clone();
            source_set.sort_unstable();
            let destination_set = (0..bound)
                .filter(|vertex| !source_set.contains(vertex))
                .collect();
            best = Some(Cut::new(source_set, destination_set, phase_weight));
        }

        // contract `last` into `previous` before the next phase
        for &vertex in &active {
            if vertex != last && vertex != previous {
                weights[previous][vertex] += weights[last][vertex];
                weights[vertex][previous] = weights[previous][vertex];
            }
        }
        let absorbed = std::mem::take(&mut merged[last]);
        merged[previous].extend(absorbed);
        active.retain(|&vertex| vertex != last);
    }

    Ok(best.expect("at least one phase runs"))
}

#[cfg(test)]
mod tests {
    use petgraph::graph::UnGraph;

    use crate::cuts::stoer_wagner::{global_min_cut, MinCutError};

    #[test]
    fn triangle_needs_two_edges_removed() {
        let graph = UnGraph::<(), ()>::from_edges(&[(0, 1), (0, 2), (1, 2)]);
        let cut = global_min_cut(&graph).unwrap();
        assert_eq!(2, cut.size);
    }

    #[test]
    fn single_edge_is_a_bridge() {
        let graph = UnGraph::<(), ()>::from_edges(&[(0, 1)]);
        let cut = global_min_cut(&graph).unwrap();
        assert_eq!(1, cut.size);
        assert_eq!(1, cut.source_set.len());
        assert_eq!(1, cut.destination_set.len());
    }

    #[test]
    fn disconnected_graph_has_zero_cut() {
        let graph = UnGraph::<(), ()>::from_edges(&[(0, 1), (2, 3)]);
        let cut = global_min_cut(&graph).unwrap();
        assert_eq!(0, cut.size);
        // the partition must separate the two components
        assert!(cut.source_set == vec![0, 1] || cut.source_set == vec![2, 3]);
    }

    #[test]
    fn parallel_edges_both_count() {
        let graph = UnGraph::<(), ()>::from_edges(&[(0, 1), (0, 1)]);
        assert_eq!(2, global_min_cut(&graph).unwrap().size);
    }

    #[test]
    fn self_loop_does_not_change_the_cut() {
        let graph = UnGraph::<(), ()>::from_edges(&[(0, 0), (0, 1)]);
        assert_eq!(1, global_min_cut(&graph).unwrap().size);
    }

    #[test]
    fn bridge_between_triangles() {
        let graph = UnGraph::<(), ()>::from_edges(&[
            (0, 1),
            (1, 2),
            (2, 0),
            (3, 4),
            (4, 5),
            (5, 3),
            (2, 3),
        ]);
        let cut = global_min_cut(&graph).unwrap();
        assert_eq!(1, cut.size);
        assert!(cut.source_set == vec![0, 1, 2] || cut.source_set == vec![3, 4, 5]);
    }

    #[test]
    fn complete_graph_cuts_off_one_vertex() {
        let graph =
            UnGraph::<(), ()>::from_edges(&[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
        let cut = global_min_cut(&graph).unwrap();
        assert_eq!(3, cut.size);
        assert_eq!(1, cut.source_set.len().min(cut.destination_set.len()));
    }

    #[test]
    fn star_cuts_off_a_leaf() {
        // every leaf has degree 1, which bounds the cut from above
        let graph = UnGraph::<(), ()>::from_edges(&[(0, 1), (0, 2), (0, 3), (0, 4)]);
        assert_eq!(1, global_min_cut(&graph).unwrap().size);
    }

    #[test]
    fn value_and_partition_are_stable_across_runs() {
        let graph = UnGraph::<(), ()>::from_edges(&[(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]);
        let first = global_min_cut(&graph).unwrap();
        let second = global_min_cut(&graph).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn single_node_graph_is_rejected() {
        let mut graph = UnGraph::<(), ()>::new_undirected();
        graph.add_node(());
        assert!(matches!(
            global_min_cut(&graph),
            Err(MinCutError::TooFewNodes)
        ));
    }

    #[test]
    fn empty_graph_is_rejected() {
        let graph = UnGraph::<(), ()>::new_undirected();
        assert!(matches!(
            global_min_cut(&graph),
            Err(MinCutError::TooFewNodes)
        ));
    }
}
