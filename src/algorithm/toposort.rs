use crate::{
    graph::{GraphEdge, VertexListGraph},
    types::{HashMap, VertexOf},
};
use rustc_hash::FxBuildHasher;
use std::collections::VecDeque;
use thiserror::Error;

/// Error kind for topological sort failures.
///
/// Currently indicates that the graph contains cycle(s), making it
/// impossible to derive a valid topological ordering.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TopologicalSortError {
    /// The graph contains cycle(s). `unsorted` vertices lie on or behind a
    /// cycle and could not be placed.
    #[error("graph contains cycle(s): {unsorted} of {total} vertices could not be ordered")]
    Cycle {
        /// Vertices left without a position.
        unsorted: usize,
        /// Vertices in the graph.
        total: usize,
    },
}

/// Order every vertex of `graph` so that each edge points forward.
///
/// Vertices without incoming edges are emitted in the graph's vertex order,
/// which makes the result deterministic for insertion-ordered graphs.
///
/// # Errors
/// [`TopologicalSortError::Cycle`] if the graph contains a cycle anywhere,
/// whether or not it is reachable from a particular vertex.
pub fn topological_sort<G: VertexListGraph>(
    graph: &G,
) -> Result<Vec<VertexOf<G>>, TopologicalSortError> {
    // Example:
    //
    //   A     B
    //    \   /
    //      C
    //      |
    //      D
    //
    // - in_degree: A = 0, B = 0, C = 2, D = 1.
    // - Roots A, B are queued first in vertex order.
    // - C is queued once both A and B have been emitted, then D.
    //
    // Phase 1: Count incoming edges per vertex. Parallel edges count
    // separately and are released separately.
    let total = graph.vertex_count();
    let mut in_degree: HashMap<VertexOf<G>, usize> =
        HashMap::with_capacity_and_hasher(total, FxBuildHasher);
    for vertex in graph.vertices() {
        in_degree.entry(vertex).or_insert(0);
        for edge in graph.out_edges(vertex) {
            *in_degree.entry(edge.target()).or_insert(0) += 1;
        }
    }

    // Phase 2: Seed the queue with vertices that have no parents.
    let mut ready: VecDeque<_> = graph
        .vertices()
        .filter(|vertex| in_degree[vertex] == 0)
        .collect();

    // Phase 3: Kahn's processing. Emitting a vertex releases one incoming
    // edge of each child; a child becomes ready when its count drops to zero.
    let mut order = Vec::with_capacity(total);
    while let Some(vertex) = ready.pop_front() {
        order.push(vertex);
        for edge in graph.out_edges(vertex) {
            let child = edge.target();
            let Some(count) = in_degree.get_mut(&child) else {
                continue;
            };
            *count -= 1;
            if *count == 0 {
                ready.push_back(child);
            }
        }
    }

    // Vertices on a cycle (and everything downstream of one) never reach an
    // in-degree of zero.
    if order.len() != in_degree.len() {
        let unsorted = in_degree.len() - order.len();
        tracing::debug!(unsorted, total, "topological sort found a cycle");
        return Err(TopologicalSortError::Cycle {
            unsorted,
            total: in_degree.len(),
        });
    }
    Ok(order)
}

/// Whether `graph` has no directed cycle.
pub fn is_directed_acyclic_graph<G: VertexListGraph>(graph: &G) -> bool {
    topological_sort(graph).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{AdjacencyGraph, Edge};

    fn position(order: &[char], vertex: char) -> usize {
        order.iter().position(|&v| v == vertex).unwrap()
    }

    #[test]
    fn diamond_respects_edges() {
        let graph: AdjacencyGraph<char> = [
            Edge::new('C', 'D'),
            Edge::new('A', 'C'),
            Edge::new('B', 'C'),
        ]
        .into_iter()
        .collect();
        let order = topological_sort(&graph).unwrap();
        assert_eq!(order.len(), 4);
        for edge in graph.edges() {
            assert!(position(&order, edge.source) < position(&order, edge.target));
        }
    }

    #[test]
    fn parallel_edges_release_once_each() {
        let graph: AdjacencyGraph<u8> = [Edge::new(1, 2), Edge::new(1, 2), Edge::new(2, 3)]
            .into_iter()
            .collect();
        assert_eq!(topological_sort(&graph).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn cycle_unreachable_from_first_root_is_reported() {
        let graph: AdjacencyGraph<u8> = [
            Edge::new(0, 1),
            Edge::new(2, 3),
            Edge::new(3, 4),
            Edge::new(4, 2),
            Edge::new(4, 5),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            topological_sort(&graph),
            Err(TopologicalSortError::Cycle {
                unsorted: 4,
                total: 6
            })
        );
        assert!(!is_directed_acyclic_graph(&graph));
    }

    #[test]
    fn self_loop_is_a_cycle() {
        let graph: AdjacencyGraph<u8> = std::iter::once(Edge::new(7, 7)).collect();
        assert!(!is_directed_acyclic_graph(&graph));
    }

    #[test]
    fn empty_graph_is_acyclic() {
        let graph = AdjacencyGraph::<u8>::new();
        assert_eq!(topological_sort(&graph), Ok(vec![]));
    }
}
