use crate::{
    graph::{GraphEdge, VertexListGraph},
    observer::EdgeRelaxedObserver,
    relaxer::{Distance, DistanceRelaxer},
    types::{DistanceMap, EdgeOf, VertexOf},
};

/// Relax every edge reachable from `root`, visiting vertices in `order`.
///
/// `order` must be a topological order of `graph` that contains `root`.
/// Vertices ahead of `root` cannot be reached from it and are skipped.
/// Every vertex is finalized by the time it is visited, so each of its
/// outgoing edges is relaxed exactly once, against its optimal distance.
pub(crate) fn relax_in_order<G, W, R, D, O>(
    graph: &G,
    order: &[VertexOf<G>],
    root: VertexOf<G>,
    weight: &W,
    relaxer: &R,
    observer: &mut O,
    distances: &mut DistanceMap<VertexOf<G>, D>,
) where
    G: VertexListGraph,
    W: Fn(&EdgeOf<G>) -> D,
    R: DistanceRelaxer<D>,
    D: Distance,
    O: EdgeRelaxedObserver<EdgeOf<G>> + ?Sized,
{
    distances.clear();
    distances.insert(root, relaxer.root_distance());

    let start = order
        .iter()
        .position(|&vertex| vertex == root)
        .unwrap_or(order.len());
    for &source in &order[start..] {
        let Some(&source_distance) = distances.get(&source) else {
            // Not reachable from the root.
            continue;
        };
        for edge in graph.out_edges(source) {
            let target = edge.target();
            let candidate = relaxer.combine(source_distance, weight(edge));
            let improves = distances
                .get(&target)
                .is_none_or(|&current| relaxer.is_better(candidate, current));
            if !improves {
                continue;
            }
            tracing::trace!(?source, ?target, ?candidate, "edge relaxed");
            distances.insert(target, candidate);
            observer.on_edge_relaxed(edge);
        }
    }
}
