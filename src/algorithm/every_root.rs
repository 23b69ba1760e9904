use crate::{
    algorithm::{DagPathError, relax::relax_in_order, toposort::topological_sort},
    graph::VertexListGraph,
    observer::VertexPredecessorRecorder,
    relaxer::{Distance, DistanceRelaxer},
    types::{DistanceMap, EdgeOf, IndexMap, VertexOf},
    utils::RangeSplitAtHalf,
};
use core::ops::Range;

/// Result of one single-source computation.
#[derive(Debug, Clone)]
pub struct RootPaths<V, E, D> {
    /// Best distance per reached vertex.
    pub distances: DistanceMap<V, D>,
    /// Best incoming edge per reached vertex other than the root.
    pub predecessors: VertexPredecessorRecorder<V, E>,
}

/// Compute best paths from every vertex of `graph`.
///
/// The graph is sorted once; the per-root computations then run in
/// parallel, each with its own distance map and predecessor recorder, while
/// the graph, the order, `weight` and `relaxer` are shared read-only. The
/// result is keyed by root in topological order.
///
/// # Errors
/// [`DagPathError::CyclicGraph`] if the graph contains a cycle. Reported
/// once for the whole graph; no root is computed.
#[tracing::instrument(level = "debug", skip_all, fields(vertices = graph.vertex_count()))]
pub fn compute_from_every_root<G, W, R, D>(
    graph: &G,
    weight: W,
    relaxer: R,
) -> Result<IndexMap<VertexOf<G>, RootPaths<VertexOf<G>, EdgeOf<G>, D>>, DagPathError>
where
    G: VertexListGraph + Sync,
    VertexOf<G>: Send + Sync,
    EdgeOf<G>: Clone + Send,
    W: Fn(&EdgeOf<G>) -> D + Sync,
    R: DistanceRelaxer<D> + Sync,
    D: Distance + Send,
{
    let order = topological_sort(graph)?;
    let job = EveryRootJob {
        graph,
        order: &order,
        weight: &weight,
        relaxer: &relaxer,
    };
    let mut results = Vec::with_capacity(order.len());
    job.join_roots(0..order.len(), &mut results);
    Ok(results.into_iter().collect())
}

struct EveryRootJob<'a, G: VertexListGraph, W, R> {
    graph: &'a G,
    order: &'a [VertexOf<G>],
    weight: &'a W,
    relaxer: &'a R,
}

impl<G, W, R> EveryRootJob<'_, G, W, R>
where
    G: VertexListGraph + Sync,
    VertexOf<G>: Send + Sync,
    EdgeOf<G>: Clone + Send,
{
    /// Appends the results for `roots` (indexes into the order) to `out`,
    /// preserving order.
    fn join_roots<D>(
        &self,
        roots: Range<usize>,
        out: &mut Vec<(VertexOf<G>, RootPaths<VertexOf<G>, EdgeOf<G>, D>)>,
    ) where
        W: Fn(&EdgeOf<G>) -> D + Sync,
        R: DistanceRelaxer<D> + Sync,
        D: Distance + Send,
    {
        match roots.len() {
            0 => return,
            1 => {
                let root = self.order[roots.start];
                out.push((root, self.single_root(root)));
                return;
            }
            _ => {}
        }
        let (left_range, right_range) = roots.split_at_half();
        let mut right = Vec::with_capacity(right_range.len());
        rayon::join(
            || self.join_roots(left_range, out),
            || self.join_roots(right_range, &mut right),
        );
        out.append(&mut right);
    }

    fn single_root<D>(&self, root: VertexOf<G>) -> RootPaths<VertexOf<G>, EdgeOf<G>, D>
    where
        W: Fn(&EdgeOf<G>) -> D,
        R: DistanceRelaxer<D>,
        D: Distance,
    {
        let mut distances = DistanceMap::default();
        let mut predecessors = VertexPredecessorRecorder::new();
        relax_in_order(
            self.graph,
            self.order,
            root,
            self.weight,
            self.relaxer,
            &mut predecessors,
            &mut distances,
        );
        RootPaths {
            distances,
            predecessors,
        }
    }
}
