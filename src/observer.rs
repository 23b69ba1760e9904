use crate::{
    graph::GraphEdge,
    types::{IndexMap, PredecessorMap},
};
use core::{fmt::Debug, hash::Hash};
use derive_more::Deref;

/// Receives every accepted relaxation of a computation.
///
/// `on_edge_relaxed` is called exactly once per edge that strictly improved
/// its target's distance, in relaxation order. Rejected candidates are never
/// reported.
pub trait EdgeRelaxedObserver<E> {
    /// A computation is starting. Called once per computation, before any
    /// relaxation and before the graph is checked for cycles.
    #[inline]
    fn on_compute_started(&mut self) {}

    /// `edge` has just become the best known way into its target.
    fn on_edge_relaxed(&mut self, edge: &E);
}

/// No-op observer.
impl<E> EdgeRelaxedObserver<E> for () {
    #[inline]
    fn on_edge_relaxed(&mut self, _edge: &E) {}
}

/// Records every accepted relaxation in order.
impl<E: Clone> EdgeRelaxedObserver<E> for Vec<E> {
    fn on_edge_relaxed(&mut self, edge: &E) {
        self.push(edge.clone());
    }
}

impl<E, A, B> EdgeRelaxedObserver<E> for (A, B)
where
    A: EdgeRelaxedObserver<E>,
    B: EdgeRelaxedObserver<E>,
{
    fn on_compute_started(&mut self) {
        self.0.on_compute_started();
        self.1.on_compute_started();
    }

    fn on_edge_relaxed(&mut self, edge: &E) {
        self.0.on_edge_relaxed(edge);
        self.1.on_edge_relaxed(edge);
    }
}

impl<E, O: EdgeRelaxedObserver<E> + ?Sized> EdgeRelaxedObserver<E> for &mut O {
    #[inline]
    fn on_compute_started(&mut self) {
        (**self).on_compute_started();
    }

    #[inline]
    fn on_edge_relaxed(&mut self, edge: &E) {
        (**self).on_edge_relaxed(edge);
    }
}

/// An observer attached to an algorithm for exactly one computation.
///
/// Created by [`DagShortestPath::attach`](crate::algorithm::DagShortestPath::attach).
/// The scope holds both the algorithm and the observer exclusively, so no
/// other computation can run on the algorithm while the observer is
/// attached. `compute` consumes the scope: the observer is detached as soon
/// as that one computation returns, on success or error. The previous
/// results of the algorithm stay readable through `Deref` until then.
#[must_use]
#[derive(Debug, Deref)]
pub struct ObserverScope<'a, A, O: ?Sized> {
    #[deref(forward)]
    pub(crate) algorithm: &'a mut A,
    pub(crate) observer: &'a mut O,
}

impl<A, O: ?Sized> Drop for ObserverScope<'_, A, O> {
    fn drop(&mut self) {
        tracing::trace!("observer detached");
    }
}

/// Keeps, per vertex, the edge whose relaxation last improved it.
///
/// After a successful computation this is the shortest (or critical) path
/// tree rooted at the computation's root. Entries of earlier computations
/// are dropped when a new one starts.
#[derive(Debug, Clone)]
pub struct VertexPredecessorRecorder<V, E> {
    predecessors: PredecessorMap<V, E>,
}

impl<V, E> Default for VertexPredecessorRecorder<V, E> {
    fn default() -> Self {
        Self {
            predecessors: IndexMap::default(),
        }
    }
}

impl<V, E> VertexPredecessorRecorder<V, E>
where
    V: Copy + Eq + Hash + Debug,
    E: GraphEdge<V>,
{
    /// Empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Edge into `vertex` on its best path, if one was recorded.
    ///
    /// The root and vertices that were never reached have none.
    #[must_use]
    pub fn predecessor(&self, vertex: V) -> Option<&E> {
        self.predecessors.get(&vertex)
    }

    /// All recorded predecessor edges keyed by target vertex.
    #[must_use]
    pub fn predecessors(&self) -> &PredecessorMap<V, E> {
        &self.predecessors
    }

    /// Edges of the best path ending at `vertex`, starting from the vertex
    /// that has no predecessor (the root).
    ///
    /// Returns `None` if no predecessor was recorded for `vertex`.
    #[must_use]
    pub fn path_to(&self, vertex: V) -> Option<Vec<&E>> {
        let mut edge = self.predecessors.get(&vertex)?;
        let mut path = vec![edge];
        // Bounded so that edges recorded by hand cannot loop forever.
        while path.len() <= self.predecessors.len() {
            let Some(previous) = self.predecessors.get(&edge.source()) else {
                path.reverse();
                return Some(path);
            };
            edge = previous;
            path.push(edge);
        }
        None
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.predecessors.clear();
    }

    /// Take the recorded predecessor map.
    #[must_use]
    pub fn into_predecessors(self) -> PredecessorMap<V, E> {
        self.predecessors
    }
}

impl<V, E> EdgeRelaxedObserver<E> for VertexPredecessorRecorder<V, E>
where
    V: Copy + Eq + Hash + Debug,
    E: GraphEdge<V> + Clone,
{
    fn on_compute_started(&mut self) {
        self.predecessors.clear();
    }

    fn on_edge_relaxed(&mut self, edge: &E) {
        self.predecessors.insert(edge.target(), edge.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;

    #[test]
    fn recorder_keeps_latest_edge() {
        let mut recorder = VertexPredecessorRecorder::new();
        recorder.on_edge_relaxed(&Edge::new('a', 'c'));
        recorder.on_edge_relaxed(&Edge::new('b', 'c'));
        assert_eq!(recorder.predecessor('c'), Some(&Edge::new('b', 'c')));
        assert_eq!(recorder.predecessors().len(), 1);
    }

    #[test]
    fn path_walks_back_to_root() {
        let mut recorder = VertexPredecessorRecorder::new();
        let edges = [Edge::new(0, 1), Edge::new(1, 2), Edge::new(2, 3)];
        for edge in &edges {
            recorder.on_edge_relaxed(edge);
        }
        let path = recorder.path_to(3).unwrap();
        assert_eq!(path, edges.iter().collect::<Vec<_>>());
        assert_eq!(recorder.path_to(0), None);
    }

    #[test]
    fn corrupted_recorder_does_not_loop() {
        let mut recorder = VertexPredecessorRecorder::new();
        recorder.on_edge_relaxed(&Edge::new(0, 1));
        recorder.on_edge_relaxed(&Edge::new(1, 0));
        assert_eq!(recorder.path_to(1), None);
    }

    #[test]
    fn new_computation_clears_recorder() {
        let mut recorder = VertexPredecessorRecorder::new();
        recorder.on_edge_relaxed(&Edge::new('a', 'b'));
        recorder.on_compute_started();
        assert!(recorder.predecessors().is_empty());
        assert_eq!(recorder.path_to('b'), None);
    }

    #[test]
    fn pair_fans_out() {
        let mut pair = (Vec::new(), VertexPredecessorRecorder::new());
        pair.on_edge_relaxed(&Edge::new(1_u8, 2));
        assert_eq!(pair.0, vec![Edge::new(1, 2)]);
        assert!(pair.1.predecessor(2).is_some());

        // Only the recorder forgets; the log keeps every relaxation.
        pair.on_compute_started();
        assert_eq!(pair.0.len(), 1);
        assert!(pair.1.predecessors().is_empty());
    }
}
