mod every_root;
mod relax;
mod toposort;

pub use crate::algorithm::{
    every_root::{RootPaths, compute_from_every_root},
    toposort::{TopologicalSortError, is_directed_acyclic_graph, topological_sort},
};
use crate::{
    algorithm::relax::relax_in_order,
    config::DagPathConfig,
    graph::VertexListGraph,
    observer::{EdgeRelaxedObserver, ObserverScope},
    relaxer::{Distance, DistanceRelaxer},
    types::{DistanceMap, EdgeOf, VertexOf},
};
use derive_more::Debug;
use thiserror::Error;

/// Error returned by [`DagShortestPath::compute`].
///
/// The graph is checked as a whole: a cycle anywhere fails the computation
/// for every root, including roots that cannot reach the cycle.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DagPathError {
    /// The graph is not a directed acyclic graph.
    #[error("graph is not acyclic")]
    CyclicGraph(#[from] TopologicalSortError),
}

/// Lifecycle of the most recent computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ComputeState {
    /// No computation has run since construction or [`DagShortestPath::reset`].
    #[default]
    NotStarted,
    /// The topological order is known and edges are being relaxed.
    Relaxing,
    /// Every vertex reachable from the root has its final distance.
    Done,
    /// The graph contains a cycle. No distances are available.
    Failed,
}

/// Single-source path search over a directed acyclic graph.
///
/// Vertices are visited in topological order, so every vertex is final by
/// the time its outgoing edges are relaxed. The relaxer decides what "best"
/// means: [`ShortestDistanceRelaxer`](crate::relaxer::ShortestDistanceRelaxer)
/// yields minimum-weight paths,
/// [`CriticalDistanceRelaxer`](crate::relaxer::CriticalDistanceRelaxer)
/// maximum-weight (critical) paths.
///
/// Each `compute` call replaces the previous call's results. One instance is
/// not meant to serve interleaved computations; use one instance per thread
/// or [`compute_from_every_root`].
#[must_use]
#[derive(Debug)]
pub struct DagShortestPath<'g, G: VertexListGraph, W, R, D> {
    #[debug(skip)]
    graph: &'g G,
    #[debug(skip)]
    weight: W,
    relaxer: R,
    config: DagPathConfig,
    state: ComputeState,
    root: Option<VertexOf<G>>,
    distances: DistanceMap<VertexOf<G>, D>,
    order: Option<Result<Vec<VertexOf<G>>, TopologicalSortError>>,
}

impl<'g, G, W, R, D> DagShortestPath<'g, G, W, R, D>
where
    G: VertexListGraph,
    W: Fn(&EdgeOf<G>) -> D,
    R: DistanceRelaxer<D>,
    D: Distance,
{
    /// Algorithm over `graph` using `weight` for every edge and `relaxer`
    /// for comparison, with default options.
    pub fn new(graph: &'g G, weight: W, relaxer: R) -> Self {
        Self::with_config(graph, weight, relaxer, DagPathConfig::default())
    }

    /// Same as [`Self::new`] with explicit options.
    pub fn with_config(graph: &'g G, weight: W, relaxer: R, config: DagPathConfig) -> Self {
        Self {
            graph,
            weight,
            relaxer,
            config,
            state: ComputeState::NotStarted,
            root: None,
            distances: DistanceMap::default(),
            order: None,
        }
    }

    /// Compute best distances from `root` without an observer.
    ///
    /// # Panics
    /// If `root` is not a vertex of the graph.
    ///
    /// # Errors
    /// [`DagPathError::CyclicGraph`] if the graph contains a cycle.
    pub fn compute(&mut self, root: VertexOf<G>) -> Result<(), DagPathError> {
        self.compute_observed(root, &mut ())
    }

    /// Compute best distances from `root`, reporting every accepted
    /// relaxation to `observer`.
    ///
    /// Previous results are discarded first and the observer is told a new
    /// computation started. On failure no distance is available and the
    /// observer has received no relaxation.
    ///
    /// # Panics
    /// If `root` is not a vertex of the graph.
    ///
    /// # Errors
    /// [`DagPathError::CyclicGraph`] if the graph contains a cycle.
    #[tracing::instrument(level = "debug", skip_all, fields(root = ?root))]
    pub fn compute_observed<O>(
        &mut self,
        root: VertexOf<G>,
        observer: &mut O,
    ) -> Result<(), DagPathError>
    where
        O: EdgeRelaxedObserver<EdgeOf<G>> + ?Sized,
    {
        assert!(
            self.graph.contains_vertex(root),
            "Root {root:?} is not a vertex of the graph"
        );
        self.distances.clear();
        self.root = Some(root);
        self.state = ComputeState::NotStarted;
        observer.on_compute_started();

        if let Err(err) = self.ensure_order() {
            self.state = ComputeState::Failed;
            tracing::debug!(%err, "cannot compute paths on a cyclic graph");
            return Err(err.into());
        }
        let Self {
            graph,
            weight,
            relaxer,
            config,
            state,
            root: _,
            distances,
            order,
        } = self;
        let Some(Ok(sorted)) = order.as_ref() else {
            unreachable!("DagShortestPath::compute_observed: order was just ensured");
        };

        *state = ComputeState::Relaxing;
        relax_in_order(*graph, sorted, root, weight, relaxer, observer, distances);
        *state = ComputeState::Done;
        tracing::debug!(reached = distances.len(), "paths computed");

        if !config.cache_topological_order {
            *order = None;
        }
        Ok(())
    }

    /// Attach `observer` for the single computation run through the
    /// returned scope. The observer is detached when that computation
    /// returns, or when the scope is dropped without computing.
    pub fn attach<'s, O>(&'s mut self, observer: &'s mut O) -> ObserverScope<'s, Self, O>
    where
        O: EdgeRelaxedObserver<EdgeOf<G>> + ?Sized,
    {
        tracing::trace!("observer attached");
        ObserverScope {
            algorithm: self,
            observer,
        }
    }

    /// Forget the last computation. A cached topological order is kept.
    pub fn reset(&mut self) {
        self.distances.clear();
        self.root = None;
        self.state = ComputeState::NotStarted;
    }

    fn ensure_order(&mut self) -> Result<(), TopologicalSortError> {
        match &self.order {
            Some(cached) => {
                tracing::debug!("reusing cached topological order");
                cached.as_ref().map(|_| ()).map_err(Clone::clone)
            }
            None => {
                let sorted = topological_sort(self.graph);
                if let Ok(order) = &sorted {
                    tracing::debug!(vertices = order.len(), "topological order computed");
                }
                let result = sorted.as_ref().map(|_| ()).map_err(Clone::clone);
                if self.config.cache_topological_order || result.is_ok() {
                    self.order = Some(sorted);
                }
                result
            }
        }
    }
}

impl<G, W, R, D> DagShortestPath<'_, G, W, R, D>
where
    G: VertexListGraph,
    R: DistanceRelaxer<D>,
    D: Distance,
{
    /// Graph being searched.
    #[must_use]
    pub fn graph(&self) -> &G {
        self.graph
    }

    /// Relaxer in use.
    #[must_use]
    pub fn relaxer(&self) -> &R {
        &self.relaxer
    }

    /// Options in use.
    #[must_use]
    pub fn config(&self) -> DagPathConfig {
        self.config
    }

    /// State of the last computation.
    #[must_use]
    pub fn state(&self) -> ComputeState {
        self.state
    }

    /// Root of the last computation.
    #[must_use]
    pub fn root(&self) -> Option<VertexOf<G>> {
        self.root
    }

    /// Best distance per reached vertex. Vertices that cannot be reached
    /// from the root have no entry.
    #[must_use]
    pub fn distances(&self) -> &DistanceMap<VertexOf<G>, D> {
        &self.distances
    }

    /// Best distance to `vertex`, if it was reached.
    #[must_use]
    pub fn distance(&self, vertex: VertexOf<G>) -> Option<D> {
        self.distances.get(&vertex).copied()
    }

    /// Best distance to `vertex`, or the relaxer's initial distance
    /// (`+inf` for shortest, `-inf` for critical paths) if unreached.
    ///
    /// For unsigned distances the critical initial distance is `0`, the
    /// same as the root's, so an unreached vertex cannot be told apart from
    /// the root here. Use [`Self::distance`] or [`Self::is_reachable`].
    #[must_use]
    pub fn distance_or_initial(&self, vertex: VertexOf<G>) -> D {
        self.distance(vertex)
            .unwrap_or_else(|| self.relaxer.initial_distance())
    }

    /// Whether the last computation reached `vertex`.
    #[must_use]
    pub fn is_reachable(&self, vertex: VertexOf<G>) -> bool {
        self.distances.contains_key(&vertex)
    }

    /// Topological order of the graph, if it is currently cached.
    #[must_use]
    pub fn topological_order(&self) -> Option<&[VertexOf<G>]> {
        match &self.order {
            Some(Ok(order)) => Some(order.as_slice()),
            _ => None,
        }
    }
}

impl<G, W, R, D, O> ObserverScope<'_, DagShortestPath<'_, G, W, R, D>, O>
where
    G: VertexListGraph,
    W: Fn(&EdgeOf<G>) -> D,
    R: DistanceRelaxer<D>,
    D: Distance,
    O: EdgeRelaxedObserver<EdgeOf<G>> + ?Sized,
{
    /// Run [`DagShortestPath::compute_observed`] with the attached observer,
    /// then detach it. Results are read from the algorithm afterwards.
    ///
    /// # Panics
    /// If `root` is not a vertex of the graph.
    ///
    /// # Errors
    /// [`DagPathError::CyclicGraph`] if the graph contains a cycle.
    pub fn compute(mut self, root: VertexOf<G>) -> Result<(), DagPathError> {
        self.algorithm.compute_observed(root, &mut *self.observer)
    }
}
