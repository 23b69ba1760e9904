use crate::graph::VertexListGraph;
use indexmap::IndexMap as _IndexMap;
use rustc_hash::FxBuildHasher;
use std::collections::HashMap as _HashMap;

/// Vertex type of a graph.
pub type VertexOf<G> = <G as VertexListGraph>::Vertex;
/// Edge type of a graph.
pub type EdgeOf<G> = <G as VertexListGraph>::Edge;

/// Best known distance from the root per reached vertex.
///
/// Iteration order is the order in which vertices were first reached.
pub type DistanceMap<V, D> = IndexMap<V, D>;
/// Edge that last improved each vertex's distance.
pub type PredecessorMap<V, E> = IndexMap<V, E>;

pub(crate) type HashMap<K, V> = _HashMap<K, V, FxBuildHasher>;
/// `IndexMap` type with fast hasher.
pub type IndexMap<K, V> = _IndexMap<K, V, FxBuildHasher>;
