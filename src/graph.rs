use crate::types::IndexMap;
use core::{fmt::Debug, hash::Hash};

/// A directed edge with a source and a target vertex.
///
/// Parallel edges between the same pair of vertices are distinct edges and
/// are relaxed independently.
pub trait GraphEdge<V> {
    /// Tail of the edge.
    fn source(&self) -> V;
    /// Head of the edge.
    fn target(&self) -> V;
}

/// Read-only graph contract consumed by the path algorithms.
///
/// Implementors must enumerate every vertex exactly once and every outgoing
/// edge of a vertex exactly once. Nothing here may be mutated while a
/// computation borrows the graph.
pub trait VertexListGraph {
    /// Opaque vertex identifier used as a map key.
    type Vertex: Copy + Eq + Hash + Debug;
    /// Edge type; its source must be the vertex it is listed under.
    type Edge: GraphEdge<Self::Vertex>;

    /// Number of vertices.
    fn vertex_count(&self) -> usize;
    /// All vertices, in a stable order.
    fn vertices(&self) -> impl Iterator<Item = Self::Vertex> + '_;
    /// Outgoing edges of `vertex`. Empty for unknown vertices.
    fn out_edges(&self, vertex: Self::Vertex) -> impl Iterator<Item = &Self::Edge> + '_;
    /// Whether `vertex` belongs to the graph.
    fn contains_vertex(&self, vertex: Self::Vertex) -> bool;
}

/// Plain directed edge carrying an opaque payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge<V, P = ()> {
    /// Tail vertex.
    pub source: V,
    /// Head vertex.
    pub target: V,
    /// Caller data, e.g. a label or a weight the weight function reads.
    pub payload: P,
}

impl<V> Edge<V> {
    /// Edge without payload.
    #[must_use]
    pub const fn new(source: V, target: V) -> Self {
        Self {
            source,
            target,
            payload: (),
        }
    }
}

impl<V, P> Edge<V, P> {
    /// Edge carrying `payload`.
    #[must_use]
    pub const fn with_payload(source: V, target: V, payload: P) -> Self {
        Self {
            source,
            target,
            payload,
        }
    }
}

impl<V: Copy, P> GraphEdge<V> for Edge<V, P> {
    #[inline]
    fn source(&self) -> V {
        self.source
    }

    #[inline]
    fn target(&self) -> V {
        self.target
    }
}

/// Adjacency-list graph keeping vertices and out-edges in insertion order.
///
/// Insertion order makes vertex enumeration, and therefore topological
/// order and tie-breaking between equally good paths, deterministic.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<V, E = Edge<V>> {
    out_edges: IndexMap<V, Vec<E>>,
    edge_count: usize,
}

impl<V, E> Default for AdjacencyGraph<V, E> {
    fn default() -> Self {
        Self {
            out_edges: IndexMap::default(),
            edge_count: 0,
        }
    }
}

impl<V, E> AdjacencyGraph<V, E>
where
    V: Copy + Eq + Hash + Debug,
    E: GraphEdge<V>,
{
    /// Empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an isolated vertex. Returns `false` if it was already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.out_edges.contains_key(&vertex) {
            return false;
        }
        self.out_edges.insert(vertex, Vec::new());
        true
    }

    /// Add `edge`, adding its endpoints first if they are missing.
    pub fn add_edge(&mut self, edge: E) {
        let (source, target) = (edge.source(), edge.target());
        self.out_edges.entry(source).or_default().push(edge);
        self.add_vertex(target);
        self.edge_count += 1;
    }

    /// Number of edges, parallel edges included.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// All edges grouped by source vertex.
    pub fn edges(&self) -> impl Iterator<Item = &E> + '_ {
        self.out_edges.values().flatten()
    }
}

impl<V, E> FromIterator<E> for AdjacencyGraph<V, E>
where
    V: Copy + Eq + Hash + Debug,
    E: GraphEdge<V>,
{
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut graph = Self::new();
        for edge in iter {
            graph.add_edge(edge);
        }
        graph
    }
}

impl<V, E> VertexListGraph for AdjacencyGraph<V, E>
where
    V: Copy + Eq + Hash + Debug,
    E: GraphEdge<V>,
{
    type Vertex = V;
    type Edge = E;

    fn vertex_count(&self) -> usize {
        self.out_edges.len()
    }

    fn vertices(&self) -> impl Iterator<Item = V> + '_ {
        self.out_edges.keys().copied()
    }

    fn out_edges(&self, vertex: V) -> impl Iterator<Item = &E> + '_ {
        self.out_edges.get(&vertex).into_iter().flatten()
    }

    fn contains_vertex(&self, vertex: V) -> bool {
        self.out_edges.contains_key(&vertex)
    }
}
