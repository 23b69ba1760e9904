#![allow(dead_code)]

use dagp::{
    algorithm::DagShortestPath,
    graph::{AdjacencyGraph, Edge, VertexListGraph},
    observer::VertexPredecessorRecorder,
    relaxer::DistanceRelaxer,
    types::IndexMap,
};
use tracing_subscriber::EnvFilter;

pub type Graph = AdjacencyGraph<&'static str>;
pub type WeightedGraph = AdjacencyGraph<u8, Edge<u8, i64>>;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn graph(edges: &[(&'static str, &'static str)]) -> Graph {
    edges.iter().map(|&(s, t)| Edge::new(s, t)).collect()
}

pub fn unit(_: &Edge<&'static str>) -> i32 {
    1
}

/// A->B, B->C, A->C.
pub fn triangle() -> Graph {
    graph(&[("A", "B"), ("B", "C"), ("A", "C")])
}

/// The file dependency graph from the Boost Graph Library examples.
pub fn file_dependency() -> Graph {
    graph(&[
        ("dax.h", "foo.cpp"),
        ("dax.h", "bar.cpp"),
        ("dax.h", "yow.h"),
        ("yow.h", "bar.cpp"),
        ("yow.h", "zag.cpp"),
        ("boz.h", "bar.cpp"),
        ("boz.h", "zig.cpp"),
        ("boz.h", "zag.cpp"),
        ("zow.h", "foo.cpp"),
        ("foo.cpp", "foo.o"),
        ("foo.o", "libfoobar.a"),
        ("bar.cpp", "bar.o"),
        ("bar.o", "libfoobar.a"),
        ("libfoobar.a", "libzigzag.a"),
        ("zig.cpp", "zig.o"),
        ("zig.o", "libzigzag.a"),
        ("zag.cpp", "zag.o"),
        ("zag.o", "libzigzag.a"),
        ("libzigzag.a", "killerapp"),
    ])
}

pub fn distances<const N: usize>(entries: [(&'static str, i32); N]) -> IndexMap<&'static str, i32> {
    entries.into_iter().collect()
}

/// Compute from `root` with a predecessor recorder attached and check that
/// every recorded edge explains its target's distance.
pub fn search<R>(
    graph: &Graph,
    root: &'static str,
    relaxer: R,
) -> (
    IndexMap<&'static str, i32>,
    VertexPredecessorRecorder<&'static str, Edge<&'static str>>,
)
where
    R: DistanceRelaxer<i32>,
{
    let mut algo = DagShortestPath::new(graph, unit, relaxer);
    let mut predecessors = VertexPredecessorRecorder::new();
    algo.attach(&mut predecessors)
        .compute(root)
        .expect("graph is acyclic");
    verify(&algo, &predecessors);
    (algo.distances().clone(), predecessors)
}

fn verify<W, R>(
    algo: &DagShortestPath<'_, Graph, W, R, i32>,
    predecessors: &VertexPredecessorRecorder<&'static str, Edge<&'static str>>,
) where
    W: Fn(&Edge<&'static str>) -> i32,
    R: DistanceRelaxer<i32>,
{
    for vertex in algo.graph().vertices() {
        let Some(edge) = predecessors.predecessor(vertex) else {
            continue;
        };
        assert_eq!(
            algo.distance(vertex),
            algo.distance(edge.source).map(|d| d + 1),
            "predecessor {edge:?} does not explain the distance of {vertex}"
        );
    }
}

/// Best path weight from `root` to every reachable vertex, by enumerating
/// every path.
pub fn enumerate_best<R>(graph: &WeightedGraph, root: u8, relaxer: &R) -> IndexMap<u8, i64>
where
    R: DistanceRelaxer<i64>,
{
    fn walk<R: DistanceRelaxer<i64>>(
        graph: &WeightedGraph,
        vertex: u8,
        distance: i64,
        relaxer: &R,
        best: &mut IndexMap<u8, i64>,
    ) {
        let improves = best
            .get(&vertex)
            .is_none_or(|&current| relaxer.is_better(distance, current));
        if improves {
            best.insert(vertex, distance);
        }
        for edge in graph.out_edges(vertex) {
            walk(graph, edge.target, distance + edge.payload, relaxer, best);
        }
    }

    let mut best = IndexMap::default();
    walk(graph, root, 0, relaxer, &mut best);
    best
}
