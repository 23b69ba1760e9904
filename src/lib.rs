//! Single-source shortest and critical paths over directed acyclic graphs.
//!
//! This crate provides one traversal engine for DAGs, parameterized by a
//! distance relaxer. It:
//! - Orders all vertices topologically and rejects graphs with cycle(s)
//!   before any edge is relaxed.
//! - Relaxes outgoing edges in that order, so each vertex is final when it
//!   is visited and every edge is examined once.
//! - Reports every accepted relaxation to an observer, which is how
//!   predecessor edges (and therefore paths) are recorded.
//!
//! Key modules:
//! - `graph`: the read-only graph contract (`VertexListGraph`, `GraphEdge`)
//!   and the `AdjacencyGraph` container.
//! - `relaxer`: the `DistanceRelaxer` algebra with shortest and critical
//!   variants.
//! - `algorithm`: `DagShortestPath`, topological sorting with cycle
//!   detection, and parallel computation from every root.
//! - `observer`: the relaxation observer interface, scoped attachment and
//!   the predecessor recorder.
//! - `config`: runtime options.
//! - `types`: map aliases shared across the crate.
//!
//! Quick start:
//! 1. Build a graph, e.g. `AdjacencyGraph` from an iterator of `Edge`s.
//! 2. Create `DagShortestPath::new(&graph, |edge| weight, relaxer)`.
//! 3. Attach a `VertexPredecessorRecorder` with `attach` and call
//!    `compute(root)` on the scope; read `distances` and `path_to`
//!    afterwards.
//!
//! ```
//! use dagp::{
//!     algorithm::DagShortestPath,
//!     graph::{AdjacencyGraph, Edge},
//!     observer::VertexPredecessorRecorder,
//!     relaxer::CriticalDistanceRelaxer,
//! };
//!
//! let graph: AdjacencyGraph<char> = [
//!     Edge::new('a', 'b'),
//!     Edge::new('b', 'c'),
//!     Edge::new('a', 'c'),
//! ]
//! .into_iter()
//! .collect();
//! let mut algo = DagShortestPath::new(&graph, |_: &Edge<char>| 1, CriticalDistanceRelaxer);
//! let mut predecessors = VertexPredecessorRecorder::new();
//! algo.attach(&mut predecessors).compute('a')?;
//!
//! assert_eq!(algo.distance('c'), Some(2));
//! assert_eq!(predecessors.path_to('c').map(|path| path.len()), Some(2));
//! # Ok::<(), dagp::algorithm::DagPathError>(())
//! ```

/// Path algorithms over DAGs.
///
/// Contains `DagShortestPath` with its state machine and error type, the
/// topological sort it relies on, and `compute_from_every_root`.
pub mod algorithm;
/// Runtime options for the path algorithms.
pub mod config;
/// Graph contract consumed by the algorithms and a ready-made container.
pub mod graph;
/// Observers of edge relaxations and their scoped attachment.
pub mod observer;
/// Distance algebra: what a path is worth and which path wins.
pub mod relaxer;
/// Map and associated-type aliases.
pub mod types;
mod utils;
