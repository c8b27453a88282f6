//! railgraph-core: adjacency-list graph engine for transit networks.
//!
//! A pure Rust library with a fixed-size, index-addressed graph and the
//! classical algorithms journey planners are built on: BFS for fewest
//! stops, Dijkstra for fastest journeys, and Kruskal (over a union-find)
//! for the minimum spanning backbone of a network.
//!
//! Vertices are dense integer ids `0..vertex_count`. Mapping station names
//! to ids is left to the caller. Every algorithm borrows the graph
//! read-only and returns a fresh result, so concurrent calls on a shared
//! graph need no synchronization.

mod dijkstra;
mod disjoint_set;
mod error;
mod graph;
mod impact;
mod mst;
mod traversal;

pub use dijkstra::dijkstra;
pub use error::{GraphError, Result};
pub use graph::{Edge, EdgeRecord, Graph, VertexId, Weight, MAX_VERTICES, UNIT_WEIGHT};
pub use impact::{compare_routes, Route, RouteComparison};
pub use mst::{connected_components, kruskal, redundant_edges, total_weight};
pub use traversal::{bfs, reconstruct_path, TraversalResult};
