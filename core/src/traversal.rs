use std::collections::VecDeque;

use crate::error::Result;
use crate::graph::{Graph, VertexId, Weight};

/// Per-vertex output of a single-source search (BFS or Dijkstra).
///
/// `distances[v]` is the hop count (BFS) or summed weight (Dijkstra) of the
/// shortest path found, `f64::INFINITY` if `v` was not reached.
/// `predecessors[v]` is the previous vertex on that path; `None` for the
/// source and for unreached vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct TraversalResult {
    pub source: VertexId,
    pub distances: Vec<Weight>,
    pub predecessors: Vec<Option<VertexId>>,
}

impl TraversalResult {
    /// Fresh result for `vertex_count` vertices with only the source settled.
    pub(crate) fn new(vertex_count: usize, source: VertexId) -> Self {
        let mut distances = vec![Weight::INFINITY; vertex_count];
        distances[source as usize] = 0.0;
        Self {
            source,
            distances,
            predecessors: vec![None; vertex_count],
        }
    }

    /// Distance to `vertex`, `None` if unreached or out of range.
    pub fn distance(&self, vertex: VertexId) -> Option<Weight> {
        self.distances
            .get(vertex as usize)
            .copied()
            .filter(|d| d.is_finite())
    }

    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.distance(vertex).is_some()
    }

    pub fn predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.predecessors.get(vertex as usize).copied().flatten()
    }

    /// Shortest path from the source to `vertex`, empty if unreached.
    pub fn path_to(&self, vertex: VertexId) -> Vec<VertexId> {
        reconstruct_path(&self.predecessors, self.source, vertex)
    }

    /// Number of vertices with a finite distance (the source included).
    pub fn reached_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_finite()).count()
    }
}

/// Walk predecessor links from `target` back to `source`.
///
/// Returns the path in source → target order. `[source]` when
/// `target == source`; empty when the chain from `target` does not end at
/// `source` (target unreached, or ids out of range). The walk is bounded by
/// the array length, so a malformed predecessor array cannot loop forever.
pub fn reconstruct_path(
    predecessors: &[Option<VertexId>],
    source: VertexId,
    target: VertexId,
) -> Vec<VertexId> {
    if (source as usize) >= predecessors.len() || (target as usize) >= predecessors.len() {
        return Vec::new();
    }

    let mut path = vec![target];
    let mut current = target;

    while current != source {
        if path.len() > predecessors.len() {
            return Vec::new();
        }
        match predecessors.get(current as usize).copied().flatten() {
            Some(parent) => {
                path.push(parent);
                current = parent;
            }
            None => return Vec::new(),
        }
    }

    path.reverse();
    path
}

/// Breadth-first search from `source`: fewest-hops distances.
///
/// Neighbors are explored in adjacency insertion order and the queue is
/// FIFO, so the first discovery of a vertex is along a shortest path and
/// ties between equal-length paths resolve the same way on every run.
///
/// Edge weights are ignored; every edge counts as one hop.
#[tracing::instrument(
    skip(graph),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count())
)]
pub fn bfs(graph: &Graph, source: VertexId) -> Result<TraversalResult> {
    graph.check_vertex(source)?;

    let mut result = TraversalResult::new(graph.vertex_count(), source);
    let mut queue: VecDeque<VertexId> = VecDeque::new();
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        let next_distance = result.distances[current as usize] + 1.0;

        for edge in graph.adjacency_of(current) {
            let target = edge.target as usize;
            if result.distances[target].is_infinite() {
                result.distances[target] = next_distance;
                result.predecessors[target] = Some(current);
                queue.push_back(edge.target);
            }
        }
    }

    tracing::debug!(reached = result.reached_count(), "bfs complete");
    Ok(result)
}
