//! Dijkstra single-source shortest paths over non-negative weights.
//!
//! Binary min-heap keyed by `(distance, vertex id)` with lazy deletion:
//! a vertex may sit in the heap several times and stale entries are skipped
//! when popped. O((V + E) log V).

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::error::Result;
use crate::graph::{Graph, VertexId, Weight};
use crate::traversal::TraversalResult;

/// Heap entry ordered by distance, then vertex id, so extraction order among
/// equal distances is reproducible.
#[derive(Debug, Clone, Copy)]
struct HeapEntry {
    distance: Weight,
    vertex: VertexId,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// Shortest weighted distances from `source` to every vertex.
///
/// A vertex's predecessor only changes on a strict improvement, so among
/// equal-cost routes the one relaxed first keeps the vertex. Weights are
/// non-negative by construction (`Graph::insert_edge` rejects the rest).
#[tracing::instrument(
    skip(graph),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count())
)]
pub fn dijkstra(graph: &Graph, source: VertexId) -> Result<TraversalResult> {
    graph.check_vertex(source)?;

    let mut result = TraversalResult::new(graph.vertex_count(), source);
    let mut settled = vec![false; graph.vertex_count()];
    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();
    heap.push(Reverse(HeapEntry {
        distance: 0.0,
        vertex: source,
    }));

    let mut stale = 0usize;

    while let Some(Reverse(HeapEntry { distance, vertex })) = heap.pop() {
        let current = vertex as usize;
        if settled[current] || distance > result.distances[current] {
            stale += 1;
            continue;
        }
        settled[current] = true;

        for edge in graph.adjacency_of(vertex) {
            let target = edge.target as usize;
            if settled[target] {
                continue;
            }

            let candidate = distance + edge.weight;
            if candidate < result.distances[target] {
                result.distances[target] = candidate;
                result.predecessors[target] = Some(vertex);
                heap.push(Reverse(HeapEntry {
                    distance: candidate,
                    vertex: edge.target,
                }));
            }
        }
    }

    tracing::debug!(
        reached = result.reached_count(),
        stale_entries = stale,
        "dijkstra complete"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;
    use crate::traversal::bfs;

    const A: VertexId = 0;
    const B: VertexId = 1;
    const C: VertexId = 2;
    const D: VertexId = 3;
    const E: VertexId = 4;

    /// Five-station network: A–B(1), A–D(3), B–E(3), B–C(4), D–E(2), E–C(3).
    fn make_stations() -> Graph {
        let mut g = Graph::new(5, false, true).unwrap();
        for (u, v, w) in [
            (A, B, 1.0),
            (A, D, 3.0),
            (B, E, 3.0),
            (B, C, 4.0),
            (D, E, 2.0),
            (E, C, 3.0),
        ] {
            g.insert_edge(u, v, Some(w)).unwrap();
        }
        g
    }

    fn path_weight(g: &Graph, path: &[VertexId]) -> Weight {
        path.windows(2)
            .map(|w| {
                g.adjacency_of(w[0])
                    .iter()
                    .find(|e| e.target == w[1])
                    .map(|e| e.weight)
                    .unwrap()
            })
            .sum()
    }

    #[test]
    fn test_dijkstra_stations() {
        let g = make_stations();
        let r = dijkstra(&g, A).unwrap();

        assert_eq!(r.distance(A), Some(0.0));
        assert_eq!(r.distance(B), Some(1.0));
        assert_eq!(r.distance(D), Some(3.0));
        assert_eq!(r.distance(E), Some(4.0));
        // A→B→C (1 + 4) beats A→B→E→C (7) and A→D→E→C (8)
        assert_eq!(r.distance(C), Some(5.0));
        assert_eq!(r.path_to(C), vec![A, B, C]);
        assert_eq!(r.path_to(E), vec![A, B, E]);
    }

    #[test]
    fn test_dijkstra_path_weights_sum_to_distance() {
        let g = make_stations();
        for s in 0..5 {
            let r = dijkstra(&g, s).unwrap();
            for t in 0..5 {
                let path = r.path_to(t);
                assert_eq!(path.first(), Some(&s));
                assert_eq!(path.last(), Some(&t));
                assert_eq!(path_weight(&g, &path), r.distance(t).unwrap());
            }
        }
    }

    #[test]
    fn test_dijkstra_prefers_light_detour() {
        let mut g = Graph::new(3, false, true).unwrap();
        g.insert_edge(0, 1, Some(10.0)).unwrap();
        g.insert_edge(0, 2, Some(1.0)).unwrap();
        g.insert_edge(2, 1, Some(2.0)).unwrap();
        let r = dijkstra(&g, 0).unwrap();
        assert_eq!(r.distance(1), Some(3.0));
        assert_eq!(r.path_to(1), vec![0, 2, 1]);
    }

    #[test]
    fn test_dijkstra_directed() {
        let mut g = Graph::new(3, true, true).unwrap();
        g.insert_edge(0, 1, Some(1.0)).unwrap();
        g.insert_edge(1, 2, Some(1.0)).unwrap();
        g.insert_edge(2, 0, Some(1.0)).unwrap();

        let r = dijkstra(&g, 1).unwrap();
        assert_eq!(r.distance(0), Some(2.0));
        assert_eq!(r.path_to(0), vec![1, 2, 0]);
    }

    #[test]
    fn test_dijkstra_unreachable() {
        let mut g = Graph::new(4, false, true).unwrap();
        g.insert_edge(0, 1, Some(2.0)).unwrap();
        g.insert_edge(2, 3, Some(2.0)).unwrap();
        let r = dijkstra(&g, 0).unwrap();
        assert!(r.distances[2].is_infinite());
        assert!(r.distances[3].is_infinite());
        assert_eq!(r.predecessor(3), None);
        assert!(r.path_to(3).is_empty());
        assert_eq!(r.reached_count(), 2);
    }

    #[test]
    fn test_dijkstra_zero_weight_edges() {
        let mut g = Graph::new(3, false, true).unwrap();
        g.insert_edge(0, 1, Some(0.0)).unwrap();
        g.insert_edge(1, 2, Some(0.0)).unwrap();
        let r = dijkstra(&g, 0).unwrap();
        assert_eq!(r.distance(2), Some(0.0));
        assert_eq!(r.path_to(2), vec![0, 1, 2]);
    }

    #[test]
    fn test_dijkstra_equal_cost_tie_is_deterministic() {
        // Square 0-1-3 and 0-2-3, all weights 1: 1 is popped before 2
        // (same distance, lower id) and relaxes 3 first.
        let mut g = Graph::new(4, false, true).unwrap();
        g.insert_edge(0, 2, Some(1.0)).unwrap();
        g.insert_edge(0, 1, Some(1.0)).unwrap();
        g.insert_edge(2, 3, Some(1.0)).unwrap();
        g.insert_edge(1, 3, Some(1.0)).unwrap();

        let first = dijkstra(&g, 0).unwrap();
        assert_eq!(first.path_to(3), vec![0, 1, 3]);
        for _ in 0..5 {
            assert_eq!(dijkstra(&g, 0).unwrap(), first);
        }
    }

    #[test]
    fn test_dijkstra_matches_bfs_on_unit_weights() {
        let mut g = Graph::new(8, false, false).unwrap();
        for (u, v) in [(0, 1), (1, 2), (2, 3), (3, 4), (0, 5), (5, 4), (4, 6), (6, 7), (2, 7)] {
            g.insert_edge(u, v, None).unwrap();
        }
        for s in 0..8 {
            assert_eq!(dijkstra(&g, s).unwrap().distances, bfs(&g, s).unwrap().distances);
        }
    }

    #[test]
    fn test_dijkstra_source_out_of_range() {
        let g = make_stations();
        assert!(matches!(
            dijkstra(&g, 9),
            Err(GraphError::VertexOutOfRange { vertex: 9, .. })
        ));
    }
}
