//! Minimum spanning forest (Kruskal) and backbone analysis helpers.

use std::collections::HashSet;

use crate::disjoint_set::DisjointSet;
use crate::graph::{EdgeRecord, Graph, VertexId, Weight};

/// Unordered endpoint pair, lower id first.
fn endpoints(edge: &EdgeRecord) -> (VertexId, VertexId) {
    if edge.from <= edge.to {
        (edge.from, edge.to)
    } else {
        (edge.to, edge.from)
    }
}

/// Kruskal's minimum spanning forest.
///
/// Logical edges are sorted by weight, then by `(lower endpoint, higher
/// endpoint)`, and accepted whenever they join two different components.
/// Directed edges are treated as undirected connections. Self-loops never
/// qualify.
///
/// Returns a new undirected weighted graph over the same vertices: a spanning
/// tree when the input is connected, otherwise one tree per component.
/// Time: O(E log E) for sorting + O(E α(V)) for union-find.
#[tracing::instrument(
    skip(graph),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count())
)]
pub fn kruskal(graph: &Graph) -> Graph {
    let n = graph.vertex_count();

    let mut edges: Vec<EdgeRecord> = graph.edges().filter(|e| e.from != e.to).collect();
    edges.sort_by(|a, b| {
        a.weight
            .total_cmp(&b.weight)
            .then_with(|| endpoints(a).cmp(&endpoints(b)))
    });

    let mut forest = graph.empty_like(false, true);
    let mut sets = DisjointSet::new(n);
    let target = n.saturating_sub(1);

    for edge in &edges {
        if forest.edge_count() == target {
            break;
        }
        if sets.union(edge.from as usize, edge.to as usize) {
            forest.push_edge(edge.from, edge.to, edge.weight);
        }
    }

    tracing::debug!(
        accepted = forest.edge_count(),
        considered = edges.len(),
        components = sets.set_count(),
        "kruskal complete"
    );
    forest
}

/// Sum of all logical edge weights, each edge counted once.
pub fn total_weight(graph: &Graph) -> Weight {
    graph.edges().map(|e| e.weight).sum()
}

/// Edges of `graph` whose endpoints are not directly joined in `forest`.
///
/// With `forest = kruskal(graph)` these are the connections that can be
/// closed without disconnecting any station. Sorted by `(from, to)`.
pub fn redundant_edges(graph: &Graph, forest: &Graph) -> Vec<EdgeRecord> {
    let kept: HashSet<(VertexId, VertexId)> = forest.edges().map(|e| endpoints(&e)).collect();

    let mut redundant: Vec<EdgeRecord> = graph
        .edges()
        .filter(|e| !kept.contains(&endpoints(e)))
        .collect();
    redundant.sort_by_key(|e| (e.from, e.to));
    redundant
}

/// Number of connected components, ignoring edge direction.
///
/// An isolated vertex is its own component; an empty graph has none.
pub fn connected_components(graph: &Graph) -> usize {
    let mut sets = DisjointSet::new(graph.vertex_count());
    for edge in graph.edges() {
        sets.union(edge.from as usize, edge.to as usize);
    }
    sets.set_count()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 7-station network with repeated weights.
    fn make_seven() -> Graph {
        let mut g = Graph::new(7, false, true).unwrap();
        for (u, v, w) in [
            (0, 6, 1.0),
            (2, 3, 1.0),
            (1, 6, 2.0),
            (1, 2, 3.0),
            (2, 6, 3.0),
            (0, 1, 4.0),
            (3, 4, 4.0),
            (3, 6, 5.0),
            (4, 6, 5.0),
            (0, 5, 5.0),
            (4, 5, 6.0),
            (5, 6, 6.0),
        ] {
            g.insert_edge(u, v, Some(w)).unwrap();
        }
        g
    }

    fn pairs(g: &Graph) -> Vec<(VertexId, VertexId)> {
        let mut p: Vec<_> = g.edges().map(|e| endpoints(&e)).collect();
        p.sort();
        p
    }

    #[test]
    fn test_kruskal_seven_stations() {
        let g = make_seven();
        let mst = kruskal(&g);

        assert_eq!(mst.vertex_count(), 7);
        assert_eq!(mst.edge_count(), 6);
        assert!(!mst.is_directed());
        assert!(mst.is_weighted());
        assert_eq!(total_weight(&mst), 16.0);
        // 2-6 (3) ties with 1-2 (3); (1, 2) sorts first and closes the gap
        assert_eq!(pairs(&mst), vec![(0, 5), (0, 6), (1, 2), (1, 6), (2, 3), (3, 4)]);
    }

    #[test]
    fn test_kruskal_negative_zero_ties_with_zero() {
        let mut g = Graph::new(3, false, true).unwrap();
        g.insert_edge(0, 1, Some(0.0)).unwrap();
        g.insert_edge(0, 2, Some(0.0)).unwrap();
        g.insert_edge(1, 2, Some(-0.0)).unwrap();

        let mst = kruskal(&g);
        assert_eq!(pairs(&mst), vec![(0, 1), (0, 2)]);
        assert_eq!(redundant_edges(&g, &mst).len(), 1);
        assert_eq!(redundant_edges(&g, &mst)[0].from, 1);
    }

    #[test]
    fn test_kruskal_does_not_mutate_input() {
        let g = make_seven();
        let before = g.clone();
        let _ = kruskal(&g);
        assert_eq!(pairs(&g), pairs(&before));
        assert_eq!(g.edge_count(), 12);
    }

    #[test]
    fn test_kruskal_idempotent() {
        let g = make_seven();
        let a = kruskal(&g);
        let b = kruskal(&g);
        assert_eq!(total_weight(&a), total_weight(&b));
        assert_eq!(pairs(&a), pairs(&b));
        // The MST of an MST is itself
        assert_eq!(pairs(&kruskal(&a)), pairs(&a));
    }

    #[test]
    fn test_kruskal_disconnected_forest() {
        let mut g = Graph::new(6, false, true).unwrap();
        for (u, v, w) in [
            (0, 1, 1.0),
            (1, 2, 2.0),
            (0, 2, 4.0),
            (3, 4, 1.0),
            (4, 5, 1.0),
            (3, 5, 3.0),
        ] {
            g.insert_edge(u, v, Some(w)).unwrap();
        }
        let forest = kruskal(&g);
        assert_eq!(connected_components(&g), 2);
        assert_eq!(forest.edge_count(), 6 - 2);
        assert_eq!(total_weight(&forest), 5.0);
        assert_eq!(connected_components(&forest), 2);
    }

    #[test]
    fn test_kruskal_edgeless() {
        let g = Graph::new(5, false, true).unwrap();
        let forest = kruskal(&g);
        assert_eq!(forest.vertex_count(), 5);
        assert_eq!(forest.edge_count(), 0);
        assert_eq!(total_weight(&forest), 0.0);
    }

    #[test]
    fn test_kruskal_empty_graph() {
        let g = Graph::new(0, false, false).unwrap();
        let forest = kruskal(&g);
        assert_eq!(forest.vertex_count(), 0);
        assert_eq!(forest.edge_count(), 0);
    }

    #[test]
    fn test_kruskal_skips_self_loops() {
        let mut g = Graph::new(2, false, true).unwrap();
        g.insert_edge(0, 0, Some(0.0)).unwrap();
        g.insert_edge(0, 1, Some(3.0)).unwrap();
        let forest = kruskal(&g);
        assert_eq!(pairs(&forest), vec![(0, 1)]);
    }

    #[test]
    fn test_kruskal_directed_input() {
        let mut g = Graph::new(3, true, true).unwrap();
        g.insert_edge(0, 1, Some(2.0)).unwrap();
        g.insert_edge(1, 0, Some(1.0)).unwrap();
        g.insert_edge(2, 1, Some(5.0)).unwrap();
        let forest = kruskal(&g);
        assert!(!forest.is_directed());
        assert_eq!(forest.edge_count(), 2);
        assert_eq!(total_weight(&forest), 6.0);
    }

    #[test]
    fn test_kruskal_unweighted_input() {
        let mut g = Graph::new(4, false, false).unwrap();
        for (u, v) in [(0, 1), (1, 2), (2, 3), (3, 0)] {
            g.insert_edge(u, v, None).unwrap();
        }
        let forest = kruskal(&g);
        assert_eq!(forest.edge_count(), 3);
        assert_eq!(total_weight(&forest), 3.0);
    }

    #[test]
    fn test_total_weight_counts_undirected_once() {
        let mut g = Graph::new(3, false, true).unwrap();
        g.insert_edge(0, 1, Some(2.5)).unwrap();
        g.insert_edge(1, 2, Some(1.5)).unwrap();
        assert_eq!(total_weight(&g), 4.0);
    }

    #[test]
    fn test_redundant_edges_seven_stations() {
        let g = make_seven();
        let mst = kruskal(&g);
        let redundant = redundant_edges(&g, &mst);

        assert_eq!(redundant.len(), g.edge_count() - mst.edge_count());
        let redundant_pairs: Vec<_> = redundant.iter().map(|e| (e.from, e.to)).collect();
        assert_eq!(
            redundant_pairs,
            vec![(0, 1), (2, 6), (3, 6), (4, 5), (4, 6), (5, 6)]
        );
        assert_eq!(
            total_weight(&g),
            total_weight(&mst) + redundant.iter().map(|e| e.weight).sum::<Weight>()
        );
    }

    #[test]
    fn test_redundant_edges_of_tree_is_empty() {
        let mut g = Graph::new(4, false, true).unwrap();
        g.insert_edge(0, 1, Some(1.0)).unwrap();
        g.insert_edge(1, 2, Some(1.0)).unwrap();
        g.insert_edge(1, 3, Some(1.0)).unwrap();
        assert!(redundant_edges(&g, &kruskal(&g)).is_empty());
    }

    #[test]
    fn test_connected_components() {
        let mut g = Graph::new(5, true, false).unwrap();
        assert_eq!(connected_components(&g), 5);
        g.insert_edge(0, 1, None).unwrap();
        g.insert_edge(2, 1, None).unwrap();
        assert_eq!(connected_components(&g), 3);
        assert_eq!(connected_components(&Graph::new(0, false, false).unwrap()), 0);
    }
}
