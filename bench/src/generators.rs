// ---------------------------------------------------------------------------
// Generators: seeded, single-threaded, deterministic
// ---------------------------------------------------------------------------

use railgraph_core::{Graph, GraphError, VertexId, Weight};

use crate::config::NetworkShape;

/// Simple LCG for deterministic, fast pseudo-random numbers.
pub struct FastRng(u64);

impl FastRng {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Uniform value in `0..max`. `max` must be non-zero.
    pub fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }

    /// Uniform integer weight in `min..=max`.
    pub fn weight(&mut self, min: u32, max: u32) -> Weight {
        let span = (max - min) as u64 + 1;
        (min as u64 + self.next(span)) as Weight
    }

    /// Uniform vertex in `0..n`.
    pub fn vertex(&mut self, n: usize) -> VertexId {
        self.next(n as u64) as VertexId
    }

}

/// Random connected transit network: undirected, weighted.
///
/// Each station links to a random earlier station first, which keeps the
/// network connected, then random extra links are added until the average
/// degree reaches `shape.avg_degree`. Gives up on extra links after n²
/// attempts, so dense targets on small networks still terminate.
pub fn random_connected(
    stations: usize,
    shape: &NetworkShape,
    rng: &mut FastRng,
) -> Result<Graph, GraphError> {
    let mut graph = Graph::new(stations, false, true)?;

    for i in 1..stations {
        let earlier = rng.vertex(i);
        let w = rng.weight(shape.min_weight, shape.max_weight);
        graph.insert_edge(earlier, i as VertexId, Some(w))?;
    }

    let target_edges = (stations as f64 * shape.avg_degree / 2.0) as usize;
    let max_attempts = stations.saturating_mul(stations);
    let mut attempts = 0usize;

    while graph.edge_count() < target_edges && attempts < max_attempts {
        attempts += 1;
        let u = rng.vertex(stations);
        let v = rng.vertex(stations);
        if u == v || graph.has_edge(u, v) {
            continue;
        }
        let w = rng.weight(shape.min_weight, shape.max_weight);
        graph.insert_edge(u, v, Some(w))?;
    }

    tracing::debug!(
        stations,
        edges = graph.edge_count(),
        attempts,
        "generated random connected network"
    );
    Ok(graph)
}
