use crate::error::{GraphError, Result};

/// Dense vertex identifier in `0..vertex_count`.
pub type VertexId = u32;

/// Edge weight (journey time in minutes, distance, ...).
pub type Weight = f64;

/// Weight stored for every edge of an unweighted graph.
pub const UNIT_WEIGHT: Weight = 1.0;

/// Largest vertex count a graph can be created with (ids must fit a `VertexId`).
pub const MAX_VERTICES: usize = VertexId::MAX as usize;

/// An incident edge in an adjacency list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub target: VertexId,
    pub weight: Weight,
}

/// A logical edge as reported by [`Graph::edges`].
///
/// For undirected graphs `from <= to`, and each unordered pair appears once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeRecord {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: Weight,
}

/// Adjacency-list graph over a fixed set of vertices `0..vertex_count`.
///
/// Undirected edges are stored symmetrically: inserting `(u, v, w)` appends
/// `v` to `u`'s list and `u` to `v`'s list, both with weight `w`. Adjacency
/// lists keep insertion order, which decides tie-breaks in BFS and Dijkstra.
#[derive(Debug, Clone)]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
    directed: bool,
    weighted: bool,
    edge_count: usize,
}

impl Graph {
    /// Create an empty graph over `vertex_count` vertices.
    pub fn new(vertex_count: usize, directed: bool, weighted: bool) -> Result<Self> {
        if vertex_count > MAX_VERTICES {
            return Err(GraphError::InvalidSize {
                requested: vertex_count,
                max: MAX_VERTICES,
            });
        }

        Ok(Self {
            adjacency: vec![Vec::new(); vertex_count],
            directed,
            weighted,
            edge_count: 0,
        })
    }

    /// Insert an edge `from -> to` (both directions for undirected graphs).
    ///
    /// Unweighted graphs ignore `weight` and store [`UNIT_WEIGHT`]. Weighted
    /// graphs default a missing weight to [`UNIT_WEIGHT`] and reject negative
    /// or non-finite weights. Duplicates are rejected, never merged: callers
    /// that tolerate them check [`Graph::has_edge`] first.
    pub fn insert_edge(
        &mut self,
        from: VertexId,
        to: VertexId,
        weight: Option<Weight>,
    ) -> Result<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;

        if self.has_edge(from, to) {
            tracing::trace!(from, to, "rejected duplicate edge");
            return Err(GraphError::DuplicateEdge { from, to });
        }

        let weight = self.resolve_weight(from, to, weight)?;
        self.push_edge(from, to, weight);
        Ok(())
    }

    fn resolve_weight(
        &self,
        from: VertexId,
        to: VertexId,
        weight: Option<Weight>,
    ) -> Result<Weight> {
        if !self.weighted {
            return Ok(UNIT_WEIGHT);
        }

        let weight = weight.unwrap_or(UNIT_WEIGHT);
        if !weight.is_finite() {
            return Err(GraphError::InvalidWeight { from, to, weight });
        }
        if weight < 0.0 {
            return Err(GraphError::NegativeWeight { from, to, weight });
        }
        // -0.0 + 0.0 == +0.0, so a stored zero is always positive
        Ok(weight + 0.0)
    }

    /// Edgeless graph over the same vertex set.
    pub(crate) fn empty_like(&self, directed: bool, weighted: bool) -> Self {
        Self {
            adjacency: vec![Vec::new(); self.vertex_count()],
            directed,
            weighted,
            edge_count: 0,
        }
    }

    /// Append an already-validated edge. A self-loop is stored once.
    pub(crate) fn push_edge(&mut self, from: VertexId, to: VertexId, weight: Weight) {
        self.adjacency[from as usize].push(Edge { target: to, weight });
        if !self.directed && from != to {
            self.adjacency[to as usize].push(Edge { target: from, weight });
        }
        self.edge_count += 1;
    }

    /// Whether an edge `from -> to` exists. For undirected graphs the
    /// orientation does not matter. Out-of-range ids yield `false`.
    pub fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        if !self.contains_vertex(to) {
            return false;
        }
        self.adjacency_of(from).iter().any(|e| e.target == to)
    }

    /// Incident edges of `vertex` in insertion order. Empty for unknown ids.
    pub fn adjacency_of(&self, vertex: VertexId) -> &[Edge] {
        self.adjacency
            .get(vertex as usize)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Iterate logical edges in vertex order, each exactly once.
    pub fn edges(&self) -> impl Iterator<Item = EdgeRecord> + '_ {
        let directed = self.directed;
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(move |(from, list)| {
                let from = from as VertexId;
                list.iter()
                    .filter(move |e| directed || from <= e.target)
                    .map(move |e| EdgeRecord {
                        from,
                        to: e.target,
                        weight: e.weight,
                    })
            })
    }

    pub fn degree(&self, vertex: VertexId) -> usize {
        self.adjacency_of(vertex).len()
    }

    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        (vertex as usize) < self.adjacency.len()
    }

    pub(crate) fn check_vertex(&self, vertex: VertexId) -> Result<()> {
        if self.contains_vertex(vertex) {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of logical edges (an undirected edge counts once).
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    /// Approximate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        let lists = self.adjacency.len() * size_of::<Vec<Edge>>();
        let records: usize = self
            .adjacency
            .iter()
            .map(|v| v.capacity() * size_of::<Edge>())
            .sum();

        size_of::<Self>() + lists + records
    }
}
